//! Build script for getbuilds-i18n
//!
//! Validates every locale resource at compile time:
//! - the Fluent syntax parses and messages are plain text (string literal
//!   placeables such as `{"{"}` are allowed)
//! - no key is defined twice
//! - every locale has exactly the reference key set
//! - placeholder counts agree across locales
//!
//! It then generates the `MessageKey` enum from the reference locale.

use std::collections::{BTreeMap, HashSet};
use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, PatternElement};
use fluent_syntax::parser::parse;
use fluent_syntax::unicode::unescape_unicode_to_string;

const REFERENCE_LOCALE: &str = "en";
const RESOURCE_FILE_NAME: &str = "getbuilds.ftl";

/// A message key with its placeholder count, in definition order
type Messages = Vec<(String, usize)>;

/// Count `%s` markers; `%%` is an escaped percent sign
fn count_placeholders(value: &str) -> usize {
    let mut count = 0;
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.clone().next() {
                Some('s') => {
                    count += 1;
                    chars.next();
                }
                Some('%') => {
                    chars.next();
                }
                _ => {}
            }
        }
    }
    count
}

/// Extract message keys and their placeholder counts from a resource
fn extract_messages(content: &str) -> Result<Messages, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {:?}", errors))?;

    let mut messages = Vec::new();
    let mut seen = HashSet::new();

    for entry in resource.body {
        match entry {
            Entry::Message(message) => {
                let key = message.id.name.to_string();

                if !seen.insert(key.clone()) {
                    return Err(format!("Duplicate message key '{}'", key));
                }
                if !message.attributes.is_empty() {
                    return Err(format!("Message '{}' uses attributes", key));
                }

                let pattern = message
                    .value
                    .ok_or_else(|| format!("Message '{}' has no value", key))?;

                let mut value = String::new();
                for element in pattern.elements {
                    match element {
                        PatternElement::TextElement { value: text } => value.push_str(text),
                        PatternElement::Placeable {
                            expression:
                                Expression::Inline(InlineExpression::StringLiteral { value: literal }),
                        } => value.push_str(&unescape_unicode_to_string(literal)),
                        PatternElement::Placeable { .. } => {
                            return Err(format!(
                                "Message '{}' uses a placeable other than a string literal, use %s instead",
                                key
                            ));
                        }
                    }
                }

                messages.push((key, count_placeholders(&value)));
            }
            Entry::Term(term) => {
                return Err(format!("Term '-{}' is not supported", term.id.name));
            }
            _ => {}
        }
    }

    Ok(messages)
}

/// Find all locale files, keyed by locale directory name
fn find_locale_files(locales_dir: &Path) -> Result<BTreeMap<String, PathBuf>, String> {
    if !locales_dir.exists() {
        return Err(format!(
            "Locales directory not found: {}",
            locales_dir.display()
        ));
    }

    let mut locale_files = BTreeMap::new();

    for entry in fs::read_dir(locales_dir)
        .map_err(|e| format!("Failed to read locales directory: {}", e))?
    {
        let entry = entry.map_err(|e| format!("Failed to read directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() {
            let locale_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .ok_or_else(|| format!("Invalid locale directory name: {}", path.display()))?;

            let resource = path.join(RESOURCE_FILE_NAME);
            if resource.exists() {
                locale_files.insert(locale_name.to_string(), resource);
            }
        }
    }

    if locale_files.is_empty() {
        return Err("No locale files found".to_string());
    }

    Ok(locale_files)
}

/// Turn `buildbot_status` into `BuildbotStatus`
fn variant_name(key: &str) -> String {
    let mut name = String::new();
    for part in key.split(|c: char| c == '_' || c == '-').filter(|p| !p.is_empty()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

/// Render the `MessageKey` enum for the reference messages
fn generate_message_keys(messages: &Messages) -> String {
    let mut out = String::new();
    let variants: Vec<(String, &str, usize)> = messages
        .iter()
        .map(|(key, count)| (variant_name(key), key.as_str(), *count))
        .collect();

    out.push_str("/// Keys defined by the reference resource.\n");
    out.push_str("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]\n");
    out.push_str("pub enum MessageKey {\n");
    for (variant, key, _) in &variants {
        let _ = writeln!(out, "    /// `{}`", key);
        let _ = writeln!(out, "    {},", variant);
    }
    out.push_str("}\n\n");

    out.push_str("impl MessageKey {\n");
    out.push_str("    /// Every key, in definition order\n");
    out.push_str("    pub const ALL: &'static [Self] = &[\n");
    for (variant, _, _) in &variants {
        let _ = writeln!(out, "        Self::{},", variant);
    }
    out.push_str("    ];\n\n");

    out.push_str("    /// The key as written in resource files\n");
    out.push_str("    pub const fn as_str(self) -> &'static str {\n        match self {\n");
    for (variant, key, _) in &variants {
        let _ = writeln!(out, "            Self::{} => {:?},", variant, key);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    /// Number of `%s` markers every locale uses for this key\n");
    out.push_str("    pub const fn placeholder_count(self) -> usize {\n        match self {\n");
    for (variant, _, count) in &variants {
        let _ = writeln!(out, "            Self::{} => {},", variant, count);
    }
    out.push_str("        }\n    }\n\n");

    out.push_str("    /// Look up a key by its resource name\n");
    out.push_str("    pub fn from_name(name: &str) -> Option<Self> {\n        match name {\n");
    for (variant, key, _) in &variants {
        let _ = writeln!(out, "            {:?} => Some(Self::{}),", key, variant);
    }
    out.push_str("            _ => None,\n        }\n    }\n}\n");

    out
}

/// Main validation function
fn validate_locales() -> Result<Messages, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    println!("cargo:rerun-if-changed={}", locales_dir.display());

    let locale_files = find_locale_files(&locales_dir)?;

    let mut all_messages: BTreeMap<String, Messages> = BTreeMap::new();
    let mut validation_errors = Vec::new();

    for (locale, path) in &locale_files {
        let result = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))
            .and_then(|content| extract_messages(&content));

        match result {
            Ok(messages) => {
                all_messages.insert(locale.clone(), messages);
            }
            Err(e) => validation_errors.push(format!("{}: {}", locale, e)),
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!("Validation errors:\n{}", validation_errors.join("\n")));
    }

    let reference = all_messages
        .get(REFERENCE_LOCALE)
        .cloned()
        .ok_or_else(|| format!("Reference locale '{}' not found", REFERENCE_LOCALE))?;
    let reference_counts: BTreeMap<&str, usize> =
        reference.iter().map(|(k, c)| (k.as_str(), *c)).collect();

    for (locale, messages) in &all_messages {
        if locale == REFERENCE_LOCALE {
            continue;
        }

        let counts: BTreeMap<&str, usize> =
            messages.iter().map(|(k, c)| (k.as_str(), *c)).collect();

        for (key, expected) in &reference_counts {
            match counts.get(key) {
                None => validation_errors.push(format!("{}: Missing message key '{}'", locale, key)),
                Some(found) if found != expected => validation_errors.push(format!(
                    "{}: Placeholder mismatch for '{}'. Expected: {}, Found: {}",
                    locale, key, expected, found
                )),
                Some(_) => {}
            }
        }

        for key in counts.keys() {
            if !reference_counts.contains_key(key) {
                validation_errors.push(format!("{}: Extra message key '{}'", locale, key));
            }
        }
    }

    if !validation_errors.is_empty() {
        return Err(format!("Consistency errors:\n{}", validation_errors.join("\n")));
    }

    Ok(reference)
}

fn main() {
    let reference = match validate_locales() {
        Ok(reference) => reference,
        Err(e) => {
            eprintln!("Locale validation failed:\n{}", e);
            process::exit(1);
        }
    };

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            eprintln!("OUT_DIR not set");
            process::exit(1);
        }
    };

    if let Err(e) = fs::write(out_dir.join("message_keys.rs"), generate_message_keys(&reference)) {
        eprintln!("Failed to write message keys: {}", e);
        process::exit(1);
    }
}
