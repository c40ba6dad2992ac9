//! Positional `%s` placeholders.
//!
//! A display string may contain `%s` markers that are filled in order at
//! render time. `%%` stands for a literal percent sign. A `%` followed by
//! anything else is plain text.

/// A lexical piece of a display string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// Literal text, copied as-is
    Text(&'a str),
    /// A `%s` marker
    Placeholder,
    /// An escaped `%%`, rendered as a single `%`
    Percent,
}

/// Iterator over the [`Token`]s of a display string
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }

        match rest.find('%') {
            Some(0) => {
                let (token, consumed) = match rest[1..].chars().next() {
                    Some('s') => (Token::Placeholder, 2),
                    Some('%') => (Token::Percent, 2),
                    _ => (Token::Text(&rest[..1]), 1),
                };
                self.rest = &rest[consumed..];
                Some(token)
            }
            Some(pos) => {
                let (text, tail) = rest.split_at(pos);
                self.rest = tail;
                Some(Token::Text(text))
            }
            None => {
                self.rest = "";
                Some(Token::Text(rest))
            }
        }
    }
}

/// Split a display string into tokens
pub fn tokenize(value: &str) -> Tokens<'_> {
    Tokens { rest: value }
}

/// Number of `%s` markers in `value`
pub fn count_placeholders(value: &str) -> usize {
    tokenize(value)
        .filter(|token| matches!(token, Token::Placeholder))
        .count()
}

/// Fill the placeholders of `value` with `args` in order.
///
/// The caller guarantees `args.len() == count_placeholders(value)`; surplus
/// markers render as empty strings and surplus arguments are ignored.
pub fn substitute<A: AsRef<str>>(value: &str, args: &[A]) -> String {
    let extra: usize = args.iter().map(|arg| arg.as_ref().len()).sum();
    let mut out = String::with_capacity(value.len() + extra);
    let mut args = args.iter();

    for token in tokenize(value) {
        match token {
            Token::Text(text) => out.push_str(text),
            Token::Placeholder => {
                if let Some(arg) = args.next() {
                    out.push_str(arg.as_ref());
                }
            }
            Token::Percent => out.push('%'),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_tokenize_mixed() {
        let tokens: Vec<_> = tokenize("Found %s files, 100%% done, 5% left").collect();
        assert_eq!(
            tokens,
            vec![
                Token::Text("Found "),
                Token::Placeholder,
                Token::Text(" files, 100"),
                Token::Percent,
                Token::Text(" done, 5"),
                Token::Text("%"),
                Token::Text(" left"),
            ]
        );
    }

    #[test]
    fn test_count_placeholders() {
        assert_eq!(count_placeholders("Invalid revision number!"), 0);
        assert_eq!(count_placeholders("Found %s files!"), 1);
        assert_eq!(count_placeholders("%s of %s"), 2);
        assert_eq!(count_placeholders("100%% sure"), 0);
        assert_eq!(count_placeholders("%%s is not a marker"), 0);
        assert_eq!(count_placeholders("trailing %"), 0);
        assert_eq!(count_placeholders(""), 0);
    }

    #[test]
    fn test_substitute_in_order() {
        assert_eq!(substitute("%s of %s", &["3", "7"]), "3 of 7");
        assert_eq!(substitute("Found %s files!", &["5"]), "Found 5 files!");
    }

    #[test]
    fn test_substitute_unescapes_percent() {
        assert_eq!(substitute("%s%% done", &["40"]), "40% done");
        assert_eq!(substitute("5% left", &[] as &[&str]), "5% left");
    }

    #[test]
    fn test_substitute_does_not_rescan_arguments() {
        assert_eq!(substitute("[%s]", &["%s"]), "[%s]");
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(
            substitute("Für Revision %s gibt es keine Dateien!", &["27154"]),
            "Für Revision 27154 gibt es keine Dateien!"
        );
    }

    proptest! {
        #[test]
        fn test_text_without_percent_is_unchanged(value in "[^%]*") {
            prop_assert_eq!(count_placeholders(&value), 0);
            prop_assert_eq!(substitute(&value, &[] as &[&str]), value);
        }

        #[test]
        fn test_single_placeholder_takes_argument(prefix in "[^%]*", suffix in "[^%]*", arg in ".*") {
            let value = format!("{prefix}%s{suffix}");
            prop_assert_eq!(count_placeholders(&value), 1);
            prop_assert_eq!(substitute(&value, &[arg.as_str()]), format!("{prefix}{arg}{suffix}"));
        }
    }
}
