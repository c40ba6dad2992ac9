//! getbuilds-langcheck - verifies locale resources and looks up strings

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use getbuilds_common::{init_logging, GetbuildsError, Result as GetbuildsResult};
use getbuilds_config::{ConfigLoader, I18nSettings};
use getbuilds_i18n::{embedded_catalog, Catalog, Locale};
use tracing::{error, info, warn};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Locale to look the key up in (e.g. `en`, `de-DE`); defaults to the
    /// configured `default_locale`
    #[arg(short, long)]
    locale: Option<String>,

    /// Message key
    key: Option<String>,

    /// Values for the message's `%s` placeholders
    args: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("Failed to load configuration from {}", path))?,
        None => ConfigLoader::load()?,
    };

    init_logging(config.logging.to_logging_config())?;

    let catalog = build_catalog(&config.i18n).map_err(|e| {
        error!("Locale resources are unusable: {:#}", e);
        e
    })?;

    let default_locale = resolve_locale(&config.i18n.default_locale)?;
    catalog
        .table(default_locale)
        .map_err(GetbuildsError::from)
        .context("Default locale has no resources")?;

    if let Some(key) = &args.key {
        let locale = select_locale(args.locale.as_deref(), default_locale)?;
        println!("{}", lookup(&catalog, locale, key, &args.args)?);
    }

    Ok(())
}

/// Load the catalog the configuration points at and check it
fn build_catalog(settings: &I18nSettings) -> GetbuildsResult<Catalog> {
    let catalog = match &settings.locales_dir {
        Some(dir) => {
            info!("Loading locale resources from {}", dir);
            Catalog::from_dir(dir, Locale::REFERENCE)?
        }
        None => embedded_catalog()?.clone(),
    };

    for locale in catalog.locales() {
        let table = catalog.table(locale)?;
        info!(
            "Locale {} ({}): {} keys",
            locale,
            locale.display_name(),
            table.len()
        );
    }

    if settings.require_complete {
        catalog.verify_complete()?;
        info!("All locales are complete against {}", catalog.reference());
    } else {
        for report in catalog.completeness() {
            if !report.is_complete() {
                warn!("{}", report);
            }
        }
    }

    Ok(catalog)
}

fn resolve_locale(code: &str) -> Result<Locale> {
    Locale::from_code(code).ok_or_else(|| anyhow!("Unsupported locale '{}'", code))
}

/// The locale named on the command line, or the configured default
fn select_locale(requested: Option<&str>, default: Locale) -> Result<Locale> {
    requested.map_or(Ok(default), resolve_locale)
}

/// `get` when no arguments are given, `format` otherwise
fn lookup(
    catalog: &Catalog,
    locale: Locale,
    key: &str,
    args: &[String],
) -> GetbuildsResult<String> {
    let table = catalog.table(locale)?;
    let text = if args.is_empty() {
        table.get(key)?.to_string()
    } else {
        table.format(key, args)?
    };
    Ok(text)
}
