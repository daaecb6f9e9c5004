use anyhow::{bail, Result};
use localization::config::Config;
use localization::TranslationValidator;
use serde::Serialize;
use tracing::{info, warn};

/// Summary printed as JSON once the locale has been checked.
#[derive(Debug, Serialize)]
struct CheckSummary<'a> {
    languages: Vec<&'a str>,
    default_language: &'a str,
    strict_usage: bool,
    negotiated: Option<&'a str>,
    validation: localization::ValidationReport,
    lookups: localization::MetricsReport,
}

fn main() -> Result<()> {
    // Load .env file (ignored in production/CI)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("localization=info".parse()?),
        )
        .init();

    info!("Starting locale check");

    // Load configuration from environment
    let config = Config::from_env()?;

    // Step 1: Register languages and load translation files
    let locale = config.build_locale()?;

    // Step 2: Validate completeness and placeholders
    let validation = TranslationValidator::validate(&locale);
    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    // Step 3: Optionally negotiate a language from an Accept-Language header
    let header = std::env::args().nth(1);
    let negotiated = header
        .as_deref()
        .and_then(|header| locale.negotiate(header, &config.default_language));
    if let Some(header) = header.as_deref() {
        info!(header, negotiated = ?negotiated, "Negotiated language");
    }

    let has_errors = validation.has_errors();
    let summary = CheckSummary {
        languages: locale.enabled_languages().unwrap_or_default(),
        default_language: &config.default_language,
        strict_usage: locale.strict_usage(),
        negotiated,
        validation,
        lookups: locale.metrics().report(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    if has_errors {
        bail!("Locale validation failed");
    }

    info!("Locale check passed");
    Ok(())
}
