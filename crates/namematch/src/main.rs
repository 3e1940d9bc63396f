//! Namematch - command-line name comparison
//!
//! Usage:
//!     namematch "Иванов Иван" "Ivanov Ivan"
//!     namematch "Иванов И." "Иванов Иван" --attr birth_date=true
//!     namematch "Smith J." "John Smith" --config matcher.json --audit-log audit.jsonl

mod tracing;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use namematch_core::{Attributes, JsonlAuditLog, MatchConfig, MatchError, NameMatcher};

#[derive(Parser, Debug)]
#[command(name = "namematch")]
#[command(about = "Compare two person names across scripts, initials and nicknames")]
#[command(version)]
struct Args {
    /// First name
    name1: String,

    /// Second name
    name2: String,

    /// JSON configuration file (partial documents are accepted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Attribute flag as key=bool, repeatable (e.g. birth_date=true)
    #[arg(short, long = "attr", value_name = "KEY=BOOL")]
    attrs: Vec<String>,

    /// Append possible matches to this JSON-lines file
    #[arg(long)]
    audit_log: Option<PathBuf>,

    /// Disable the result cache
    #[arg(long)]
    no_cache: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn parse_attribute(raw: &str) -> Result<(String, bool), MatchError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| MatchError::Config(format!("attribute '{}' is not KEY=BOOL", raw)))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(MatchError::Config(format!("attribute '{}' has no name", raw)));
    }
    let value = match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => true,
        "false" | "0" | "no" => false,
        other => {
            return Err(MatchError::Config(format!(
                "attribute '{}' has non-boolean value '{}'",
                key, other
            )))
        }
    };
    Ok((key.to_string(), value))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    tracing::init_with_filter(&tracing::filter_for(&args.log_level));

    let mut config = match &args.config {
        Some(path) => MatchConfig::from_file(path)?,
        None => MatchConfig::default(),
    };
    if args.no_cache {
        config.enable_caching = false;
    }

    let attributes = args
        .attrs
        .iter()
        .map(|raw| parse_attribute(raw))
        .collect::<Result<Attributes, _>>()?;

    let mut matcher = NameMatcher::new(config);
    let audit_log = match &args.audit_log {
        Some(path) => Some(Arc::new(JsonlAuditLog::open(path)?)),
        None => None,
    };
    if let Some(log) = &audit_log {
        matcher = matcher.with_audit_sink(log.clone());
    }

    let attributes = (!attributes.is_empty()).then_some(attributes);
    ::tracing::debug!(name1 = %args.name1, name2 = %args.name2, "comparing names");
    let result = matcher.match_names(&args.name1, &args.name2, attributes.as_ref());
    println!("{}", serde_json::to_string_pretty(&result)?);

    if let Some(log) = audit_log {
        log.close();
    }
    Ok(())
}
