//! Prism widget CLI
//!
//! Resolves widget render plans from a preference store dump and prints
//! them as JSON, for previewing layouts and debugging the engine.

#![allow(clippy::print_stdout)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use application::services::{RenderedWidget, WidgetRenderService};
use chrono::NaiveTime;
use clap::{Parser, Subcommand};
use domain::{DomainError, RenderPlan, SizeConstraint, WidgetVariant, registry};
use infrastructure::{AppConfig, JsonPreferencesStore, init_logging};
use serde::Serialize;
use tracing::{debug, info};

/// Prism widget CLI
#[derive(Parser)]
#[command(name = "prism-widgets")]
#[command(author, version, about = "Weather and AQI widget render plans", long_about = None)]
struct Cli {
    /// Verbosity level (overrides the configured log filter)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file (defaults to ./prism.toml if present)
    #[arg(short, long, global = true, env = "PRISM_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a single widget at the given size
    Render {
        /// Widget variant, e.g. aqi-compact or weather-medium
        #[arg(long)]
        variant: WidgetVariant,

        /// Minimum width in dp
        #[arg(long)]
        min_width: u32,

        /// Minimum height in dp
        #[arg(long)]
        min_height: u32,

        /// Preference store JSON (overrides the configured path)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Resolve every widget instance listed in the configuration
    ///
    /// Includes the persistent notification when it is enabled.
    RenderAll {
        /// Preference store JSON (overrides the configured path)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// Resolve the persistent notification
    Notification {
        /// Update time as HH:MM (defaults to the local time now)
        #[arg(long, value_parser = parse_time)]
        at: Option<NaiveTime>,

        /// Preference store JSON (overrides the configured path)
        #[arg(long)]
        store: Option<PathBuf>,
    },

    /// List widget variants with their elements and breakpoint rules
    Variants,
}

/// Output of `render-all`
#[derive(Serialize)]
struct RenderAllOutput {
    widgets: Vec<RenderedWidget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notification: Option<RenderPlan>,
}

/// Map CLI verbosity to a log filter; `None` keeps the configured one
const fn log_filter_from_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Parse an `HH:MM` clock time
fn parse_time(raw: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .map_err(|e| DomainError::InvalidTime(format!("{raw}: {e}")))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn service_for(config: &AppConfig, store: Option<PathBuf>) -> WidgetRenderService {
    let path = store.unwrap_or_else(|| config.store.path.clone());
    debug!(path = %path.display(), "Using preference store");
    WidgetRenderService::new(Arc::new(JsonPreferencesStore::new(path)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    config.validate()?;

    if let Some(filter) = log_filter_from_verbosity(cli.verbose) {
        config.logging.filter = filter.to_string();
    }
    init_logging(&config.logging)?;

    match cli.command {
        Commands::Render {
            variant,
            min_width,
            min_height,
            store,
        } => {
            let service = service_for(&config, store);
            let plan = service
                .render(variant, SizeConstraint::new(min_width, min_height))
                .await?;
            print_json(&plan)?;
        },

        Commands::RenderAll { store } => {
            let service = service_for(&config, store);
            let widgets = service.render_instances(&config.widgets).await?;
            let notification = if config.notification.enabled {
                Some(
                    service
                        .render_notification(chrono::Local::now().time())
                        .await?,
                )
            } else {
                None
            };
            info!(widgets = widgets.len(), "Rendered configured widgets");
            print_json(&RenderAllOutput {
                widgets,
                notification,
            })?;
        },

        Commands::Notification { at, store } => {
            let service = service_for(&config, store);
            let updated_at = at.unwrap_or_else(|| chrono::Local::now().time());
            let plan = service.render_notification(updated_at).await?;
            print_json(&plan)?;
        },

        Commands::Variants => {
            let schemas: Vec<_> = registry::schemas().collect();
            print_json(&schemas)?;
        },
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_filter_verbosity_zero_keeps_config() {
        assert_eq!(log_filter_from_verbosity(0), None);
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), Some("info"));
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), Some("debug"));
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), Some("trace"));
        assert_eq!(log_filter_from_verbosity(10), Some("trace"));
    }

    #[test]
    fn parse_time_accepts_clock_time() {
        assert_eq!(
            parse_time("07:05").unwrap(),
            NaiveTime::from_hms_opt(7, 5, 0).unwrap()
        );
        assert_eq!(
            parse_time(" 23:59 ").unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap()
        );
    }

    #[test]
    fn parse_time_rejects_garbage() {
        assert!(matches!(parse_time("25:00"), Err(DomainError::InvalidTime(_))));
        assert!(matches!(parse_time("noon"), Err(DomainError::InvalidTime(_))));
    }

    #[test]
    fn cli_parses_render() {
        let cli = Cli::try_parse_from([
            "prism-widgets",
            "render",
            "--variant",
            "weather-medium",
            "--min-width",
            "250",
            "--min-height",
            "110",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                variant,
                min_width,
                min_height,
                store,
            } => {
                assert_eq!(variant, WidgetVariant::WeatherMedium);
                assert_eq!((min_width, min_height), (250, 110));
                assert!(store.is_none());
            },
            _ => unreachable!("expected render"),
        }
    }

    #[test]
    fn cli_rejects_unknown_variant() {
        let result = Cli::try_parse_from([
            "prism-widgets",
            "render",
            "--variant",
            "clock",
            "--min-width",
            "1",
            "--min-height",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_notification_time() {
        let cli = Cli::try_parse_from(["prism-widgets", "notification", "--at", "18:30"]).unwrap();
        match cli.command {
            Commands::Notification { at, .. } => {
                assert_eq!(at, NaiveTime::from_hms_opt(18, 30, 0));
            },
            _ => unreachable!("expected notification"),
        }
    }

    #[test]
    fn cli_config_is_global() {
        let cli = Cli::try_parse_from(["prism-widgets", "variants", "--config", "/etc/prism.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/etc/prism.toml")));
        assert!(matches!(cli.command, Commands::Variants));
    }

    #[test]
    fn render_all_output_omits_disabled_notification() {
        let out = RenderAllOutput {
            widgets: Vec::new(),
            notification: None,
        };
        let json = serde_json::to_value(&out).unwrap();
        assert!(json.get("notification").is_none());
        assert_eq!(json["widgets"], serde_json::json!([]));
    }
}
