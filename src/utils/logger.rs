use crate::utils::error::{Result, TheaterError};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

pub(crate) fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "home_theater=debug,info"
    } else {
        "home_theater=info"
    }
}

/// Installs the global subscriber. Logs go to stderr: stdout belongs to
/// the subsystem announcements.
pub fn init_cli_logger(verbose: bool, format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)));

    let registry = tracing_subscriber::registry().with(filter);

    let initialized = match format {
        LogFormat::Compact => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .json(),
            )
            .try_init(),
    };

    initialized.map_err(|e| TheaterError::Logging {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_enables_debug_for_crate() {
        assert_eq!(default_directives(true), "home_theater=debug,info");
        assert_eq!(default_directives(false), "home_theater=info");
    }

    #[test]
    fn test_second_init_reports_error() {
        // Whichever call runs first in this process may win; the second must fail cleanly.
        let _ = init_cli_logger(false, LogFormat::Compact);
        let second = init_cli_logger(false, LogFormat::Json);
        assert!(matches!(second, Err(TheaterError::Logging { .. })));
    }
}
