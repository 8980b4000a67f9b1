//! Diagnostic logging for the demo binaries
//!
//! Logs go to stderr so the report on stdout stays stable.

use std::io::{stderr, IsTerminal};

use clap::Args;
use tracing::{debug, metadata::LevelFilter, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Args, Debug, Clone, Copy, Default)]
pub struct Verbosity {
    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

impl Verbosity {
    pub fn new(quiet: bool, verbose: u8) -> Self {
        Self { quiet, verbose }
    }

    /// Installs the global subscriber. Calling it twice is harmless.
    pub fn setup_logging(&self) {
        let filter_layer = self.log_filter();
        let fmt_layer = fmt::layer()
            .with_ansi(stderr().is_terminal())
            .with_target(false)
            .with_writer(stderr);

        if tracing_subscriber::registry()
            .with(filter_layer)
            .with(fmt_layer)
            .try_init()
            .is_ok()
        {
            debug!(level = %self.level_filter(), "logging initialized");
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF;
        }
        LevelFilter::from_level(match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
    }

    fn log_filter(&self) -> EnvFilter {
        EnvFilter::builder()
            .with_default_directive(self.level_filter().into())
            .from_env_lossy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter() {
        assert_eq!(Verbosity::default().level_filter(), LevelFilter::WARN);
        assert_eq!(Verbosity::new(false, 1).level_filter(), LevelFilter::INFO);
        assert_eq!(Verbosity::new(false, 2).level_filter(), LevelFilter::DEBUG);
        assert_eq!(Verbosity::new(false, 9).level_filter(), LevelFilter::TRACE);
        assert_eq!(Verbosity::new(true, 3).level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn test_setup_logging_twice() {
        let verbosity = Verbosity::new(true, 0);
        verbosity.setup_logging();
        verbosity.setup_logging();
    }
}
