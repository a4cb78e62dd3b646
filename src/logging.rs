//! Diagnostic logging for `nbdiscover`.
//!
//! stdout carries the notebook listing that CI scripts parse, so every log
//! line is written to stderr and `-q` drops logs entirely.

use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_TARGETS: &[&str] = &["notebook_discovery", "nbdiscover"];

/// How chatty discovery is, from `-q` up to `-vvv`.
///
/// The default only surfaces warnings, which keeps the listing readable
/// when both streams land in the same CI log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::INFO,
            Self::Debug => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub fn directives(self) -> String {
        let level = self.level().to_string().to_lowercase();
        LOG_TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn shows_source_location(self) -> bool {
        self >= Self::Debug
    }
}

pub fn init(verbosity: Verbosity) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let builder = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(verbosity.shows_source_location())
        .with_line_number(verbosity.shows_source_location())
        .compact();

    match verbosity {
        Verbosity::Quiet => builder.with_writer(std::io::sink).init(),
        // timestamps are noise in the default single-run CI output
        Verbosity::Normal => builder.without_time().with_writer(std::io::stderr).init(),
        _ => builder.with_writer(std::io::stderr).init(),
    }
}
