//! Logging infrastructure for Stencil.
//!
//! Library crates only emit `tracing` events. Binaries call [`init`] once
//! with a [`LogConfig`], usually built by [`LogConfig::from_env`] and then
//! adjusted from command line flags.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing::Subscriber;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan, MakeWriter},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Minimum log level.
    pub level: LogLevel,
    /// Output format.
    pub format: LogFormat,
    /// Log file path (if file logging enabled).
    pub file_path: Option<PathBuf>,
    /// Include timestamps.
    pub timestamps: bool,
    /// Include source location.
    pub source_location: bool,
    /// Include span events.
    pub span_events: bool,
}

/// Log level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl From<LogLevel> for tracing_subscriber::filter::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing_subscriber::filter::LevelFilter::TRACE,
            LogLevel::Debug => tracing_subscriber::filter::LevelFilter::DEBUG,
            LogLevel::Info => tracing_subscriber::filter::LevelFilter::INFO,
            LogLevel::Warn => tracing_subscriber::filter::LevelFilter::WARN,
            LogLevel::Error => tracing_subscriber::filter::LevelFilter::ERROR,
        }
    }
}

impl LogLevel {
    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            _ => None,
        }
    }

    /// Directive string understood by `EnvFilter`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Level for a `-v` count, `quiet` winning over verbosity.
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        match verbose {
            _ if quiet => Self::Error,
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable pretty format.
    #[default]
    Pretty,
    /// Compact single-line format.
    Compact,
    /// JSON structured format.
    Json,
}

impl LogFormat {
    /// Parse from string, unknown values mean `Pretty`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "compact" => Self::Compact,
            _ => Self::Pretty,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            format: LogFormat::default(),
            file_path: None,
            timestamps: true,
            source_location: false,
            span_events: false,
        }
    }
}

impl LogConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(level) = lookup("STENCIL_LOG_LEVEL").or_else(|| lookup("RUST_LOG")) {
            if let Some(l) = LogLevel::parse(&level) {
                config.level = l;
            }
        }

        if let Some(format) = lookup("STENCIL_LOG_FORMAT") {
            config.format = LogFormat::parse(&format);
        }

        if let Some(file_path) = lookup("STENCIL_LOG_FILE") {
            config.file_path = Some(PathBuf::from(file_path));
        }

        if let Some(source_location) = lookup("STENCIL_LOG_SOURCE") {
            config.source_location = is_truthy(&source_location);
        }

        if let Some(span_events) = lookup("STENCIL_LOG_SPANS") {
            config.span_events = is_truthy(&span_events);
        }

        config
    }
}

fn is_truthy(value: &str) -> bool {
    value.eq_ignore_ascii_case("true") || value == "1"
}

/// Initialize logging with the given configuration.
///
/// `config.level` is authoritative: `RUST_LOG` only counts through
/// [`LogConfig::from_env`], where it sits below `STENCIL_LOG_LEVEL`.
/// Events go to stderr and, when `file_path` is set, are also appended to
/// that file without ANSI colors.
pub fn init(config: LogConfig) -> Result<(), LogError> {
    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    let stderr_layer = format_layer(&config, io::stderr, true);
    let file_layer = file.map(|f| format_layer(&config, Mutex::new(f), false));

    tracing_subscriber::registry()
        .with(env_filter(&config))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LogError::InitError(e.to_string()))
}

fn env_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::new(config.level.as_str())
}

fn format_layer<S, W>(config: &LogConfig, writer: W, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let span_events = if config.span_events {
        FmtSpan::NEW | FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi && config.format != LogFormat::Json)
        .with_file(config.source_location)
        .with_line_number(config.source_location)
        .with_span_events(span_events);

    macro_rules! boxed {
        ($layer:expr) => {
            if config.timestamps {
                $layer.boxed()
            } else {
                $layer.without_time().boxed()
            }
        };
    }

    match config.format {
        LogFormat::Pretty => boxed!(layer.with_target(true)),
        LogFormat::Compact => boxed!(layer.compact()),
        LogFormat::Json => boxed!(layer.json()),
    }
}

/// Logging errors.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to initialize logging: {0}")]
    InitError(String),

    #[error("failed to open log file: {0}")]
    FileError(#[from] io::Error),
}
