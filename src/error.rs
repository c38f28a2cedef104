use std::path::PathBuf;

/// Failures that stop the app before the event loop starts
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("cannot open log file {path:?}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter {directive:?}")]
    LogFilter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("cannot initialize terminal")]
    Terminal(#[source] std::io::Error),
}
