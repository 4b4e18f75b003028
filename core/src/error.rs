use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid configuration: {field}: {message}")]
    Config {
        field: &'static str,
        message: String,
    },

    /// A requested random subset was larger than the eligible pool.
    /// Surfaced, never clamped — a truncated sample would silently
    /// change the model.
    #[error("Sampling exhausted for {what}: requested {requested}, only {available} eligible")]
    SamplingExhausted {
        what: &'static str,
        requested: usize,
        available: usize,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type SimResult<T> = Result<T, SimError>;
