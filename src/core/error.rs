use thiserror::Error;

pub type Result<T> = std::result::Result<T, CounterError>;

#[derive(Error, Debug)]
pub enum CounterError {
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to initialise tracing: {0}")]
    Tracing(String),
}
