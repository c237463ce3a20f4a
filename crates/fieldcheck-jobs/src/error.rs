use thiserror::Error;

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Failed to spawn worker thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Worker panicked while running a job: {0}")]
    WorkerPanicked(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type Result<T> = std::result::Result<T, PoolError>;
