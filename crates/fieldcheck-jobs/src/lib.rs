//! Bounded worker pool for fieldcheck
//!
//! This crate runs a batch of [`Job`]s on a fixed number of OS threads and
//! returns once every job has finished. Jobs keep their own results; the pool
//! only guarantees that each job ran exactly once before `run` returns.

pub mod config;
pub mod error;
pub mod job;
pub mod pool;

pub use config::{PoolConfig, MAX_WORKERS, MIN_WORKERS};
pub use error::{PoolError, Result};
pub use job::Job;
pub use pool::WorkerPool;
