use crate::config::PoolConfig;
use crate::error::{PoolError, Result};
use crate::job::{run_job, Job};
use crossbeam::channel::{self, Receiver};
use crossbeam::sync::WaitGroup;
use std::any::Any;
use std::thread;

/// Bounded-concurrency batch executor with full-join semantics.
///
/// A pool borrows its jobs mutably for as long as it lives. [`run`](Self::run)
/// consumes the pool, so a batch runs exactly once and the borrow ends when
/// every worker has been joined. Reading results off the jobs afterwards
/// cannot race with a worker.
///
/// ## Example
///
/// ```rust
/// use fieldcheck_jobs::{Job, WorkerPool};
///
/// struct Square {
///     input: u64,
///     output: Option<u64>,
/// }
///
/// impl Job for Square {
///     fn execute(&mut self) {
///         self.output = Some(self.input * self.input);
///     }
/// }
///
/// let mut jobs: Vec<Square> = (1..=4).map(|input| Square { input, output: None }).collect();
/// WorkerPool::new(jobs.len(), &mut jobs).run().unwrap();
///
/// let squares: Vec<u64> = jobs.iter().filter_map(|j| j.output).collect();
/// assert_eq!(squares, vec![1, 4, 9, 16]);
/// ```
pub struct WorkerPool<'a, J: Job> {
    jobs: &'a mut [J],
    num_workers: usize,
}

impl<'a, J: Job> WorkerPool<'a, J> {
    /// Create a pool with the default worker bounds.
    pub fn new(num_workers: usize, jobs: &'a mut [J]) -> Self {
        Self::with_config(num_workers, jobs, PoolConfig::default())
    }

    /// Create a pool whose worker count is clamped by `config`.
    pub fn with_config(num_workers: usize, jobs: &'a mut [J], config: PoolConfig) -> Self {
        let requested = isize::try_from(num_workers).unwrap_or(isize::MAX);
        Self {
            jobs,
            num_workers: config.clamp(requested),
        }
    }

    /// The effective number of workers `run` will start.
    pub fn workers(&self) -> usize {
        self.num_workers
    }

    /// Number of jobs in the batch.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Run every job and block until all of them have finished.
    ///
    /// Workers pull from an unbuffered queue, so enqueueing blocks while every
    /// worker is busy. Per-job failures are recorded on the jobs themselves;
    /// the only errors returned here are a worker thread that could not be
    /// spawned or a job that panicked.
    pub fn run(self) -> Result<()> {
        let num_workers = self.num_workers;
        let jobs = self.jobs;

        if jobs.is_empty() {
            return Ok(());
        }

        tracing::debug!(workers = num_workers, jobs = jobs.len(), "starting worker pool");

        let outcome = thread::scope(|scope| {
            let (queue, inbox) = channel::bounded(0);
            let barrier = WaitGroup::new();

            let mut handles = Vec::with_capacity(num_workers);
            for id in 0..num_workers {
                let inbox = inbox.clone();
                let handle = thread::Builder::new()
                    .name(format!("fieldcheck-worker-{id}"))
                    .spawn_scoped(scope, move || work(inbox))?;
                handles.push(handle);
            }
            drop(inbox);

            for job in jobs.iter_mut() {
                if queue.send((job, barrier.clone())).is_err() {
                    // Every worker has died; the join below reports why.
                    break;
                }
            }
            drop(queue);
            barrier.wait();

            let mut panicked = None;
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panicked.get_or_insert_with(|| panic_message(payload));
                }
            }

            match panicked {
                Some(message) => Err(PoolError::WorkerPanicked(message)),
                None => Ok(()),
            }
        });

        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "worker pool did not complete cleanly");
        } else {
            tracing::debug!(workers = num_workers, "worker pool finished");
        }

        outcome
    }
}

fn work<J: Job>(inbox: Receiver<(&mut J, WaitGroup)>) {
    for (job, done) in inbox.iter() {
        tracing::trace!(job = job.name(), "running job");
        run_job(job, done);
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
