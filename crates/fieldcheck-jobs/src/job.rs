use crossbeam::sync::WaitGroup;

/// A unit of work that can be handed to a [`WorkerPool`](crate::WorkerPool).
///
/// Jobs store their own outcome. The pool never looks at what a job produced;
/// callers read it back off the job once [`WorkerPool::run`](crate::WorkerPool::run)
/// has returned.
pub trait Job: Send {
    /// Execute the job, recording its outcome on `self`.
    fn execute(&mut self);

    /// Short label used in log output.
    fn name(&self) -> &str {
        "job"
    }
}

/// Run a job and signal the completion barrier.
///
/// `done` is consumed, so a job can count down the barrier exactly once. If
/// the job panics the guard is dropped during unwinding, which still releases
/// the barrier.
pub(crate) fn run_job<J: Job + ?Sized>(job: &mut J, done: WaitGroup) {
    job.execute();
    drop(done);
}
