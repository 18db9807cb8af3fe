//! Running a ranking pass off the caller's thread.
//!
//! A request is moved into a freshly spawned worker thread and the ranking
//! comes back over a single-use channel. Nothing mutable is shared between
//! the caller and the worker, so issuing a second request before the first
//! resolves is safe: each worker owns its inputs and scratch buffers.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, TryRecvError};
use log::{debug, info};

use crate::error::{Error, ExecutionError, InputError, Result};
use crate::rank::rank_parallel;
use crate::topk::Scored;
use crate::word::{check_uniform, Word};

/// Everything a worker needs to rank guesses for one turn.
#[derive(Debug, Clone)]
pub struct ScoringRequest {
    pub all_words: Arc<[Word]>,
    pub possible_solutions: Arc<[Word]>,
    pub word_len: usize,
    pub top_n: usize,
}

impl ScoringRequest {
    fn validate(&self) -> Result<()> {
        check_uniform(&self.all_words, self.word_len)?;
        check_uniform(&self.possible_solutions, self.word_len)?;
        Ok(())
    }
}

/// Start ranking `request` on a new worker thread.
///
/// Invalid input is rejected here, before any thread is started.
pub fn compute_async(request: ScoringRequest) -> Result<PendingRanking> {
    request.validate()?;

    let label = format!(
        "{} guesses against {} solutions",
        request.all_words.len(),
        request.possible_solutions.len()
    );
    spawn_worker(label, move || {
        rank_parallel(
            &request.all_words,
            &request.possible_solutions,
            request.word_len,
            request.top_n,
        )
    })
}

/// Run `job` on a named worker thread and hand back a handle to its result.
fn spawn_worker<F>(label: String, job: F) -> Result<PendingRanking>
where
    F: FnOnce() -> std::result::Result<Vec<Scored>, InputError> + Send + 'static,
{
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::Builder::new()
        .name("scoring-worker".into())
        .spawn(move || {
            info!("scoring {}", label);
            // The caller may have dropped its handle; the result is simply discarded.
            if tx.send(run_job(job)).is_err() {
                debug!("scoring result discarded, no receiver");
            }
        })
        .map_err(ExecutionError::Spawn)?;

    Ok(PendingRanking { rx })
}

/// Run `job`, turning a panic into [`ExecutionError::WorkerPanicked`].
fn run_job<F>(job: F) -> Result<Vec<Scored>>
where
    F: FnOnce() -> std::result::Result<Vec<Scored>, InputError>,
{
    match panic::catch_unwind(AssertUnwindSafe(job)) {
        Ok(ranked) => ranked.map_err(Error::from),
        Err(payload) => Err(ExecutionError::WorkerPanicked(panic_message(&*payload)).into()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

/// Handle to an in-flight ranking.
#[derive(Debug)]
pub struct PendingRanking {
    rx: Receiver<Result<Vec<Scored>>>,
}

impl PendingRanking {
    /// Block until the worker finishes.
    pub fn wait(self) -> Result<Vec<Scored>> {
        self.rx
            .recv()
            .unwrap_or_else(|_| Err(ExecutionError::Disconnected.into()))
    }

    /// Block for at most `timeout`; `None` if the worker is still running.
    pub fn wait_timeout(&self, timeout: Duration) -> Option<Result<Vec<Scored>>> {
        match self.rx.recv_timeout(timeout) {
            Ok(result) => Some(result),
            Err(RecvTimeoutError::Timeout) => None,
            Err(RecvTimeoutError::Disconnected) => Some(Err(ExecutionError::Disconnected.into())),
        }
    }

    /// Poll without blocking; `None` if the worker is still running.
    pub fn try_take(&self) -> Option<Result<Vec<Scored>>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(ExecutionError::Disconnected.into())),
        }
    }
}
