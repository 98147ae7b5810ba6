//! One-shot deferred jobs under cancellation.
//!
//! Every job runs on a child of the executor's root [`CancellationToken`].
//! [`DeferredExecutor::cancel_all`] cancels the root and installs a fresh one,
//! so jobs spawned afterwards are unaffected.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

#[derive(Debug)]
pub struct DeferredExecutor {
    root: RwLock<CancellationToken>,
    pending: Arc<AtomicUsize>,
}

impl Default for DeferredExecutor {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to a spawned job.
#[derive(Debug)]
pub struct JobHandle {
    label: &'static str,
    token: CancellationToken,
    handle: JoinHandle<()>,
}

impl JobHandle {
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Cancels this job only.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Waits until the job finished or observed its cancellation.
    pub async fn join(self) {
        if let Err(e) = self.handle.await {
            tracing::warn!(job = self.label, "Deferred job aborted: {}", e);
        }
    }
}

/// Decrements the pending counter when the job ends, however it ends.
struct PendingGuard(Arc<AtomicUsize>);

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl DeferredExecutor {
    pub fn new() -> Self {
        Self {
            root: RwLock::new(CancellationToken::new()),
            pending: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of jobs that have neither finished nor been cancelled.
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }

    /// Spawns `job` on the current tokio runtime.
    ///
    /// The future is dropped without completing if its token is cancelled
    /// first, so side effects placed after an `.await` never run.
    pub fn spawn<F>(&self, label: &'static str, job: F) -> JobHandle
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = self.root_token().child_token();
        self.pending.fetch_add(1, Ordering::SeqCst);
        let guard = PendingGuard(Arc::clone(&self.pending));

        let job_token = token.clone();
        let handle = tokio::spawn(async move {
            let _guard = guard;
            tokio::select! {
                biased;
                _ = job_token.cancelled() => {
                    tracing::debug!(job = label, "Deferred job cancelled");
                }
                _ = job => {
                    tracing::debug!(job = label, "Deferred job finished");
                }
            }
        });

        JobHandle {
            label,
            token,
            handle,
        }
    }

    /// Cancels every outstanding job.
    pub fn cancel_all(&self) {
        let mut root = match self.root.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        root.cancel();
        *root = CancellationToken::new();
        tracing::debug!(pending = self.pending(), "Cancelled all deferred jobs");
    }

    fn root_token(&self) -> CancellationToken {
        match self.root.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl Drop for DeferredExecutor {
    fn drop(&mut self) {
        self.root_token().cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    fn delayed_flag(executor: &DeferredExecutor, delay_ms: u64) -> (JobHandle, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        let job_flag = Arc::clone(&flag);
        let handle = executor.spawn("test", async move {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
            job_flag.store(true, Ordering::SeqCst);
        });
        (handle, flag)
    }

    #[tokio::test(start_paused = true)]
    async fn test_job_runs_to_completion() {
        let executor = DeferredExecutor::new();
        let (handle, flag) = delayed_flag(&executor, 100);
        assert_eq!(executor.pending(), 1);

        handle.join().await;
        assert!(flag.load(Ordering::SeqCst));
        assert_eq!(executor.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_all_stops_pending_jobs() {
        let executor = DeferredExecutor::new();
        let (first, first_flag) = delayed_flag(&executor, 100);
        let (second, second_flag) = delayed_flag(&executor, 200);
        assert_eq!(executor.pending(), 2);

        executor.cancel_all();
        assert!(first.is_cancelled());
        first.join().await;
        second.join().await;

        assert!(!first_flag.load(Ordering::SeqCst));
        assert!(!second_flag.load(Ordering::SeqCst));
        assert_eq!(executor.pending(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_jobs_after_cancel_all_still_run() {
        let executor = DeferredExecutor::new();
        executor.cancel_all();

        let (handle, flag) = delayed_flag(&executor, 50);
        assert!(!handle.is_cancelled());
        handle.join().await;
        assert!(flag.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_single_job() {
        let executor = DeferredExecutor::new();
        let (cancelled, cancelled_flag) = delayed_flag(&executor, 100);
        let (kept, kept_flag) = delayed_flag(&executor, 100);

        cancelled.cancel();
        cancelled.join().await;
        kept.join().await;

        assert!(!cancelled_flag.load(Ordering::SeqCst));
        assert!(kept_flag.load(Ordering::SeqCst));
    }
}
