//! Background task execution.
//!
//! A small worker pool for blocking operations (file loads, image
//! fetches). Work runs on worker threads; completion callbacks are
//! queued and only ever executed by [`BackgroundExecutor::process_results`],
//! which the UI thread calls. This keeps every piece of mutable
//! application state single-threaded: workers read their input and
//! return a value, nothing more.

use crate::constants::DEFAULT_WORKER_COUNT;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

/// Outcome of a background task. Errors are plain strings since they
/// cross a thread boundary and end up in user-facing messages or logs.
pub type TaskResult<T> = Result<T, String>;

type Job = Box<dyn FnOnce() + Send>;

pub struct BackgroundExecutor {
    jobs: Option<Sender<Job>>,
    completions: Arc<Mutex<VecDeque<Job>>>,
    pending: Arc<AtomicUsize>,
    workers: Vec<JoinHandle<()>>,
}

impl BackgroundExecutor {
    /// Create an executor with `worker_count` threads.
    pub fn new(worker_count: usize) -> Self {
        let (tx, rx) = channel::<Job>();
        let rx = Arc::new(Mutex::new(rx));
        let workers = (0..worker_count.max(1))
            .map(|i| {
                let rx = Arc::clone(&rx);
                std::thread::Builder::new()
                    .name(format!("background-{}", i))
                    .spawn(move || worker_loop(rx))
                    .expect("failed to spawn background worker")
            })
            .collect();

        Self {
            jobs: Some(tx),
            completions: Arc::new(Mutex::new(VecDeque::new())),
            pending: Arc::new(AtomicUsize::new(0)),
            workers,
        }
    }

    pub fn with_default_workers() -> Self {
        Self::new(DEFAULT_WORKER_COUNT)
    }

    /// Run `work` on a worker thread and queue `on_complete` with its
    /// result. The callback runs on whichever thread next calls
    /// [`process_results`], which in the application is always the UI
    /// thread.
    pub fn spawn<T, W, C>(&self, name: &str, work: W, on_complete: C)
    where
        T: Send + 'static,
        W: FnOnce() -> TaskResult<T> + Send + 'static,
        C: FnOnce(TaskResult<T>) + Send + 'static,
    {
        let task_name = name.to_string();
        let completions = Arc::clone(&self.completions);
        self.pending.fetch_add(1, Ordering::SeqCst);

        let job: Job = Box::new(move || {
            let result = work();
            if let Err(ref e) = result {
                tracing::warn!(task = %task_name, error = %e, "background task failed");
            }
            let callback: Job = Box::new(move || on_complete(result));
            completions.lock().unwrap().push_back(callback);
        });

        if let Some(ref jobs) = self.jobs {
            if jobs.send(job).is_err() {
                // Workers are gone; nothing will ever complete this task.
                self.pending.fetch_sub(1, Ordering::SeqCst);
                tracing::error!("background executor has no live workers");
            }
        }
    }

    /// Drain and run queued completion callbacks. Call from the UI
    /// thread only.
    pub fn process_results(&self) {
        let drained: Vec<Job> = {
            let mut queue = self.completions.lock().unwrap();
            queue.drain(..).collect()
        };
        for callback in drained {
            self.pending.fetch_sub(1, Ordering::SeqCst);
            callback();
        }
    }

    /// True while any task has not yet had its completion processed.
    pub fn has_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst) > 0
    }

    pub fn pending_count(&self) -> usize {
        self.pending.load(Ordering::SeqCst)
    }
}

impl Drop for BackgroundExecutor {
    fn drop(&mut self) {
        // Closing the channel lets workers drain and exit.
        self.jobs.take();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

fn worker_loop(rx: Arc<Mutex<Receiver<Job>>>) {
    loop {
        let job = {
            let guard = rx.lock().unwrap();
            guard.recv()
        };
        match job {
            Ok(job) => job(),
            Err(_) => break,
        }
    }
}
