//! Unit tests for background module.

use dataviewer::background::{BackgroundExecutor, TaskResult};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Helper to poll for task completion with a timeout.
/// This is much faster than sleeping because it checks frequently
/// and returns as soon as the condition is met.
fn wait_for_completion<F>(executor: &BackgroundExecutor, mut condition: F, timeout: Duration) -> bool
where
    F: FnMut() -> bool,
{
    let start = Instant::now();
    while start.elapsed() < timeout {
        executor.process_results();
        if condition() {
            return true;
        }
        // Yield to allow background thread to run
        std::thread::yield_now();
    }
    // One final process_results call
    executor.process_results();
    condition()
}

#[test]
fn test_executor_creation() {
    let executor = BackgroundExecutor::new(2);
    assert!(!executor.has_pending());
    assert_eq!(executor.pending_count(), 0);
}

#[test]
fn test_spawn_and_complete() {
    let executor = BackgroundExecutor::new(1);
    let completed = Arc::new(AtomicBool::new(false));
    let completed_clone = Arc::clone(&completed);

    executor.spawn(
        "test_task",
        || Ok(42),
        move |result: TaskResult<i32>| {
            assert_eq!(result.unwrap(), 42);
            completed_clone.store(true, Ordering::SeqCst);
        },
    );

    let success = wait_for_completion(
        &executor,
        || completed.load(Ordering::SeqCst),
        Duration::from_secs(1),
    );

    assert!(success, "Task should have completed");
}

#[test]
fn test_error_results_reach_the_callback() {
    let executor = BackgroundExecutor::new(1);
    let saw_error = Arc::new(AtomicBool::new(false));
    let saw_error_clone = Arc::clone(&saw_error);

    executor.spawn(
        "failing_task",
        || Err::<i32, _>("boom".to_string()),
        move |result: TaskResult<i32>| {
            assert_eq!(result.unwrap_err(), "boom");
            saw_error_clone.store(true, Ordering::SeqCst);
        },
    );

    let success = wait_for_completion(
        &executor,
        || saw_error.load(Ordering::SeqCst),
        Duration::from_secs(1),
    );

    assert!(success, "Error callback should have run");
}

#[test]
fn test_pending_count_drops_after_processing() {
    let executor = BackgroundExecutor::new(2);
    let done = Arc::new(AtomicUsize::new(0));

    for i in 0..4 {
        let done = Arc::clone(&done);
        executor.spawn(
            "counted",
            move || Ok(i),
            move |_: TaskResult<i32>| {
                done.fetch_add(1, Ordering::SeqCst);
            },
        );
    }
    assert_eq!(executor.pending_count(), 4);

    let success = wait_for_completion(
        &executor,
        || done.load(Ordering::SeqCst) == 4,
        Duration::from_secs(1),
    );

    assert!(success, "All four tasks should have completed");
    assert!(!executor.has_pending());
}

#[test]
fn test_completions_only_run_inside_process_results() {
    let executor = BackgroundExecutor::new(1);
    let completed = Arc::new(AtomicBool::new(false));
    let completed_clone = Arc::clone(&completed);

    executor.spawn(
        "deferred",
        || Ok(()),
        move |_: TaskResult<()>| {
            completed_clone.store(true, Ordering::SeqCst);
        },
    );

    // Give the worker time to finish the work itself.
    std::thread::sleep(Duration::from_millis(50));
    assert!(
        !completed.load(Ordering::SeqCst),
        "Callback must wait for process_results"
    );

    executor.process_results();
    assert!(completed.load(Ordering::SeqCst));
}
