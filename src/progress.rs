//! Cosmetic progress indicator for blocking operations.
//!
//! The notifier task never influences the wrapped operation's outcome: it is
//! signalled to stop and joined before the result is returned, and the
//! cursor is restored on success and failure alike.

use std::future::Future;
use std::time::Duration;

use console::Term;
use tokio::sync::watch;
use tokio::task;
use tokio::time;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(100);

/// Run `operation` while a spinner ticks next to `label`.
pub async fn with_spinner<T>(label: &str, operation: impl Future<Output = T>) -> T {
    let term = Term::stderr();
    let _ = term.hide_cursor();

    let (stop_tx, mut stop_rx) = watch::channel(false);
    let ticker_label = label.to_string();
    let ticker = task::spawn(async move {
        let term = Term::stderr();
        let mut interval = time::interval(TICK);
        let mut frame = 0usize;
        loop {
            tokio::select! {
                _ = stop_rx.changed() => break,
                _ = interval.tick() => {
                    let _ = term.write_str(&format!("\r{} {}", ticker_label, FRAMES[frame]));
                    frame = (frame + 1) % FRAMES.len();
                }
            }
        }
        let _ = term.clear_line();
    });

    let result = operation.await;

    let _ = stop_tx.send(true);
    if let Err(e) = ticker.await
        && e.is_panic()
    {
        std::panic::resume_unwind(e.into_panic());
    }
    let _ = term.show_cursor();

    result
}

/// Spinner variant for synchronous work, run on the blocking pool.
pub async fn with_spinner_blocking<T, F>(label: &str, operation: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    with_spinner(label, async move {
        match task::spawn_blocking(operation).await {
            Ok(value) => value,
            Err(e) => std::panic::resume_unwind(e.into_panic()),
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_the_operation_result() {
        let value = with_spinner("working", async { 41 + 1 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn propagates_errors_unchanged() {
        let result: Result<(), &str> = with_spinner("failing", async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
    }

    #[tokio::test]
    async fn blocking_variant_runs_the_closure() {
        let value = with_spinner_blocking("blocking", || "done").await;
        assert_eq!(value, "done");
    }
}
