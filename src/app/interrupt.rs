use std::future::Future;

/// 被 Ctrl-C 中斷時的結束碼 (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome<T> {
    Completed(T),
    Interrupted,
}

/// Runs `work` until it finishes or `interrupt` resolves, whichever comes first.
pub async fn until_interrupted<F, S>(work: F, interrupt: S) -> Outcome<F::Output>
where
    F: Future,
    S: Future,
{
    tokio::select! {
        output = work => Outcome::Completed(output),
        _ = interrupt => Outcome::Interrupted,
    }
}

/// Resolves on Ctrl-C. Never resolves if the signal handler cannot be installed.
pub async fn ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Unable to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_completed_when_work_finishes_first() {
        let outcome = until_interrupted(async { 7 }, std::future::pending::<()>()).await;
        assert_eq!(outcome, Outcome::Completed(7));
    }

    #[tokio::test]
    async fn test_interrupt_stops_pending_work() {
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = tx.send(());
        });

        let outcome = until_interrupted(std::future::pending::<u8>(), rx).await;
        assert_eq!(outcome, Outcome::Interrupted);
    }

    #[tokio::test]
    async fn test_interrupt_reaches_blocking_session() {
        // 互動模式跑在 blocking 執行緒上，中斷訊號仍要能讓主流程返回
        let (tx, rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(10)).await;
            let _ = tx.send(());
        });

        let started = Instant::now();
        let session = tokio::task::spawn_blocking(|| std::thread::sleep(Duration::from_millis(500)));
        let outcome = until_interrupted(session, rx).await;

        assert!(matches!(outcome, Outcome::Interrupted));
        assert!(started.elapsed() < Duration::from_millis(400));
    }
}
