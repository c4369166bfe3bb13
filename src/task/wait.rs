use std::time::Duration;

/// Resolve after `duration`.
pub async fn wait_for_time(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Never resolves. Handy for parking a debug session or a test harness.
pub async fn wait_forever() {
    std::future::pending::<()>().await;
}
