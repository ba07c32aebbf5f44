use std::time::Duration;

#[cfg(all(feature = "async_tokio", feature = "async_std"))]
compile_error!("features `async_tokio` and `async_std` are mutually exclusive");

/// Suspend the current sort for `delay`.
///
/// Only the calling task is suspended; other sorts on the same runtime keep
/// running.
#[cfg(feature = "async_tokio")]
pub(crate) async fn pause(delay: Duration) {
    tokio::time::sleep(delay).await;
}

/// Suspend the current sort for `delay`.
///
/// Only the calling task is suspended; other sorts on the same executor keep
/// running.
#[cfg(feature = "async_std")]
pub(crate) async fn pause(delay: Duration) {
    async_std::task::sleep(delay).await;
}

/// Without an async runtime the delay blocks the current thread.
#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
#[allow(clippy::unused_async)]
pub(crate) async fn pause(delay: Duration) {
    std::thread::sleep(delay);
}
