use crate::error::{ChatError, Result};
use std::future::Future;
use std::time::Duration;

/// Run `future` with an upper bound on its duration.
///
/// When the bound elapses the future is dropped, cancelling the in-flight
/// call, and [`ChatError::Timeout`] is returned.
pub async fn with_timeout<T, Fut>(limit: Duration, future: Fut) -> Result<T>
where
    Fut: Future<Output = Result<T>>,
{
    match tokio::time::timeout(limit, future).await {
        Ok(result) => result,
        Err(_) => Err(ChatError::Timeout(limit)),
    }
}
