//! Cancellation-aware delay

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::error::FaultError;

/// Sleep for `duration` unless `cancel` fires first
///
/// Returns [`FaultError::Cancelled`] as soon as the token is cancelled,
/// including when it was already cancelled on entry.
pub async fn cancellable_sleep(
    duration: Duration,
    cancel: &CancellationToken,
) -> Result<(), FaultError> {
    tokio::select! {
        biased;
        () = cancel.cancelled() => Err(FaultError::Cancelled),
        () = tokio::time::sleep(duration) => Ok(()),
    }
}
