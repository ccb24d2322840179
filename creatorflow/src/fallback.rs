use std::fmt::Display;
use std::future::Future;

/// Runs a single attempt of a best-effort operation.
///
/// Any error is logged and replaced by `default`: callers see no difference between a
/// network failure, an unexpected status or a malformed payload. No retry is made.
pub async fn attempt_with_default<T, E, F>(operation: F, default: T) -> T
where
    F: Future<Output = Result<T, E>>,
    E: Display,
{
    match operation.await {
        Ok(value) => value,
        Err(e) => {
            log::warn!("Falling back to default value: {}", e);
            default
        }
    }
}
