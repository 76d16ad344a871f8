//! Racing a future against a timer on both wasm and native targets

use futures::future::{select, Either};
use futures::pin_mut;
use std::future::Future;
use std::time::Duration;

/// The deadline passed before the future completed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed;

/// Drive `future` to completion unless `duration` passes first.
/// On timeout the future is dropped.
pub async fn with_timeout<F: Future>(duration: Duration, future: F) -> Result<F::Output, Elapsed> {
    let timer = sleep(duration);
    pin_mut!(future);
    pin_mut!(timer);

    match select(future, timer).await {
        Either::Left((output, _)) => Ok(output),
        Either::Right(((), _)) => Err(Elapsed),
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn completes_before_deadline() {
        let result = with_timeout(Duration::from_secs(1), async { 7 }).await;
        assert_eq!(result, Ok(7));
    }

    #[tokio::test]
    async fn reports_elapsed() {
        let result = with_timeout(
            Duration::from_millis(10),
            tokio::time::sleep(Duration::from_secs(5)),
        )
        .await;
        assert_eq!(result, Err(Elapsed));
    }
}
