//! @ai:module:intent Fixed pause between sequential provider calls
//! @ai:module:layer infrastructure
//! @ai:module:public_api CallPacer, PacerTrait
//! @ai:module:stateless true

use crate::config::MIN_CALL_DELAY_MS;
use std::time::Duration;

/// @ai:intent Trait for pacing provider calls
pub trait PacerTrait: Send + Sync {
    /// @ai:intent Pause after a provider call has finished
    fn pause(&self) -> impl std::future::Future<Output = ()> + Send;
}

/// @ai:intent Sleeps a fixed delay after every call, success or failure
pub struct CallPacer {
    delay: Duration,
}

impl CallPacer {
    /// @ai:intent Create a pacer; delays below the provider minimum are raised to it
    /// @ai:effects pure
    pub fn new(delay: Duration) -> Self {
        Self {
            delay: delay.max(Duration::from_millis(MIN_CALL_DELAY_MS)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for CallPacer {
    fn default() -> Self {
        Self::new(Duration::from_millis(MIN_CALL_DELAY_MS))
    }
}

impl PacerTrait for CallPacer {
    /// @ai:intent Wait out the configured delay
    /// @ai:effects time
    async fn pause(&self) {
        tokio::time::sleep(self.delay).await;
    }
}
