// src/utils/time.rs - Cross-platform time utilities

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Cross-platform time utilities that work on both native and WASM
pub struct Time;

impl Time {
    /// Get current UTC time - works on both native and WASM
    pub fn now() -> DateTime<Utc> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Utc::now()
        }

        #[cfg(target_arch = "wasm32")]
        {
            let millis = js_sys::Date::now() as i64;
            DateTime::from_timestamp_millis(millis).unwrap_or(DateTime::UNIX_EPOCH)
        }
    }

    /// Get current timestamp as milliseconds since epoch
    pub fn now_millis() -> u64 {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Utc::now().timestamp_millis() as u64
        }

        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() as u64
        }
    }

    /// Suspends the current task; tokio timer on native, browser timer on web
    pub async fn sleep(duration: Duration) {
        #[cfg(not(target_arch = "wasm32"))]
        tokio::time::sleep(duration).await;

        #[cfg(target_arch = "wasm32")]
        gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;
    }
}
