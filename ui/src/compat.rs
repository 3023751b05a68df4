//! Timer primitives that work the same on wasm32 and native targets.

// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub mod interval {
        use std::time::Duration;
        use tokio::sync::mpsc;

        /// A repeating tick source driven by the browser's `setInterval`.
        /// The first tick arrives one period after creation.
        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: mpsc::UnboundedReceiver<()>,
        }

        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded_channel();
                let gloo_interval =
                    gloo_timers::callback::Interval::new(duration.as_millis() as u32, move || {
                        let _ = tx.send(());
                    });

                Self {
                    inner: Some(gloo_interval),
                    rx,
                }
            }

            pub async fn tick(&mut self) {
                let _ = self.rx.recv().await;
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }

    /// Resolves after `duration`, driven by the browser's `setTimeout`.
    ///
    /// Dropping the future before it resolves clears the browser timeout.
    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub mod interval {
        use tokio::time::{self, Duration, Instant, MissedTickBehavior};

        /// A repeating tick source on the tokio timer wheel.
        /// The first tick arrives one period after creation, as in the browser.
        pub struct Interval {
            inner: tokio::time::Interval,
        }

        impl Interval {
            pub fn new(duration: Duration) -> Self {
                let mut interval = time::interval_at(Instant::now() + duration, duration);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }

            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }

        #[cfg(test)]
        mod tests {
            use super::*;

            #[tokio::test(start_paused = true)]
            async fn first_tick_waits_a_full_period() {
                let start = Instant::now();
                let mut interval = Interval::new(Duration::from_secs(12));

                interval.tick().await;
                assert_eq!(start.elapsed(), Duration::from_secs(12));
                interval.tick().await;
                assert_eq!(start.elapsed(), Duration::from_secs(24));
            }
        }
    }

    /// Resolves after `duration` on the tokio timer wheel.
    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
