use super::MIN_INTERVAL_MS;
use crate::events::AppEvent;
use crate::motion::MotionPreference;
use async_channel::Sender;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Periodic advance driver.
///
/// Owns at most one timer task. `start` cancels any live task before
/// spawning, so repeated starts replace the timer instead of stacking a
/// second one on top (which would double the advance rate). The task is
/// aborted on `stop` and on drop; it cannot outlive its owner.
#[derive(Debug, Default)]
pub struct AutoAdvance {
    handle: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Schedule periodic [`AppEvent::Advance`] sends every `interval`.
    ///
    /// Does nothing when the environment asks for reduced motion; the
    /// carousel then only moves on explicit navigation.
    pub fn start(&mut self, interval: Duration, preference: MotionPreference, tx: Sender<AppEvent>) {
        self.stop();

        if !preference.allows_animation() {
            log::debug!("auto-advance suppressed: reduced motion requested");
            return;
        }

        let interval = interval.max(Duration::from_millis(MIN_INTERVAL_MS));
        self.handle = Some(tokio::spawn(async move {
            let mut ticker = time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // the first tick of a tokio interval completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(AppEvent::Advance).await.is_err() {
                    break;
                }
            }
        }));
    }

    /// Cancel the timer if one is live; no-op otherwise.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.stop();
    }
}
