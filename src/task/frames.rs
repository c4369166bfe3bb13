//! Frame recorder — invokes a callback on every tick of a fixed-rate timer.
//!
//! The recorder owns one background task while running. `start` and `stop`
//! are idempotent; dropping the recorder stops it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::time::{interval, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::error::KitError;

pub type FrameCallback = Arc<dyn Fn() + Send + Sync>;

/// Start/stop handle returned by [`record_animation_frames`].
pub struct FrameRecorder {
    callback: FrameCallback,
    frame_interval: Duration,
    runtime: Handle,
    frames: Arc<AtomicU64>,
    /// `Some` while running; cancelling it ends the frame task.
    running: Mutex<Option<CancellationToken>>,
}

/// Create a recorder that calls `callback` once per `frame_interval`.
///
/// Must be called from within a tokio runtime; the frame task is spawned on
/// that runtime. With `auto_start` the first frame fires one interval later.
pub fn record_animation_frames<C>(
    callback: C,
    auto_start: bool,
    frame_interval: Duration,
) -> Result<FrameRecorder, KitError>
where
    C: Fn() + Send + Sync + 'static,
{
    if frame_interval.is_zero() {
        return Err(KitError::Runtime("frame interval must be greater than zero".into()));
    }
    let runtime = Handle::try_current()
        .map_err(|e| KitError::Runtime(format!("frame recorder needs a tokio runtime: {e}")))?;

    let recorder = FrameRecorder {
        callback: Arc::new(callback),
        frame_interval,
        runtime,
        frames: Arc::new(AtomicU64::new(0)),
        running: Mutex::new(None),
    };
    if auto_start {
        recorder.start();
    }
    Ok(recorder)
}

impl FrameRecorder {
    /// Begin firing frames. No-op when already running.
    pub fn start(&self) {
        let mut running = self.lock();
        if running.is_some() {
            return;
        }
        let token = CancellationToken::new();
        *running = Some(token.clone());

        let callback = Arc::clone(&self.callback);
        let frames = Arc::clone(&self.frames);
        let period = self.frame_interval;
        debug!(interval_ms = period.as_millis() as u64, "frame recorder started");

        self.runtime.spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately.
            ticker.tick().await;
            loop {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => break,
                    _ = ticker.tick() => {
                        callback();
                        let n = frames.fetch_add(1, Ordering::Relaxed) + 1;
                        trace!(frame = n, "frame fired");
                    }
                }
            }
        });
    }

    /// Stop firing frames. No-op when already stopped.
    pub fn stop(&self) {
        if let Some(token) = self.lock().take() {
            token.cancel();
            debug!(frames = self.frame_count(), "frame recorder stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock().is_some()
    }

    /// Frames fired since creation, across restarts.
    pub fn frame_count(&self) -> u64 {
        self.frames.load(Ordering::Relaxed)
    }

    fn lock(&self) -> MutexGuard<'_, Option<CancellationToken>> {
        // The guarded state is a plain Option; a poisoned lock is still usable.
        self.running.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for FrameRecorder {
    fn drop(&mut self) {
        self.stop();
    }
}
