// Frame sampler
// Cancellable periodic task mirroring the transport position into the clock

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::clock::PlaybackClock;
use super::transport::Transport;

/// One display-refresh interval (~60 samples per second)
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Handle to the per-frame sampling loop
///
/// The worker samples the transport position into the shared clock once per
/// frame interval. `stop` signals the loop and joins the worker, so no stale
/// tick can land on the clock after it returns. Dropping the handle performs
/// the same teardown.
pub struct FrameSampler {
    stop_signal: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl FrameSampler {
    /// Start sampling `transport` into `clock`
    pub fn start(clock: Arc<Mutex<PlaybackClock>>, transport: Arc<dyn Transport>) -> Self {
        let stop_signal = Arc::new(AtomicBool::new(false));
        let stop = Arc::clone(&stop_signal);

        let handle = thread::spawn(move || {
            log::debug!("frame sampler started");
            while !stop.load(Ordering::SeqCst) {
                let pos = transport.position_secs();
                clock.lock().unwrap().tick(pos);
                thread::sleep(FRAME_INTERVAL);
            }
            log::debug!("frame sampler stopped");
        });

        FrameSampler {
            stop_signal,
            handle: Some(handle),
        }
    }

    /// Cancel the loop and wait for the worker to exit
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop_signal.store(true, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            // The worker only sleeps for one frame interval at a time, so the
            // join is short. A panicked worker has nothing left to tick.
            let _ = handle.join();
        }
    }
}

impl Drop for FrameSampler {
    fn drop(&mut self) {
        self.shutdown();
    }
}
