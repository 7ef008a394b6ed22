//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::compositor::flush;
use crate::{OutputDriver, Renderer, TickTimings};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult<E> {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Outcome of writing the frame to the sink.
    ///
    /// A failed frame is skipped; the next tick tries again.
    pub output: Result<(), E>,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Calls the renderer and output driver
/// - Returns timing info so the caller can sleep appropriately
///
/// The sleep doubles as the wait for frame ready events: the caller may
/// wake early when [`LightBus::frame_ready_pending`](crate::LightBus::frame_ready_pending)
/// turns true, but must not wait longer than `sleep_duration`.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver, timings);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_LEDS: usize> {
    output: O,
    renderer: Renderer<'a, MAX_LEDS>,
    next_frame: Instant,
    frame_duration: Duration,
    refresh_timeout: Duration,
    failed_frames: u32,
}

impl<'a, O: OutputDriver, const MAX_LEDS: usize> FrameScheduler<'a, O, MAX_LEDS> {
    /// Create a new frame scheduler.
    pub fn new(renderer: Renderer<'a, MAX_LEDS>, driver: O, timings: &TickTimings) -> Self {
        Self {
            output: driver,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration: timings.render_interval,
            refresh_timeout: timings.refresh_timeout,
            failed_frames: 0,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Renders the current frame
    /// 3. Writes to the output driver
    /// 4. Returns the deadline for the next frame
    pub fn tick(&mut self, now: Instant) -> FrameResult<O::Error> {
        // Drift correction: if we've fallen too far behind, reset to now
        let max_drift = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.renderer.render();
        let output = flush(&mut self.output, frame, self.refresh_timeout);
        if let Err(_err) = &output {
            self.failed_frames = self.failed_frames.saturating_add(1);
            #[cfg(feature = "esp32-log")]
            println!("[FrameScheduler.tick] output failed: {:?}", _err);
        }

        self.next_frame += self.frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            output,
        }
    }

    /// Number of frames the sink rejected so far
    pub const fn failed_frames(&self) -> u32 {
        self.failed_frames
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, MAX_LEDS> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, MAX_LEDS> {
        &mut self.renderer
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
