//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::StripDriver;
use crate::renderer::{BuildLightConfig, Renderer};
use crate::store::StatusStore;

/// Default delay between frames.
///
/// The fade and rainbow animations advance one step per frame, so this
/// delay is what sets their visible speed.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(2);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Tracks frame timing with drift correction
/// - Forwards queued control changes to the strip driver
/// - Calls the renderer and writes the frame out
/// - Returns timing info so the caller can sleep appropriately
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, driver, &config);
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis() as u64);
/// }
/// ```
pub struct FrameScheduler<'a, O: StripDriver, S: StatusStore, const N: usize> {
    output: O,
    renderer: Renderer<'a, S, N>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: StripDriver, S: StatusStore, const N: usize> FrameScheduler<'a, O, S, N> {
    /// Create a new frame scheduler.
    ///
    /// Applies the configured brightness cap to the driver up front.
    pub fn new(renderer: Renderer<'a, S, N>, driver: O, config: &BuildLightConfig) -> Self {
        let mut output = driver;
        output.set_brightness(config.brightness);
        Self {
            output,
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration: config.frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Drains control intents and applies brightness changes
    /// 3. Renders the current frame
    /// 4. Writes to the strip driver
    /// 5. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        let max_drift = Duration::from_millis(max_drift_ms);
        if now.as_millis() > self.next_frame.as_millis() + max_drift.as_millis() {
            self.next_frame = now;
        }

        // Apply queued control changes
        let effects = self.renderer.poll_intents();
        if let Some(brightness) = effects.brightness {
            self.output.set_brightness(brightness);
        }

        // Render and output
        let frame = self.renderer.render();
        self.output.write(frame);

        // Calculate next frame deadline
        self.next_frame += self.frame_duration;

        // Calculate sleep duration (may be zero if we're behind)
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, S, N> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, S, N> {
        &mut self.renderer
    }

    /// Get a reference to the strip driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
