//! Per-pixel color selection
//!
//! One call per LED per frame turns a build status into the color the
//! strip shows. The celebration rainbow takes priority over individual
//! statuses across the whole active range, unreported systems stay
//! dark, and everything that lights up is gamma corrected.

use crate::aggregate::AggregateState;
use crate::animation::AnimationState;
use crate::color::{Hsv, Rgb, hsv2rgb};
use crate::gamma::correct_gamma;
use crate::status::BuildStatus;

/// Celebration rainbow settings
#[derive(Debug, Clone, Copy)]
pub struct RainbowConfig {
    /// Render the rainbow when every active system passes
    pub enabled: bool,
    /// Hue distance between neighboring LEDs
    pub spacing: u8,
    /// Hue steps the rainbow advances per frame
    pub speed: u8,
}

impl Default for RainbowConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            spacing: 10,
            speed: 1,
        }
    }
}

/// Color of one LED for the current frame
pub fn color_for(
    index: usize,
    status: BuildStatus,
    aggregate: &AggregateState,
    animation: &AnimationState,
    rainbow: &RainbowConfig,
) -> Rgb {
    if rainbow.enabled && aggregate.all_pass && index < aggregate.active_count {
        return rainbow_color(index, animation, rainbow);
    }

    let fade = animation.fade_level();
    let base = match status {
        BuildStatus::None => return Rgb::new(0, 0, 0),
        BuildStatus::Pass => Rgb::new(0, 255, 0),
        BuildStatus::Failed => Rgb::new(255, 0, 0),
        BuildStatus::RunningPass => Rgb::new(0, 255 - fade, 0),
        BuildStatus::RunningFailed => Rgb::new(255 - fade, 0, 0),
    };
    correct_gamma(base)
}

/// Rainbow color for one LED, hue offset by its position
#[allow(clippy::cast_possible_truncation)]
fn rainbow_color(index: usize, animation: &AnimationState, rainbow: &RainbowConfig) -> Rgb {
    let hue = animation
        .hue()
        .wrapping_sub(rainbow.spacing.wrapping_mul(index as u8));
    correct_gamma(hsv2rgb(Hsv {
        hue,
        sat: 255,
        val: 255,
    }))
}
