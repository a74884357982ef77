#![no_std]

pub mod aggregate;
pub mod animation;
pub mod color;
pub mod control;
pub mod frame_scheduler;
pub mod gamma;
pub mod intent;
pub mod mapper;
pub mod renderer;
pub mod status;
pub mod store;

pub use control::ControlHandle;
pub use intent::{ControlIntent, IntentChannel, IntentReceiver, IntentSender};
pub use renderer::{BuildLightConfig, ControlEffects, Renderer};
pub use frame_scheduler::{DEFAULT_FRAME_DURATION, FrameResult, FrameScheduler};
pub use gamma::{apa102_lut, correct_gamma};
pub use status::{BuildStatus, StatusBoard};
pub use aggregate::AggregateState;
pub use animation::AnimationState;
pub use mapper::RainbowConfig;
pub use store::{MemoryStore, StatusRecord, StatusStore, StoreError};

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED strip driver trait
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait StripDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);

    /// Cap the overall strip brightness (0-255)
    fn set_brightness(&mut self, brightness: u8);
}
