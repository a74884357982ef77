use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::aggregate::{self, AggregateState};
use crate::animation::AnimationState;
use crate::color::Rgb;
use crate::frame_scheduler::DEFAULT_FRAME_DURATION;
use crate::intent::{ControlIntent, IntentReceiver};
use crate::mapper::{self, RainbowConfig};
use crate::status::{BuildStatus, StatusBoard};
use crate::store::{self, StatusStore};

/// Default hardware brightness cap
pub const DEFAULT_BRIGHTNESS: u8 = 10;

/// Configuration for the build light
#[derive(Debug, Clone)]
pub struct BuildLightConfig {
    /// Celebration rainbow settings
    pub rainbow: RainbowConfig,
    /// Brightness cap applied to the driver at startup
    pub brightness: u8,
    /// Target delay between frames
    pub frame_duration: Duration,
}

impl Default for BuildLightConfig {
    fn default() -> Self {
        Self {
            rainbow: RainbowConfig::default(),
            brightness: DEFAULT_BRIGHTNESS,
            frame_duration: DEFAULT_FRAME_DURATION,
        }
    }
}

/// Side effects from intent processing that the scheduler should apply
#[derive(Debug, Clone, Copy, Default)]
pub struct ControlEffects {
    /// New brightness cap for the strip driver
    pub brightness: Option<u8>,
}

/// Build light renderer - the main orchestrator
///
/// Owns the status board and both aggregate and animation state, and
/// is the only writer of all three. Control producers reach it through
/// the intent channel, so updates land between frames and a frame is
/// never mapped from a half-applied board.
pub struct Renderer<'a, S: StatusStore, const N: usize> {
    // External dependencies and configuration
    intents: IntentReceiver<'a, N>,
    store: S,
    rainbow: RainbowConfig,

    // Internal state
    board: StatusBoard<N>,
    aggregate: AggregateState,
    animation: AnimationState,
    frame_buffer: [Rgb; N],
}

impl<'a, S: StatusStore, const N: usize> Renderer<'a, S, N> {
    /// Create a new renderer with an unreported board
    pub fn new(intents: IntentReceiver<'a, N>, store: S, config: &BuildLightConfig) -> Self {
        let board = StatusBoard::new();
        let aggregate = aggregate::evaluate(board.as_slice());
        Self {
            intents,
            store,
            rainbow: config.rainbow,
            board,
            aggregate,
            animation: AnimationState::new(),
            frame_buffer: [Rgb::default(); N],
        }
    }

    /// Rebuild the board from the persisted status string
    ///
    /// Feeds the stored string through the same decode path as a live
    /// update, without writing it back. Unreadable storage leaves
    /// every system unreported.
    pub fn restore(&mut self) {
        let mut raw = [0; N];
        match self.store.load(&mut raw) {
            Ok(read) => {
                let encoded = store::encoded_from_bytes(&raw[..read]);
                self.apply_status(encoded);
            }
            Err(_err) => {
                #[cfg(feature = "esp32-log")]
                println!("status restore failed: {:?}", _err);
            }
        }
    }

    /// Process pending intents from the channel (non-blocking)
    ///
    /// Status updates are persisted before they are applied so a power
    /// cycle replays the same board. A failing store is logged and the
    /// update still takes effect.
    pub fn poll_intents(&mut self) -> ControlEffects {
        let mut effects = ControlEffects::default();

        while let Ok(intent) = self.intents.try_receive() {
            match intent {
                ControlIntent::Status(encoded) => {
                    if let Err(_err) = self.store.save(&encoded) {
                        #[cfg(feature = "esp32-log")]
                        println!("status save failed: {:?}", _err);
                    }
                    self.apply_status(&encoded);
                }
                ControlIntent::ForceCelebration => {
                    self.aggregate.all_pass = true;
                    if self.aggregate.active_count == 0 {
                        self.aggregate.active_count = N;
                    }
                }
                ControlIntent::Brightness(brightness) => {
                    effects.brightness = Some(brightness);
                }
            }
        }

        effects
    }

    /// Decode an update against the current board and re-evaluate
    fn apply_status(&mut self, encoded: &str) {
        self.board = self.board.decode(encoded);
        self.aggregate = aggregate::evaluate(self.board.as_slice());
    }

    /// Render one frame
    ///
    /// Advances the animation clock exactly once, then maps every
    /// pixel. Call this once per frame.
    pub fn render(&mut self) -> &[Rgb] {
        self.animation.tick(self.rainbow.speed);

        for (index, pixel) in self.frame_buffer.iter_mut().enumerate() {
            *pixel = mapper::color_for(
                index,
                self.board.get(index),
                &self.aggregate,
                &self.animation,
                &self.rainbow,
            );
        }

        &self.frame_buffer
    }

    /// Current aggregate over the board
    pub const fn aggregate(&self) -> AggregateState {
        self.aggregate
    }

    /// Current per-system statuses
    pub const fn statuses(&self) -> &[BuildStatus] {
        self.board.as_slice()
    }

    /// Get a reference to the status store.
    pub const fn store(&self) -> &S {
        &self.store
    }
}
