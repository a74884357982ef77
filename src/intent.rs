use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::{Channel, Receiver, Sender};
use heapless::String;

/// Queue depth for pending control intents
pub const INTENT_CHANNEL_SIZE: usize = 4;

/// A control operation waiting to be applied by the renderer
///
/// `N` is the capacity of an encoded status payload, one byte per LED.
#[derive(Debug, Clone)]
pub enum ControlIntent<const N: usize> {
    /// Replace the board with a freshly decoded status string
    Status(String<N>),
    /// Celebrate regardless of the reported statuses
    ForceCelebration,
    /// Cap the overall strip brightness
    Brightness(u8),
}

/// Type alias for intent sender
pub type IntentSender<'a, const N: usize> =
    Sender<'a, CriticalSectionRawMutex, ControlIntent<N>, INTENT_CHANNEL_SIZE>;

/// Type alias for intent receiver
pub type IntentReceiver<'a, const N: usize> =
    Receiver<'a, CriticalSectionRawMutex, ControlIntent<N>, INTENT_CHANNEL_SIZE>;

/// Type alias for the intent channel
pub type IntentChannel<const N: usize> =
    Channel<CriticalSectionRawMutex, ControlIntent<N>, INTENT_CHANNEL_SIZE>;
