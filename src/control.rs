//! Cloud-facing control surface
//!
//! Thin wrapper around the intent sender for the host's event and RPC
//! handlers. Return values follow the cloud function convention: an
//! integer status code the caller reports back verbatim.

use crate::intent::{ControlIntent, IntentSender};
use heapless::String;

/// Handle for queueing control operations from outside the render loop
#[derive(Clone, Copy)]
pub struct ControlHandle<'a, const N: usize> {
    intents: IntentSender<'a, N>,
}

impl<'a, const N: usize> ControlHandle<'a, N> {
    pub const fn new(intents: IntentSender<'a, N>) -> Self {
        Self { intents }
    }

    /// Queue an encoded status update
    ///
    /// Payloads longer than the board capacity are truncated at intake.
    /// Returns 0 when queued, -1 when the intent queue is full.
    pub fn publish_status(&self, encoded: &str) -> i32 {
        let mut payload = String::<N>::new();
        for c in encoded.chars() {
            if payload.push(c).is_err() {
                break;
            }
        }
        match self.intents.try_send(ControlIntent::Status(payload)) {
            Ok(()) => 0,
            Err(_) => -1,
        }
    }

    /// Queue a forced celebration, ignoring reported statuses
    ///
    /// The argument is the raw RPC payload and is not used. Best
    /// effort: a full queue drops the request and still reports 0.
    pub fn force_celebration(&self, _arg: &str) -> i32 {
        let _ = self.intents.try_send(ControlIntent::ForceCelebration);
        0
    }

    /// Queue a brightness cap for the strip
    ///
    /// Parses a decimal integer, falling back to 0 when the payload is
    /// not a number. The strip sees the value truncated to 0-255; the
    /// return value echoes the full parsed number.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_brightness(&self, value: &str) -> i32 {
        let parsed = value.trim().parse::<i32>().unwrap_or(0);
        let _ = self.intents.try_send(ControlIntent::Brightness(parsed as u8));
        parsed
    }
}
