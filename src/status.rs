//! Build status decoding
//!
//! Statuses arrive as a hex string, one digit per pair of systems:
//! the high two bits of each digit carry the even system, the low two
//! bits the odd one. Running is a transition, not a stored code, so
//! decoding needs the previous board to tell a green build from a red
//! one that is being retried.

use heapless::String;

const STATUS_CODE_NONE: u8 = 0;
const STATUS_CODE_PASS: u8 = 1;
const STATUS_CODE_FAILED: u8 = 2;
const STATUS_CODE_RUNNING: u8 = 3;

/// Visual state of a single build system.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BuildStatus {
    /// No build reported for this slot
    #[default]
    None,
    /// Last build passed
    Pass,
    /// Last build failed
    Failed,
    /// Build in progress, was passing before
    RunningPass,
    /// Build in progress, was failing before
    RunningFailed,
}

impl BuildStatus {
    /// Check if this status counts against the all-pass aggregate
    pub const fn is_failing(self) -> bool {
        matches!(self, Self::Failed | Self::RunningFailed)
    }

    /// Apply a decoded wire code to this (previous) status
    ///
    /// Running carries the pass/fail color of the previous status
    /// forward. Codes outside the wire range clear the slot.
    pub const fn advance(self, code: u8) -> Self {
        match code {
            STATUS_CODE_NONE => Self::None,
            STATUS_CODE_PASS => Self::Pass,
            STATUS_CODE_FAILED => Self::Failed,
            STATUS_CODE_RUNNING => {
                if self.is_failing() {
                    Self::RunningFailed
                } else {
                    Self::RunningPass
                }
            }
            _ => Self::None,
        }
    }

    /// Wire code for this status
    ///
    /// Both running variants collapse back to the running code; the
    /// pass/fail half of their state is reconstructed on decode.
    pub const fn to_code(self) -> u8 {
        match self {
            Self::None => STATUS_CODE_NONE,
            Self::Pass => STATUS_CODE_PASS,
            Self::Failed => STATUS_CODE_FAILED,
            Self::RunningPass | Self::RunningFailed => STATUS_CODE_RUNNING,
        }
    }
}

/// Parse one hex character (`0-9a-fA-F`) to its value
const fn parse_hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Per-system build statuses, one entry per LED.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBoard<const N: usize> {
    statuses: [BuildStatus; N],
}

impl<const N: usize> Default for StatusBoard<N> {
    fn default() -> Self {
        Self {
            statuses: [BuildStatus::None; N],
        }
    }
}

impl<const N: usize> StatusBoard<N> {
    /// Create a board with no reported builds
    pub const fn new() -> Self {
        Self {
            statuses: [BuildStatus::None; N],
        }
    }

    /// Decode an encoded status string against this board
    ///
    /// Returns the next board without touching this one. Consumes at
    /// most enough digits to cover `N` systems; systems beyond the end
    /// of the string are cleared. A digit that is not valid hex clears
    /// both of its systems.
    pub fn decode(&self, encoded: &str) -> Self {
        let mut next = Self::new();
        for (slot, byte) in encoded.bytes().take(N.div_ceil(2)).enumerate() {
            let Some(digit) = parse_hex_digit(byte) else {
                continue;
            };
            let even = slot * 2;
            next.statuses[even] = self.statuses[even].advance(digit >> 2);
            if even + 1 < N {
                next.statuses[even + 1] = self.statuses[even + 1].advance(digit & 0x3);
            }
        }
        next
    }

    /// Encode the board back into its wire form
    ///
    /// One lowercase hex digit per pair of systems, same packing the
    /// decoder consumes.
    pub fn encode(&self) -> String<N> {
        let mut encoded = String::new();
        for pair in self.statuses.chunks(2) {
            let mut digit = pair[0].to_code() << 2;
            if let Some(odd) = pair.get(1) {
                digit |= odd.to_code();
            }
            let _ = encoded.push(char::from_digit(u32::from(digit), 16).unwrap_or('0'));
        }
        encoded
    }

    /// Status of a single system, `None` when out of range
    pub fn get(&self, index: usize) -> BuildStatus {
        self.statuses.get(index).copied().unwrap_or_default()
    }

    /// All statuses, indexed by LED position
    pub const fn as_slice(&self) -> &[BuildStatus] {
        &self.statuses
    }
}
