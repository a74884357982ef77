//! Encoded status persistence
//!
//! The raw encoded string is persisted as it arrives so a power cycle
//! replays the last reported board. The record image is fixed-size:
//! `CAP` bytes, the string zero-padded, with the final byte reserved
//! as a terminator. Pick `CAP` one larger than the LED count.

use core::str;

/// Error type for persistence operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Backing storage is temporarily unavailable
    Busy,
    /// Backing storage failed
    Driver,
}

/// Durable storage for the raw encoded status string
pub trait StatusStore {
    /// Persist the encoded status string
    fn save(&mut self, encoded: &str) -> Result<(), StoreError>;

    /// Read the stored record into `buf`
    ///
    /// Returns how many bytes were read. Short buffers receive a
    /// prefix of the record.
    fn load(&mut self, buf: &mut [u8]) -> Result<usize, StoreError>;
}

/// Fixed-size record image for status storage
///
/// Adapter building block: converts between the encoded string and the
/// exact bytes a `CAP`-sized storage cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusRecord<const CAP: usize> {
    bytes: [u8; CAP],
}

impl<const CAP: usize> Default for StatusRecord<CAP> {
    fn default() -> Self {
        Self { bytes: [0; CAP] }
    }
}

impl<const CAP: usize> StatusRecord<CAP> {
    /// Build a record from an encoded string, truncating to fit
    pub fn from_encoded(encoded: &str) -> Self {
        let mut bytes = [0; CAP];
        let limit = encoded.len().min(CAP.saturating_sub(1));
        bytes[..limit].copy_from_slice(&encoded.as_bytes()[..limit]);
        Self { bytes }
    }

    /// Reinterpret raw storage bytes as a record
    ///
    /// The final byte is forced to a terminator so unwritten or
    /// corrupted storage cannot produce an unterminated string.
    pub fn from_bytes(raw: &[u8]) -> Self {
        let mut bytes = [0; CAP];
        let limit = raw.len().min(CAP);
        bytes[..limit].copy_from_slice(&raw[..limit]);
        if CAP > 0 {
            bytes[CAP - 1] = 0;
        }
        Self { bytes }
    }

    /// The stored encoded string
    pub fn encoded(&self) -> &str {
        encoded_from_bytes(&self.bytes)
    }

    /// Raw record bytes, always `CAP` long
    pub const fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Recover the encoded string from raw record bytes
///
/// Stops at the first terminator. Bytes that do not form valid UTF-8
/// are dropped from the first bad byte on, so blank storage decodes to
/// an empty string and the board degrades to unreported systems.
pub fn encoded_from_bytes(bytes: &[u8]) -> &str {
    let len = bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len());
    match str::from_utf8(&bytes[..len]) {
        Ok(encoded) => encoded,
        Err(err) => str::from_utf8(&bytes[..err.valid_up_to()]).unwrap_or_default(),
    }
}

/// Volatile in-memory store
///
/// Reference adapter for hosts without durable storage; also the store
/// the test suites run against.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore<const CAP: usize> {
    record: StatusRecord<CAP>,
}

impl<const CAP: usize> MemoryStore<CAP> {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current record image
    pub const fn record(&self) -> &StatusRecord<CAP> {
        &self.record
    }
}

impl<const CAP: usize> StatusStore for MemoryStore<CAP> {
    fn save(&mut self, encoded: &str) -> Result<(), StoreError> {
        self.record = StatusRecord::from_encoded(encoded);
        Ok(())
    }

    fn load(&mut self, buf: &mut [u8]) -> Result<usize, StoreError> {
        let len = buf.len().min(CAP);
        buf[..len].copy_from_slice(&self.record.as_bytes()[..len]);
        Ok(len)
    }
}
