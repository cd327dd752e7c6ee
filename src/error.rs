use std::fmt;
use thiserror::Error;

/// Errors that can occur when using the MAX22190 driver.
///
/// Register transactions themselves never abort (failures accumulate in the
/// handle's [`ErrorFlags`] mask), so this enum only surfaces at the edges:
/// argument validation, and the [`ErrorFlags::into_result`] bridge for
/// callers that prefer `?` over inspecting the mask.
#[derive(Error, Debug)]
pub enum Error {
    /// A transport step (acquire, exchange, release) failed during the
    /// operation, or the init read-back verification did not match.
    #[error(
        "Communication failure on the serial link. Check wiring, chip select, and supply; the cached input/wire-break snapshots may be stale."
    )]
    Communication,
    /// The CRC recomputed over a received frame did not match its CRC field.
    #[error(
        "Frame integrity check failed (CRC mismatch on a received frame). The returned data must not be trusted."
    )]
    FrameIntegrity,
    /// Input channel number is outside the valid range.
    #[error("Input channel {channel} out of range: {message}")]
    InvalidInput {
        /// The invalid channel number that was specified.
        channel: u8,
        /// Detailed error message explaining the constraint.
        message: String,
    },
}

/// Result type alias for MAX22190 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Sticky mask of error kinds accumulated during one logical operation.
///
/// Every logical operation (`init`, `refresh_inputs`, `set_input_filter`,
/// `read_faults`) clears the mask at entry and ORs in every failure its
/// internal transactions hit. The mask is never cleared mid-operation, so
/// after the call it reports everything that went wrong, not just the last
/// step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorFlags(u8);

impl ErrorFlags {
    /// No error recorded.
    pub const NONE: ErrorFlags = ErrorFlags(0);
    /// A transport step failed, or a read-back verification mismatched.
    pub const COMM: ErrorFlags = ErrorFlags(0x01);
    /// CRC mismatch on a received frame (integrity-check mode only).
    pub const CRC: ErrorFlags = ErrorFlags(0x02);

    /// Returns the raw bitmask.
    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if no error was recorded.
    #[inline]
    pub fn is_ok(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if every error kind in `other` was recorded.
    #[inline]
    pub fn contains(self, other: ErrorFlags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of both masks.
    #[inline]
    #[must_use]
    pub fn union(self, other: ErrorFlags) -> ErrorFlags {
        ErrorFlags(self.0 | other.0)
    }

    /// ORs `other` into the mask.
    #[inline]
    pub(crate) fn insert(&mut self, other: ErrorFlags) {
        self.0 |= other.0;
    }

    /// Converts the mask into a `Result` for `?`-style call sites.
    ///
    /// A communication error dominates: if both kinds were recorded, the
    /// snapshots are suspect for transport reasons before integrity ones.
    pub fn into_result(self) -> Result<()> {
        if self.contains(ErrorFlags::COMM) {
            Err(Error::Communication)
        } else if self.contains(ErrorFlags::CRC) {
            Err(Error::FrameIntegrity)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ErrorFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            return write!(f, "no error");
        }
        let mut sep = "";
        if self.contains(ErrorFlags::COMM) {
            write!(f, "{sep}communication")?;
            sep = "+";
        }
        if self.contains(ErrorFlags::CRC) {
            write!(f, "{sep}crc")?;
        }
        Ok(())
    }
}
