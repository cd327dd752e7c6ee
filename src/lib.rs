//! # max22190-spi
//!
//! A Rust driver for the MAX22190 octal industrial digital input monitor,
//! communicating over an SPI-like byte-oriented serial link supplied by the
//! application.
//!
//! The crate owns the register transaction protocol: frame construction, the
//! optional 5-bit frame CRC, and error classification. The physical link
//! stays behind the small [`Transport`] trait (chip select handling and the
//! actual byte exchange belong to the platform, not to this driver).
//!
//! ## Features
//!
//! *   Register read/write primitives (`read_register`, `write_register`)
//!     with the chip's register map exported under [`registers`].
//! *   Optional frame integrity checking ([`CrcMode`]): 3-byte frames with a
//!     5-bit CRC appended on transmit and verified on receive, or plain
//!     2-byte frames.
//! *   Cached input and wire-break snapshots, refreshed from the status bytes
//!     the chip folds into every response.
//! *   Per-channel debounce filter configuration ([`InputFilter`],
//!     [`FilterDelay`], [`InputSet`]).
//! *   Fault retrieval decoded into typed predicates ([`Faults`]).
//! *   Device initialization with power-on-reset detection and a FAULT1EN
//!     read-back liveness check.
//!
//! ## Error model
//!
//! Transactions never abort early. Every transport step runs, every failure
//! is OR'd into a sticky [`ErrorFlags`] mask, and the caller inspects the
//! mask after the call, as a polled monitoring loop wants it. Each logical
//! operation (`init`, `refresh_inputs`, `set_input_filter`,
//! `read_faults`) resets the mask on entry so it reports only that
//! operation's failures. `ErrorFlags::into_result` bridges to a conventional
//! [`Result`] for `?`-style call sites. There is no automatic retry; retry
//! policy is the caller's.
//!
//! ## Basic Usage
//!
//! ```no_run
//! use max22190_spi::{
//!     CrcMode, FilterDelay, Input, InputFilter, InputSet, Max22190, Transport, TransportError,
//! };
//!
//! // Stand-in for the platform SPI peripheral plus chip-select pin.
//! struct SpiLink;
//!
//! impl Transport for SpiLink {
//!     fn acquire(&mut self) -> Result<(), TransportError> {
//!         // assert chip select
//!         Ok(())
//!     }
//!     fn exchange(&mut self, _chip_address: u8, frame: &mut [u8]) -> Result<(), TransportError> {
//!         // full-duplex transfer, received bytes back into `frame`
//!         Ok(())
//!     }
//!     fn release(&mut self) -> Result<(), TransportError> {
//!         // deassert chip select
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> max22190_spi::Result<()> {
//!     let mut din = Max22190::new(SpiLink, CrcMode::Enabled);
//!     din.init().into_result()?;
//!
//!     // Debounce IN1 and IN2 at 3.2 ms.
//!     let channels = InputSet::from_bits(0b0000_0011);
//!     din.set_input_filter(channels, InputFilter::with_delay(FilterDelay::Ms3_2))
//!         .into_result()?;
//!
//!     // Poll loop body: refresh the snapshots, then read them from cache.
//!     din.refresh_inputs().into_result()?;
//!     let in1 = Input::new(0)?;
//!     println!("IN1 is {}", if din.input_high(in1) { "high" } else { "low" });
//!
//!     let faults = din.read_faults();
//!     din.last_error().into_result()?;
//!     if faults.any() {
//!         println!("active faults: {faults}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Frame integrity mode
//!
//! [`CrcMode`] is fixed when the handle is constructed and decides the frame
//! length of every subsequent transaction (2 bytes unchecked, 3 bytes
//! checked). It must match the chip's CRCEN pin strapping: a mismatch shows
//! up as persistent CRC errors in the mask. The CRC itself is exposed as
//! [`frame_crc`] for tooling and tests.
//!
//! ## Concurrency
//!
//! The driver is synchronous and blocking, and a handle performs no internal
//! locking. Use one handle per exclusive owner or serialize access
//! externally.

// Make internal modules private, re-export public types
mod consts;
mod crc;
mod device;
mod error;
mod fault;
mod input;
mod transport;

pub use crc::{frame_crc, frame_crc_ok};
pub use device::{CrcMode, Max22190};
pub use error::{Error, ErrorFlags, Result};
pub use fault::Faults;
pub use input::{FilterDelay, Input, InputFilter, InputSet};
pub use transport::{Transport, TransportError};

// --- Re-export the register map for raw register access ---
/// Register addresses and bit definitions, for use with
/// [`Max22190::read_register`](crate::Max22190::read_register) and
/// [`Max22190::write_register`](crate::Max22190::write_register).
pub mod registers {
    pub use crate::consts::reg::*;

    /// FAULT1 register bits.
    pub mod fault1 {
        pub use crate::consts::fault1::*;
    }
    /// FAULT2 register bits.
    pub mod fault2 {
        pub use crate::consts::fault2::*;
    }
    /// CONFIG register bits.
    pub mod config {
        pub use crate::consts::config::*;
    }
    /// Per-input filter register bits.
    pub mod filter {
        pub use crate::consts::filter::*;
    }
}
