//! The serial link the driver talks through.
//!
//! The MAX22190 itself does not care which SPI peripheral, bit-banged port,
//! or bus multiplexer carries its frames, so the driver only asks for the
//! three capabilities a transaction needs: claim the link, exchange bytes in
//! place, release the link. The application implements [`Transport`] once for
//! its platform and hands it to [`Max22190::new`](crate::Max22190::new).

use thiserror::Error;

/// Failure reported by a transport operation.
///
/// The driver does not interpret the failure beyond recording a
/// communication error in the sticky error mask, so this carries no payload.
/// Transport implementations that want to surface details should log them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("serial transport operation failed")]
pub struct TransportError;

/// Capability set for one byte-oriented full-duplex serial link.
///
/// A transaction is always the fixed sequence `acquire` → `exchange` →
/// `release`, driven by the driver. Implementations map these onto their
/// platform: typically chip-select assert, a blocking full-duplex SPI
/// transfer, and chip-select deassert. All three operations are blocking;
/// timeout policy, if any, belongs to the implementation.
pub trait Transport {
    /// Prepares the link for a transaction (e.g. asserts chip select).
    fn acquire(&mut self) -> Result<(), TransportError>;

    /// Exchanges `frame.len()` bytes in place: `frame` holds the outgoing
    /// bytes on entry and the received bytes on return.
    ///
    /// `chip_address` is an addressing hint for shared links and is ignored
    /// when zero. The driver always passes zero; the MAX22190 sits on a
    /// point-to-point link.
    fn exchange(&mut self, chip_address: u8, frame: &mut [u8]) -> Result<(), TransportError>;

    /// Concludes the transaction (e.g. deasserts chip select).
    fn release(&mut self) -> Result<(), TransportError>;
}

// Lets callers keep ownership of the transport and lend it to the handle.
impl<T: Transport + ?Sized> Transport for &mut T {
    fn acquire(&mut self) -> Result<(), TransportError> {
        (**self).acquire()
    }

    fn exchange(&mut self, chip_address: u8, frame: &mut [u8]) -> Result<(), TransportError> {
        (**self).exchange(chip_address, frame)
    }

    fn release(&mut self) -> Result<(), TransportError> {
        (**self).release()
    }
}
