//! The device handle and its register transaction protocol.

use crate::consts::{self, reg};
use crate::crc::{frame_crc, frame_crc_ok};
use crate::error::ErrorFlags;
use crate::fault::Faults;
use crate::input::{Input, InputFilter, InputSet};
use crate::transport::Transport;
use log::{debug, trace, warn};

/// Frame integrity mode, fixed when the handle is constructed.
///
/// With `Enabled`, every transaction is 3 bytes and carries a 5-bit CRC that
/// is appended on transmit and verified on receive. With `Disabled`,
/// transactions are 2 bytes and unchecked. The chip's CRCEN pin must be
/// strapped to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrcMode {
    Disabled,
    Enabled,
}

impl CrcMode {
    /// Number of bytes exchanged per transaction in this mode.
    #[inline]
    pub fn frame_len(self) -> usize {
        match self {
            CrcMode::Disabled => consts::FRAME_LEN_NO_CRC,
            CrcMode::Enabled => consts::FRAME_LEN_CRC,
        }
    }
}

/// A handle to one MAX22190 on a serial link.
///
/// The handle owns (or mutably borrows, via the blanket `&mut T` transport
/// impl) the link it talks through, plus the driver-side state: the frame
/// integrity mode, the sticky error mask of the most recent operation, and
/// the cached input and wire-break snapshots.
///
/// Register transactions never abort early. Every transport step runs, every
/// failure is OR'd into the error mask, and the caller inspects
/// [`last_error`](Max22190::last_error) (or the mask returned by the logical
/// operations) after the fact. A caller that skips that check proceeds with
/// possibly stale snapshots.
///
/// **Note:** all state is mutated in place without synchronization; a handle
/// must not be shared between threads without external locking.
#[derive(Debug)]
pub struct Max22190<T: Transport> {
    transport: T,
    crc_mode: CrcMode,
    last_error: ErrorFlags,
    inputs: u8,
    wire_break: u8,
}

impl<T: Transport> Max22190<T> {
    /// Creates a handle over a transport. Performs no I/O; call
    /// [`init`](Max22190::init) before trusting any chip state.
    pub fn new(transport: T, crc_mode: CrcMode) -> Self {
        Self {
            transport,
            crc_mode,
            last_error: ErrorFlags::NONE,
            inputs: 0,
            wire_break: 0,
        }
    }

    /// Returns the frame integrity mode chosen at construction.
    pub fn crc_mode(&self) -> CrcMode {
        self.crc_mode
    }

    /// Returns the error mask accumulated by the most recent operation.
    pub fn last_error(&self) -> ErrorFlags {
        self.last_error
    }

    /// Returns the most recent digital input snapshot, one bit per channel.
    ///
    /// The chip reports its input state in the first byte of every response,
    /// so this refreshes on every register transaction, reads and writes
    /// alike.
    pub fn inputs(&self) -> u8 {
        self.inputs
    }

    /// Returns `true` if the channel was high in the last input snapshot.
    pub fn input_high(&self, input: Input) -> bool {
        self.inputs & input.mask() != 0
    }

    /// Returns the most recent wire-break snapshot, one bit per channel.
    ///
    /// The chip reports wire-break state in the second byte of write
    /// responses, so this only refreshes on register writes (a
    /// [`refresh_inputs`](Max22190::refresh_inputs) call suffices).
    pub fn wire_break(&self) -> u8 {
        self.wire_break
    }

    /// Returns `true` if a wire break was flagged for the channel in the
    /// last wire-break snapshot.
    pub fn wire_break_detected(&self, input: Input) -> bool {
        self.wire_break & input.mask() != 0
    }

    /// Returns a shared reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns a mutable reference to the underlying transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Consumes the handle and returns the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }

    // --- Register Transaction Protocol ---

    // Runs one transaction over the shared TX/RX buffer. Failures accumulate
    // into the sticky mask; no step is skipped on account of an earlier one.
    // The caller-visible error reset happens in the logical operations, never
    // here.
    fn transact(&mut self, frame: &mut [u8; 3]) {
        if self.crc_mode == CrcMode::Enabled {
            frame[2] = frame_crc(frame);
        }
        let len = self.crc_mode.frame_len();
        trace!("TX frame: {:02X?}", &frame[..len]);

        if self.transport.acquire().is_err() {
            warn!("Transport acquire failed");
            self.last_error.insert(ErrorFlags::COMM);
        }
        if self.transport.exchange(0, &mut frame[..len]).is_err() {
            warn!("Transport exchange failed");
            self.last_error.insert(ErrorFlags::COMM);
        }
        if self.transport.release().is_err() {
            warn!("Transport release failed");
            self.last_error.insert(ErrorFlags::COMM);
        }
        trace!("RX frame: {:02X?}", &frame[..len]);

        if self.crc_mode == CrcMode::Enabled && !frame_crc_ok(frame) {
            warn!(
                "CRC mismatch on received frame: computed 0x{:02X}, field 0x{:02X}",
                frame_crc(frame),
                frame[2] & consts::CRC_FIELD_MASK
            );
            self.last_error.insert(ErrorFlags::CRC);
        }

        // The echoed address byte always carries the current input state.
        self.inputs = frame[0];
    }

    /// Reads a register and returns its value.
    ///
    /// Also refreshes the input snapshot from the response. Failures are
    /// recorded in [`last_error`](Max22190::last_error); the returned byte is
    /// whatever arrived on the wire.
    pub fn read_register(&mut self, address: u8) -> u8 {
        let mut frame = [address | consts::DIR_READ, 0x00, 0x00];
        self.transact(&mut frame);
        trace!("Read reg 0x{:02X} = 0x{:02X}", address, frame[1]);
        frame[1]
    }

    /// Writes a register.
    ///
    /// Also refreshes the input snapshot from the response and, because the
    /// chip echoes wire-break state in place of the written value, the
    /// wire-break snapshot. Failures are recorded in
    /// [`last_error`](Max22190::last_error).
    pub fn write_register(&mut self, address: u8, value: u8) {
        let mut frame = [address | consts::DIR_WRITE, value, 0x00];
        self.transact(&mut frame);
        self.wire_break = frame[1];
        trace!("Wrote reg 0x{:02X} = 0x{:02X}", address, value);
    }

    // --- Logical Operations ---

    /// Brings the chip to a known-good configuration and verifies the link.
    ///
    /// Reads FAULT1 first; when the power-on-reset flag is *not* set, the
    /// defaults are programmed (wire-break latch cleared, all filters
    /// bypassed, all inputs enabled, CRC and POR fault reporting enabled,
    /// fault flags cleared). A device that still shows POR is left untouched
    /// so a re-init without a power cycle preserves the existing
    /// configuration. Finally FAULT1EN is read back and compared against the
    /// expected value as a liveness check.
    ///
    /// Returns the accumulated error mask for the whole sequence.
    pub fn init(&mut self) -> ErrorFlags {
        self.last_error = ErrorFlags::NONE;

        let fault1_val = self.read_register(reg::FAULT1);
        if fault1_val & consts::fault1::POR == 0 {
            debug!("POR flag clear, programming default configuration");
            self.write_register(reg::WIREBREAK, 0x00);
            // Direct writes rather than set_input_filter: the sticky mask
            // must survive the whole init sequence.
            for input in InputSet::ALL.iter() {
                self.write_register(input.filter_register(), InputFilter::BYPASSED.bits());
            }
            self.write_register(reg::INPUT_EN, consts::INPUT_EN_ALL);
            self.write_register(reg::FAULT1EN, consts::FAULT1EN_DEFAULT);
            self.write_register(reg::FAULT1, 0x00);
        } else {
            debug!("POR flag set, leaving existing configuration in place");
        }

        let readback = self.read_register(reg::FAULT1EN);
        if readback != consts::FAULT1EN_DEFAULT {
            warn!(
                "FAULT1EN read-back 0x{readback:02X}, expected 0x{:02X}",
                consts::FAULT1EN_DEFAULT
            );
            self.last_error.insert(ErrorFlags::COMM);
        }

        self.last_error
    }

    /// Refreshes the input and wire-break snapshots with a no-op write.
    ///
    /// Returns the accumulated error mask.
    pub fn refresh_inputs(&mut self) -> ErrorFlags {
        self.last_error = ErrorFlags::NONE;
        self.write_register(reg::NOP, 0x00);
        self.last_error
    }

    /// Programs the debounce filter for every channel in `inputs`.
    ///
    /// Each channel has its own filter register, so one write is issued per
    /// set channel; an empty set writes nothing. Returns the accumulated
    /// error mask.
    pub fn set_input_filter(&mut self, inputs: InputSet, filter: InputFilter) -> ErrorFlags {
        self.last_error = ErrorFlags::NONE;
        debug!(
            "Programming filter 0x{:02X} for input mask 0x{:02X}",
            filter.bits(),
            inputs.bits()
        );
        for input in inputs.iter() {
            self.write_register(input.filter_register(), filter.bits());
        }
        self.last_error
    }

    /// Reads both fault registers and combines them into one fault word,
    /// FAULT2 in the high byte and FAULT1 in the low byte.
    ///
    /// Most fault bits are clear-on-read. The fault word says nothing about
    /// the health of the transfer itself; inspect
    /// [`last_error`](Max22190::last_error) separately.
    pub fn read_faults(&mut self) -> Faults {
        self.last_error = ErrorFlags::NONE;
        let high = self.read_register(reg::FAULT2);
        let low = self.read_register(reg::FAULT1);
        let faults = Faults::from_registers(high, low);
        debug!("Fault snapshot: {faults}");
        faults
    }
}
