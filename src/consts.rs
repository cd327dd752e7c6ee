//! Internal constants, register addresses, and bit definitions.

// --- Frame Layout ---
// Byte 0 carries the register address OR'd with the direction marker.
/// Direction marker for a register write (MSB of the address byte).
pub const DIR_WRITE: u8 = 0x80;
/// Direction marker for a register read.
pub const DIR_READ: u8 = 0x00;

/// Mask selecting the 5-bit CRC field in the third frame byte.
pub const CRC_FIELD_MASK: u8 = 0x1F;

/// Frame length without the CRC byte.
pub const FRAME_LEN_NO_CRC: usize = 2;
/// Frame length with the CRC byte appended.
pub const FRAME_LEN_CRC: usize = 3;

// --- Register Addresses ---
pub mod reg {
    /// Wire-break detection latch. Clear-on-read.
    pub const WIREBREAK: u8 = 0x00;
    /// Current digital input state. Read only.
    pub const DIGITAL_IN: u8 = 0x02;
    /// Primary fault flags. Mixed clear-on-read / read-write bits.
    pub const FAULT1: u8 = 0x04;
    /// Per-input debounce filter registers, one per channel, stride 2.
    pub const FILTER_IN1: u8 = 0x06;
    pub const FILTER_IN2: u8 = 0x08;
    pub const FILTER_IN3: u8 = 0x0A;
    pub const FILTER_IN4: u8 = 0x0C;
    pub const FILTER_IN5: u8 = 0x0E;
    pub const FILTER_IN6: u8 = 0x10;
    pub const FILTER_IN7: u8 = 0x12;
    pub const FILTER_IN8: u8 = 0x14;
    /// Device configuration.
    pub const CONFIG: u8 = 0x18;
    /// Input enable mask, one bit per channel.
    pub const INPUT_EN: u8 = 0x1A;
    /// Secondary fault flags. Clear-on-read.
    pub const FAULT2: u8 = 0x1C;
    /// Selects which FAULT2 conditions assert the FAULT pin.
    pub const FAULT2EN: u8 = 0x1E;
    /// General purpose output.
    pub const GPO: u8 = 0x22;
    /// Selects which FAULT1 conditions assert the FAULT pin.
    pub const FAULT1EN: u8 = 0x24;
    /// No-operation register; written to refresh the returned status bytes.
    pub const NOP: u8 = 0x26;

    /// Address distance between consecutive per-input filter registers.
    pub const FILTER_STRIDE: u8 = 2;
}

// --- FAULT1 Register Bits ---
pub mod fault1 {
    /// CRC error on a received frame. Cleared by a correct SPI transaction.
    pub const CRC: u8 = 0x80;
    /// Power-on reset occurred, register map was reset.
    pub const POR: u8 = 0x40;
    /// One or more FAULT2 bits are active.
    pub const FAULT2: u8 = 0x20;
    /// Overtemperature alarm 2.
    pub const ALRM2: u8 = 0x10;
    /// Overtemperature alarm 1.
    pub const ALRM1: u8 = 0x08;
    /// VDD24 low voltage alarm.
    pub const VDD24_LOW: u8 = 0x04;
    /// VDD24 voltage missing alarm.
    pub const VDD24_MISSING: u8 = 0x02;
    /// Wire-break detected on at least one enabled input.
    pub const WBG: u8 = 0x01;
}

// --- FAULT2 Register Bits ---
pub mod fault2 {
    /// SPI clock count was not a multiple of 8; command rejected.
    pub const FAULT8CK: u8 = 0x20;
    /// Overtemperature shutdown.
    pub const OTSHDN: u8 = 0x10;
    /// Open condition on the REFDI pin.
    pub const RFDIO: u8 = 0x08;
    /// Short condition on the REFDI pin.
    pub const RFDIS: u8 = 0x04;
    /// Open condition on the REFWB pin.
    pub const RFWBO: u8 = 0x02;
    /// Short condition on the REFWB pin.
    pub const RFWBS: u8 = 0x01;
}

// --- CONFIG Register Bits ---
pub mod config {
    /// Extended VDD24 undervoltage filtering.
    pub const VDD24_FILTER: u8 = 0x10;
    /// Clear the input filters on a fault condition.
    pub const CLEAR_FILTER: u8 = 0x08;
    /// REFDI input shorted externally.
    pub const REFDI_SHORTED: u8 = 0x01;
}

// --- Per-Input Filter Register Bits ---
pub mod filter {
    /// Enable wire-break detection for the channel.
    pub const WIREBREAK_EN: u8 = 0x10;
    /// Bypass the debounce filter for the channel.
    pub const BYPASS: u8 = 0x08;
    /// Mask selecting the 3-bit debounce delay code.
    pub const DELAY_MASK: u8 = 0x07;
}

/// FAULT1EN value programmed by `init`: report CRC and power-on-reset faults.
pub const FAULT1EN_DEFAULT: u8 = fault1::CRC | fault1::POR;
/// INPUT_EN value programmed by `init`: all eight channels enabled.
pub const INPUT_EN_ALL: u8 = 0xFF;
