//! Decoded fault status.

use crate::consts::{fault1, fault2};
use std::fmt;

/// Snapshot of both fault registers as one 16-bit word.
///
/// The FAULT2 register value occupies the high byte and FAULT1 the low byte,
/// so the raw bits line up with the chip's register map. Most bits are
/// clear-on-read in hardware: reading faults consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Faults(pub(crate) u16);

impl Faults {
    /// Builds the fault word from the two register values.
    #[inline]
    pub(crate) fn from_registers(fault2: u8, fault1: u8) -> Self {
        Faults((u16::from(fault2) << 8) | u16::from(fault1))
    }

    /// Returns the raw 16-bit fault word (FAULT2 high byte, FAULT1 low byte).
    #[inline]
    pub fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if any fault bit is set.
    #[inline]
    pub fn any(self) -> bool {
        self.0 != 0
    }

    #[inline]
    fn f1(self, bit: u8) -> bool {
        self.0 & u16::from(bit) != 0
    }

    #[inline]
    fn f2(self, bit: u8) -> bool {
        self.0 & (u16::from(bit) << 8) != 0
    }

    /// Wire-break detected on at least one enabled channel.
    pub fn wire_break_group(self) -> bool {
        self.f1(fault1::WBG)
    }

    /// 24 V field supply missing.
    pub fn vdd24_missing(self) -> bool {
        self.f1(fault1::VDD24_MISSING)
    }

    /// 24 V field supply under voltage.
    pub fn vdd24_low(self) -> bool {
        self.f1(fault1::VDD24_LOW)
    }

    /// Overtemperature alarm 1.
    pub fn thermal_alarm_1(self) -> bool {
        self.f1(fault1::ALRM1)
    }

    /// Overtemperature alarm 2.
    pub fn thermal_alarm_2(self) -> bool {
        self.f1(fault1::ALRM2)
    }

    /// One or more FAULT2 conditions are pending.
    pub fn fault2_pending(self) -> bool {
        self.f1(fault1::FAULT2)
    }

    /// Power-on reset occurred; the register map was reset to defaults.
    pub fn power_on_reset(self) -> bool {
        self.f1(fault1::POR)
    }

    /// The chip rejected a frame with a bad CRC.
    pub fn crc_error(self) -> bool {
        self.f1(fault1::CRC)
    }

    /// Short condition on the REFWB pin.
    pub fn ref_wb_short(self) -> bool {
        self.f2(fault2::RFWBS)
    }

    /// Open condition on the REFWB pin.
    pub fn ref_wb_open(self) -> bool {
        self.f2(fault2::RFWBO)
    }

    /// Short condition on the REFDI pin.
    pub fn ref_di_short(self) -> bool {
        self.f2(fault2::RFDIS)
    }

    /// Open condition on the REFDI pin.
    pub fn ref_di_open(self) -> bool {
        self.f2(fault2::RFDIO)
    }

    /// Overtemperature shutdown.
    pub fn thermal_shutdown(self) -> bool {
        self.f2(fault2::OTSHDN)
    }

    /// SPI clock count was not a multiple of 8; the command was rejected.
    pub fn spi_clock_fault(self) -> bool {
        self.f2(fault2::FAULT8CK)
    }
}

impl fmt::Display for Faults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.any() {
            return write!(f, "no faults");
        }
        let names = [
            (self.wire_break_group(), "wire-break"),
            (self.vdd24_missing(), "vdd24-missing"),
            (self.vdd24_low(), "vdd24-low"),
            (self.thermal_alarm_1(), "thermal-alarm-1"),
            (self.thermal_alarm_2(), "thermal-alarm-2"),
            (self.fault2_pending(), "fault2-pending"),
            (self.power_on_reset(), "power-on-reset"),
            (self.crc_error(), "crc-error"),
            (self.ref_wb_short(), "refwb-short"),
            (self.ref_wb_open(), "refwb-open"),
            (self.ref_di_short(), "refdi-short"),
            (self.ref_di_open(), "refdi-open"),
            (self.thermal_shutdown(), "thermal-shutdown"),
            (self.spi_clock_fault(), "spi-clock-fault"),
        ];
        let mut sep = "";
        for (active, name) in names {
            if active {
                write!(f, "{sep}{name}")?;
                sep = ", ";
            }
        }
        Ok(())
    }
}
