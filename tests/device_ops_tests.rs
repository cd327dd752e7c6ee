//! Logical-operation tests: init, input refresh, filter programming, and
//! fault retrieval, each checked against the exact wire traffic it must
//! produce.

use max22190_spi::{
    frame_crc, CrcMode, ErrorFlags, FilterDelay, Input, InputFilter, InputSet, Max22190,
    Transport, TransportError,
};
use std::collections::VecDeque;

/// Minimal scripted transport: plays back queued responses (an empty entry,
/// or an exhausted queue, leaves the echoed TX bytes) and records TX frames.
#[derive(Debug, Default)]
struct ScriptedLink {
    fail_exchange: bool,
    responses: VecDeque<Vec<u8>>,
    sent: Vec<Vec<u8>>,
}

impl ScriptedLink {
    fn new() -> Self {
        Self::default()
    }

    fn push_response(&mut self, bytes: &[u8]) {
        self.responses.push_back(bytes.to_vec());
    }

    fn push_echoes(&mut self, count: usize) {
        for _ in 0..count {
            self.responses.push_back(Vec::new());
        }
    }

    fn checked(b0: u8, b1: u8) -> [u8; 3] {
        let mut frame = [b0, b1, 0x00];
        frame[2] = frame_crc(&frame);
        frame
    }
}

impl Transport for ScriptedLink {
    fn acquire(&mut self) -> Result<(), TransportError> {
        Ok(())
    }

    fn exchange(&mut self, _chip_address: u8, frame: &mut [u8]) -> Result<(), TransportError> {
        self.sent.push(frame.to_vec());
        if let Some(response) = self.responses.pop_front() {
            if !response.is_empty() {
                assert_eq!(response.len(), frame.len(), "scripted response length");
                frame.copy_from_slice(&response);
            }
        }
        if self.fail_exchange {
            Err(TransportError)
        } else {
            Ok(())
        }
    }

    fn release(&mut self) -> Result<(), TransportError> {
        Ok(())
    }
}

#[test]
fn test_init_with_por_set_skips_configuration() {
    let mut link = ScriptedLink::new();
    link.push_response(&[0x00, 0x40]); // FAULT1: POR flag set
    link.push_response(&[0x00, 0xC0]); // FAULT1EN read-back
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    assert!(din.init().is_ok());

    drop(din);
    assert_eq!(
        link.sent,
        [[0x04, 0x00], [0x24, 0x00]],
        "a device still showing POR must be left unconfigured"
    );
}

#[test]
fn test_init_with_por_clear_programs_defaults() {
    let mut link = ScriptedLink::new();
    link.push_response(&[0x00, 0x00]); // FAULT1: POR flag clear
    link.push_echoes(12); // the configuration writes
    link.push_response(&[0x00, 0xC0]); // FAULT1EN read-back
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    assert!(din.init().is_ok());

    drop(din);
    let expected: Vec<Vec<u8>> = vec![
        vec![0x04, 0x00], // read FAULT1
        vec![0x80, 0x00], // clear wire-break latch
        vec![0x86, 0x08], // bypass filter IN1
        vec![0x88, 0x08],
        vec![0x8A, 0x08],
        vec![0x8C, 0x08],
        vec![0x8E, 0x08],
        vec![0x90, 0x08],
        vec![0x92, 0x08],
        vec![0x94, 0x08], // bypass filter IN8
        vec![0x9A, 0xFF], // enable all inputs
        vec![0xA4, 0xC0], // report CRC + POR faults
        vec![0x84, 0x00], // clear fault flags
        vec![0x24, 0x00], // read back FAULT1EN
    ];
    assert_eq!(link.sent, expected);
}

#[test]
fn test_init_read_back_mismatch_is_a_communication_error() {
    let mut link = ScriptedLink::new();
    link.push_response(&[0x00, 0x40]); // POR set, configuration skipped
    link.push_response(&[0x00, 0x00]); // read-back disagrees
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    assert_eq!(din.init(), ErrorFlags::COMM);
}

#[test]
fn test_init_with_crc_frames() {
    let mut link = ScriptedLink::new();
    link.push_response(&ScriptedLink::checked(0x00, 0x40));
    link.push_response(&ScriptedLink::checked(0x00, 0xC0));
    let mut din = Max22190::new(&mut link, CrcMode::Enabled);

    assert!(din.init().is_ok());

    drop(din);
    assert_eq!(link.sent.len(), 2);
    assert_eq!(link.sent[0].len(), 3, "checked transactions are 3 bytes");
}

#[test]
fn test_refresh_inputs_issues_a_nop_write() {
    let mut link = ScriptedLink::new();
    link.push_response(&[0x55, 0x0F]);
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    assert!(din.refresh_inputs().is_ok());

    assert_eq!(din.inputs(), 0x55);
    assert_eq!(din.wire_break(), 0x0F);
    assert!(din.input_high(Input::new(0).unwrap()));
    assert!(!din.input_high(Input::new(1).unwrap()));
    assert!(din.wire_break_detected(Input::new(3).unwrap()));
    assert!(!din.wire_break_detected(Input::new(4).unwrap()));
    drop(din);
    assert_eq!(link.sent, [[0xA6, 0x00]], "refresh is a write of 0 to NOP");
}

#[test]
fn test_set_input_filter_single_channel() {
    let mut link = ScriptedLink::new();
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    let channel = Input::new(3).unwrap();
    let filter = InputFilter::with_delay(FilterDelay::Ms3_2);
    assert!(din.set_input_filter(channel.into(), filter).is_ok());

    drop(din);
    assert_eq!(link.sent, [[0x8C, 0x05]]);
}

#[test]
fn test_set_input_filter_multiple_channels() {
    let mut link = ScriptedLink::new();
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    let channels = InputSet::from_bits(0b1000_0101); // IN1, IN3, IN8
    let filter = InputFilter::with_delay(FilterDelay::Ms12_8);
    assert!(din.set_input_filter(channels, filter).is_ok());

    drop(din);
    assert_eq!(
        link.sent,
        [[0x86, 0x06], [0x8A, 0x06], [0x94, 0x06]],
        "one write per set channel, each at base + 2 * index"
    );
}

#[test]
fn test_set_input_filter_empty_set_writes_nothing() {
    let mut link = ScriptedLink::new();
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    assert!(din
        .set_input_filter(InputSet::EMPTY, InputFilter::BYPASSED)
        .is_ok());

    drop(din);
    assert!(link.sent.is_empty());
}

#[test]
fn test_read_faults_combines_both_registers() {
    let mut link = ScriptedLink::new();
    link.push_response(&[0x00, 0x21]); // FAULT2 value
    link.push_response(&[0x00, 0x44]); // FAULT1 value
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    let faults = din.read_faults();

    assert!(din.last_error().is_ok());
    assert_eq!(
        faults.bits(),
        0x2144,
        "first read lands in the high byte, second in the low byte"
    );
    assert!(faults.spi_clock_fault());
    assert!(faults.ref_wb_short());
    assert!(faults.power_on_reset());
    assert!(faults.vdd24_low());
    assert!(!faults.wire_break_group());
    drop(din);
    assert_eq!(
        link.sent,
        [[0x1C, 0x00], [0x04, 0x00]],
        "FAULT2 must be read before FAULT1"
    );
}

#[test]
fn test_read_faults_reports_transport_trouble_separately() {
    let mut link = ScriptedLink::new();
    link.fail_exchange = true;
    let mut din = Max22190::new(&mut link, CrcMode::Disabled);

    let faults = din.read_faults();

    // The fault word itself is just the echoed zeros; the failure lives in
    // the sticky mask.
    assert!(!faults.any());
    assert_eq!(din.last_error(), ErrorFlags::COMM);
}
