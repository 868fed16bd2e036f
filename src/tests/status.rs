use crate::registers::{LookupError, RxBuffer, TxBuffer};
use crate::status::*;

#[test]
fn test_read_status_rx_flags() {
    let status = ReadStatus::from(0b0000_0011);

    assert!(status.rx0if());
    assert!(status.rx1if());
    assert!(status.rx_full(RxBuffer::RXB0));
    assert!(status.rx_full(RxBuffer::RXB1));
    assert!(!status.tx0req());
    assert!(!status.tx2if());
}

#[test]
fn test_read_status_tx2if() {
    let status = ReadStatus::from(0x80);

    assert!(status.tx2if());
    assert!(status.tx_empty_flag(TxBuffer::TXB2));
    assert!(StatusFlag::ALL
        .iter()
        .filter(|flag| **flag != StatusFlag::TX2IF)
        .all(|flag| !status.flag(*flag)));
}

#[test]
fn test_read_status_fields_match_flags() {
    for flag in StatusFlag::ALL {
        let status = ReadStatus::from(flag.mask());

        assert!(status.flag(flag));
        assert_eq!(flag == StatusFlag::RX0IF, status.rx0if());
        assert_eq!(flag == StatusFlag::RX1IF, status.rx1if());
        assert_eq!(flag == StatusFlag::TX0REQ, status.tx0req());
        assert_eq!(flag == StatusFlag::TX0IF, status.tx0if());
        assert_eq!(flag == StatusFlag::TX1REQ, status.tx1req());
        assert_eq!(flag == StatusFlag::TX1IF, status.tx1if());
        assert_eq!(flag == StatusFlag::TX2REQ, status.tx2req());
        assert_eq!(flag == StatusFlag::TX2IF, status.tx2if());
    }
}

#[test]
fn test_read_status_tx_pending() {
    let status = ReadStatus::from(0b0101_0100);

    assert!(status.tx_pending(TxBuffer::TXB0));
    assert!(status.tx_pending(TxBuffer::TXB1));
    assert!(status.tx_pending(TxBuffer::TXB2));
    assert!(!status.tx_empty_flag(TxBuffer::TXB0));
}

#[test]
fn test_status_flag_names() {
    for flag in StatusFlag::ALL {
        assert_eq!(Ok(flag), StatusFlag::from_name(flag.name()));
        assert_eq!(1 << flag.position(), flag.mask());
    }

    assert_eq!(Ok(StatusFlag::TX1REQ), "TX1REQ".parse());
    assert_eq!(Err(LookupError::UnknownStatusFlag), StatusFlag::from_name("TX3IF"));
}

#[test]
fn test_rx_status() {
    let status = RxStatus::from(0b0101_1011);

    assert_eq!(ReceivedMessage::Rxb0, status.received());
    assert_eq!(FrameKind::ExtendedRemote, status.frame_kind());
    assert_eq!(FilterMatch::RXF3, status.filter_match());

    let status = RxStatus::from(0b1100_0110);

    assert_eq!(ReceivedMessage::Both, status.received());
    assert_eq!(FrameKind::StandardData, status.frame_kind());
    assert_eq!(FilterMatch::RXF0Rollover, status.filter_match());

    assert_eq!(ReceivedMessage::Empty, RxStatus::from(0x00).received());
}

#[test]
fn test_can_status() {
    let status = CanStatus::from_register(0b1000_1100);

    assert_eq!(Some(OperationMode::Configuration), status.mode);
    assert_eq!(InterruptCode::Rxb0, status.interrupt);

    let status = CanStatus::from_register(0b0100_0010);

    assert_eq!(Some(OperationMode::Loopback), status.mode);
    assert_eq!(InterruptCode::Error, status.interrupt);

    assert_eq!(None, CanStatus::from_register(0b1110_0000).mode);
}

#[test]
fn test_operation_mode() {
    assert_eq!(Some(OperationMode::Normal), OperationMode::from_register(0x00));
    assert_eq!(Some(OperationMode::Sleep), OperationMode::from_register(0x20));
    assert_eq!(Some(OperationMode::ListenOnly), OperationMode::from_register(0x7F));
    assert_eq!(None, OperationMode::from_register(0xA0));
    assert_eq!(0b100, OperationMode::Configuration.bits());
}

#[test]
fn test_error_counters() {
    let counters = ErrorCounters::from_registers([95, 10]);
    assert!(!counters.is_warning());

    let counters = ErrorCounters::from_registers([10, 96]);
    assert!(counters.is_warning());
    assert!(!counters.is_error_passive());

    let counters = ErrorCounters::from_registers([128, 0]);
    assert_eq!(128, counters.transmit);
    assert!(counters.is_error_passive());
}
