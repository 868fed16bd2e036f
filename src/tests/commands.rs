use crate::commands::*;
use crate::registers::{LookupError, Register, RxBuffer, TxBuffer};

#[test]
fn test_command_opcodes() {
    assert_eq!(0xC0, Command::Reset.opcode());
    assert_eq!(0x03, Command::Read.opcode());
    assert_eq!(0x90, Command::ReadRx0.opcode());
    assert_eq!(0x94, Command::ReadRx1.opcode());
    assert_eq!(0x02, Command::Write.opcode());
    assert_eq!(0x40, Command::WriteTx.opcode());
    assert_eq!(0x80, Command::Rts.opcode());
    assert_eq!(0xA0, Command::ReadStatus.opcode());
    assert_eq!(0xB0, Command::RxStatus.opcode());
    assert_eq!(0x05, Command::BitModify.opcode());
}

#[test]
fn test_command_names() {
    for command in Command::ALL {
        assert_eq!(Ok(command), Command::from_name(command.name()));
    }

    assert_eq!(Ok(Command::RxStatus), "RX_STATUS".parse());
    assert_eq!(Err(LookupError::UnknownCommand), Command::from_name("LOAD_TX"));
}

#[test]
fn test_read_rx_opcodes() {
    let opcode = |buffer, start| DiscreteCommand::ReadRx { buffer, start }.opcode();

    assert_eq!(0x90, opcode(RxBuffer::RXB0, BufferStart::Header));
    assert_eq!(0x92, opcode(RxBuffer::RXB0, BufferStart::Data));
    assert_eq!(0x94, opcode(RxBuffer::RXB1, BufferStart::Header));
    assert_eq!(0x96, opcode(RxBuffer::RXB1, BufferStart::Data));
    assert_eq!(0x94, DiscreteCommand::read_rx(RxBuffer::RXB1).opcode());
}

#[test]
fn test_write_tx_opcodes() {
    let opcode = |buffer, start| DiscreteCommand::WriteTx { buffer, start }.opcode();

    assert_eq!(0x40, opcode(TxBuffer::TXB0, BufferStart::Header));
    assert_eq!(0x41, opcode(TxBuffer::TXB0, BufferStart::Data));
    assert_eq!(0x42, opcode(TxBuffer::TXB1, BufferStart::Header));
    assert_eq!(0x43, opcode(TxBuffer::TXB1, BufferStart::Data));
    assert_eq!(0x44, opcode(TxBuffer::TXB2, BufferStart::Header));
    assert_eq!(0x45, opcode(TxBuffer::TXB2, BufferStart::Data));
    assert_eq!(0x44, DiscreteCommand::write_tx(TxBuffer::TXB2).opcode());
}

#[test]
fn test_discrete_command_first_register() {
    assert_eq!(Register::RXB1SIDH, DiscreteCommand::read_rx(RxBuffer::RXB1).first_register());
    assert_eq!(
        Register::TXB1D0,
        DiscreteCommand::WriteTx {
            buffer: TxBuffer::TXB1,
            start: BufferStart::Data,
        }
        .first_register()
    );
    assert_eq!(BufferStart::Header, DiscreteCommand::write_tx(TxBuffer::TXB0).start());
}

#[test]
fn test_buffer_start_capacity() {
    assert_eq!(13, BufferStart::Header.capacity());
    assert_eq!(8, BufferStart::Data.capacity());
}

#[test]
fn test_rts_opcode() {
    assert_eq!(0x81, RequestToSend::buffer(TxBuffer::TXB0).opcode());
    assert_eq!(0x82, RequestToSend::buffer(TxBuffer::TXB1).opcode());
    assert_eq!(0x84, RequestToSend::buffer(TxBuffer::TXB2).opcode());
    assert_eq!(0x87, RequestToSend::from_buffers(TxBuffer::ALL).opcode());
}

#[test]
fn test_rts_order_and_duplicates_irrelevant() {
    let forward = RequestToSend::from_buffers([TxBuffer::TXB0, TxBuffer::TXB2]);
    let reverse = RequestToSend::from_buffers([TxBuffer::TXB2, TxBuffer::TXB0, TxBuffer::TXB2]);

    assert_eq!(0x85, forward.opcode());
    assert_eq!(forward, reverse);
    assert!(forward.contains(TxBuffer::TXB2));
    assert!(!forward.contains(TxBuffer::TXB1));
}

#[test]
fn test_rts_empty() {
    let rts = RequestToSend::from_buffers([]);

    assert!(rts.is_empty());
    assert_eq!(0x80, rts.opcode());
    assert_eq!(Ok(rts), RequestToSend::from_mask(0));
}

#[test]
fn test_rts_mask() {
    assert_eq!(0b101, RequestToSend::from_mask(0b101).unwrap().mask());
    assert_eq!(Err(EncodingError::RtsMaskOutOfRange(0x08)), RequestToSend::from_mask(0x08));
    assert_eq!(Err(EncodingError::RtsMaskOutOfRange(0xFF)), RequestToSend::from_mask(0xFF));
}
