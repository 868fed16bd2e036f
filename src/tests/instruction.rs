use crate::bit_modify::BitModify;
use crate::commands::{BufferStart, EncodingError, RequestToSend};
use crate::fields::CanctrlBit;
use crate::instruction::Instruction;
use crate::registers::{Register, RxBuffer, TxBuffer};
use bytes::Bytes;

#[test]
fn test_reset() {
    assert_eq!(&[0xC0], Instruction::Reset.encode().unwrap().as_ref());
    assert_eq!(1, Instruction::Reset.len());
}

#[test]
fn test_read() {
    let read = Instruction::read(Register::CANSTAT);

    assert_eq!(&[0x03, 0x0E, 0x00], read.encode().unwrap().as_ref());
    assert_eq!(2, read.header_len());
    assert_eq!(3, read.len());
}

#[test]
fn test_read_sequential() {
    let read = Instruction::Read {
        start: Register::CNF3,
        len: 3,
    };

    assert_eq!(&[0x03, 0x28, 0x00, 0x00, 0x00], read.encode().unwrap().as_ref());
}

#[test]
fn test_read_range() {
    let last = Instruction::Read {
        start: Register::RXB1D7,
        len: 3,
    };
    assert!(last.encode().is_ok());

    let beyond = Instruction::Read {
        start: Register::RXB1D7,
        len: 4,
    };
    assert_eq!(
        Err(EncodingError::TransferOutOfRange { start: 0x7D, len: 4 }),
        beyond.encode()
    );

    let empty = Instruction::Read {
        start: Register::CANCTRL,
        len: 0,
    };
    assert_eq!(
        Err(EncodingError::TransferOutOfRange { start: 0x0F, len: 0 }),
        empty.encode()
    );
}

#[test]
fn test_write() {
    assert_eq!(
        &[0x02, 0x2B, 0xA3],
        Instruction::write(Register::CANINTE, 0xA3).encode().unwrap().as_ref()
    );

    let write = Instruction::Write {
        start: Register::CNF3,
        data: Bytes::from_static(&[0x03, 0xAC, 0x00]),
    };
    assert_eq!(&[0x02, 0x28, 0x03, 0xAC, 0x00], write.encode().unwrap().as_ref());
    assert_eq!(5, write.len());
}

#[test]
fn test_write_empty() {
    let write = Instruction::Write {
        start: Register::CNF3,
        data: Bytes::new(),
    };

    assert_eq!(
        Err(EncodingError::TransferOutOfRange { start: 0x28, len: 0 }),
        write.encode()
    );
}

#[test]
fn test_read_rx_buffer() {
    let read = Instruction::ReadRxBuffer {
        buffer: RxBuffer::RXB1,
        start: BufferStart::Data,
        len: 2,
    };

    assert_eq!(&[0x96, 0x00, 0x00], read.encode().unwrap().as_ref());
    assert_eq!(1, read.header_len());

    let too_long = Instruction::ReadRxBuffer {
        buffer: RxBuffer::RXB0,
        start: BufferStart::Data,
        len: 9,
    };
    assert_eq!(
        Err(EncodingError::TransferOutOfRange { start: 0x66, len: 9 }),
        too_long.encode()
    );
}

#[test]
fn test_load_tx_buffer() {
    let load = Instruction::LoadTxBuffer {
        buffer: TxBuffer::TXB1,
        start: BufferStart::Data,
        data: Bytes::from_static(&[0x11, 0x22]),
    };
    assert_eq!(&[0x43, 0x11, 0x22], load.encode().unwrap().as_ref());

    let full = Instruction::LoadTxBuffer {
        buffer: TxBuffer::TXB0,
        start: BufferStart::Header,
        data: Bytes::from_static(&[0u8; 13]),
    };
    assert_eq!(14, full.encode().unwrap().len());

    let too_long = Instruction::LoadTxBuffer {
        buffer: TxBuffer::TXB2,
        start: BufferStart::Header,
        data: Bytes::from_static(&[0u8; 14]),
    };
    assert_eq!(
        Err(EncodingError::TransferOutOfRange { start: 0x51, len: 14 }),
        too_long.encode()
    );
}

#[test]
fn test_request_to_send() {
    let rts = Instruction::from(RequestToSend::from_buffers([TxBuffer::TXB0, TxBuffer::TXB2]));

    assert_eq!(&[0x85], rts.encode().unwrap().as_ref());
}

#[test]
fn test_status_instructions() {
    assert_eq!(&[0xA0, 0x00], Instruction::ReadStatus.encode().unwrap().as_ref());
    assert_eq!(&[0xB0, 0x00], Instruction::RxStatus.encode().unwrap().as_ref());
    assert_eq!(1, Instruction::RxStatus.header_len());
}

#[test]
fn test_bit_modify() {
    let modify = BitModify::fields((), &[(CanctrlBit::ABAT, true)]).unwrap();
    let instruction = Instruction::from(modify);

    assert_eq!(&modify.encode(), instruction.encode().unwrap().as_ref());
    assert_eq!(4, instruction.header_len());
    assert_eq!(4, instruction.len());
}
