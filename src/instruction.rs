//!# Instructions
//! Complete SPI instructions including operands. [Instruction::encode] returns the byte sequence
//! clocked out while chip select is asserted. Bytes of response phases are sent as zero and are
//! overwritten by the chip during a full-duplex transfer.
//!
//! ```
//!# use mcp2515::instruction::Instruction;
//!# use mcp2515::registers::Register;
//! let read = Instruction::Read { start: Register::TEC, len: 2 };
//!
//! assert_eq!(&[0x03, 0x1C, 0x00, 0x00], read.encode().unwrap().as_ref());
//! assert_eq!(2, read.header_len());
//! ```
use crate::bit_modify::BitModify;
use crate::commands::{BufferStart, Command, DiscreteCommand, EncodingError, RequestToSend};
use crate::registers::{Register, RxBuffer, TxBuffer};
use bytes::{BufMut, Bytes, BytesMut};
use log::debug;

/// SPI instruction with operands
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Instruction {
    /// Resets the chip into configuration mode
    Reset,
    /// Sequential read of `len` registers
    Read { start: Register, len: usize },
    /// Read of a receive buffer, clears the corresponding RXnIF flag
    ReadRxBuffer {
        buffer: RxBuffer,
        start: BufferStart,
        len: usize,
    },
    /// Sequential write starting at the given register
    Write { start: Register, data: Bytes },
    /// Load of a transmit buffer
    LoadTxBuffer {
        buffer: TxBuffer,
        start: BufferStart,
        data: Bytes,
    },
    /// Initiates transmission of the selected buffers
    RequestToSend(RequestToSend),
    /// Reads the READ STATUS byte
    ReadStatus,
    /// Reads the RX STATUS byte
    RxStatus,
    /// Masked update of a single register
    BitModify(BitModify),
}

impl Instruction {
    /// Read of a single register
    pub fn read(register: Register) -> Self {
        Self::Read {
            start: register,
            len: 1,
        }
    }

    /// Write of a single register
    pub fn write(register: Register, value: u8) -> Self {
        Self::Write {
            start: register,
            data: Bytes::copy_from_slice(&[value]),
        }
    }

    /// First byte of the instruction
    pub fn opcode(&self) -> u8 {
        match self {
            Self::Reset => Command::Reset.opcode(),
            Self::Read { .. } => Command::Read.opcode(),
            Self::ReadRxBuffer { buffer, start, .. } => DiscreteCommand::ReadRx {
                buffer: *buffer,
                start: *start,
            }
            .opcode(),
            Self::Write { .. } => Command::Write.opcode(),
            Self::LoadTxBuffer { buffer, start, .. } => DiscreteCommand::WriteTx {
                buffer: *buffer,
                start: *start,
            }
            .opcode(),
            Self::RequestToSend(rts) => rts.opcode(),
            Self::ReadStatus => Command::ReadStatus.opcode(),
            Self::RxStatus => Command::RxStatus.opcode(),
            Self::BitModify(_) => Command::BitModify.opcode(),
        }
    }

    /// Number of bytes preceding the data or response phase
    pub fn header_len(&self) -> usize {
        match self {
            Self::Read { .. } | Self::Write { .. } => 2,
            Self::BitModify(_) => 4,
            _ => 1,
        }
    }

    /// Total number of bytes exchanged
    pub fn len(&self) -> usize {
        match self {
            Self::Read { len, .. } | Self::ReadRxBuffer { len, .. } => self.header_len() + len,
            Self::Write { data, .. } | Self::LoadTxBuffer { data, .. } => self.header_len() + data.len(),
            Self::ReadStatus | Self::RxStatus => 2,
            _ => self.header_len(),
        }
    }

    /// Always false, every instruction has at least an opcode
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checks that sequential transfers are not empty and stay inside the register space or buffer
    pub fn validate(&self) -> Result<(), EncodingError> {
        match self {
            Self::Read { start, len } => Self::verify_range(*start, *len),
            Self::Write { start, data } => Self::verify_range(*start, data.len()),
            Self::ReadRxBuffer { buffer, start, len } => Self::verify_buffer(
                DiscreteCommand::ReadRx {
                    buffer: *buffer,
                    start: *start,
                },
                *len,
            ),
            Self::LoadTxBuffer { buffer, start, data } => Self::verify_buffer(
                DiscreteCommand::WriteTx {
                    buffer: *buffer,
                    start: *start,
                },
                data.len(),
            ),
            _ => Ok(()),
        }
    }

    /// Encodes the instruction, response bytes are filled with zeros
    pub fn encode(&self) -> Result<BytesMut, EncodingError> {
        self.validate()?;

        let mut buffer = BytesMut::with_capacity(self.len());
        buffer.put_u8(self.opcode());

        match self {
            Self::Read { start, len } => {
                buffer.put_u8(start.address());
                buffer.put_bytes(0, *len);
            }
            Self::ReadRxBuffer { len, .. } => buffer.put_bytes(0, *len),
            Self::Write { start, data } => {
                buffer.put_u8(start.address());
                buffer.put_slice(data);
            }
            Self::LoadTxBuffer { data, .. } => buffer.put_slice(data),
            Self::ReadStatus | Self::RxStatus => buffer.put_u8(0),
            Self::BitModify(modify) => buffer.put_slice(&modify.encode()[1..]),
            Self::Reset | Self::RequestToSend(_) => {}
        }

        Ok(buffer)
    }

    fn verify_range(start: Register, len: usize) -> Result<(), EncodingError> {
        if len == 0 || start.address() as usize + len > Register::ADDRESS_SPACE {
            debug!("Transfer of {len} bytes at {} exceeds register space", start.name());
            return Err(EncodingError::TransferOutOfRange {
                start: start.address(),
                len,
            });
        }

        Ok(())
    }

    fn verify_buffer(command: DiscreteCommand, len: usize) -> Result<(), EncodingError> {
        if len == 0 || len > command.start().capacity() {
            let start = command.first_register();
            debug!("Transfer of {len} bytes at {} exceeds buffer", start.name());

            return Err(EncodingError::TransferOutOfRange {
                start: start.address(),
                len,
            });
        }

        Ok(())
    }
}

impl From<BitModify> for Instruction {
    fn from(modify: BitModify) -> Self {
        Self::BitModify(modify)
    }
}

impl From<RequestToSend> for Instruction {
    fn from(rts: RequestToSend) -> Self {
        Self::RequestToSend(rts)
    }
}
