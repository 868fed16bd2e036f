//!# SPI commands
//! The MCP2515 instruction set consists of fixed opcodes ([Command]), opcodes selected per
//! receive/transmit buffer ([DiscreteCommand]) and the request-to-send opcode carrying a
//! buffer bitmask in its low bits ([RequestToSend]).
//!
//! ```
//!# use mcp2515::commands::{Command, RequestToSend};
//!# use mcp2515::registers::TxBuffer;
//! assert_eq!(0xC0, Command::Reset.opcode());
//!
//! let rts = RequestToSend::from_buffers([TxBuffer::TXB2, TxBuffer::TXB0]);
//! assert_eq!(0x85, rts.opcode());
//!
//! assert!(RequestToSend::from_mask(0x08).is_err());
//! ```
use crate::registers::{LookupError, Register, RxBuffer, TxBuffer};
use core::str::FromStr;
use log::debug;

/// Possible errors when encoding an instruction
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EncodingError {
    /// Buffer index does not name an existing transmit/receive buffer
    BufferIndexOutOfRange(u8),
    /// Acceptance filter index above 5
    FilterIndexOutOfRange(u8),
    /// Acceptance mask index above 1
    MaskIndexOutOfRange(u8),
    /// RTS mask with bits above bit 2 set
    RtsMaskOutOfRange(u8),
    /// Bits (as mask) requested to be set and cleared at the same time
    ConflictingBits(u8),
    /// Register does not support the BIT MODIFY instruction
    BitModifyNotSupported(Register),
    /// Value does not fit into a field group of the given width
    ValueOutOfRange { value: u8, bits: u8 },
    /// Sequential transfer is empty or exceeds the register space/buffer
    TransferOutOfRange { start: u8, len: usize },
}

/// SPI instruction opcodes
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Command {
    /// Resets internal registers to the default state, enters configuration mode
    Reset = 0xC0,
    /// Reads data starting at the selected address
    Read = 0x03,
    /// Reads receive buffer 0 starting at RXB0SIDH
    ReadRx0 = 0x90,
    /// Reads receive buffer 1 starting at RXB1SIDH
    ReadRx1 = 0x94,
    /// Writes data starting at the selected address
    Write = 0x02,
    /// Loads transmit buffer 0 starting at TXB0SIDH
    WriteTx = 0x40,
    /// Request-to-send base opcode, low three bits select the buffers
    Rts = 0x80,
    /// Quick polling of receive/transmit status bits
    ReadStatus = 0xA0,
    /// Filter match and message type of received frames
    RxStatus = 0xB0,
    /// Sets or clears individual bits of a register
    BitModify = 0x05,
}

impl Command {
    pub const ALL: [Command; 10] = [
        Self::Reset,
        Self::Read,
        Self::ReadRx0,
        Self::ReadRx1,
        Self::Write,
        Self::WriteTx,
        Self::Rts,
        Self::ReadStatus,
        Self::RxStatus,
        Self::BitModify,
    ];

    /// Opcode byte as sent on the bus
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    /// Symbolic command name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Reset => "RESET",
            Self::Read => "READ",
            Self::ReadRx0 => "READ_RX0",
            Self::ReadRx1 => "READ_RX1",
            Self::Write => "WRITE",
            Self::WriteTx => "WRITE_TX",
            Self::Rts => "RTS",
            Self::ReadStatus => "READ_STATUS",
            Self::RxStatus => "RX_STATUS",
            Self::BitModify => "BIT_MODIFY",
        }
    }

    /// Resolves a symbolic command name
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match Self::ALL.iter().find(|command| command.name() == name) {
            Some(command) => Ok(*command),
            None => {
                debug!("Unknown command name: {name}");
                Err(LookupError::UnknownCommand)
            }
        }
    }
}

impl FromStr for Command {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

/// Start of a buffer access
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum BufferStart {
    /// Starts at the SIDH register, covering identifier, DLC and data (13 bytes)
    #[default]
    Header,
    /// Starts at the D0 register, covering data only (8 bytes)
    Data,
}

impl BufferStart {
    /// Number of bytes which may be transferred from this start point
    pub const fn capacity(self) -> usize {
        match self {
            Self::Header => 13,
            Self::Data => 8,
        }
    }
}

/// Buffer access with a distinct opcode per buffer and start point
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum DiscreteCommand {
    /// READ RX BUFFER
    ReadRx { buffer: RxBuffer, start: BufferStart },
    /// LOAD TX BUFFER
    WriteTx { buffer: TxBuffer, start: BufferStart },
}

impl DiscreteCommand {
    /// Read of the complete receive buffer image
    pub const fn read_rx(buffer: RxBuffer) -> Self {
        Self::ReadRx {
            buffer,
            start: BufferStart::Header,
        }
    }

    /// Load of the complete transmit buffer image
    pub const fn write_tx(buffer: TxBuffer) -> Self {
        Self::WriteTx {
            buffer,
            start: BufferStart::Header,
        }
    }

    pub const fn opcode(self) -> u8 {
        match self {
            Self::ReadRx {
                buffer: RxBuffer::RXB0,
                start: BufferStart::Header,
            } => Command::ReadRx0.opcode(),
            Self::ReadRx {
                buffer: RxBuffer::RXB0,
                start: BufferStart::Data,
            } => 0x92,
            Self::ReadRx {
                buffer: RxBuffer::RXB1,
                start: BufferStart::Header,
            } => Command::ReadRx1.opcode(),
            Self::ReadRx {
                buffer: RxBuffer::RXB1,
                start: BufferStart::Data,
            } => 0x96,
            Self::WriteTx {
                buffer: TxBuffer::TXB0,
                start: BufferStart::Header,
            } => Command::WriteTx.opcode(),
            Self::WriteTx {
                buffer: TxBuffer::TXB0,
                start: BufferStart::Data,
            } => 0x41,
            Self::WriteTx {
                buffer: TxBuffer::TXB1,
                start: BufferStart::Header,
            } => 0x42,
            Self::WriteTx {
                buffer: TxBuffer::TXB1,
                start: BufferStart::Data,
            } => 0x43,
            Self::WriteTx {
                buffer: TxBuffer::TXB2,
                start: BufferStart::Header,
            } => 0x44,
            Self::WriteTx {
                buffer: TxBuffer::TXB2,
                start: BufferStart::Data,
            } => 0x45,
        }
    }

    /// First register covered by the access
    pub const fn first_register(self) -> Register {
        match self {
            Self::ReadRx {
                buffer,
                start: BufferStart::Header,
            } => buffer.sidh(),
            Self::ReadRx {
                buffer,
                start: BufferStart::Data,
            } => buffer.d0(),
            Self::WriteTx {
                buffer,
                start: BufferStart::Header,
            } => buffer.sidh(),
            Self::WriteTx {
                buffer,
                start: BufferStart::Data,
            } => buffer.d0(),
        }
    }

    /// Start point of the access
    pub const fn start(self) -> BufferStart {
        match self {
            Self::ReadRx { start, .. } | Self::WriteTx { start, .. } => start,
        }
    }
}

/// Request-to-send command, initiates transmission of one or more transmit buffers
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub struct RequestToSend {
    mask: u8,
}

impl RequestToSend {
    /// Bits of the opcode available for buffer selection
    pub const BUFFER_MASK: u8 = 0b111;

    /// Creates the command from a raw buffer mask (bit n => TXBn)
    pub fn from_mask(mask: u8) -> Result<Self, EncodingError> {
        if mask & !Self::BUFFER_MASK != 0 {
            debug!("RTS mask {mask:#04x} selects non-existent transmit buffers");
            return Err(EncodingError::RtsMaskOutOfRange(mask));
        }

        Ok(Self { mask })
    }

    /// Request for a single buffer
    pub const fn buffer(buffer: TxBuffer) -> Self {
        Self {
            mask: 1 << buffer as u8,
        }
    }

    /// Request for all given buffers, order and duplicates are irrelevant
    pub fn from_buffers<I: IntoIterator<Item = TxBuffer>>(buffers: I) -> Self {
        buffers.into_iter().fold(Self::default(), Self::with)
    }

    /// Adds a buffer to the request
    pub const fn with(self, buffer: TxBuffer) -> Self {
        Self {
            mask: self.mask | (1 << buffer as u8),
        }
    }

    /// True if transmission of the given buffer is requested
    pub const fn contains(&self, buffer: TxBuffer) -> bool {
        self.mask & (1 << buffer as u8) != 0
    }

    /// True if no buffer is selected
    pub const fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Buffer selection bits
    pub const fn mask(&self) -> u8 {
        self.mask
    }

    pub const fn opcode(&self) -> u8 {
        Command::Rts.opcode() | self.mask
    }
}
