//!# Status decoding
//! Decoding of the READ STATUS and RX STATUS responses and of the CANSTAT register.
//! Decoding is total, every byte value is a valid snapshot.
//!
//! ```
//!# use mcp2515::status::{ReadStatus, StatusFlag};
//!# use mcp2515::registers::RxBuffer;
//! let status = ReadStatus::from(0b0000_0011);
//!
//! assert!(status.rx0if());
//! assert!(status.rx_full(RxBuffer::RXB1));
//! assert!(!status.flag(StatusFlag::TX0REQ));
//! ```
#![allow(unused_braces, unused_parens)]
use crate::registers::{LookupError, RxBuffer, TxBuffer};
use core::str::FromStr;
use log::debug;
use modular_bitfield_msb::prelude::*;
use serde::{Deserialize, Serialize};

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Response byte of the READ STATUS instruction
pub struct ReadStatus {
    /// CANINTF.TX2IF
    pub tx2if: bool,
    /// TXB2CTRL.TXREQ
    pub tx2req: bool,
    /// CANINTF.TX1IF
    pub tx1if: bool,
    /// TXB1CTRL.TXREQ
    pub tx1req: bool,
    /// CANINTF.TX0IF
    pub tx0if: bool,
    /// TXB0CTRL.TXREQ
    pub tx0req: bool,
    /// CANINTF.RX1IF
    pub rx1if: bool,
    /// CANINTF.RX0IF
    pub rx0if: bool,
}

impl ReadStatus {
    /// Returns the state of a single flag
    pub fn flag(&self, flag: StatusFlag) -> bool {
        u8::from(*self) & flag.mask() != 0
    }

    /// True if the receive buffer holds a message
    pub fn rx_full(&self, buffer: RxBuffer) -> bool {
        match buffer {
            RxBuffer::RXB0 => self.rx0if(),
            RxBuffer::RXB1 => self.rx1if(),
        }
    }

    /// True if transmission of the buffer is still pending
    pub fn tx_pending(&self, buffer: TxBuffer) -> bool {
        match buffer {
            TxBuffer::TXB0 => self.tx0req(),
            TxBuffer::TXB1 => self.tx1req(),
            TxBuffer::TXB2 => self.tx2req(),
        }
    }

    /// True if the buffer-empty interrupt flag of the buffer is set
    pub fn tx_empty_flag(&self, buffer: TxBuffer) -> bool {
        match buffer {
            TxBuffer::TXB0 => self.tx0if(),
            TxBuffer::TXB1 => self.tx1if(),
            TxBuffer::TXB2 => self.tx2if(),
        }
    }
}

/// Flags of the READ STATUS response byte, discriminant is the bit position
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StatusFlag {
    RX0IF = 0,
    RX1IF = 1,
    TX0REQ = 2,
    TX0IF = 3,
    TX1REQ = 4,
    TX1IF = 5,
    TX2REQ = 6,
    TX2IF = 7,
}

impl StatusFlag {
    pub const ALL: [StatusFlag; 8] = [
        Self::RX0IF,
        Self::RX1IF,
        Self::TX0REQ,
        Self::TX0IF,
        Self::TX1REQ,
        Self::TX1IF,
        Self::TX2REQ,
        Self::TX2IF,
    ];

    pub const fn position(self) -> u8 {
        self as u8
    }

    pub const fn mask(self) -> u8 {
        1 << self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::RX0IF => "RX0IF",
            Self::RX1IF => "RX1IF",
            Self::TX0REQ => "TX0REQ",
            Self::TX0IF => "TX0IF",
            Self::TX1REQ => "TX1REQ",
            Self::TX1IF => "TX1IF",
            Self::TX2REQ => "TX2REQ",
            Self::TX2IF => "TX2IF",
        }
    }

    /// Resolves a flag name
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match Self::ALL.iter().find(|flag| flag.name() == name) {
            Some(flag) => Ok(*flag),
            None => {
                debug!("Unknown status flag: {name}");
                Err(LookupError::UnknownStatusFlag)
            }
        }
    }
}

impl FromStr for StatusFlag {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

/// Receive buffers holding a message
#[derive(BitfieldSpecifier, Copy, Clone, Debug, Eq, PartialEq)]
#[bits = 2]
pub enum ReceivedMessage {
    Empty = 0b00,
    Rxb0 = 0b01,
    Rxb1 = 0b10,
    Both = 0b11,
}

/// Kind of the received frame
#[derive(BitfieldSpecifier, Copy, Clone, Debug, Eq, PartialEq)]
#[bits = 2]
pub enum FrameKind {
    StandardData = 0b00,
    StandardRemote = 0b01,
    ExtendedData = 0b10,
    ExtendedRemote = 0b11,
}

/// Filter which accepted the received frame
#[allow(clippy::upper_case_acronyms)]
#[derive(BitfieldSpecifier, Copy, Clone, Debug, Eq, PartialEq)]
#[bits = 3]
pub enum FilterMatch {
    RXF0 = 0b000,
    RXF1 = 0b001,
    RXF2 = 0b010,
    RXF3 = 0b011,
    RXF4 = 0b100,
    RXF5 = 0b101,
    /// RXF0 matched, message rolled over into RXB1
    RXF0Rollover = 0b110,
    /// RXF1 matched, message rolled over into RXB1
    RXF1Rollover = 0b111,
}

#[bitfield]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Response byte of the RX STATUS instruction
pub struct RxStatus {
    /// Receive buffers holding a message
    pub received: ReceivedMessage,
    #[skip]
    __: B1,
    /// Kind of the last received frame
    pub frame_kind: FrameKind,
    /// Filter which accepted the last received frame
    pub filter_match: FilterMatch,
}

///  Status read from the CANSTAT register
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct CanStatus {
    /// Current operation mode, `None` for undefined OPMOD values
    pub mode: Option<OperationMode>,

    /// Source of the highest priority pending interrupt
    pub interrupt: InterruptCode,
}

impl CanStatus {
    pub fn from_register(register: u8) -> Self {
        Self {
            mode: OperationMode::from_register(register),
            interrupt: InterruptCode::from_register(register),
        }
    }
}

/// Operation mode as requested by CANCTRL.REQOP and reported by CANSTAT.OPMOD
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum OperationMode {
    /// Normal operation, transmits and acknowledges
    #[default]
    Normal = 0b000,
    /// Sleep mode
    Sleep = 0b001,
    /// Internal loopback, messages are not sent on the bus
    Loopback = 0b010,
    /// Receives all messages without acknowledging
    ListenOnly = 0b011,
    /// Configuration mode, required for CNFn, TXRTSCTRL, filters and masks
    Configuration = 0b100,
}

impl OperationMode {
    /// Decodes the OPMOD bits (7:5) of CANSTAT or REQOP bits of CANCTRL
    pub fn from_register(register: u8) -> Option<Self> {
        match register >> 5 {
            0b000 => Some(Self::Normal),
            0b001 => Some(Self::Sleep),
            0b010 => Some(Self::Loopback),
            0b011 => Some(Self::ListenOnly),
            0b100 => Some(Self::Configuration),
            _ => None,
        }
    }

    /// Three bit mode value
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// Interrupt flag code (CANSTAT.ICOD)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InterruptCode {
    NoInterrupt = 0b000,
    Error = 0b001,
    WakeUp = 0b010,
    Txb0 = 0b011,
    Txb1 = 0b100,
    Txb2 = 0b101,
    Rxb0 = 0b110,
    Rxb1 = 0b111,
}

impl InterruptCode {
    /// Decodes the ICOD bits (3:1) of CANSTAT
    pub fn from_register(register: u8) -> Self {
        match (register >> 1) & 0b111 {
            0b000 => Self::NoInterrupt,
            0b001 => Self::Error,
            0b010 => Self::WakeUp,
            0b011 => Self::Txb0,
            0b100 => Self::Txb1,
            0b101 => Self::Txb2,
            0b110 => Self::Rxb0,
            _ => Self::Rxb1,
        }
    }
}

/// Transmit and receive error counters (TEC/REC)
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorCounters {
    pub transmit: u8,
    pub receive: u8,
}

impl ErrorCounters {
    /// Decodes the consecutive TEC and REC registers
    pub fn from_registers(registers: [u8; 2]) -> Self {
        Self {
            transmit: registers[0],
            receive: registers[1],
        }
    }

    /// True if one of the counters reached the warning limit of 96
    pub fn is_warning(&self) -> bool {
        self.transmit >= 96 || self.receive >= 96
    }

    /// True if one of the counters reached the error-passive limit of 128
    pub fn is_error_passive(&self) -> bool {
        self.transmit >= 128 || self.receive >= 128
    }
}
