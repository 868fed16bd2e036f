//!# Register map
//! Every register of the MCP2515 is a single byte addressed by a 7-bit address.
//! The address space is grouped into five banks: acceptance filters, acceptance masks,
//! control registers (interleaved with the filters and masks), three transmit buffers and
//! two receive buffers.
//!
//! ```
//!# use mcp2515::registers::{Register, TxBuffer};
//! assert_eq!(0x0F, Register::CANCTRL.address());
//! assert_eq!(Register::CANCTRL, Register::from_name("CANCTRL").unwrap());
//! assert_eq!(Register::TXB1CTRL, TxBuffer::TXB1.ctrl());
//! assert!(Register::from_name("CANCTL").is_err());
//! ```
use crate::commands::EncodingError;
use crate::fields::FieldFamily;
use core::str::FromStr;
use log::debug;

/// Possible errors when resolving symbolic names
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum LookupError {
    /// No register with the given name
    UnknownRegister,
    /// No field with the given name in the given register family
    UnknownField(FieldFamily),
    /// No register family with the given name
    UnknownFamily,
    /// No SPI command with the given name
    UnknownCommand,
    /// No READ STATUS flag with the given name
    UnknownStatusFlag,
}

macro_rules! register_map {
    ($($name:ident = $address:literal,)+) => {
        /// Register address map. The discriminant of each variant is the register address.
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(u8)]
        pub enum Register {
            $($name = $address,)+
        }

        impl Register {
            /// All registers in ascending address order
            pub const ALL: &'static [Register] = &[$(Register::$name,)+];

            /// Datasheet name of the register
            pub const fn name(self) -> &'static str {
                match self {
                    $(Register::$name => stringify!($name),)+
                }
            }
        }
    };
}

register_map! {
    RXF0SIDH = 0x00,
    RXF0SIDL = 0x01,
    RXF0EID8 = 0x02,
    RXF0EID0 = 0x03,
    RXF1SIDH = 0x04,
    RXF1SIDL = 0x05,
    RXF1EID8 = 0x06,
    RXF1EID0 = 0x07,
    RXF2SIDH = 0x08,
    RXF2SIDL = 0x09,
    RXF2EID8 = 0x0A,
    RXF2EID0 = 0x0B,
    BFPCTRL = 0x0C,
    TXRTSCTRL = 0x0D,
    CANSTAT = 0x0E,
    CANCTRL = 0x0F,

    RXF3SIDH = 0x10,
    RXF3SIDL = 0x11,
    RXF3EID8 = 0x12,
    RXF3EID0 = 0x13,
    RXF4SIDH = 0x14,
    RXF4SIDL = 0x15,
    RXF4EID8 = 0x16,
    RXF4EID0 = 0x17,
    RXF5SIDH = 0x18,
    RXF5SIDL = 0x19,
    RXF5EID8 = 0x1A,
    RXF5EID0 = 0x1B,
    TEC = 0x1C,
    REC = 0x1D,

    RXM0SIDH = 0x20,
    RXM0SIDL = 0x21,
    RXM0EID8 = 0x22,
    RXM0EID0 = 0x23,
    RXM1SIDH = 0x24,
    RXM1SIDL = 0x25,
    RXM1EID8 = 0x26,
    RXM1EID0 = 0x27,
    CNF3 = 0x28,
    CNF2 = 0x29,
    CNF1 = 0x2A,
    CANINTE = 0x2B,
    CANINTF = 0x2C,
    EFLG = 0x2D,

    TXB0CTRL = 0x30,
    TXB0SIDH = 0x31,
    TXB0SIDL = 0x32,
    TXB0EID8 = 0x33,
    TXB0EID0 = 0x34,
    TXB0DLC = 0x35,
    TXB0D0 = 0x36,
    TXB0D1 = 0x37,
    TXB0D2 = 0x38,
    TXB0D3 = 0x39,
    TXB0D4 = 0x3A,
    TXB0D5 = 0x3B,
    TXB0D6 = 0x3C,
    TXB0D7 = 0x3D,

    TXB1CTRL = 0x40,
    TXB1SIDH = 0x41,
    TXB1SIDL = 0x42,
    TXB1EID8 = 0x43,
    TXB1EID0 = 0x44,
    TXB1DLC = 0x45,
    TXB1D0 = 0x46,
    TXB1D1 = 0x47,
    TXB1D2 = 0x48,
    TXB1D3 = 0x49,
    TXB1D4 = 0x4A,
    TXB1D5 = 0x4B,
    TXB1D6 = 0x4C,
    TXB1D7 = 0x4D,

    TXB2CTRL = 0x50,
    TXB2SIDH = 0x51,
    TXB2SIDL = 0x52,
    TXB2EID8 = 0x53,
    TXB2EID0 = 0x54,
    TXB2DLC = 0x55,
    TXB2D0 = 0x56,
    TXB2D1 = 0x57,
    TXB2D2 = 0x58,
    TXB2D3 = 0x59,
    TXB2D4 = 0x5A,
    TXB2D5 = 0x5B,
    TXB2D6 = 0x5C,
    TXB2D7 = 0x5D,

    RXB0CTRL = 0x60,
    RXB0SIDH = 0x61,
    RXB0SIDL = 0x62,
    RXB0EID8 = 0x63,
    RXB0EID0 = 0x64,
    RXB0DLC = 0x65,
    RXB0D0 = 0x66,
    RXB0D1 = 0x67,
    RXB0D2 = 0x68,
    RXB0D3 = 0x69,
    RXB0D4 = 0x6A,
    RXB0D5 = 0x6B,
    RXB0D6 = 0x6C,
    RXB0D7 = 0x6D,

    RXB1CTRL = 0x70,
    RXB1SIDH = 0x71,
    RXB1SIDL = 0x72,
    RXB1EID8 = 0x73,
    RXB1EID0 = 0x74,
    RXB1DLC = 0x75,
    RXB1D0 = 0x76,
    RXB1D1 = 0x77,
    RXB1D2 = 0x78,
    RXB1D3 = 0x79,
    RXB1D4 = 0x7A,
    RXB1D5 = 0x7B,
    RXB1D6 = 0x7C,
    RXB1D7 = 0x7D,
}

/// Functional bank of a register
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Bank {
    Filter(AcceptanceFilter),
    Mask(AcceptanceMask),
    Control,
    Transmit(TxBuffer),
    Receive(RxBuffer),
}

impl Register {
    /// Highest address of the register space (exclusive)
    pub const ADDRESS_SPACE: usize = 0x80;

    /// Returns the register address
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Returns the register at the given address, if one is defined there
    pub fn from_address(address: u8) -> Option<Self> {
        Self::ALL
            .binary_search_by_key(&address, |register| register.address())
            .ok()
            .map(|index| Self::ALL[index])
    }

    /// Resolves a datasheet register name
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match Self::ALL.iter().find(|register| register.name() == name) {
            Some(register) => Ok(*register),
            None => {
                debug!("Unknown register name: {name}");
                Err(LookupError::UnknownRegister)
            }
        }
    }

    /// True if the chip accepts the BIT MODIFY instruction on this register
    pub const fn is_bit_modifiable(self) -> bool {
        matches!(
            self,
            Self::BFPCTRL
                | Self::TXRTSCTRL
                | Self::CANCTRL
                | Self::CNF1
                | Self::CNF2
                | Self::CNF3
                | Self::CANINTE
                | Self::CANINTF
                | Self::EFLG
                | Self::TXB0CTRL
                | Self::TXB1CTRL
                | Self::TXB2CTRL
                | Self::RXB0CTRL
                | Self::RXB1CTRL
        )
    }

    /// Returns the functional bank the register belongs to
    pub fn bank(self) -> Bank {
        let address = self.address();

        match address {
            0x0C..=0x0F | 0x1C..=0x1D | 0x28..=0x2D => Bank::Control,
            0x00..=0x0B => Bank::Filter(AcceptanceFilter::ALL[(address / 4) as usize]),
            0x10..=0x1B => Bank::Filter(AcceptanceFilter::ALL[3 + ((address - 0x10) / 4) as usize]),
            0x20..=0x27 => Bank::Mask(AcceptanceMask::ALL[((address - 0x20) / 4) as usize]),
            0x30..=0x5D => Bank::Transmit(TxBuffer::ALL[((address - 0x30) >> 4) as usize]),
            _ => Bank::Receive(RxBuffer::ALL[((address - 0x60) >> 4) as usize]),
        }
    }
}

impl FromStr for Register {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

impl From<Register> for u8 {
    fn from(register: Register) -> Self {
        register.address()
    }
}

/// Transmit buffer selection
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum TxBuffer {
    TXB0 = 0,
    TXB1 = 1,
    TXB2 = 2,
}

impl TxBuffer {
    pub const ALL: [TxBuffer; 3] = [Self::TXB0, Self::TXB1, Self::TXB2];

    /// Buffer index 0-2
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// TXBnCTRL register
    pub const fn ctrl(self) -> Register {
        [Register::TXB0CTRL, Register::TXB1CTRL, Register::TXB2CTRL][self as usize]
    }

    /// TXBnSIDH register, start of the frame image
    pub const fn sidh(self) -> Register {
        [Register::TXB0SIDH, Register::TXB1SIDH, Register::TXB2SIDH][self as usize]
    }

    /// TXBnSIDL register
    pub const fn sidl(self) -> Register {
        [Register::TXB0SIDL, Register::TXB1SIDL, Register::TXB2SIDL][self as usize]
    }

    /// TXBnEID8 register
    pub const fn eid8(self) -> Register {
        [Register::TXB0EID8, Register::TXB1EID8, Register::TXB2EID8][self as usize]
    }

    /// TXBnEID0 register
    pub const fn eid0(self) -> Register {
        [Register::TXB0EID0, Register::TXB1EID0, Register::TXB2EID0][self as usize]
    }

    /// TXBnDLC register
    pub const fn dlc(self) -> Register {
        [Register::TXB0DLC, Register::TXB1DLC, Register::TXB2DLC][self as usize]
    }

    /// TXBnD0 register, start of the payload
    pub const fn d0(self) -> Register {
        [Register::TXB0D0, Register::TXB1D0, Register::TXB2D0][self as usize]
    }

    /// TXBnDm data register, `None` for data index > 7
    pub const fn data(self, index: u8) -> Option<Register> {
        const DATA: [[Register; 8]; 3] = [
            [
                Register::TXB0D0,
                Register::TXB0D1,
                Register::TXB0D2,
                Register::TXB0D3,
                Register::TXB0D4,
                Register::TXB0D5,
                Register::TXB0D6,
                Register::TXB0D7,
            ],
            [
                Register::TXB1D0,
                Register::TXB1D1,
                Register::TXB1D2,
                Register::TXB1D3,
                Register::TXB1D4,
                Register::TXB1D5,
                Register::TXB1D6,
                Register::TXB1D7,
            ],
            [
                Register::TXB2D0,
                Register::TXB2D1,
                Register::TXB2D2,
                Register::TXB2D3,
                Register::TXB2D4,
                Register::TXB2D5,
                Register::TXB2D6,
                Register::TXB2D7,
            ],
        ];

        if index > 7 {
            return None;
        }

        Some(DATA[self as usize][index as usize])
    }
}

impl TryFrom<u8> for TxBuffer {
    type Error = EncodingError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::TXB0),
            1 => Ok(Self::TXB1),
            2 => Ok(Self::TXB2),
            _ => {
                debug!("Transmit buffer index {index} out of range 0-2");
                Err(EncodingError::BufferIndexOutOfRange(index))
            }
        }
    }
}

/// Receive buffer selection
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum RxBuffer {
    RXB0 = 0,
    RXB1 = 1,
}

impl RxBuffer {
    pub const ALL: [RxBuffer; 2] = [Self::RXB0, Self::RXB1];

    /// Buffer index 0-1
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// RXBnCTRL register
    pub const fn ctrl(self) -> Register {
        [Register::RXB0CTRL, Register::RXB1CTRL][self as usize]
    }

    /// RXBnSIDH register, start of the frame image
    pub const fn sidh(self) -> Register {
        [Register::RXB0SIDH, Register::RXB1SIDH][self as usize]
    }

    /// RXBnSIDL register
    pub const fn sidl(self) -> Register {
        [Register::RXB0SIDL, Register::RXB1SIDL][self as usize]
    }

    /// RXBnEID8 register
    pub const fn eid8(self) -> Register {
        [Register::RXB0EID8, Register::RXB1EID8][self as usize]
    }

    /// RXBnEID0 register
    pub const fn eid0(self) -> Register {
        [Register::RXB0EID0, Register::RXB1EID0][self as usize]
    }

    /// RXBnDLC register
    pub const fn dlc(self) -> Register {
        [Register::RXB0DLC, Register::RXB1DLC][self as usize]
    }

    /// RXBnD0 register, start of the payload
    pub const fn d0(self) -> Register {
        [Register::RXB0D0, Register::RXB1D0][self as usize]
    }

    /// RXBnDm data register, `None` for data index > 7
    pub const fn data(self, index: u8) -> Option<Register> {
        const DATA: [[Register; 8]; 2] = [
            [
                Register::RXB0D0,
                Register::RXB0D1,
                Register::RXB0D2,
                Register::RXB0D3,
                Register::RXB0D4,
                Register::RXB0D5,
                Register::RXB0D6,
                Register::RXB0D7,
            ],
            [
                Register::RXB1D0,
                Register::RXB1D1,
                Register::RXB1D2,
                Register::RXB1D3,
                Register::RXB1D4,
                Register::RXB1D5,
                Register::RXB1D6,
                Register::RXB1D7,
            ],
        ];

        if index > 7 {
            return None;
        }

        Some(DATA[self as usize][index as usize])
    }
}

impl TryFrom<u8> for RxBuffer {
    type Error = EncodingError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(Self::RXB0),
            1 => Ok(Self::RXB1),
            _ => {
                debug!("Receive buffer index {index} out of range 0-1");
                Err(EncodingError::BufferIndexOutOfRange(index))
            }
        }
    }
}

/// Acceptance filter selection.
/// Filters 0 and 1 belong to RXB0, filters 2-5 to RXB1.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AcceptanceFilter {
    RXF0 = 0,
    RXF1 = 1,
    RXF2 = 2,
    RXF3 = 3,
    RXF4 = 4,
    RXF5 = 5,
}

impl AcceptanceFilter {
    pub const ALL: [AcceptanceFilter; 6] = [Self::RXF0, Self::RXF1, Self::RXF2, Self::RXF3, Self::RXF4, Self::RXF5];

    /// RXFnSIDH register, first of the four identifier registers
    pub const fn sidh(self) -> Register {
        [
            Register::RXF0SIDH,
            Register::RXF1SIDH,
            Register::RXF2SIDH,
            Register::RXF3SIDH,
            Register::RXF4SIDH,
            Register::RXF5SIDH,
        ][self as usize]
    }

    /// Receive buffer the filter is applied to
    pub const fn buffer(self) -> RxBuffer {
        match self {
            Self::RXF0 | Self::RXF1 => RxBuffer::RXB0,
            _ => RxBuffer::RXB1,
        }
    }

    /// Mask shared by this filter
    pub const fn mask(self) -> AcceptanceMask {
        match self.buffer() {
            RxBuffer::RXB0 => AcceptanceMask::RXM0,
            RxBuffer::RXB1 => AcceptanceMask::RXM1,
        }
    }
}

impl TryFrom<u8> for AcceptanceFilter {
    type Error = EncodingError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match Self::ALL.get(index as usize) {
            Some(filter) => Ok(*filter),
            None => {
                debug!("Filter index {index} out of range 0-5");
                Err(EncodingError::FilterIndexOutOfRange(index))
            }
        }
    }
}

/// Acceptance mask selection. RXM0 applies to RXB0, RXM1 to RXB1.
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AcceptanceMask {
    RXM0 = 0,
    RXM1 = 1,
}

impl AcceptanceMask {
    pub const ALL: [AcceptanceMask; 2] = [Self::RXM0, Self::RXM1];

    /// RXMnSIDH register, first of the four identifier registers
    pub const fn sidh(self) -> Register {
        [Register::RXM0SIDH, Register::RXM1SIDH][self as usize]
    }

    /// Receive buffer the mask is applied to
    pub const fn buffer(self) -> RxBuffer {
        RxBuffer::ALL[self as usize]
    }
}

impl TryFrom<u8> for AcceptanceMask {
    type Error = EncodingError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        match Self::ALL.get(index as usize) {
            Some(mask) => Ok(*mask),
            None => {
                debug!("Mask index {index} out of range 0-1");
                Err(EncodingError::MaskIndexOutOfRange(index))
            }
        }
    }
}
