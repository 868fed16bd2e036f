//!# Bit modify
//! The BIT MODIFY instruction changes individual bits of a register without disturbing the others:
//! the chip only updates bits set in the mask byte and takes their new value from the data byte.
//! Only control and flag registers support the instruction.
//!
//! ```
//!# use mcp2515::bit_modify::BitModify;
//!# use mcp2515::fields::CanctrlBit;
//! let abort = BitModify::fields((), &[(CanctrlBit::ABAT, true)]).unwrap();
//!
//! assert_eq!([0x05, 0x0F, 0x10, 0x10], abort.encode());
//! assert_eq!(0x17, abort.apply(0x07));
//! ```
use crate::commands::{Command, EncodingError};
use crate::fields::ModifiableField;
use crate::registers::Register;
use log::debug;

/// Read-modify-write request on a single register
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BitModify {
    register: Register,
    mask: u8,
    data: u8,
}

impl BitModify {
    /// Creates a request from raw mask and data bytes. Data bits outside the mask are cleared.
    pub fn new(register: Register, mask: u8, data: u8) -> Result<Self, EncodingError> {
        if !register.is_bit_modifiable() {
            debug!("Register {} does not support bit modify", register.name());
            return Err(EncodingError::BitModifyNotSupported(register));
        }

        Ok(Self {
            register,
            mask,
            data: data & mask,
        })
    }

    /// Sets or clears the given fields of one register.
    /// Requesting the same field both set and cleared is rejected.
    pub fn fields<F: ModifiableField>(selector: F::Selector, updates: &[(F, bool)]) -> Result<Self, EncodingError> {
        let mut mask = 0u8;
        let mut data = 0u8;

        for (field, value) in updates {
            let bit = field.mask();
            let bit_value = if *value { bit } else { 0 };

            if mask & bit != 0 && data & bit != bit_value {
                debug!("Field {} requested to be set and cleared", field.name());
                return Err(EncodingError::ConflictingBits(bit));
            }

            mask |= bit;
            data |= bit_value;
        }

        Self::new(F::register(selector), mask, data)
    }

    /// Writes a multi-bit value into a group of fields given MSB first
    pub fn group<F: ModifiableField>(selector: F::Selector, group: &[F], value: u8) -> Result<Self, EncodingError> {
        let bits = group.len();

        if bits < 8 && value >> bits != 0 {
            debug!("Value {value} does not fit into {bits} bits");
            return Err(EncodingError::ValueOutOfRange { value, bits: bits as u8 });
        }

        let mut mask = 0u8;
        let mut data = 0u8;

        for (index, field) in group.iter().rev().enumerate() {
            if mask & field.mask() != 0 {
                debug!("Field {} listed twice in group", field.name());
                return Err(EncodingError::ConflictingBits(field.mask()));
            }

            mask |= field.mask();

            if value & (1 << index) != 0 {
                data |= field.mask();
            }
        }

        Self::new(F::register(selector), mask, data)
    }

    pub fn register(&self) -> Register {
        self.register
    }

    /// Bits to be changed
    pub fn mask(&self) -> u8 {
        self.mask
    }

    /// New values of the masked bits
    pub fn data(&self) -> u8 {
        self.data
    }

    /// Returns the register value the chip holds after executing the request
    pub fn apply(&self, current: u8) -> u8 {
        (current & !self.mask) | (self.data & self.mask)
    }

    /// Encodes the instruction as [opcode, address, mask, data]
    pub fn encode(&self) -> [u8; 4] {
        [Command::BitModify.opcode(), self.register.address(), self.mask, self.data]
    }
}
