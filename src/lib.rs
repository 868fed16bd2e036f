#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]
#![allow(clippy::identity_op)]

//! # Library for MCP2515 CAN controller
//!
//! Crate currently offer the following features:
//! * Register map, bit fields and instruction encoding of the MCP2515
//! * Bit modify requests built from named register fields
//! * Decoding of READ STATUS, RX STATUS and CANSTAT
//! * Bit timing calculation and CNF register encoding
//! * no_std support
//!
//! Executing the encoded instructions on a SPI bus is left to the caller: each encoded
//! instruction has to be exchanged in a single chip select cycle.
//!
//! Registers, fields and commands can also be resolved by their datasheet names:
//!
//!```
//!use mcp2515::commands::Command;
//!use mcp2515::fields::FieldFamily;
//!use mcp2515::registers::Register;
//!
//!assert_eq!(0x0F, Register::from_name("CANCTRL").unwrap().address());
//!assert_eq!(4, FieldFamily::CANCTRL.position("ABAT").unwrap());
//!assert_eq!(0xA0, Command::from_name("READ_STATUS").unwrap().opcode());
//!```
//!
//!## Instruction example
//!
//!```
//!use mcp2515::config::{request_mode, BitTiming, CanBitRate, OscillatorFrequency};
//!use mcp2515::instruction::Instruction;
//!use mcp2515::registers::Register;
//!use mcp2515::status::OperationMode;
//!use bytes::Bytes;
//!
//! // request configuration mode
//!let modify = request_mode(OperationMode::Configuration).unwrap();
//!assert_eq!(&[0x05, 0x0F, 0xE0, 0x80], &Instruction::from(modify).encode().unwrap()[..]);
//!
//! // poll CANSTAT until OPMOD reports configuration mode
//!let poll = Instruction::read(Register::CANSTAT);
//!assert_eq!(&[0x03, 0x0E, 0x00], &poll.encode().unwrap()[..]);
//!
//! // write CNF3, CNF2 and CNF1 in one sequential write
//!let timing = BitTiming::calculate(OscillatorFrequency::MHz16, CanBitRate::Kbps250).unwrap();
//!let write = Instruction::Write {
//!    start: Register::CNF3,
//!    data: Bytes::copy_from_slice(&timing.as_registers().unwrap()),
//!};
//!assert_eq!(&[0x02, 0x28, 0x03, 0xAC, 0x01], &write.encode().unwrap()[..]);
//!```

pub mod bit_modify;
pub mod commands;
pub mod config;
pub mod fields;
pub mod instruction;
pub mod layout;
pub mod registers;
pub mod status;

#[cfg(test)]
mod tests;

#[cfg(test)]
extern crate alloc;
