//!# Configuration
//! Register encodings of the bit timing (CNF1-CNF3), the operation mode request and the
//! CLKOUT setting (CANCTRL).
//! CNF1-CNF3 are only writable in configuration mode, so the caller checks CANSTAT.OPMOD
//! before writing them.
//!
//! ```
//!# use mcp2515::config::{BitTiming, CanBitRate, OscillatorFrequency};
//! let timing = BitTiming::calculate(OscillatorFrequency::MHz16, CanBitRate::Kbps500).unwrap();
//!
//! // CNF3, CNF2, CNF1
//! assert_eq!([0x03, 0xAC, 0x00], timing.as_registers().unwrap());
//! ```
use crate::bit_modify::BitModify;
use crate::commands::EncodingError;
use crate::fields::{CanctrlBit, RegisterField};
use crate::layout::{CanCtrlReg, Cnf1Reg, Cnf2Reg, Cnf3Reg};
use crate::registers::Register;
use crate::status::OperationMode;
use log::debug;
use serde::{Deserialize, Serialize};

/// Possible errors when encoding a bit timing
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Segment lengths violate the chip's timing constraints
    InvalidBitTiming,
    /// No exact prescaler with 8-16 time quanta per bit exists
    UnsupportedBitRate {
        oscillator: OscillatorFrequency,
        bit_rate: CanBitRate,
    },
}

/// Returns the CANCTRL modification requesting the given operation mode
pub fn request_mode(mode: OperationMode) -> Result<BitModify, EncodingError> {
    BitModify::group((), &CanctrlBit::REQOP, mode.bits())
}

/// Frequency of the oscillator connected to OSC1/OSC2
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum OscillatorFrequency {
    MHz8,
    #[default]
    MHz16,
    MHz20,
}

impl OscillatorFrequency {
    pub const fn hz(self) -> u32 {
        match self {
            Self::MHz8 => 8_000_000,
            Self::MHz16 => 16_000_000,
            Self::MHz20 => 20_000_000,
        }
    }
}

/// CAN bus bit rate
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum CanBitRate {
    Kbps5,
    Kbps10,
    Kbps20,
    Kbps50,
    Kbps100,
    Kbps125,
    Kbps250,
    #[default]
    Kbps500,
    Kbps1000,
}

impl CanBitRate {
    /// Bits per second
    pub const fn bps(self) -> u32 {
        match self {
            Self::Kbps5 => 5_000,
            Self::Kbps10 => 10_000,
            Self::Kbps20 => 20_000,
            Self::Kbps50 => 50_000,
            Self::Kbps100 => 100_000,
            Self::Kbps125 => 125_000,
            Self::Kbps250 => 250_000,
            Self::Kbps500 => 500_000,
            Self::Kbps1000 => 1_000_000,
        }
    }
}

/// Nominal bit timing. All lengths are given in time quanta (TQ).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct BitTiming {
    /// Baud rate prescaler 1-64, TQ = 2 x prescaler / Fosc
    pub prescaler: u8,

    /// Synchronization jump width 1-4
    pub sjw: u8,

    /// Propagation segment 1-8
    pub propagation: u8,

    /// Phase segment 1, 1-8
    pub phase1: u8,

    /// Phase segment 2, 2-8
    pub phase2: u8,

    /// Bus line is sampled three times at the sample point
    pub triple_sample: bool,

    /// Low-pass filter on the wake-up input
    pub wake_filter: bool,
}

impl Default for BitTiming {
    /// 500 kbit/s with a 16 MHz oscillator, sample point at 75%
    fn default() -> Self {
        Self {
            prescaler: 1,
            sjw: 1,
            propagation: 5,
            phase1: 6,
            phase2: 4,
            triple_sample: false,
            wake_filter: false,
        }
    }
}

impl BitTiming {
    /// Searches the bit timing with the most time quanta (16 down to 8) dividing the bit time exactly
    pub fn calculate(oscillator: OscillatorFrequency, bit_rate: CanBitRate) -> Result<Self, ConfigError> {
        let divisor = 2 * bit_rate.bps();

        if oscillator.hz() % divisor == 0 {
            let cycles = oscillator.hz() / divisor;

            for quanta in (8..=16).rev() {
                let prescaler = cycles / quanta;

                if cycles % quanta == 0 && (1..=64).contains(&prescaler) {
                    return Ok(Self::with_quanta(prescaler as u8, quanta as u8));
                }
            }
        }

        debug!(
            "No bit timing for {} bit/s with oscillator {} Hz",
            bit_rate.bps(),
            oscillator.hz()
        );
        Err(ConfigError::UnsupportedBitRate { oscillator, bit_rate })
    }

    /// Splits the given number of time quanta with the sample point near 75%
    fn with_quanta(prescaler: u8, quanta: u8) -> Self {
        let phase2 = (quanta / 4).max(2);
        let remaining = quanta - 1 - phase2;
        let phase1 = (remaining + 1) / 2;

        Self {
            prescaler,
            sjw: 1,
            propagation: remaining - phase1,
            phase1,
            phase2,
            triple_sample: false,
            wake_filter: false,
        }
    }

    /// Time quanta per bit, including the synchronization segment
    pub fn quanta(&self) -> u32 {
        1 + self.propagation as u32 + self.phase1 as u32 + self.phase2 as u32
    }

    /// Resulting bit rate in bit/s for the given oscillator
    pub fn bit_rate(&self, oscillator: OscillatorFrequency) -> u32 {
        oscillator.hz() / (2 * self.prescaler as u32 * self.quanta())
    }

    /// Checks the segment lengths against the ranges and constraints of the chip
    pub fn validate(&self) -> Result<(), ConfigError> {
        let in_range = (1..=64).contains(&self.prescaler)
            && (1..=4).contains(&self.sjw)
            && (1..=8).contains(&self.propagation)
            && (1..=8).contains(&self.phase1)
            && (2..=8).contains(&self.phase2);

        if !in_range || self.phase2 < self.sjw || self.propagation + self.phase1 < self.phase2 {
            debug!("Invalid bit timing: {self:?}");
            return Err(ConfigError::InvalidBitTiming);
        }

        Ok(())
    }

    /// Encodes the timing as register values in address order: [CNF3, CNF2, CNF1]
    pub fn as_registers(&self) -> Result<[u8; 3], ConfigError> {
        self.validate()?;

        let cnf1 = Cnf1Reg::new().with_sjw(self.sjw - 1).with_brp(self.prescaler - 1);

        let cnf2 = Cnf2Reg::new()
            .with_btlmode(true)
            .with_sam(self.triple_sample)
            .with_phseg1(self.phase1 - 1)
            .with_prseg(self.propagation - 1);

        let cnf3 = Cnf3Reg::new()
            .with_wakfil(self.wake_filter)
            .with_phseg2(self.phase2 - 1);

        Ok([cnf3.into(), cnf2.into(), cnf1.into()])
    }

    /// Decodes register values given in address order: [CNF3, CNF2, CNF1]
    pub fn from_registers(registers: [u8; 3]) -> Self {
        let cnf3 = Cnf3Reg::from(registers[0]);
        let cnf2 = Cnf2Reg::from(registers[1]);
        let cnf1 = Cnf1Reg::from(registers[2]);

        Self {
            prescaler: cnf1.brp() + 1,
            sjw: cnf1.sjw() + 1,
            propagation: cnf2.prseg() + 1,
            phase1: cnf2.phseg1() + 1,
            phase2: cnf3.phseg2() + 1,
            triple_sample: cnf2.sam(),
            wake_filter: cnf3.wakfil(),
        }
    }
}

/// CLKOUT pin setting
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ClockOutput {
    #[default]
    Disabled,
    DivideBy1,
    DivideBy2,
    DivideBy4,
    DivideBy8,
}

impl ClockOutput {
    /// Returns the CLKEN bit and CLKPRE bits
    fn register_bits(self) -> (bool, u8) {
        match self {
            Self::Disabled => (false, 0b00),
            Self::DivideBy1 => (true, 0b00),
            Self::DivideBy2 => (true, 0b01),
            Self::DivideBy4 => (true, 0b10),
            Self::DivideBy8 => (true, 0b11),
        }
    }

    /// Returns the CANCTRL modification applying this setting, leaving REQOP, ABAT and OSM untouched
    pub fn request(self) -> Result<BitModify, EncodingError> {
        let (clken, clkpre) = self.register_bits();
        let mask = CanctrlBit::CLKEN.mask() | CanctrlBit::CLKPRE1.mask() | CanctrlBit::CLKPRE0.mask();
        let canctrl = CanCtrlReg::new().with_clken(clken).with_clkpre(clkpre);

        BitModify::new(Register::CANCTRL, mask, canctrl.into())
    }

    /// Maps CANCTRL register values to configuration
    pub fn from_register(register: u8) -> Self {
        let canctrl = CanCtrlReg::from(register);

        if !canctrl.clken() {
            return Self::Disabled;
        }

        match canctrl.clkpre() {
            0b00 => Self::DivideBy1,
            0b01 => Self::DivideBy2,
            0b10 => Self::DivideBy4,
            _ => Self::DivideBy8,
        }
    }
}
