//!# Register bit fields
//! Each register family has its own field enum, the discriminant of a variant is the bit position
//! within the register byte. Families of identically shaped registers (e.g. the three TXBnCTRL
//! registers) share one enum, the concrete register is chosen by the family's selector.
//!
//! ```
//!# use mcp2515::fields::{CanctrlBit, FieldFamily, RegisterField, TxbCtrlBit};
//!# use mcp2515::registers::{Register, TxBuffer};
//! assert_eq!(4, CanctrlBit::ABAT.position());
//! assert_eq!(0b0000_1000, TxbCtrlBit::TXREQ.mask());
//! assert_eq!(Register::TXB2CTRL, TxbCtrlBit::register(TxBuffer::TXB2));
//!
//! assert_eq!(Ok(6), FieldFamily::RXB0CTRL.position("RXM1"));
//! assert!(FieldFamily::RXB0CTRL.position("FILHIT2").is_err());
//! ```
use crate::registers::{LookupError, Register, RxBuffer, TxBuffer};
use core::fmt::Debug;
use core::str::FromStr;
use log::debug;

/// Named single-bit field of a register family
pub trait RegisterField: Copy + Eq + Debug + 'static {
    /// Selects one register of the family
    type Selector: Copy;

    /// Family the field belongs to
    const FAMILY: FieldFamily;

    /// All fields of the family, MSB first
    const FIELDS: &'static [Self];

    /// (name, position) table of the family
    const ENTRIES: &'static [(&'static str, u8)];

    /// Alternative names resolving to a field
    const ALIASES: &'static [(&'static str, Self)] = &[];

    /// Returns the register selected within the family
    fn register(selector: Self::Selector) -> Register;

    /// Bit position 0-7
    fn position(self) -> u8;

    /// Datasheet name of the field
    fn name(self) -> &'static str;

    /// Single bit mask of the field
    fn mask(self) -> u8 {
        1 << self.position()
    }

    /// Resolves a field name (or alias) within this family
    fn from_name(name: &str) -> Result<Self, LookupError> {
        let field = Self::FIELDS
            .iter()
            .copied()
            .find(|field| field.name() == name)
            .or_else(|| Self::ALIASES.iter().find(|(alias, _)| *alias == name).map(|(_, field)| *field));

        field.ok_or_else(|| {
            debug!("Unknown field {name} in register family {}", Self::FAMILY.name());
            LookupError::UnknownField(Self::FAMILY)
        })
    }
}

/// Marker for fields of registers which accept the BIT MODIFY instruction
pub trait ModifiableField: RegisterField {}

macro_rules! bit_table {
    (
        $(#[$doc:meta])*
        $ty:ident: $family:ident, selector = $selector:ty, register = $register:expr,
        { $($field:ident = $position:literal,)+ }
        $(aliases { $($alias:literal => $target:ident,)+ })?
    ) => {
        $(#[$doc])*
        #[allow(clippy::upper_case_acronyms)]
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        #[repr(u8)]
        pub enum $ty {
            $($field = $position,)+
        }

        impl RegisterField for $ty {
            type Selector = $selector;

            const FAMILY: FieldFamily = FieldFamily::$family;
            const FIELDS: &'static [Self] = &[$(Self::$field,)+];
            const ENTRIES: &'static [(&'static str, u8)] = &[$((stringify!($field), $position),)+];
            $(const ALIASES: &'static [(&'static str, Self)] = &[$(($alias, Self::$target),)+];)?

            fn register(selector: Self::Selector) -> Register {
                ($register)(selector)
            }

            fn position(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $(Self::$field => stringify!($field),)+
                }
            }
        }
    };
}

bit_table! {
    /// BFPCTRL, RXnBF pin control and status
    BfpctrlBit: BFPCTRL, selector = (), register = |_| Register::BFPCTRL,
    {
        B1BFS = 5,
        B0BFS = 4,
        B1BFE = 3,
        B0BFE = 2,
        B1BFM = 1,
        B0BFM = 0,
    }
}

bit_table! {
    /// TXRTSCTRL, TXnRTS pin control and status
    TxrtsctrlBit: TXRTSCTRL, selector = (), register = |_| Register::TXRTSCTRL,
    {
        B2RTS = 5,
        B1RTS = 4,
        B0RTS = 3,
        B2RTSM = 2,
        B1RTSM = 1,
        B0RTSM = 0,
    }
}

bit_table! {
    /// CANSTAT, operation mode and interrupt code (read only)
    CanstatBit: CANSTAT, selector = (), register = |_| Register::CANSTAT,
    {
        OPMOD2 = 7,
        OPMOD1 = 6,
        OPMOD0 = 5,
        ICOD2 = 3,
        ICOD1 = 2,
        ICOD0 = 1,
    }
}

bit_table! {
    /// CANCTRL, mode request, one-shot mode and CLKOUT control
    CanctrlBit: CANCTRL, selector = (), register = |_| Register::CANCTRL,
    {
        REQOP2 = 7,
        REQOP1 = 6,
        REQOP0 = 5,
        ABAT = 4,
        OSM = 3,
        CLKEN = 2,
        CLKPRE1 = 1,
        CLKPRE0 = 0,
    }
}

bit_table! {
    /// CNF1, synchronization jump width and baud rate prescaler
    Cnf1Bit: CNF1, selector = (), register = |_| Register::CNF1,
    {
        SJW1 = 7,
        SJW0 = 6,
        BRP5 = 5,
        BRP4 = 4,
        BRP3 = 3,
        BRP2 = 2,
        BRP1 = 1,
        BRP0 = 0,
    }
}

bit_table! {
    /// CNF2, phase segment 1 and propagation segment
    Cnf2Bit: CNF2, selector = (), register = |_| Register::CNF2,
    {
        BTLMODE = 7,
        SAM = 6,
        PHSEG12 = 5,
        PHSEG11 = 4,
        PHSEG10 = 3,
        PRSEG2 = 2,
        PRSEG1 = 1,
        PRSEG0 = 0,
    }
    aliases {
        "PHSEG2" => PRSEG2,
        "PHSEG1" => PRSEG1,
        "PHSEG0" => PRSEG0,
    }
}

bit_table! {
    /// CNF3, phase segment 2, wake-up filter and CLKOUT SOF signal
    Cnf3Bit: CNF3, selector = (), register = |_| Register::CNF3,
    {
        SOF = 7,
        WAKFIL = 6,
        PHSEG22 = 2,
        PHSEG21 = 1,
        PHSEG20 = 0,
    }
}

bit_table! {
    /// CANINTE, interrupt enable
    CaninteBit: CANINTE, selector = (), register = |_| Register::CANINTE,
    {
        MERRE = 7,
        WAKIE = 6,
        ERRIE = 5,
        TX2IE = 4,
        TX1IE = 3,
        TX0IE = 2,
        RX1IE = 1,
        RX0IE = 0,
    }
}

bit_table! {
    /// CANINTF, interrupt flags
    CanintfBit: CANINTF, selector = (), register = |_| Register::CANINTF,
    {
        MERRF = 7,
        WAKIF = 6,
        ERRIF = 5,
        TX2IF = 4,
        TX1IF = 3,
        TX0IF = 2,
        RX1IF = 1,
        RX0IF = 0,
    }
}

bit_table! {
    /// EFLG, error flags
    EflgBit: EFLG, selector = (), register = |_| Register::EFLG,
    {
        RX1OVR = 7,
        RX0OVR = 6,
        TXBO = 5,
        TXEP = 4,
        RXEP = 3,
        TXWAR = 2,
        RXWAR = 1,
        EWARN = 0,
    }
    aliases {
        "TXB0" => TXBO,
    }
}

bit_table! {
    /// TXBnCTRL, transmit buffer control
    TxbCtrlBit: TXBnCTRL, selector = TxBuffer, register = TxBuffer::ctrl,
    {
        ABTF = 6,
        MLOA = 5,
        TXERR = 4,
        TXREQ = 3,
        TXP1 = 1,
        TXP0 = 0,
    }
}

bit_table! {
    /// TXBnSIDL, extended identifier enable of the transmit buffer
    TxbSidlBit: TXBnSIDL, selector = TxBuffer, register = TxBuffer::sidl,
    {
        EXIDE = 3,
    }
}

bit_table! {
    /// TXBnDLC, remote transmission request and data length code
    TxbDlcBit: TXBnDLC, selector = TxBuffer, register = TxBuffer::dlc,
    {
        RTR = 6,
        DLC3 = 3,
        DLC2 = 2,
        DLC1 = 1,
        DLC0 = 0,
    }
}

bit_table! {
    /// RXBnSIDL, standard frame remote request and extended identifier flags
    RxbSidlBit: RXBnSIDL, selector = RxBuffer, register = RxBuffer::sidl,
    {
        SRR = 4,
        IDE = 3,
    }
}

bit_table! {
    /// RXB0CTRL, receive buffer 0 control
    Rxb0CtrlBit: RXB0CTRL, selector = (), register = |_| Register::RXB0CTRL,
    {
        RXM1 = 6,
        RXM0 = 5,
        RXRTR = 3,
        BUKT = 2,
        BUKT1 = 1,
        FILHIT0 = 0,
    }
}

bit_table! {
    /// RXB1CTRL, receive buffer 1 control
    Rxb1CtrlBit: RXB1CTRL, selector = (), register = |_| Register::RXB1CTRL,
    {
        RXM1 = 6,
        RXM0 = 5,
        RXRTR = 3,
        FILHIT2 = 2,
        FILHIT1 = 1,
        FILHIT0 = 0,
    }
}

bit_table! {
    /// RXBnDLC, extended frame remote request and data length code
    RxbDlcBit: RXBnDLC, selector = RxBuffer, register = RxBuffer::dlc,
    {
        RTR = 6,
        DLC3 = 3,
        DLC2 = 2,
        DLC1 = 1,
        DLC0 = 0,
    }
}

impl ModifiableField for BfpctrlBit {}
impl ModifiableField for TxrtsctrlBit {}
impl ModifiableField for CanctrlBit {}
impl ModifiableField for Cnf1Bit {}
impl ModifiableField for Cnf2Bit {}
impl ModifiableField for Cnf3Bit {}
impl ModifiableField for CaninteBit {}
impl ModifiableField for CanintfBit {}
impl ModifiableField for EflgBit {}
impl ModifiableField for TxbCtrlBit {}
impl ModifiableField for Rxb0CtrlBit {}
impl ModifiableField for Rxb1CtrlBit {}

impl CanstatBit {
    /// Operation mode bits, MSB first
    pub const OPMOD: [Self; 3] = [Self::OPMOD2, Self::OPMOD1, Self::OPMOD0];

    /// Interrupt code bits, MSB first
    pub const ICOD: [Self; 3] = [Self::ICOD2, Self::ICOD1, Self::ICOD0];
}

impl CanctrlBit {
    /// Request operation mode bits, MSB first
    pub const REQOP: [Self; 3] = [Self::REQOP2, Self::REQOP1, Self::REQOP0];

    /// CLKOUT prescaler bits, MSB first
    pub const CLKPRE: [Self; 2] = [Self::CLKPRE1, Self::CLKPRE0];
}

impl Cnf1Bit {
    pub const SJW: [Self; 2] = [Self::SJW1, Self::SJW0];

    pub const BRP: [Self; 6] = [Self::BRP5, Self::BRP4, Self::BRP3, Self::BRP2, Self::BRP1, Self::BRP0];
}

impl Cnf2Bit {
    pub const PHSEG1: [Self; 3] = [Self::PHSEG12, Self::PHSEG11, Self::PHSEG10];

    pub const PRSEG: [Self; 3] = [Self::PRSEG2, Self::PRSEG1, Self::PRSEG0];
}

impl Cnf3Bit {
    pub const PHSEG2: [Self; 3] = [Self::PHSEG22, Self::PHSEG21, Self::PHSEG20];
}

impl TxbCtrlBit {
    /// Transmit priority bits, MSB first
    pub const TXP: [Self; 2] = [Self::TXP1, Self::TXP0];
}

impl Rxb0CtrlBit {
    /// Receive buffer operating mode bits, MSB first
    pub const RXM: [Self; 2] = [Self::RXM1, Self::RXM0];
}

impl Rxb1CtrlBit {
    /// Receive buffer operating mode bits, MSB first
    pub const RXM: [Self; 2] = [Self::RXM1, Self::RXM0];

    /// Filter hit bits, MSB first
    pub const FILHIT: [Self; 3] = [Self::FILHIT2, Self::FILHIT1, Self::FILHIT0];
}

/// Register families of the bit table, for name based lookups
#[allow(clippy::upper_case_acronyms)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FieldFamily {
    BFPCTRL,
    TXRTSCTRL,
    CANSTAT,
    CANCTRL,
    CNF1,
    CNF2,
    CNF3,
    CANINTE,
    CANINTF,
    EFLG,
    TXBnCTRL,
    TXBnSIDL,
    TXBnDLC,
    RXBnSIDL,
    RXB0CTRL,
    RXB1CTRL,
    RXBnDLC,
}

impl FieldFamily {
    pub const ALL: [FieldFamily; 17] = [
        Self::BFPCTRL,
        Self::TXRTSCTRL,
        Self::CANSTAT,
        Self::CANCTRL,
        Self::CNF1,
        Self::CNF2,
        Self::CNF3,
        Self::CANINTE,
        Self::CANINTF,
        Self::EFLG,
        Self::TXBnCTRL,
        Self::TXBnSIDL,
        Self::TXBnDLC,
        Self::RXBnSIDL,
        Self::RXB0CTRL,
        Self::RXB1CTRL,
        Self::RXBnDLC,
    ];

    /// Datasheet name of the family, `n` standing for the buffer index
    pub const fn name(self) -> &'static str {
        match self {
            Self::BFPCTRL => "BFPCTRL",
            Self::TXRTSCTRL => "TXRTSCTRL",
            Self::CANSTAT => "CANSTAT",
            Self::CANCTRL => "CANCTRL",
            Self::CNF1 => "CNF1",
            Self::CNF2 => "CNF2",
            Self::CNF3 => "CNF3",
            Self::CANINTE => "CANINTE",
            Self::CANINTF => "CANINTF",
            Self::EFLG => "EFLG",
            Self::TXBnCTRL => "TXBnCTRL",
            Self::TXBnSIDL => "TXBnSIDL",
            Self::TXBnDLC => "TXBnDLC",
            Self::RXBnSIDL => "RXBnSIDL",
            Self::RXB0CTRL => "RXB0CTRL",
            Self::RXB1CTRL => "RXB1CTRL",
            Self::RXBnDLC => "RXBnDLC",
        }
    }

    /// Resolves a family name
    pub fn from_name(name: &str) -> Result<Self, LookupError> {
        match Self::ALL.iter().find(|family| family.name() == name) {
            Some(family) => Ok(*family),
            None => {
                debug!("Unknown register family: {name}");
                Err(LookupError::UnknownFamily)
            }
        }
    }

    /// (name, position) table of the family, aliases excluded
    pub fn entries(self) -> &'static [(&'static str, u8)] {
        match self {
            Self::BFPCTRL => BfpctrlBit::ENTRIES,
            Self::TXRTSCTRL => TxrtsctrlBit::ENTRIES,
            Self::CANSTAT => CanstatBit::ENTRIES,
            Self::CANCTRL => CanctrlBit::ENTRIES,
            Self::CNF1 => Cnf1Bit::ENTRIES,
            Self::CNF2 => Cnf2Bit::ENTRIES,
            Self::CNF3 => Cnf3Bit::ENTRIES,
            Self::CANINTE => CaninteBit::ENTRIES,
            Self::CANINTF => CanintfBit::ENTRIES,
            Self::EFLG => EflgBit::ENTRIES,
            Self::TXBnCTRL => TxbCtrlBit::ENTRIES,
            Self::TXBnSIDL => TxbSidlBit::ENTRIES,
            Self::TXBnDLC => TxbDlcBit::ENTRIES,
            Self::RXBnSIDL => RxbSidlBit::ENTRIES,
            Self::RXB0CTRL => Rxb0CtrlBit::ENTRIES,
            Self::RXB1CTRL => Rxb1CtrlBit::ENTRIES,
            Self::RXBnDLC => RxbDlcBit::ENTRIES,
        }
    }

    /// Returns the bit position of the named field within this family
    pub fn position(self, field: &str) -> Result<u8, LookupError> {
        match self {
            Self::BFPCTRL => position_of::<BfpctrlBit>(field),
            Self::TXRTSCTRL => position_of::<TxrtsctrlBit>(field),
            Self::CANSTAT => position_of::<CanstatBit>(field),
            Self::CANCTRL => position_of::<CanctrlBit>(field),
            Self::CNF1 => position_of::<Cnf1Bit>(field),
            Self::CNF2 => position_of::<Cnf2Bit>(field),
            Self::CNF3 => position_of::<Cnf3Bit>(field),
            Self::CANINTE => position_of::<CaninteBit>(field),
            Self::CANINTF => position_of::<CanintfBit>(field),
            Self::EFLG => position_of::<EflgBit>(field),
            Self::TXBnCTRL => position_of::<TxbCtrlBit>(field),
            Self::TXBnSIDL => position_of::<TxbSidlBit>(field),
            Self::TXBnDLC => position_of::<TxbDlcBit>(field),
            Self::RXBnSIDL => position_of::<RxbSidlBit>(field),
            Self::RXB0CTRL => position_of::<Rxb0CtrlBit>(field),
            Self::RXB1CTRL => position_of::<Rxb1CtrlBit>(field),
            Self::RXBnDLC => position_of::<RxbDlcBit>(field),
        }
    }
}

impl FromStr for FieldFamily {
    type Err = LookupError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name)
    }
}

fn position_of<F: RegisterField>(field: &str) -> Result<u8, LookupError> {
    F::from_name(field).map(F::position)
}
