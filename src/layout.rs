//!# Register layouts
//! Typed views of the control registers with multi-bit fields.
//! Field order is MSB first, matching the datasheet register diagrams.
#![allow(unused_braces, unused_parens)]
use modular_bitfield_msb::prelude::*;

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// CNF1 configuration register
pub struct Cnf1Reg {
    /// Synchronization jump width length bits, length = (sjw + 1) x TQ
    pub sjw: B2,
    /// Baud rate prescaler bits, TQ = 2 x (brp + 1) / Fosc
    pub brp: B6,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// CNF2 configuration register
pub struct Cnf2Reg {
    /// PS2 bit time length bit, PS2 length determined by CNF3 if set
    pub btlmode: bool,
    /// Sample point configuration bit, bus line is sampled three times if set
    pub sam: bool,
    /// PS1 length bits, length = (phseg1 + 1) x TQ
    pub phseg1: B3,
    /// Propagation segment length bits, length = (prseg + 1) x TQ
    pub prseg: B3,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// CNF3 configuration register
pub struct Cnf3Reg {
    /// Start-of-frame signal bit (CLKOUT pin)
    pub sof: bool,
    /// Wake-up filter bit
    pub wakfil: bool,
    #[skip]
    __: B3,
    /// PS2 length bits, length = (phseg2 + 1) x TQ
    pub phseg2: B3,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// CANCTRL register
pub struct CanCtrlReg {
    /// Request operation mode bits
    pub reqop: B3,
    /// Abort all pending transmit buffers
    pub abat: bool,
    /// One-shot mode bit
    pub osm: bool,
    /// CLKOUT pin enable bit
    pub clken: bool,
    /// CLKOUT pin prescaler bits
    pub clkpre: B2,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// Layout shared by the CANINTE (enable) and CANINTF (flag) registers
pub struct InterruptReg {
    /// Message error
    pub merr: bool,
    /// Wake-up
    pub wak: bool,
    /// Error (multiple sources in EFLG)
    pub err: bool,
    /// Transmit buffer 2 empty
    pub tx2: bool,
    /// Transmit buffer 1 empty
    pub tx1: bool,
    /// Transmit buffer 0 empty
    pub tx0: bool,
    /// Receive buffer 1 full
    pub rx1: bool,
    /// Receive buffer 0 full
    pub rx0: bool,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// EFLG register
pub struct ErrorFlagReg {
    /// Receive buffer 1 overflow
    pub rx1ovr: bool,
    /// Receive buffer 0 overflow
    pub rx0ovr: bool,
    /// Bus-off, TEC reached 255
    pub txbo: bool,
    /// Transmit error-passive, TEC >= 128
    pub txep: bool,
    /// Receive error-passive, REC >= 128
    pub rxep: bool,
    /// Transmit error warning, TEC >= 96
    pub txwar: bool,
    /// Receive error warning, REC >= 96
    pub rxwar: bool,
    /// Error warning, TXWAR or RXWAR set
    pub ewarn: bool,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// TXBnCTRL register
pub struct TxbCtrlReg {
    #[skip]
    __: B1,
    /// Message aborted
    pub abtf: bool,
    /// Message lost arbitration
    pub mloa: bool,
    /// Transmission error detected
    pub txerr: bool,
    /// Message transmit request
    pub txreq: bool,
    #[skip]
    __: B1,
    /// Transmit buffer priority
    pub txp: B2,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// RXB0CTRL register
pub struct Rxb0CtrlReg {
    #[skip]
    __: B1,
    /// Receive buffer operating mode
    pub rxm: B2,
    #[skip]
    __: B1,
    /// Received remote transfer request
    pub rxrtr: bool,
    /// Rollover enable, RXB0 overflows into RXB1
    pub bukt: bool,
    /// Read-only copy of BUKT
    pub bukt1: bool,
    /// Filter hit, RXF0 or RXF1 accepted the message
    pub filhit0: bool,
}

#[bitfield]
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
/// RXB1CTRL register
pub struct Rxb1CtrlReg {
    #[skip]
    __: B1,
    /// Receive buffer operating mode
    pub rxm: B2,
    #[skip]
    __: B1,
    /// Received remote transfer request
    pub rxrtr: bool,
    /// Filter hit, index of the accepting filter
    pub filhit: B3,
}
