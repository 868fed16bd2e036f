use crate::fields::*;
use crate::layout::{CanCtrlReg, Cnf2Reg, ErrorFlagReg, InterruptReg, Rxb0CtrlReg, Rxb1CtrlReg, TxbCtrlReg};
use crate::registers::{LookupError, Register, RxBuffer, TxBuffer};

#[test]
fn test_family_positions_distinct_and_in_range() {
    for family in FieldFamily::ALL {
        let entries = family.entries();
        assert!(!entries.is_empty());

        for (index, (name, position)) in entries.iter().enumerate() {
            assert!(*position <= 7, "{name} in {}", family.name());
            assert!(
                entries[index + 1..].iter().all(|(other, p)| p != position && other != name),
                "{name} in {}",
                family.name()
            );
            assert_eq!(Ok(*position), family.position(name));
        }
    }
}

#[test]
fn test_family_from_name() {
    for family in FieldFamily::ALL {
        assert_eq!(Ok(family), FieldFamily::from_name(family.name()));
    }

    assert_eq!(Ok(FieldFamily::TXBnCTRL), "TXBnCTRL".parse());
    assert_eq!(Err(LookupError::UnknownFamily), FieldFamily::from_name("TXB0CTRL"));
}

#[test]
fn test_unknown_field() {
    assert_eq!(
        Err(LookupError::UnknownField(FieldFamily::CANCTRL)),
        FieldFamily::CANCTRL.position("TXREQ")
    );
    assert_eq!(
        Err(LookupError::UnknownField(FieldFamily::RXB0CTRL)),
        Rxb0CtrlBit::from_name("FILHIT1")
    );
}

#[test]
fn test_known_positions() {
    assert_eq!(Ok(4), FieldFamily::CANCTRL.position("ABAT"));
    assert_eq!(Ok(7), FieldFamily::CANCTRL.position("REQOP2"));
    assert_eq!(Ok(3), FieldFamily::TXBnCTRL.position("TXREQ"));
    assert_eq!(Ok(3), FieldFamily::TXBnSIDL.position("EXIDE"));
    assert_eq!(Ok(4), FieldFamily::RXBnSIDL.position("SRR"));
    assert_eq!(Ok(6), FieldFamily::RXBnDLC.position("RTR"));
    assert_eq!(Ok(2), FieldFamily::RXB0CTRL.position("BUKT"));
    assert_eq!(Ok(0), FieldFamily::CANINTF.position("RX0IF"));
    assert_eq!(Ok(7), FieldFamily::CNF3.position("SOF"));
    assert_eq!(Ok(3), FieldFamily::CANCTRL.position("OSM"));
}

#[test]
fn test_aliases() {
    assert_eq!(Ok(Cnf2Bit::PRSEG2), Cnf2Bit::from_name("PHSEG2"));
    assert_eq!(Ok(Cnf2Bit::PRSEG0), Cnf2Bit::from_name("PHSEG0"));
    assert_eq!(Ok(Cnf2Bit::PHSEG12), Cnf2Bit::from_name("PHSEG12"));
    assert_eq!(Ok(EflgBit::TXBO), EflgBit::from_name("TXB0"));
    assert_eq!(Ok(5), FieldFamily::EFLG.position("TXB0"));

    // aliases are not part of the entry tables
    assert!(FieldFamily::CNF2.entries().iter().all(|(name, _)| *name != "PHSEG2"));
}

#[test]
fn test_field_registers() {
    assert_eq!(Register::CANCTRL, CanctrlBit::register(()));
    assert_eq!(Register::TXB1CTRL, TxbCtrlBit::register(TxBuffer::TXB1));
    assert_eq!(Register::TXB2SIDL, TxbSidlBit::register(TxBuffer::TXB2));
    assert_eq!(Register::RXB1DLC, RxbDlcBit::register(RxBuffer::RXB1));
    assert_eq!(FieldFamily::TXBnDLC, TxbDlcBit::FAMILY);
}

#[test]
fn test_field_mask() {
    assert_eq!(0b0001_0000, CanctrlBit::ABAT.mask());
    assert_eq!(0b1000_0000, CanintfBit::MERRF.mask());
    assert_eq!(0b0000_0001, Rxb1CtrlBit::FILHIT0.mask());
}

#[test]
fn test_fields_match_register_layouts() {
    assert_eq!(u8::from(CanCtrlReg::new().with_abat(true)), CanctrlBit::ABAT.mask());
    assert_eq!(u8::from(CanCtrlReg::new().with_osm(true)), CanctrlBit::OSM.mask());
    assert_eq!(u8::from(CanCtrlReg::new().with_clken(true)), CanctrlBit::CLKEN.mask());
    assert_eq!(u8::from(CanCtrlReg::new().with_reqop(0b100)), CanctrlBit::REQOP2.mask());
    assert_eq!(u8::from(Cnf2Reg::new().with_sam(true)), Cnf2Bit::SAM.mask());
    assert_eq!(u8::from(InterruptReg::new().with_tx1(true)), CanintfBit::TX1IF.mask());
    assert_eq!(u8::from(InterruptReg::new().with_merr(true)), CaninteBit::MERRE.mask());
    assert_eq!(u8::from(ErrorFlagReg::new().with_txbo(true)), EflgBit::TXBO.mask());
    assert_eq!(u8::from(TxbCtrlReg::new().with_txreq(true)), TxbCtrlBit::TXREQ.mask());
    assert_eq!(u8::from(TxbCtrlReg::new().with_abtf(true)), TxbCtrlBit::ABTF.mask());
    assert_eq!(u8::from(Rxb0CtrlReg::new().with_bukt(true)), Rxb0CtrlBit::BUKT.mask());
    assert_eq!(u8::from(Rxb0CtrlReg::new().with_rxm(0b10)), Rxb0CtrlBit::RXM1.mask());
    assert_eq!(u8::from(Rxb1CtrlReg::new().with_rxm(0b01)), Rxb1CtrlBit::RXM0.mask());
    assert_eq!(u8::from(Rxb1CtrlReg::new().with_filhit(0b100)), Rxb1CtrlBit::FILHIT2.mask());
}

#[test]
fn test_field_groups_msb_first() {
    for group in [&CanctrlBit::REQOP[..], &CanctrlBit::CLKPRE[..]] {
        assert!(group.windows(2).all(|pair| pair[0].position() == pair[1].position() + 1));
    }

    assert!(Cnf1Bit::BRP.windows(2).all(|pair| pair[0].position() == pair[1].position() + 1));
    assert!(Rxb1CtrlBit::FILHIT.windows(2).all(|pair| pair[0].position() == pair[1].position() + 1));
}
