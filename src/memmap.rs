//! Special-function-register names for the data space. Unnamed slots and
//! locations past the table render as a bracketed hex literal.

pub const MEMORY_MAP: &[Option<&str>] = &[
    // 0x00
    Some("IAR0"),
    Some("MP0"),
    Some("IAR1"),
    Some("MP1"),
    Some("BP"),
    Some("ACC"),
    Some("PCL"),
    Some("TBLP"),
    Some("TBLH"),
    Some("TBHP"),
    Some("STATUS"),
    Some("SMOD"),
    Some("CTRL"),
    Some("INTEG"),
    Some("INTC0"),
    Some("INTC1"),
    // 0x10
    None,
    None,
    None,
    Some("LVRC"),
    Some("PA"),
    Some("PAC"),
    Some("PAPU"),
    Some("PAWU"),
    None,
    None,
    Some("WDTC"),
    Some("TBC"),
    Some("TMR"),
    Some("TMRC"),
    Some("EEA"),
    Some("EED"),
    // 0x20
    Some("PB"),
    Some("PBC"),
    Some("PBPU"),
    Some("I2CTOC"),
    Some("SIMC0"),
    Some("SIMC1"),
    Some("SIMD"),
    Some("SIMC2"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    // 0x30
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    // 0x40
    None,
    None,
    None,
    None,
    Some("TKTMR"),
    Some("TKC0"),
    Some("TK16DL"),
    Some("TK16DH"),
    Some("TKC1"),
    Some("TKM016DL"),
    Some("TKM016DH"),
    Some("TKM0ROL"),
    Some("TKM0ROH"),
    Some("TKM0C0"),
    Some("TKM0C1"),
    Some("TKM116DL"),
    // 0x50
    Some("TKM116DH"),
    Some("TKM1ROL"),
    Some("TKM1ROH"),
    Some("TKM1C0"),
    Some("TKM1C1"),
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
    None,
];

/// Symbolic name for a data-space location, or `[0XXh]` when there is none.
pub fn lookup(location: u8) -> String {
    MEMORY_MAP
        .get(location as usize)
        .copied()
        .flatten()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("[0{location:02X}h]"))
}
