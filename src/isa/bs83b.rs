use crate::decoder::{bit_index, data_address, Decoder, Format, Instruction, Op};
use crate::instructions::{fixed_field_lookup, ADDRESS, BIT, LITERAL, M2A, SPECIAL};

/// Holtek BS83B08A-3 decoder.
///
/// Pattern groups are tried in a fixed order. Several group masks overlap
/// (the Bit mask admits words the Special group already claimed), so the
/// order is part of the encoding: Special, Bit, Address, fixed-field,
/// Literal, then the M2A fallback. A word that matches a group's mark but
/// misses its sub-table falls through to the next group.
pub struct Bs83bDecoder;

impl Bs83bDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Bs83bDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for Bs83bDecoder {
    fn decode(&self, word: u16, address: u16) -> Instruction {
        if let Some(mnemonic) = SPECIAL.lookup(word) {
            return Instruction::new(address, word, Op::Special { mnemonic });
        }

        if let Some(mnemonic) = BIT.lookup(word) {
            let op = Op::Bit {
                mnemonic,
                mem: data_address(word),
                bit: bit_index(word),
            };
            return Instruction::new(address, word, op);
        }

        if let Some(mnemonic) = ADDRESS.lookup(word) {
            let op = Op::Address {
                mnemonic,
                target: word & 0x7FF,
            };
            return Instruction::new(address, word, op);
        }

        if let Some((format, mnemonic)) = fixed_field_lookup(word) {
            let mem = data_address(word);
            let op = match format {
                Format::M2A => Op::M2A { mnemonic, mem },
                Format::A2M => Op::A2M { mnemonic, mem },
                Format::Memory => Op::Memory { mnemonic, mem },
                other => unreachable!("fixed-field table holds {other:?}"),
            };
            return Instruction::new(address, word, op);
        }

        if let Some(mnemonic) = LITERAL.lookup(word) {
            let op = Op::Literal {
                mnemonic,
                value: (word & 0xFF) as u8,
            };
            return Instruction::new(address, word, op);
        }

        // Unreachable in practice: the fixed-field table carries the same
        // key and matches first. Kept so the priority chain mirrors the
        // group tables one-to-one.
        if let Some(mnemonic) = M2A.lookup(word) {
            let op = Op::M2A {
                mnemonic,
                mem: data_address(word),
            };
            return Instruction::new(address, word, op);
        }

        Instruction::new(address, word, Op::Invalid)
    }
}
