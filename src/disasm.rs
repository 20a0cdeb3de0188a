use std::collections::HashMap;
use std::fmt::Write as _;

use tracing::debug;

use crate::decoder::{Decoder, Instruction, Op};
use crate::isa::bs83b::Bs83bDecoder;
use crate::labels::assign_labels;
use crate::memmap;

/// Render one instruction as listing text.
///
/// Pure function of the instruction and the read-only label table. The line
/// is prefixed with address and raw word; when a label is defined at this
/// address, the label header (blank line, `name:`, blank line) comes first.
pub fn fmt_instruction(
    insn: &Instruction,
    labels: &HashMap<u16, String>,
    with_labels: bool,
) -> String {
    let mut out = String::new();

    if let Some(label) = labels.get(&insn.address) {
        let _ = write!(out, "\n{label}:\n\n");
    }

    let _ = write!(out, "{:04X}\t{:04X}\t", insn.address, insn.word);

    match insn.op {
        Op::Special { mnemonic } => {
            let _ = write!(out, "{mnemonic}");
        }
        Op::M2A { mnemonic, mem } => {
            let _ = write!(out, "{mnemonic}\t{}, A", memmap::lookup(mem));
        }
        Op::A2M { mnemonic, mem } => {
            let _ = write!(out, "{mnemonic}\tA, {}", memmap::lookup(mem));
        }
        Op::Literal { mnemonic, value } => {
            let _ = write!(out, "{mnemonic}\tA, 0{value:02X}h");
        }
        Op::Address { mnemonic, target } => {
            match labels.get(&target).filter(|_| with_labels) {
                Some(label) => {
                    let _ = write!(out, "{mnemonic}\t{label}");
                }
                None => {
                    let _ = write!(out, "{mnemonic}\t0{target:04X}h");
                }
            }
        }
        Op::Bit { mnemonic, mem, bit } => {
            let _ = write!(out, "{mnemonic}\t{}.{bit}", memmap::lookup(mem));
        }
        Op::Memory { mnemonic, mem } => {
            let _ = write!(out, "{mnemonic}\t{}", memmap::lookup(mem));
        }
        Op::Invalid => {
            let _ = write!(out, "; ({:016b}) Invalid opcode", insn.word);
        }
    }

    out.push('\n');
    out
}

/// Disassemble a whole program: decode every word, resolve labels (unless
/// disabled), and concatenate one line per instruction in address order.
pub fn disassemble(words: &[u16], with_labels: bool) -> String {
    let decoder = Bs83bDecoder::new();
    let instructions: Vec<Instruction> = words
        .iter()
        .enumerate()
        .map(|(address, &word)| decoder.decode(word, address as u16))
        .collect();
    debug!(words = instructions.len(), "decoded program");

    let labels = if with_labels {
        assign_labels(&instructions)
    } else {
        HashMap::new()
    };

    let mut out = String::new();
    for insn in &instructions {
        out.push_str(&fmt_instruction(insn, &labels, with_labels));
    }
    out
}
