pub mod decoder;
pub mod disasm;
pub mod instructions;
pub mod labels;
pub mod memmap;
pub mod rom;

pub mod isa {
    pub mod bs83b; // Holtek BS83B08A-3 family
}

pub use decoder::{Decoder, Format, Instruction, Op};
pub use disasm::{disassemble, fmt_instruction};
pub use rom::{load_rom, RomError};
