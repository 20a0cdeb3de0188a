use std::collections::HashMap;

use tracing::debug;

use crate::decoder::{Instruction, Op};

/// Assign a symbolic name to every distinct jump/call target.
///
/// One forward pass over the fully decoded program; a target gets a name
/// the first time any instruction references it, so forward and backward
/// references resolve alike. Names are `labelNNNN` with a counter that
/// follows first-occurrence order, not target order.
pub fn assign_labels(instructions: &[Instruction]) -> HashMap<u16, String> {
    let mut labels: HashMap<u16, String> = HashMap::new();
    let mut counter: u16 = 0;
    for insn in instructions {
        if let Op::Address { target, .. } = insn.op {
            if labels.contains_key(&target) {
                continue;
            }
            labels.insert(target, format!("label{counter:04X}"));
            counter += 1;
        }
    }
    debug!(count = labels.len(), "assigned jump/call labels");
    labels
}
