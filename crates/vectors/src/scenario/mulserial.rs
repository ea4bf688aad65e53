//! `mulserial`: a serial multiply on core 0.
//!
//! Core 0 loads two operands, multiplies them, stores the product, and halts.
//! Every other core halts immediately.
//!
//! | address | value |
//! |---------|-------|
//! | 0       | 2     |
//! | 4       | 3     |
//! | 8       | product, written by the program |

use crate::image::{MemoryImage, Program};
use crate::scenario::Scenario;

/// Registry name of this scenario.
pub const NAME: &str = "mulserial";

/// First operand, seeded at address 0.
const LHS: u32 = 2;

/// Second operand, seeded at address 4.
const RHS: u32 = 3;

/// Builds the scenario for `core_count` cores.
///
/// Core 0 carries the workload, so `core_count` must be at least 1;
/// [`crate::scenario::build`] enforces this.
pub fn build(core_count: usize) -> Scenario {
    let core0 = Program::new()
        .lw(2, 0, 0, 0) // R2 = MEM[0]
        .lw(3, 0, 1, 4) // R3 = MEM[4]
        .mul(4, 2, 3, 0) // R4 = R2 * R3
        .sw(4, 0, 1, 8) // MEM[8] = R4
        .halt();

    let programs = std::iter::once(core0)
        .chain(std::iter::repeat_with(Program::idle))
        .take(core_count)
        .collect();

    let memory = MemoryImage::new().store(0, LHS).store(4, RHS);

    Scenario::new(NAME, programs, memory)
}
