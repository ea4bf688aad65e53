//! Opcode Table.
//!
//! Defines the 8-bit operation codes (bits 31-24) understood by the simulator and
//! the fixed mnemonic table used to resolve symbolic opcodes. Codes 18-20 are
//! reserved and have no mnemonic.

/// Register-register addition.
pub const OP_ADD: u8 = 0;

/// Register-register subtraction.
pub const OP_SUB: u8 = 1;

/// Bitwise AND.
pub const OP_AND: u8 = 2;

/// Bitwise OR.
pub const OP_OR: u8 = 3;

/// Bitwise XOR.
pub const OP_XOR: u8 = 4;

/// Multiplication.
pub const OP_MUL: u8 = 5;

/// Shift left logical.
pub const OP_SLL: u8 = 6;

/// Shift right arithmetic.
pub const OP_SRA: u8 = 7;

/// Shift right logical.
pub const OP_SRL: u8 = 8;

/// Branch if equal.
pub const OP_BEQ: u8 = 9;

/// Branch if not equal.
pub const OP_BNE: u8 = 10;

/// Branch if less than.
pub const OP_BLT: u8 = 11;

/// Branch if greater than.
pub const OP_BGT: u8 = 12;

/// Branch if less than or equal.
pub const OP_BLE: u8 = 13;

/// Branch if greater than or equal.
pub const OP_BGE: u8 = 14;

/// Jump and link.
pub const OP_JAL: u8 = 15;

/// Load word.
pub const OP_LW: u8 = 16;

/// Store word.
pub const OP_SW: u8 = 17;

/// Halt the issuing core.
pub const OP_HALT: u8 = 21;

/// Mnemonic to code mapping. Lookup is exact and case-sensitive.
pub const OPCODE_TABLE: [(&str, u8); 19] = [
    ("add", OP_ADD),
    ("sub", OP_SUB),
    ("and", OP_AND),
    ("or", OP_OR),
    ("xor", OP_XOR),
    ("mul", OP_MUL),
    ("sll", OP_SLL),
    ("sra", OP_SRA),
    ("srl", OP_SRL),
    ("beq", OP_BEQ),
    ("bne", OP_BNE),
    ("blt", OP_BLT),
    ("bgt", OP_BGT),
    ("ble", OP_BLE),
    ("bge", OP_BGE),
    ("jal", OP_JAL),
    ("lw", OP_LW),
    ("sw", OP_SW),
    ("halt", OP_HALT),
];

/// Resolves a mnemonic to its opcode, or `None` if it is not in the table.
pub fn lookup(mnemonic: &str) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .find(|(name, _)| *name == mnemonic)
        .map(|&(_, code)| code)
}

/// Returns the mnemonic for an opcode, or `None` for reserved/unassigned codes.
pub fn mnemonic(code: u8) -> Option<&'static str> {
    OPCODE_TABLE
        .iter()
        .find(|&&(_, c)| c == code)
        .map(|&(name, _)| name)
}
