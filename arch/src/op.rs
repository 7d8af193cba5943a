use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

/// Stack machine operations. The discriminant is the opcode word.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumIter,
    EnumCount,
    Display,
    IntoStaticStr,
)]
#[repr(u32)]
#[strum(serialize_all = "lowercase")]
pub enum OpKind {
    NOP = 0,
    ADD,
    SUB,
    AND,
    OR,
    XOR,
    NOT,
    IN,
    OUT,
    LOAD,
    STOR,
    JMP,
    JZ,
    PUSH,
    DUP,
    SWAP,
    ROL3,
    OUTNUM,
    JNZ,
    DROP,
    COMPL,
}

pub const NOP: u32 = OpKind::NOP as u32;
pub const ADD: u32 = OpKind::ADD as u32;
pub const SUB: u32 = OpKind::SUB as u32;
pub const AND: u32 = OpKind::AND as u32;
pub const OR: u32 = OpKind::OR as u32;
pub const XOR: u32 = OpKind::XOR as u32;
pub const NOT: u32 = OpKind::NOT as u32;
pub const IN: u32 = OpKind::IN as u32;
pub const OUT: u32 = OpKind::OUT as u32;
pub const LOAD: u32 = OpKind::LOAD as u32;
pub const STOR: u32 = OpKind::STOR as u32;
pub const JMP: u32 = OpKind::JMP as u32;
pub const JZ: u32 = OpKind::JZ as u32;
pub const PUSH: u32 = OpKind::PUSH as u32;
pub const DUP: u32 = OpKind::DUP as u32;
pub const SWAP: u32 = OpKind::SWAP as u32;
pub const ROL3: u32 = OpKind::ROL3 as u32;
pub const OUTNUM: u32 = OpKind::OUTNUM as u32;
pub const JNZ: u32 = OpKind::JNZ as u32;
pub const DROP: u32 = OpKind::DROP as u32;
pub const COMPL: u32 = OpKind::COMPL as u32;

// Mnemonic table. Keys are lowercase; lookups fold case first.
static OP_STR: Lazy<BiMap<OpKind, &'static str>> =
    Lazy::new(|| OpKind::iter().map(|op| (op, op.mnemonic())).collect());

impl OpKind {
    /// Looks up a mnemonic, ignoring ASCII case.
    pub fn parse(s: &str) -> Option<Self> {
        OP_STR.get_by_right(s.to_ascii_lowercase().as_str()).copied()
    }

    pub fn code(self) -> u32 {
        self.into()
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::try_from(code).ok()
    }

    pub fn mnemonic(self) -> &'static str {
        self.into()
    }

    pub fn all() -> impl Iterator<Item = OpKind> {
        Self::iter()
    }
}
