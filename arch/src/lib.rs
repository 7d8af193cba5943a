pub mod op;

pub use op::OpKind;
pub use op::{
    ADD, AND, COMPL, DROP, DUP, IN, JMP, JNZ, JZ, LOAD, NOP, NOT, OR, OUT, OUTNUM, PUSH, ROL3,
    STOR, SUB, SWAP, XOR,
};
