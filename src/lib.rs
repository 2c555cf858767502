pub mod assembler;
pub mod parser;
pub mod viewer;
