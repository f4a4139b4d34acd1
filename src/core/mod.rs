pub mod assembler;
pub mod engine;
pub mod segmenter;
pub mod table;
pub mod types;
