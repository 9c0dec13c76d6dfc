//! 영문 자판 입력 -> 한글 역조합 핵심 로직

pub mod decoder;
pub mod jamo_table;
pub mod unicode;
