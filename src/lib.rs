pub mod config;
pub mod core;
pub mod menu;
pub mod selection;

pub use crate::core::decoder::{decode, try_decode, DecodeError, INVALID_SELECTION};
pub use crate::core::jamo_table::{JamoTable, FINAL_CONSONANTS, INITIAL_CONSONANTS, VOWELS};
pub use crate::core::unicode::HangulBlock;
pub use selection::{relay, RelayOutcome, ResultDisplay, SelectionProvider};
