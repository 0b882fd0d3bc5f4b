use thiserror::Error;

pub mod fretboard;
pub mod music;
pub mod render;


/// Semitone offset from the reference tone: `Do`/`C` = 1 through `Si`/`B` = 12.
///
/// Transposition sums above 12 fold back with `% 12`. A sum landing exactly on
/// 12 is kept as-is, so 12 always reads as `Si`/`B` and never as an overflow.
pub type PitchClass = u8;


#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("unknown naming convention '{name}' (expected one of: {known})")]
    UnknownConvention { name: String, known: String },

    #[error("unknown note name '{name}' in convention '{convention}'")]
    UnknownNoteName { name: String, convention: String },

    #[error("unknown orientation '{0}' (expected 'vertical' or 'horizontal')")]
    InvalidOrientation(String),
}
