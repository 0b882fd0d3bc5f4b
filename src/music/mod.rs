pub mod notes;
pub mod scales;
