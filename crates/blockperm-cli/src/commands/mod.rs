pub mod decompose;
pub mod parse_system;
pub mod permute;
pub mod zero_sets;
