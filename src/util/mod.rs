#[macro_use]
pub mod macros;

pub mod pause;
pub mod permute;
