pub mod dump;
pub mod harness;
pub mod target;
