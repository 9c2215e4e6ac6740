mod bridge;

pub use bridge::{ParseHandle, parse};
