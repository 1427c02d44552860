#![forbid(unsafe_code)]

pub mod decorations;
pub mod games;
pub mod model;
pub mod time;

pub use time::Clock;
