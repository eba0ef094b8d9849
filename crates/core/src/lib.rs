#![forbid(unsafe_code)]

pub mod catalog;
pub mod model;
pub mod reading;
pub mod time;

pub use time::Clock;
