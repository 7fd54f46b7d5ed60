//! Foundation module - Core utilities and types
//!
//! - Math types and colour helpers
//! - Clocks, frame timing and one-shot timers
//! - Logging setup

pub mod math;
pub mod time;
pub mod logging;
