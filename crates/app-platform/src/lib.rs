//! Platform services for Campus Buzz
//!
//! This crate covers the device facilities the feed talks to: the hardware
//! back-navigation signal and haptic feedback.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod back_handler;
pub mod haptics;

pub use back_handler::{BackHandlerRegistry, BackSubscription};
pub use haptics::{HapticEngine, ImpactStyle, NoopHaptics, TracingHaptics};
