//! Actuator and input drivers over `embedded-hal` 1.0 traits.

pub mod fan;
pub mod servo;
pub mod trigger;
