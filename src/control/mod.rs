//! Per-frame decision logic: reduction, hotspot location, aim mapping,
//! cooling response and mode selection. Pure functions and small state
//! machines only; no I/O.

pub mod aim;
pub mod cooling;
pub mod hotspot;
pub mod mode;
pub mod reducer;
