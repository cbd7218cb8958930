//! Peripheral assignments and PWM timing for the tracker main board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding periods or ranges. Pin labels match the GD32VF103 carrier
//! (timer channels are configured by the board bring-up code).

// ---------------------------------------------------------------------------
// Aim servos (TIMER4, 1 MHz tick, 20 ms frame)
// ---------------------------------------------------------------------------

/// Azimuth servo signal: PA1 / TIMER4_CH1.
pub const AZIMUTH_SERVO_PIN: &str = "PA1";
/// Elevation servo signal: PA2 / TIMER4_CH2.
pub const ELEVATION_SERVO_PIN: &str = "PA2";

/// Servo frame period in microseconds (50 Hz).
pub const SERVO_PERIOD_US: u16 = 20_000;
/// Shortest accepted pulse (0 degrees of travel).
pub const SERVO_MIN_PULSE_US: u16 = 1_000;
/// Longest accepted pulse (180 degrees of travel).
pub const SERVO_MAX_PULSE_US: u16 = 2_000;
/// Mid-travel pulse.
pub const SERVO_NEUTRAL_PULSE_US: u16 = 1_500;

// ---------------------------------------------------------------------------
// Cooling fan (TIMER1)
// ---------------------------------------------------------------------------

/// Fan PWM output: PA0 / TIMER1_CH0.
pub const FAN_PWM_PIN: &str = "PA0";

/// Full-scale fan duty in timer counts.
pub const FAN_DUTY_MAX: u16 = 16_000;
/// Timer counts per percent of cooling intensity.
pub const FAN_DUTY_PER_PERCENT: u16 = FAN_DUTY_MAX / 100;

// ---------------------------------------------------------------------------
// Mode button
// ---------------------------------------------------------------------------

/// Mode-cycle push-button: PB0, active high.
pub const MODE_BUTTON_PIN: &str = "PB0";

