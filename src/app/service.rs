//! Application service: the control loop.
//!
//! [`TrackerService`] owns the control context and the calibrated aim and
//! cooling stages. All I/O flows through port traits injected at call
//! sites, so the whole loop runs one cycle at a time against mocks.
//!
//! ```text
//!   SensorPort ──▶ ┌──────────────────────────────┐ ──▶ EventSink
//!                  │        TrackerService         │
//!  ActuatorPort ◀──│ reduce · aim · cooling · mode │
//!   TriggerPort ──▶└──────────────────────────────┘
//! ```

use embedded_hal::delay::DelayNs;
use log::{debug, info, warn};

use crate::config::ControllerConfig;
use crate::control::aim::{AimCommand, AimMapper, Axis};
use crate::control::cooling::{self, CoolingCurve};
use crate::control::mode::ControlMode;
use crate::control::reducer;
use crate::error::Result;
use crate::sensors::frame::ThermalImage;

use super::context::ControlContext;
use super::events::{AppEvent, CycleTelemetry};
use super::ports::{ActuatorPort, EventSink, SensorPort, TriggerPort};

// ───────────────────────────────────────────────────────────────
// TrackerService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates one frame → command cycle.
pub struct TrackerService {
    ctx: ControlContext,
    aim: AimMapper,
    cooling: CoolingCurve,
    target_c: i16,
    frame_interval_ms: u32,
    home_settle_ms: u32,
    telemetry_interval_cycles: u32,
}

impl TrackerService {
    /// Construct the service from a validated configuration.
    pub fn new(config: ControllerConfig) -> Self {
        debug_assert!(config.validate().is_ok(), "unvalidated config");
        let cooling = CoolingCurve::new(config.cooling);
        let ctx = ControlContext::new(config.initial_mode, cooling.profile_count());

        Self {
            ctx,
            aim: AimMapper::new(config.aim),
            cooling,
            target_c: config.target_temperature_c,
            frame_interval_ms: config.frame_interval_ms,
            home_settle_ms: config.home_settle_ms,
            telemetry_interval_cycles: config.telemetry_interval_cycles.max(1),
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce the service and its initial mode.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        let mode = self.ctx.mode();
        sink.emit(&AppEvent::Started { mode });
        info!("TrackerService started in mode {}", mode);
    }

    /// Drive both servos to neutral so the head starts from a known pose.
    pub fn home(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let neutral = self.aim.neutral();
        self.emit_aim(hw, neutral);
        self.ctx.homed = true;
        sink.emit(&AppEvent::Homed {
            neutral_us: self.aim.calibration().neutral_us,
        });
        info!("Servos homed to {}us", self.aim.calibration().neutral_us);
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one full cycle: acquire → reduce → cooling → aim → trigger.
    ///
    /// Every command is computed before any is written, so a failure part
    /// way through never leaves the actuators with a mix of old and new
    /// commands. A failed acquisition, or a frame with non-finite readings,
    /// skips all actuator writes but still samples the trigger.
    pub fn cycle(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + TriggerPort),
        sink: &mut impl EventSink,
    ) -> Result<CycleTelemetry> {
        self.ctx.cycle_count += 1;

        // 1. Acquire
        let acquired = hw
            .acquire_frame(&mut self.ctx.frame)
            .and_then(|()| self.ctx.frame.check_readings());
        if let Err(e) = acquired {
            self.ctx.frames_dropped += 1;
            warn!("Cycle {}: frame dropped ({})", self.ctx.cycle_count, e);
            sink.emit(&AppEvent::FrameDropped(e));
            self.poll_trigger(hw, sink);
            return Err(e.into());
        }
        let ambient_c = hw.ambient_temperature();

        // 2. Reduce
        let stats = reducer::reduce(&self.ctx.frame);

        // 3. Cooling
        let mode = self.ctx.mode();
        let cooling_percent = self.cooling.intensity(self.target_c, stats.max, mode);
        let cooling_duty = cooling::duty_for_percent(cooling_percent);

        // 4. Aim
        let decision = self.aim.aim(&self.ctx.frame, stats.max);

        // Emit
        if !self.ctx.homed {
            self.home(hw, sink);
        }
        hw.set_cooling_duty(cooling_duty);
        self.emit_aim(hw, decision.command);

        // 5. Trigger
        self.poll_trigger(hw, sink);

        let telemetry = CycleTelemetry {
            cycle: self.ctx.cycle_count,
            min_c: stats.min,
            max_c: stats.max,
            ambient_c,
            hotspot: decision.hotspot,
            aim: decision.command,
            cooling_percent,
            cooling_duty,
            mode,
        };
        debug!(
            "Cycle {}: max={:.1} hotspot={:?} fan={}%",
            telemetry.cycle, telemetry.max_c, telemetry.hotspot, cooling_percent
        );
        if self.ctx.cycle_count % u64::from(self.telemetry_interval_cycles) == 0 {
            sink.emit(&AppEvent::Telemetry(telemetry));
        }
        Ok(telemetry)
    }

    /// Home, settle, then run `cycles` cycles at the configured cadence.
    pub fn run_for(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + TriggerPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
        cycles: u64,
    ) {
        self.home_and_settle(hw, sink, delay);
        for _ in 0..cycles {
            self.step(hw, sink, delay);
        }
    }

    /// Home, settle, then cycle until power-off.
    pub fn run_forever(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + TriggerPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) -> ! {
        self.home_and_settle(hw, sink, delay);
        loop {
            self.step(hw, sink, delay);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Active response profile.
    pub fn mode(&self) -> ControlMode {
        self.ctx.mode()
    }

    /// Total cycles run since construction.
    pub fn cycle_count(&self) -> u64 {
        self.ctx.cycle_count
    }

    /// Cycles skipped on sensor failure.
    pub fn frames_dropped(&self) -> u64 {
        self.ctx.frames_dropped
    }

    /// Last command written to the servos.
    pub fn last_aim(&self) -> Option<AimCommand> {
        self.ctx.last_aim
    }

    pub fn is_homed(&self) -> bool {
        self.ctx.homed
    }

    /// The frame acquired by the most recent cycle.
    pub fn frame(&self) -> &ThermalImage {
        &self.ctx.frame
    }

    // ── Internal ──────────────────────────────────────────────

    fn step(
        &mut self,
        hw: &mut (impl SensorPort + ActuatorPort + TriggerPort),
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        if let Err(e) = self.cycle(hw, sink) {
            debug!("Cycle {} skipped: {}", self.ctx.cycle_count, e);
        }
        delay.delay_ms(self.frame_interval_ms);
    }

    fn home_and_settle(
        &mut self,
        hw: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
        delay: &mut impl DelayNs,
    ) {
        if !self.ctx.homed {
            self.home(hw, sink);
            delay.delay_ms(self.home_settle_ms);
        }
    }

    fn emit_aim(&mut self, hw: &mut impl ActuatorPort, command: AimCommand) {
        hw.set_axis_position(Axis::Azimuth, command.azimuth_us);
        hw.set_axis_position(Axis::Elevation, command.elevation_us);
        self.ctx.last_aim = Some(command);
    }

    fn poll_trigger(&mut self, hw: &mut impl TriggerPort, sink: &mut impl EventSink) {
        let from = self.ctx.mode();
        if let Some(to) = self.ctx.selector.poll(hw.read_trigger()) {
            sink.emit(&AppEvent::ModeChanged { from, to });
            info!("Mode changed {} -> {}", from, to);
        }
    }
}
