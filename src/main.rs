//! ThermoTrack — host simulation runner.
//!
//! Runs the tracker control loop against simulated peripherals.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                    Adapters (outer ring)                      │
//! │                                                               │
//! │  HardwareAdapter            LogEventSink   FileConfigAdapter  │
//! │  (Sensor+Actuator+Trigger)  (EventSink)    (ConfigPort)       │
//! │   └ SimulatedScene · SimPwm ×3 · ScriptedTrigger              │
//! │                                                               │
//! │  ──────────────── Port Trait Boundary ──────────────────      │
//! │                                                               │
//! │  ┌───────────────────────────────────────────────────────┐    │
//! │  │            TrackerService (pure logic)                │    │
//! │  │  Reducer · Hotspot · Aim · Cooling · Mode             │    │
//! │  └───────────────────────────────────────────────────────┘    │
//! └───────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use thermotrack::adapters::config_file::FileConfigAdapter;
use thermotrack::adapters::delay::StdDelay;
use thermotrack::adapters::hardware::HardwareAdapter;
use thermotrack::adapters::log_sink::LogEventSink;
use thermotrack::adapters::sim::{ScriptedTrigger, SimPwm};
use thermotrack::app::ports::ConfigPort;
use thermotrack::app::service::TrackerService;
use thermotrack::config::ControllerConfig;
use thermotrack::drivers::fan::FanDriver;
use thermotrack::drivers::servo::ServoDriver;
use thermotrack::drivers::trigger::{ActiveLevel, TriggerInput};
use thermotrack::pins;
use thermotrack::sensors::scene::{SceneParams, SimulatedScene};

/// Polls the simulated mode button stays pressed for.
const PRESS_HOLD_POLLS: u32 = 2;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Thermal pan/tilt tracker running against a simulated scene",
    long_about = None
)]
struct Args {
    /// Configuration file (`.json`, or a postcard blob for any other extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of control cycles to run (default: run forever)
    #[arg(short = 'n', long)]
    cycles: Option<u64>,

    /// Override the delay between cycles in milliseconds
    #[arg(long)]
    interval_ms: Option<u32>,

    /// Press the mode button every N trigger polls (0 = never)
    #[arg(long, default_value_t = 0)]
    press_every: u32,

    /// Print the default configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

fn load_config(args: &Args) -> Result<ControllerConfig> {
    let mut config = match &args.config {
        Some(path) => FileConfigAdapter::new(path)
            .load()
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => {
            info!("No config file given, using defaults");
            ControllerConfig::default()
        }
    };
    if let Some(ms) = args.interval_ms {
        config.frame_interval_ms = ms;
    }
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("validating config")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.dump_config {
        let json = serde_json::to_string(&ControllerConfig::default())
            .context("serialising default config")?;
        println!("{json}");
        return Ok(());
    }

    env_logger::init();

    info!("╔══════════════════════════════════════╗");
    info!("║  ThermoTrack v{}                  ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");
    info!(
        "Pins: az={} el={} fan={} button={}",
        pins::AZIMUTH_SERVO_PIN,
        pins::ELEVATION_SERVO_PIN,
        pins::FAN_PWM_PIN,
        pins::MODE_BUTTON_PIN
    );

    let config = load_config(&args)?;
    info!(
        "Target {}\u{00b0}C, {} profiles, {} ms/frame",
        config.target_temperature_c,
        config.cooling.len(),
        config.frame_interval_ms
    );

    let mut hw = HardwareAdapter::new(
        SimulatedScene::new(SceneParams::default()),
        ServoDriver::new(SimPwm::new(pins::SERVO_PERIOD_US)),
        ServoDriver::new(SimPwm::new(pins::SERVO_PERIOD_US)),
        FanDriver::new(SimPwm::new(pins::FAN_DUTY_MAX)),
        TriggerInput::new(
            ScriptedTrigger::new(args.press_every, PRESS_HOLD_POLLS),
            ActiveLevel::High,
        ),
    );
    let mut sink = LogEventSink::new();
    let mut delay = StdDelay;

    let mut service = TrackerService::new(config);
    service.start(&mut sink);

    match args.cycles {
        Some(n) => {
            service.run_for(&mut hw, &mut sink, &mut delay, n);
            info!(
                "Done: {} cycles, {} frames dropped, final mode {}",
                service.cycle_count(),
                service.frames_dropped(),
                service.mode()
            );
            Ok(())
        }
        None => service.run_forever(&mut hw, &mut sink, &mut delay),
    }
}
