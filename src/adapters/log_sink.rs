//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the `log` facade (serial console on the board, `env_logger` on the
//! host).

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                let hotspot = t
                    .hotspot
                    .map_or_else(|| "centre".into(), |c| format!("({},{})", c.x(), c.y()));
                info!(
                    "TELEM | cycle={} | min={:.1} max={:.1} ta={:.1}\u{00b0}C | \
                     hot={} | az={}us el={}us | fan={}% ({}) | mode={}",
                    t.cycle,
                    t.min_c,
                    t.max_c,
                    t.ambient_c,
                    hotspot,
                    t.aim.azimuth_us,
                    t.aim.elevation_us,
                    t.cooling_percent,
                    t.cooling_duty,
                    t.mode,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {} -> {}", from, to);
            }
            AppEvent::Started { mode } => {
                info!("START | initial_mode={}", mode);
            }
            AppEvent::Homed { neutral_us } => {
                info!("HOME | az=el={}us", neutral_us);
            }
            AppEvent::FrameDropped(e) => {
                warn!("DROP | {}", e);
            }
        }
    }
}
