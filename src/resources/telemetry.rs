use bevy::prelude::*;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use serde::{Deserialize, Serialize};

use crate::resources::TelemetryFormat;

/// Periodic diagnostic snapshot of the flight.
#[derive(Event, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub sim_time: f64,
    /// Horizontal distance flown (m).
    pub x: f64,
    pub altitude: f64,
    /// Inertial speed (m/s).
    pub speed: f64,
    /// Speed relative to the air mass (m/s).
    pub airspeed: f64,
    pub pitch_deg: f64,
    pub aoa_deg: f64,
    pub cl: f64,
    pub cd: f64,
    pub wind_x: f64,
    pub stall_warning: bool,
    pub stalled: bool,
}

impl TelemetryRecord {
    pub fn to_line(&self) -> String {
        format!(
            "t={:.1} | alt={:.1} | V={:.1} | AoA={:.1}° | cl={:.3} | cd={:.3} | wind={:.1} | warn={} | stalled={}",
            self.sim_time,
            self.altitude,
            self.speed,
            self.aoa_deg,
            self.cl,
            self.cd,
            self.wind_x,
            self.stall_warning,
            self.stalled
        )
    }
}

/// Receives telemetry records as they are produced.
pub trait TelemetryObserver: Send + Sync {
    fn on_record(&mut self, record: &TelemetryRecord);
}

impl<F> TelemetryObserver for F
where
    F: FnMut(&TelemetryRecord) + Send + Sync,
{
    fn on_record(&mut self, record: &TelemetryRecord) {
        self(record)
    }
}

/// Writes each record to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver {
    pub format: TelemetryFormat,
}

impl LogObserver {
    pub fn new(format: TelemetryFormat) -> Self {
        Self { format }
    }
}

impl TelemetryObserver for LogObserver {
    fn on_record(&mut self, record: &TelemetryRecord) {
        match self.format {
            TelemetryFormat::Text => info!("{}", record.to_line()),
            TelemetryFormat::Json => match serde_json::to_string(record) {
                Ok(json) => info!("{}", json),
                Err(e) => error!("Failed to serialise telemetry record: {}", e),
            },
        }
    }
}

/// Forwards records to another thread, e.g. a display.
///
/// Records are dropped rather than blocking the tick when a bounded channel is full.
pub struct ChannelObserver {
    sender: Sender<TelemetryRecord>,
}

impl ChannelObserver {
    pub fn new(sender: Sender<TelemetryRecord>) -> Self {
        Self { sender }
    }

    pub fn bounded(capacity: usize) -> (Self, Receiver<TelemetryRecord>) {
        let (sender, receiver) = crossbeam_channel::bounded(capacity);
        (Self::new(sender), receiver)
    }
}

impl TelemetryObserver for ChannelObserver {
    fn on_record(&mut self, record: &TelemetryRecord) {
        match self.sender.try_send(*record) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => {
                warn!("Telemetry channel full, dropping record at t={:.2}", record.sim_time)
            }
            Err(TrySendError::Disconnected(_)) => {
                debug!("Telemetry receiver disconnected")
            }
        }
    }
}

/// Registered telemetry observers, notified in registration order.
#[derive(Resource, Default)]
pub struct TelemetryObservers {
    observers: Vec<Box<dyn TelemetryObserver>>,
}

impl TelemetryObservers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<O: TelemetryObserver + 'static>(&mut self, observer: O) {
        self.observers.push(Box::new(observer));
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    pub fn notify(&mut self, record: &TelemetryRecord) {
        for observer in self.observers.iter_mut() {
            observer.on_record(record);
        }
    }
}
