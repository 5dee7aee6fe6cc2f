//! Collaborator traits for the CO2 sensor bus session.
//!
//! The bus transport (I2C framing, register maps) is not this crate's
//! business. The workers only need two narrow ports: steady-state
//! acquisition for the polling loop and period configuration for the
//! terminal UI. A driver may implement both on one handle or hand out a
//! separate configuration handle for a shared bus.

use crate::error::ConfigError;
use crate::outcome::SensorOutcome;

/// Lowest measurement period the sensor accepts, in seconds.
pub const MEASUREMENT_PERIOD_MIN: u16 = 10;
/// Highest measurement period the sensor accepts, in seconds.
pub const MEASUREMENT_PERIOD_MAX: u16 = 4095;
/// Measurement period programmed at bring-up, in seconds.
pub const DEFAULT_MEASUREMENT_PERIOD: u16 = 60;

/// Steady-state acquisition port, held by the acquisition worker.
///
/// One call is one poll with bounded latency; it never panics. Hardware
/// absence is reported by the harness's initialization call, not from
/// here — a mid-loop [`SensorOutcome::Fatal`] is a contract violation the
/// worker surfaces as an unrecoverable fault.
pub trait Co2Sensor {
    /// Attempt one acquisition and classify the result.
    fn acquire_reading(&mut self) -> SensorOutcome;
}

/// Configuration port, held by the terminal UI.
pub trait Co2Config {
    /// Program a new measurement period, in seconds.
    ///
    /// The sensor validates the value against
    /// [`MEASUREMENT_PERIOD_MIN`]..=[`MEASUREMENT_PERIOD_MAX`] and rejects
    /// out-of-range requests without applying them.
    fn configure(&mut self, period_s: u16) -> Result<(), ConfigError>;
}
