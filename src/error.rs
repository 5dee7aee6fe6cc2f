//! Error types shared across the agent.

use thiserror::Error;

/// Rejection reported by the sensor when a configuration value lies outside
/// the domain it accepts. The sensor is the authority on the range; callers
/// do not pre-validate beyond integer parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Measurement period outside the accepted [10-4095] second range.
    #[error("measurement period out of range [10-4095]")]
    OutOfRange,
}

/// End of input on the console transport.
///
/// Not an error the terminal UI recovers from: once the transport reports
/// this, no byte will ever be available again and the UI worker exits
/// permanently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("console transport disconnected")]
pub struct Disconnected;

/// Unrecoverable condition reported by the sensor.
///
/// The bus contract reserves this for bring-up (hardware absent, session
/// never established). Should it ever surface mid-loop, the acquisition
/// worker returns it and the harness halts the process; there is no safe
/// default to fall back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("CO2 sensor reported an unrecoverable fault")]
pub struct SensorFault;
