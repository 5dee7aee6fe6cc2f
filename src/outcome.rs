//! Sensor poll outcomes.
//!
//! The bus reports each acquisition attempt as a layered result word: a
//! severity in bits 16..18 and a sub-code in the low 16 bits. That word is
//! decoded exactly once, here, at the bus boundary. Everything downstream
//! works with the closed [`SensorOutcome`] variants and exhaustive matches,
//! never with the raw numbers.

const SEVERITY_SHIFT: u32 = 16;
const SEVERITY_MASK: u32 = 0x3;
const CODE_MASK: u32 = 0xFFFF;

/// Severity values the sensor uses in the result word.
pub const SEVERITY_SUCCESS: u32 = 0;
pub const SEVERITY_INFO: u32 = 1;
pub const SEVERITY_WARNING: u32 = 2;

/// Sub-codes within the info severity.
pub const CODE_PPM_PENDING: u32 = 1;
pub const CODE_SENSOR_BUSY: u32 = 2;

/// Sub-codes within the warning severity.
pub const CODE_OVER_VOLTAGE: u32 = 1;
pub const CODE_OVER_TEMPERATURE: u32 = 2;
pub const CODE_COMMUNICATION: u32 = 3;

/// Transient, non-erroneous condition from one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoCode {
    /// A fresh reading is not available yet.
    Pending,
    /// The sensor is busy with internal processing.
    Busy,
    /// Info severity with a sub-code this agent does not know.
    Unknown,
}

impl InfoCode {
    fn from_code(code: u32) -> Self {
        match code {
            CODE_PPM_PENDING => InfoCode::Pending,
            CODE_SENSOR_BUSY => InfoCode::Busy,
            _ => InfoCode::Unknown,
        }
    }
}

/// Degraded but non-fatal condition from one poll.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    /// Supply voltage outside the sensor's tolerated band.
    OverVoltage,
    /// Die temperature outside the sensor's tolerated band.
    OverTemperature,
    /// Bus communication problem between sensor and MCU.
    Communication,
    /// Warning severity with a sub-code this agent does not know.
    Unknown,
}

impl WarningCode {
    fn from_code(code: u32) -> Self {
        match code {
            CODE_OVER_VOLTAGE => WarningCode::OverVoltage,
            CODE_OVER_TEMPERATURE => WarningCode::OverTemperature,
            CODE_COMMUNICATION => WarningCode::Communication,
            _ => WarningCode::Unknown,
        }
    }
}

/// Classified result of one acquisition attempt.
///
/// Constructed fresh on every poll; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorOutcome {
    /// Valid reading, parts per million.
    Value(u16),
    /// Transient condition; retry shortly.
    Info(InfoCode),
    /// Degraded condition; the warning indicator goes on.
    Warning(WarningCode),
    /// Unrecoverable condition. Reserved for bring-up by the bus contract.
    Fatal,
}

impl SensorOutcome {
    /// Decode the raw result word of one acquisition attempt.
    ///
    /// `ppm` carries the reading and is meaningful only when the word
    /// reports success. Unknown sub-codes map to the `Unknown` member of
    /// their severity; unknown severities are treated as fatal.
    pub fn from_raw(word: u32, ppm: u16) -> Self {
        let severity = (word >> SEVERITY_SHIFT) & SEVERITY_MASK;
        let code = word & CODE_MASK;
        match severity {
            SEVERITY_SUCCESS => SensorOutcome::Value(ppm),
            SEVERITY_INFO => SensorOutcome::Info(InfoCode::from_code(code)),
            SEVERITY_WARNING => SensorOutcome::Warning(WarningCode::from_code(code)),
            _ => SensorOutcome::Fatal,
        }
    }
}
