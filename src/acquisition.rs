//! Acquisition worker.
//!
//! Owns the sensor session for its lifetime: polls, classifies the outcome,
//! drives the warning indicator, reports readings on the shared sink, and
//! sleeps according to the classification policy. Exactly one classification
//! happens per cycle, inside one critical section; the only blocking point
//! is the cadence sleep between cycles, taken with the lock released.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use crate::error::SensorFault;
use crate::indicator::{IndicatorId, Indicators};
use crate::outcome::{InfoCode, SensorOutcome, WarningCode};
use crate::sensor::Co2Sensor;
use crate::state::SharedState;
use crate::transport::{ConsoleIo, IoWriter};

/// Delay after a successful reading, in milliseconds. Policy constant,
/// deliberately independent of the sensor's measurement period.
pub const PROCESS_DELAY_MS: u32 = 10_000;

/// Delay before re-polling after a transient info condition, in
/// milliseconds. Warnings re-poll immediately.
pub const RETRY_DELAY_MS: u32 = 1_000;

/// The polling half of the agent.
pub struct AcquisitionWorker<'a, S, I, O, D> {
    sensor: S,
    indicators: I,
    io: O,
    delay: D,
    state: &'a SharedState,
}

impl<'a, S, I, O, D> AcquisitionWorker<'a, S, I, O, D>
where
    S: Co2Sensor,
    I: Indicators,
    O: ConsoleIo,
    D: DelayNs,
{
    pub fn new(sensor: S, indicators: I, io: O, delay: D, state: &'a SharedState) -> Self {
        Self {
            sensor,
            indicators,
            io,
            delay,
            state,
        }
    }

    /// Perform one poll cycle and return the delay to apply before the next.
    ///
    /// The classification policy, in priority order:
    ///
    /// 1. `Value(ppm)` — print the reading unless the display is suppressed,
    ///    force the warning indicator off, wait [`PROCESS_DELAY_MS`].
    /// 2. `Info(_)` — diagnostic line per sub-code when verbosity is on,
    ///    force the warning indicator off, wait [`RETRY_DELAY_MS`].
    /// 3. `Warning(_)` — diagnostic line per sub-code when verbosity is on,
    ///    force the warning indicator on, re-poll immediately.
    /// 4. `Fatal` — surface [`SensorFault`]; the caller halts.
    ///
    /// Indicator writes are level-driven on every branch; repeating an
    /// outcome repeats the same write.
    pub fn poll_once(&mut self) -> Result<u32, SensorFault> {
        let outcome = self.sensor.acquire_reading();
        let Self {
            indicators,
            io,
            state,
            ..
        } = self;
        state.lock(|st| match outcome {
            SensorOutcome::Value(ppm) => {
                if !st.display_suppressed {
                    let _ = write!(IoWriter(io), "CO2 PPM Level: {}\r\n", ppm);
                }
                indicators.set(IndicatorId::Warning, false);
                Ok(PROCESS_DELAY_MS)
            }
            SensorOutcome::Info(code) => {
                if st.diagnostic_logging {
                    io.write_line(info_diagnostic(code));
                }
                indicators.set(IndicatorId::Warning, false);
                Ok(RETRY_DELAY_MS)
            }
            SensorOutcome::Warning(code) => {
                if st.diagnostic_logging {
                    io.write_line(warning_diagnostic(code));
                }
                indicators.set(IndicatorId::Warning, true);
                Ok(0)
            }
            SensorOutcome::Fatal => Err(SensorFault),
        })
    }

    /// Run the acquisition loop.
    ///
    /// Returns only if the sensor reports an unrecoverable fault, which the
    /// harness turns into a process halt. The cadence sleep happens outside
    /// the critical section.
    pub fn run(&mut self) -> SensorFault {
        loop {
            match self.poll_once() {
                Ok(0) => {}
                Ok(delay_ms) => self.delay.delay_ms(delay_ms),
                Err(fault) => return fault,
            }
        }
    }
}

fn info_diagnostic(code: InfoCode) -> &'static str {
    match code {
        InfoCode::Pending => "CO2 PPM value is not ready",
        InfoCode::Busy => "CO2 sensor is busy",
        InfoCode::Unknown => "An unexpected error occurred when accessing the CO2 sensor",
    }
}

fn warning_diagnostic(code: WarningCode) -> &'static str {
    match code {
        WarningCode::OverVoltage => "CO2 Sensor Over-Voltage Error",
        WarningCode::OverTemperature => "CO2 Sensor Temperature Error",
        WarningCode::Communication => "CO2 Sensor Communication Error",
        WarningCode::Unknown => "Unexpected error",
    }
}
