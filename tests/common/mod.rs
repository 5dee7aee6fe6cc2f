//! Fake collaborators shared by the integration tests.
//!
//! The transport, indicator, and sensor doubles all hand out cheap clones
//! backed by the same buffers, so a test keeps a handle for inspection
//! after a worker takes ownership of its copy.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use co2_monitor::error::{ConfigError, Disconnected};
use co2_monitor::indicator::{IndicatorId, Indicators};
use co2_monitor::outcome::SensorOutcome;
use co2_monitor::sensor::{Co2Config, Co2Sensor, MEASUREMENT_PERIOD_MAX, MEASUREMENT_PERIOD_MIN};
use co2_monitor::transport::ConsoleIo;
use embedded_hal::delay::DelayNs;

/// Sensor that replays a fixed script; the last outcome repeats forever.
pub struct ScriptedSensor {
    script: Vec<SensorOutcome>,
    next: usize,
}

impl ScriptedSensor {
    pub fn new(script: Vec<SensorOutcome>) -> Self {
        assert!(!script.is_empty());
        Self { script, next: 0 }
    }

    pub fn steady(outcome: SensorOutcome) -> Self {
        Self::new(vec![outcome])
    }
}

impl Co2Sensor for ScriptedSensor {
    fn acquire_reading(&mut self) -> SensorOutcome {
        let idx = self.next.min(self.script.len() - 1);
        self.next += 1;
        self.script[idx]
    }
}

/// Configuration port enforcing the sensor's period domain, recording what
/// it accepted.
#[derive(Clone, Default)]
pub struct FakeConfigPort {
    accepted: Arc<Mutex<Vec<u16>>>,
}

impl FakeConfigPort {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accepted(&self) -> Vec<u16> {
        self.accepted.lock().unwrap().clone()
    }
}

impl Co2Config for FakeConfigPort {
    fn configure(&mut self, period_s: u16) -> Result<(), ConfigError> {
        if !(MEASUREMENT_PERIOD_MIN..=MEASUREMENT_PERIOD_MAX).contains(&period_s) {
            return Err(ConfigError::OutOfRange);
        }
        self.accepted.lock().unwrap().push(period_s);
        Ok(())
    }
}

#[derive(Default)]
struct IoInner {
    input: VecDeque<u8>,
    /// Reads return `WouldBlock` this many times before the next byte.
    stall_reads: usize,
    output: Vec<u8>,
}

/// Transport double: scripted input, recorded output. An exhausted input
/// queue reads as permanent end-of-input.
#[derive(Clone, Default)]
pub struct FakeIo {
    inner: Arc<Mutex<IoInner>>,
}

impl FakeIo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(bytes: &[u8]) -> Self {
        let io = Self::default();
        io.inner.lock().unwrap().input.extend(bytes.iter().copied());
        io
    }

    /// Make the next `n` reads report `WouldBlock` before input resumes.
    pub fn stall_reads(&self, n: usize) {
        self.inner.lock().unwrap().stall_reads = n;
    }

    pub fn output(&self) -> String {
        String::from_utf8(self.inner.lock().unwrap().output.clone()).unwrap()
    }

    /// Output split into CRLF-terminated lines.
    pub fn lines(&self) -> Vec<String> {
        self.output().split("\r\n").map(str::to_owned).collect()
    }
}

impl ConsoleIo for FakeIo {
    fn read_byte(&mut self) -> nb::Result<u8, Disconnected> {
        let mut inner = self.inner.lock().unwrap();
        if inner.stall_reads > 0 {
            inner.stall_reads -= 1;
            return Err(nb::Error::WouldBlock);
        }
        match inner.input.pop_front() {
            Some(byte) => Ok(byte),
            None => Err(nb::Error::Other(Disconnected)),
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) {
        self.inner.lock().unwrap().output.extend_from_slice(bytes);
    }
}

/// Indicator double remembering the last level written per indicator.
#[derive(Clone, Default)]
pub struct FakeIndicators {
    levels: Arc<Mutex<[Option<bool>; 2]>>,
}

impl FakeIndicators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ok_level(&self) -> Option<bool> {
        self.levels.lock().unwrap()[0]
    }

    pub fn warning_level(&self) -> Option<bool> {
        self.levels.lock().unwrap()[1]
    }
}

impl Indicators for FakeIndicators {
    fn set(&mut self, id: IndicatorId, on: bool) {
        let idx = match id {
            IndicatorId::Ok => 0,
            IndicatorId::Warning => 1,
        };
        self.levels.lock().unwrap()[idx] = Some(on);
    }
}

/// Delay that returns immediately; tests do not wait out cadence sleeps.
#[derive(Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
