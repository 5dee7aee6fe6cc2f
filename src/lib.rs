//! # co2-monitor
//!
//! Monitoring agent core for a CO2 gas sensor: an acquisition loop and an
//! interactive terminal UI that share one configuration object and one
//! output sink.
//!
//! ## Architecture
//!
//! Two long-running workers, one lock:
//!
//! - [`AcquisitionWorker`] polls the sensor on a cadence, classifies each
//!   outcome (value / info / warning), drives the warning indicator, and
//!   reports readings on the console sink.
//! - [`TerminalUi`] reads single-character commands from the console and
//!   tunes the measurement period and diagnostic verbosity at runtime.
//! - [`SharedState`] carries the tunables plus the single mutual-exclusion
//!   primitive that totally orders every print and every configuration
//!   change. Output bytes from the two workers never interleave.
//!
//! There is no queue between the workers; coordination is mutual exclusion
//! over shared scalars and the shared sink, full stop.
//!
//! The sensor bus session, the console transport, and the indicator outputs
//! stay behind the traits in [`sensor`], [`transport`], and [`indicator`].
//! The process harness implements them, spawns the two workers, and never
//! returns.

#![cfg_attr(not(test), no_std)]

pub mod acquisition;
pub mod console;
pub mod error;
pub mod indicator;
pub mod outcome;
pub mod sensor;
pub mod state;
pub mod transport;

pub use acquisition::AcquisitionWorker;
pub use console::TerminalUi;
pub use error::{ConfigError, Disconnected, SensorFault};
pub use indicator::{IndicatorId, Indicators};
pub use outcome::{InfoCode, SensorOutcome, WarningCode};
pub use sensor::{Co2Config, Co2Sensor};
pub use state::SharedState;
pub use transport::ConsoleIo;
