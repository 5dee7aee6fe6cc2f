//! Shared state and the output lock.
//!
//! Both workers synchronize through exactly one primitive: a blocking mutex
//! wrapping the live-tunable fields. By convention every print on the shared
//! sink and every field mutation happens inside one [`SharedState::lock`]
//! critical section, which totally orders the two workers' output and makes
//! flag changes visible no later than the next cycle that takes the lock.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

/// Fields guarded by the output lock.
pub struct State {
    /// Mirror of the measurement period currently programmed into the
    /// sensor, in seconds. Updated only after the sensor accepts a value.
    pub measurement_period: u16,
    /// Diagnostic verbosity toggle, flipped by the terminal UI's `'i'`
    /// command. Off by default.
    pub diagnostic_logging: bool,
    /// True while the terminal UI is mid-print, so the periodic PPM line
    /// cannot land inside a prompt. Off by default.
    pub display_suppressed: bool,
}

/// Single long-lived state object shared by the two workers.
///
/// Owned by the harness and handed to both workers by reference; it outlives
/// them both.
pub struct SharedState {
    inner: Mutex<CriticalSectionRawMutex, RefCell<State>>,
}

impl SharedState {
    /// Create the shared state with the bring-up measurement period and
    /// both flags in their defaults.
    pub const fn new(measurement_period: u16) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(State {
                measurement_period,
                diagnostic_logging: false,
                display_suppressed: false,
            })),
        }
    }

    /// Run one critical section over the shared fields.
    ///
    /// The closure shape gives exactly one acquisition per operation: nested
    /// locking is impossible by construction, and the lock is released on
    /// every exit path. Callers keep the closure free of indefinite blocking.
    pub fn lock<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Snapshot of the measurement-period mirror.
    pub fn measurement_period(&self) -> u16 {
        self.lock(|st| st.measurement_period)
    }

    /// Snapshot of the diagnostic verbosity flag.
    pub fn diagnostic_logging(&self) -> bool {
        self.lock(|st| st.diagnostic_logging)
    }
}
