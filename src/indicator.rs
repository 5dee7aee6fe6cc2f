//! Status indicator seam.

/// The two indicators on the sensor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorId {
    /// Normal-operation indicator. The harness turns it on once after a
    /// successful bring-up; the acquisition loop does not drive it.
    Ok,
    /// Degraded-condition indicator, driven level-wise on every poll cycle.
    Warning,
}

/// Indicator output port.
///
/// Writes are level-driven and idempotent: setting an indicator to the
/// state it is already in is safe and expected on every cycle.
pub trait Indicators {
    /// Drive one indicator to the given level.
    fn set(&mut self, id: IndicatorId, on: bool);
}
