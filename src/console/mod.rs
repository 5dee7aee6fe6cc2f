//! Interactive terminal UI for configuring the agent at runtime.
//!
//! Zero heap allocation; the argument buffer is fixed-capacity and
//! truncates instead of overrunning.

pub mod line_buffer;
pub mod ui;

pub use line_buffer::LineBuffer;
pub use ui::{TerminalUi, CONSOLE_POLL_DELAY_MS, VALUE_MAX_LENGTH};
