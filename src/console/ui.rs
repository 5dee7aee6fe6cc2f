//! Terminal UI worker.
//!
//! State machine per command: awaiting a command byte, reading an argument
//! line, applying, back to awaiting. The worker exits permanently when the
//! transport reports end-of-input; it is never restarted.
//!
//! Locking is coarse on purpose: each command holds the output lock for
//! prompt + argument read + apply + response as a single critical section,
//! so the acquisition worker can never print between a prompt and its
//! response. The idle poll for the next command byte runs with the lock
//! released.

use core::fmt::Write;

use embedded_hal::delay::DelayNs;

use super::line_buffer::LineBuffer;
use crate::error::ConfigError;
use crate::sensor::Co2Config;
use crate::state::{SharedState, State};
use crate::transport::{ConsoleIo, IoWriter};

/// Byte budget for one argument line, terminator included. Whitespace
/// counts toward the budget even though it is not stored.
pub const VALUE_MAX_LENGTH: usize = 256;

/// Backoff between empty transport polls, in milliseconds.
pub const CONSOLE_POLL_DELAY_MS: u32 = 10;

/// The interactive half of the agent.
pub struct TerminalUi<'a, C, O, D> {
    config: C,
    io: O,
    delay: D,
    state: &'a SharedState,
}

impl<'a, C, O, D> TerminalUi<'a, C, O, D>
where
    C: Co2Config,
    O: ConsoleIo,
    D: DelayNs,
{
    pub fn new(config: C, io: O, delay: D, state: &'a SharedState) -> Self {
        Self {
            config,
            io,
            delay,
            state,
        }
    }

    /// Run the terminal UI until the transport disconnects.
    ///
    /// Prints the menu once up front, then dispatches one command per input
    /// byte. On end-of-input, prints the exit notice and returns for good;
    /// the acquisition worker is unaffected.
    pub fn run(&mut self) {
        {
            let Self { io, state, .. } = self;
            state.lock(|st| print_menu(io, st));
        }
        while let Some(byte) = self.next_byte() {
            self.dispatch(byte);
        }
        let Self { io, state, .. } = self;
        state.lock(|_st| io.write_line("Exiting terminal ui"));
    }

    /// Poll for the next command byte, backing off while none is pending.
    /// `None` means end-of-input.
    fn next_byte(&mut self) -> Option<u8> {
        loop {
            match self.io.read_byte() {
                Ok(byte) => return Some(byte),
                Err(nb::Error::WouldBlock) => self.delay.delay_ms(CONSOLE_POLL_DELAY_MS),
                Err(nb::Error::Other(_)) => return None,
            }
        }
    }

    /// Handle one command byte inside a single critical section.
    fn dispatch(&mut self, command: u8) {
        let Self {
            config,
            io,
            delay,
            state,
        } = self;
        state.lock(|st| match command {
            b'?' => print_menu(io, st),
            b'p' => cmd_measurement_period(config, io, delay, st),
            b'i' => cmd_diagnostic_info(io, delay, st),
            _ => io.write_line("Press '?' to list all CO2 sensor settings"),
        });
    }
}

fn print_menu<O: ConsoleIo>(io: &mut O, st: &mut State) {
    st.display_suppressed = true;
    io.write_line("Select a setting to configure");
    io.write_line("'p': Set the measurement period");
    io.write_line("'i': Print additional diagnostic information if available");
    io.write_line("");
    st.display_suppressed = false;
}

fn cmd_measurement_period<C, O, D>(config: &mut C, io: &mut O, delay: &mut D, st: &mut State)
where
    C: Co2Config,
    O: ConsoleIo,
    D: DelayNs,
{
    io.write_line("Enter the measurement period [10-4095]s");
    let mut line = LineBuffer::<VALUE_MAX_LENGTH>::new();
    read_line(io, delay, st, &mut line);
    match line.as_str().parse::<u16>() {
        Ok(period) => match config.configure(period) {
            Ok(()) => {
                st.measurement_period = period;
                let _ = write!(IoWriter(io), "CO2 measurement period set to: {}\r\n\r\n", period);
            }
            Err(ConfigError::OutOfRange) => print_period_range_error(io),
        },
        // Garbage and overflow land in the same rejection as an
        // out-of-range value the sensor refused.
        Err(_) => print_period_range_error(io),
    }
}

fn print_period_range_error<O: ConsoleIo>(io: &mut O) {
    io.write_line("CO2 sensor measurement period configuration error, Valid range is [10-4095]");
    io.write_line("");
}

fn cmd_diagnostic_info<O, D>(io: &mut O, delay: &mut D, st: &mut State)
where
    O: ConsoleIo,
    D: DelayNs,
{
    io.write_line("Display additional diagnostic information [y/n]?");
    let mut line = LineBuffer::<VALUE_MAX_LENGTH>::new();
    read_line(io, delay, st, &mut line);
    match line.as_str() {
        "y" => {
            st.diagnostic_logging = true;
            io.write_line("Enable additional diagnostic logging");
            io.write_line("");
        }
        "n" => {
            st.diagnostic_logging = false;
            io.write_line("Disable additional diagnostic logging");
            io.write_line("");
        }
        _ => {
            io.write_line("Input error, valid values are [y/n]");
            io.write_line("");
        }
    }
}

/// Read one argument line.
///
/// Bytes are consumed until a carriage return or the byte budget runs out,
/// whichever comes first. Every received byte is echoed immediately, the
/// terminator included, with a newline written at line end. ASCII
/// whitespace is echoed but elided from the stored value. The periodic PPM
/// line stays suppressed for the duration of the read. End-of-input
/// terminates the line as if a carriage return had arrived.
fn read_line<O, D, const N: usize>(io: &mut O, delay: &mut D, st: &mut State, line: &mut LineBuffer<N>)
where
    O: ConsoleIo,
    D: DelayNs,
{
    st.display_suppressed = true;
    line.clear();
    let mut budget = N.saturating_sub(1);
    while budget > 0 {
        budget -= 1;
        let byte = loop {
            match io.read_byte() {
                Ok(byte) => break Some(byte),
                Err(nb::Error::WouldBlock) => delay.delay_ms(CONSOLE_POLL_DELAY_MS),
                Err(nb::Error::Other(_)) => break None,
            }
        };
        let Some(byte) = byte else { break };
        io.write_bytes(&[byte]);
        if byte == b'\r' {
            break;
        }
        if byte.is_ascii_whitespace() {
            continue;
        }
        line.push(byte);
    }
    io.write_bytes(b"\n");
    st.display_suppressed = false;
}
