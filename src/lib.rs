//! `vt102-emulator` implements the subset of the vt102 / VT220 /
//! `TERM=linux` specification that is useful in software: everything a
//! full-screen program needs to keep an in-memory picture of what its
//! output would look like on a real terminal.
//!
//! Two halves do the work. [`Parser`] is a state machine that turns a
//! stream of code points into typed [`Event`]s, and [`Screen`] is the
//! in-memory display that applies them. They meet at the [`Handler`]
//! trait, so either half can be used, tested or observed on its own.
//! [`Terminal`] wires a parser to a screen for the common case:
//!
//! ```
//! use vt102_emulator::TermSetting;
//!
//! let mut term = TermSetting::new()
//!     .lines(24)
//!     .columns(80)
//!     .build()
//!     .unwrap();
//! term.feed("Hello world!");
//! assert_eq!(term.display()[0].trim_end(), "Hello world!");
//! assert_eq!(term.screen().cursor(), (12, 0));
//! ```
//!
//! The parser accepts anything. Malformed and unimplemented sequences
//! are absorbed (watch them with [`LogType`] or a [`Tee`] observer),
//! because the `reset` command of every real-world `TERM` value emits
//! sequences nobody implements, and a terminal that crashes on them is
//! useless.

extern crate ascii;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate slog;
extern crate sloggers;
#[cfg(test)]
#[macro_use]
extern crate proptest;

pub mod control;
pub mod event;
pub mod graphics;
pub mod parser;
pub mod screen;

use std::error::Error;
use std::fmt;

use slog::Logger;
use sloggers::Build;
use sloggers::file::FileLoggerBuilder;
use sloggers::null::NullLoggerBuilder;
use sloggers::terminal::{Destination, TerminalLoggerBuilder};

pub use ascii::AsciiChar;
pub use event::{Event, Handler, Tee};
pub use graphics::{Cell, Color, TextStyle};
pub use parser::Parser;
pub use screen::{Margins, Mode, Screen, ScreenError};
pub use sloggers::types::Severity;

/// Where the emulator's own debug log goes. This is for developers of
/// the emulator and of things embedding it; the emulated program's
/// output never ends up here.
#[derive(Clone, Debug)]
pub enum LogType {
    File((String, Severity, OpenMode)),
    Stdout(Severity),
    Stderr(Severity),
    None,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenMode {
    Truncate,
    Append,
}

/// Building a [`Terminal`] failed: bad dimensions or an unusable log
/// destination.
#[derive(Debug)]
pub struct SetupError(String);

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for SetupError {}

impl From<ScreenError> for SetupError {
    fn from(err: ScreenError) -> Self {
        SetupError(err.to_string())
    }
}

/// Terminal builder, providing control over the emulated display.
/// A default configuration can be generated with `TermSetting::new()`
/// and adjusted through the builder methods:
///
/// ```
/// use vt102_emulator::{LogType, TermSetting};
///
/// let setting = TermSetting::new()
///     .lines(25)
///     .columns(132)
///     .debug_type(LogType::None);
/// let term = setting.build().unwrap();
/// assert_eq!(term.screen().lines(), 25);
/// ```
#[derive(Clone, Debug)]
pub struct TermSetting {
    lines: usize,
    columns: usize,
    debug_log: LogType,
}

impl TermSetting {
    pub fn new() -> TermSetting {
        TermSetting {
            lines: 24,
            columns: 80,
            debug_log: LogType::None,
        }
    }

    pub fn lines(mut self, u: usize) -> Self {
        self.lines = u;
        self
    }

    pub fn columns(mut self, u: usize) -> Self {
        self.columns = u;
        self
    }

    pub fn debug_type(mut self, l: LogType) -> Self {
        self.debug_log = l;
        self
    }

    pub fn build(self) -> Result<Terminal, SetupError> {
        let logger = build_logger(&self.debug_log)?;
        let screen = Screen::with_logger(self.lines, self.columns, logger)?;
        Ok(Terminal {
            parser: Parser::new(),
            screen: screen,
        })
    }
}

impl Default for TermSetting {
    fn default() -> TermSetting {
        TermSetting::new()
    }
}

fn build_logger(debug_log: &LogType) -> Result<Logger, SetupError> {
    let built = match *debug_log {
        LogType::File((ref name, level, mode)) => {
            let mut builder = FileLoggerBuilder::new(name);
            builder.level(level);
            if mode == OpenMode::Truncate {
                builder.truncate();
            }
            builder.build()
        }
        LogType::Stdout(level) => TerminalLoggerBuilder::new()
            .destination(Destination::Stdout)
            .level(level)
            .build(),
        LogType::Stderr(level) => TerminalLoggerBuilder::new()
            .destination(Destination::Stderr)
            .level(level)
            .build(),
        LogType::None => NullLoggerBuilder {}.build(),
    };
    built.map_err(|e| SetupError(format!("couldn't set up logging: {}", e)))
}

/// A parser wired to a screen: feed it what the host program writes
/// and read the display back.
pub struct Terminal {
    parser: Parser,
    screen: Screen,
}

impl Terminal {
    /// A quiet terminal of the given size; see [`TermSetting`] for
    /// more control.
    pub fn new(lines: usize, columns: usize) -> Result<Terminal, SetupError> {
        TermSetting::new().lines(lines).columns(columns).build()
    }

    /// Feed decoded program output. Turning encoded bytes into code
    /// points (and riding out partial sequences) is the caller's
    /// business.
    pub fn feed(&mut self, input: &str) {
        self.parser.feed(&mut self.screen, input);
    }

    /// Feed a single code point.
    pub fn advance(&mut self, ch: char) {
        self.parser.advance(&mut self.screen, ch);
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut Screen {
        &mut self.screen
    }

    /// The screen contents as one string per line.
    pub fn display(&self) -> Vec<String> {
        self.screen.display()
    }
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Terminal\n")?;
        write!(f, "--------------------\n")?;
        for line in self.display() {
            write!(f, "{}\n", line)?;
        }
        write!(f, "--------------------")
    }
}
