//! The control-sequence state machine.
//!
//! [`Parser`] consumes one Unicode code point at a time and emits at
//! most one [`Event`] per code point. It recognizes the C0 controls,
//! `ESC`-introduced escapes, sharp sequences and CSI parameter
//! sequences of `console_codes(4)`, and it never fails: anything it
//! does not understand is either swallowed or surfaced as an
//! [`Event::Debug`] so a `reset` from any real-world `TERM` value can
//! be replayed safely.

use std::cmp;

use control;
use event::{Event, Handler};

/// Each parameter saturates here, matching what the hardware tolerates.
const PARAM_CAP: usize = 9999;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    /// Ordinary character stream.
    Ground,
    /// `ESC` just seen.
    Escape,
    /// `ESC #` seen, awaiting the final.
    Sharp,
    /// `ESC [` or raw CSI seen, accumulating parameters.
    Arguments,
}

/// The state machine. One instance per input stream; it runs forever
/// and `ESC` anywhere restarts it at the escape state.
#[derive(Debug)]
pub struct Parser {
    state: State,
    params: Vec<usize>,
    current: Option<usize>,
    private: bool,
}

impl Default for Parser {
    fn default() -> Parser {
        Parser::new()
    }
}

impl Parser {
    pub fn new() -> Parser {
        Parser {
            state: State::Ground,
            params: Vec::new(),
            current: None,
            private: false,
        }
    }

    /// Consume one code point, dispatching at most one event.
    pub fn advance<H: Handler>(&mut self, handler: &mut H, ch: char) {
        match self.state {
            State::Ground => self.ground(handler, ch),
            State::Escape => self.escape(handler, ch),
            State::Sharp => self.sharp(handler, ch),
            State::Arguments => self.arguments(handler, ch),
        }
    }

    /// Consume a whole string.
    pub fn feed<H: Handler>(&mut self, handler: &mut H, input: &str) {
        for ch in input.chars() {
            self.advance(handler, ch);
        }
    }

    fn ground<H: Handler>(&mut self, handler: &mut H, ch: char) {
        match ch {
            control::BEL => handler.on_event(&Event::Bell),
            control::BS => handler.on_event(&Event::Backspace),
            control::HT => handler.on_event(&Event::Tab),
            control::LF | control::VT | control::FF => handler.on_event(&Event::Linefeed),
            control::CR => handler.on_event(&Event::CarriageReturn),
            control::SO => handler.on_event(&Event::ShiftOut),
            control::SI => handler.on_event(&Event::ShiftIn),
            control::ESC => self.state = State::Escape,
            control::CSI => self.enter_arguments(),
            control::NUL | control::DEL => {}
            _ => handler.on_event(&Event::Draw(ch)),
        }
    }

    fn escape<H: Handler>(&mut self, handler: &mut H, ch: char) {
        self.state = State::Ground;
        match ch {
            '#' => self.state = State::Sharp,
            '[' => self.enter_arguments(),
            control::ESC => self.state = State::Escape,
            'c' => handler.on_event(&Event::Reset),
            'D' => handler.on_event(&Event::Index),
            'E' => handler.on_event(&Event::Linefeed),
            'H' => handler.on_event(&Event::SetTabStop),
            'M' => handler.on_event(&Event::ReverseIndex),
            '7' => handler.on_event(&Event::SaveCursor),
            '8' => handler.on_event(&Event::RestoreCursor),
            // Unknown escape finals are silently eaten; `reset` from
            // various TERMs emits plenty of them.
            _ => {}
        }
    }

    fn sharp<H: Handler>(&mut self, handler: &mut H, ch: char) {
        self.state = State::Ground;
        match ch {
            '8' => handler.on_event(&Event::AlignmentDisplay),
            control::ESC => self.state = State::Escape,
            _ => {}
        }
    }

    fn arguments<H: Handler>(&mut self, handler: &mut H, ch: char) {
        match ch {
            control::ESC => {
                self.reset_arguments();
                self.state = State::Escape;
            }
            control::CSI => self.enter_arguments(),
            '?' => self.private = true,
            // Real terminals tolerate stray controls inside CSI.
            control::BEL | control::BS | control::HT | control::LF | control::CR => {}
            control::CAN | control::SUB => {
                handler.on_event(&Event::Draw(ch));
                self.reset_arguments();
                self.state = State::Ground;
            }
            '0'..='9' => {
                let digit = ch as usize - '0' as usize;
                let acc = self.current.unwrap_or(0);
                self.current = Some(cmp::min(acc * 10 + digit, PARAM_CAP));
            }
            ';' => self.push_param(),
            _ => self.terminate(handler, ch),
        }
    }

    /// Close the accumulating parameter; an empty accumulator counts
    /// as `0`, which handlers read as "absent".
    fn push_param(&mut self) {
        let value = self.current.take().unwrap_or(0);
        self.params.push(value);
    }

    fn enter_arguments(&mut self) {
        self.reset_arguments();
        self.state = State::Arguments;
    }

    fn reset_arguments(&mut self) {
        self.params.clear();
        self.current = None;
        self.private = false;
    }

    /// A non-digit, non-separator byte ends the sequence: look it up
    /// in the CSI table and dispatch, or report the literal sequence
    /// through the `debug` channel.
    fn terminate<H: Handler>(&mut self, handler: &mut H, ch: char) {
        self.push_param();
        match self.lookup(ch) {
            Some(event) => handler.on_event(&event),
            None => {
                let params = self.params
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(";");
                let literal = format!("{}{}{}", control::CSI, params, ch);
                handler.on_event(&Event::Debug(literal));
            }
        }
        self.reset_arguments();
        self.state = State::Ground;
    }

    fn lookup(&self, ch: char) -> Option<Event> {
        let arg = |idx: usize| self.params.get(idx).cloned().unwrap_or(0);
        Some(match ch {
            '@' => Event::InsertCharacters(arg(0)),
            'A' => Event::CursorUp(arg(0)),
            'B' | 'e' => Event::CursorDown(arg(0)),
            'C' | 'a' => Event::CursorForward(arg(0)),
            'D' => Event::CursorBack(arg(0)),
            'E' => Event::CursorDown1(arg(0)),
            'F' => Event::CursorUp1(arg(0)),
            'G' | '\'' => Event::CursorToColumn(arg(0)),
            'H' | 'f' => Event::CursorPosition(arg(0), arg(1)),
            'J' => Event::EraseInDisplay(arg(0)),
            'K' => Event::EraseInLine(arg(0)),
            'L' => Event::InsertLines(arg(0)),
            'M' => Event::DeleteLines(arg(0)),
            'P' => Event::DeleteCharacters(arg(0)),
            'X' => Event::EraseCharacters(arg(0)),
            'c' => Event::Answer,
            'd' => Event::CursorToLine(arg(0)),
            'g' => Event::ClearTabStop(arg(0)),
            'h' => Event::SetMode(self.params.clone(), self.private),
            'l' => Event::ResetMode(self.params.clone(), self.private),
            'm' => Event::SelectGraphicRendition(self.params.clone()),
            'r' => Event::SetMargins(arg(0), arg(1)),
            _ => return None,
        })
    }
}
