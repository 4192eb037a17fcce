//! The seam between the parser and the screen.
//!
//! The parser turns recognized control sequences into [`Event`] values
//! and hands them to a [`Handler`]. The screen is the handler that
//! matters, but anything implementing the trait can sit on the seam:
//! an event recorder for tests, a tracing observer, or a [`Tee`]
//! fanning a stream out to both.
//!
//! Numeric payloads are the raw parameters of the sequence, with `0`
//! standing for an absent parameter. Substituting the per-operation
//! default (usually `1`) is the responsibility of the handler.

/// A single recognized terminal command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Ring the bell.
    Bell,
    /// Move the cursor one column to the left.
    Backspace,
    /// Move the cursor to the next tab stop.
    Tab,
    /// Move the cursor to the next line, scrolling if needed.
    Linefeed,
    /// Move the cursor to the beginning of the current line.
    CarriageReturn,
    /// Activate the G0 character set.
    ShiftIn,
    /// Activate the G1 character set.
    ShiftOut,
    /// Display a character at the cursor position.
    Draw(char),
    /// Reset the terminal to its initial state.
    Reset,
    /// Move the cursor down one line, scrolling the region at the
    /// bottom margin.
    Index,
    /// Move the cursor up one line, scrolling the region at the top
    /// margin.
    ReverseIndex,
    /// Set a horizontal tab stop at the cursor column.
    SetTabStop,
    /// Push cursor position and rendition onto the savepoint stack.
    SaveCursor,
    /// Pop the savepoint stack.
    RestoreCursor,
    /// Fill the screen with uppercase E's (DEC alignment pattern).
    AlignmentDisplay,
    /// Insert blank characters at the cursor, shifting the line right.
    InsertCharacters(usize),
    CursorUp(usize),
    CursorDown(usize),
    CursorForward(usize),
    CursorBack(usize),
    /// `CursorDown` plus a carriage return.
    CursorDown1(usize),
    /// `CursorUp` plus a carriage return.
    CursorUp1(usize),
    CursorToColumn(usize),
    CursorToLine(usize),
    /// Move the cursor to a 1-indexed `(line, column)` position.
    CursorPosition(usize, usize),
    EraseInDisplay(usize),
    EraseInLine(usize),
    InsertLines(usize),
    DeleteLines(usize),
    DeleteCharacters(usize),
    EraseCharacters(usize),
    ClearTabStop(usize),
    /// Enable the listed modes; `true` marks DEC private codes.
    SetMode(Vec<usize>, bool),
    /// Disable the listed modes; `true` marks DEC private codes.
    ResetMode(Vec<usize>, bool),
    SelectGraphicRendition(Vec<usize>),
    /// Select the scrolling region, 1-indexed and inclusive.
    SetMargins(usize, usize),
    /// Primary device attributes request.
    Answer,
    /// A sequence nobody recognized, passed through literally.
    Debug(String),
}

/// Anything that consumes parser output.
pub trait Handler {
    fn on_event(&mut self, event: &Event);
}

impl<'a, H: Handler> Handler for &'a mut H {
    fn on_event(&mut self, event: &Event) {
        (**self).on_event(event);
    }
}

/// Forwards every event to two handlers in order, so a debug or diff
/// observer can watch the stream a screen consumes.
pub struct Tee<A, B>(pub A, pub B);

impl<A: Handler, B: Handler> Handler for Tee<A, B> {
    fn on_event(&mut self, event: &Event) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Count(usize);

    impl Handler for Count {
        fn on_event(&mut self, _event: &Event) {
            self.0 += 1;
        }
    }

    #[test]
    fn tee_forwards_to_both() {
        let mut tee = Tee(Count(0), Count(0));
        tee.on_event(&Event::Bell);
        tee.on_event(&Event::Draw('x'));
        assert_eq!((tee.0).0, 2);
        assert_eq!((tee.1).0, 2);
    }
}
