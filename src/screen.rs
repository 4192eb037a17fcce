//! The in-memory screen.
//!
//! A [`Screen`] is the presentational model of the terminal: a grid of
//! styled [`Cell`]s plus the cursor, scrolling margins, tab stops,
//! mode set, savepoint stack and the reply buffer. It can be driven
//! directly through its methods, or attached behind a
//! [`Parser`](::parser::Parser) via the [`Handler`] impl.
//!
//! No operation here fails: out-of-range arguments are clamped and
//! nonsensical requests are no-ops, because the byte streams real
//! programs emit are full of both.

use std::cmp;
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;

use slog::{Discard, Logger};

use control;
use event::{Event, Handler};
use graphics::{self, Cell};

/// ESC 7 in a loop must not grow the heap forever; past this depth the
/// oldest savepoint is forgotten.
const SAVEPOINT_LIMIT: usize = 128;

bitflags! {
    /// Terminal modes, ANSI and DEC private ones in a single set.
    pub struct Mode: u8 {
        /// Line feed/new line mode: a received linefeed also implies
        /// a carriage return.
        const LNM     = 0b0000001;
        /// Insert/replace mode: new characters push old ones to the
        /// right instead of overwriting them.
        const IRM     = 0b0000010;
        /// Text cursor enable mode: the cursor is visible.
        const DECTCEM = 0b0000100;
        /// Cursor key mode: cursor keys send application sequences.
        const DECCKM  = 0b0001000;
        /// Origin mode: cursor addressing is relative to the top
        /// margin and confined to the scrolling region.
        const DECOM   = 0b0010000;
        /// Auto wrap mode: drawing past the last column moves to the
        /// next line instead of overprinting the last column.
        const DECAWM  = 0b0100000;
        /// Column mode: 132 columns per line instead of 80.
        const DECCOLM = 0b1000000;
    }
}

impl Default for Mode {
    fn default() -> Mode {
        Mode::DECAWM | Mode::DECTCEM | Mode::LNM
    }
}

impl Mode {
    /// Maps a numeric mode parameter to a flag. ANSI and DEC private
    /// codes live in distinct namespaces, hence the `private` switch:
    ///
    /// * `CSI 4 h` is insert mode, `CSI ? 4 h` is smooth scrolling;
    /// * `CSI 20 h` is new line mode.
    ///
    /// Codes this terminal does not implement map to `None`.
    pub fn from_code(code: usize, private: bool) -> Option<Mode> {
        if private {
            match code {
                1 => Some(Mode::DECCKM),
                3 => Some(Mode::DECCOLM),
                6 => Some(Mode::DECOM),
                7 => Some(Mode::DECAWM),
                25 => Some(Mode::DECTCEM),
                _ => None,
            }
        } else {
            match code {
                4 => Some(Mode::IRM),
                20 => Some(Mode::LNM),
                _ => None,
            }
        }
    }
}

/// Top and bottom lines of the scrolling region, inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Margins {
    pub top: usize,
    pub bottom: usize,
}

/// What ESC 7 captures and ESC 8 brings back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Savepoint {
    cursor: (usize, usize),
    style: Cell,
    origin: bool,
    wrap: bool,
}

/// Construction failed; the only way a screen surfaces an error.
#[derive(Debug)]
pub struct ScreenError(String);

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Error for ScreenError {}

/// The screen display of a terminal.
#[derive(Debug)]
pub struct Screen {
    grid: Vec<Vec<Cell>>,
    lines: usize,
    columns: usize,
    // Cursor; `x == columns` is the legal "pending wrap" state entered
    // by drawing into the last column.
    x: usize,
    y: usize,
    // The rendition stamped on drawn cells; `data` is ignored.
    cursor_style: Cell,
    mode: Mode,
    margins: Margins,
    tabstops: BTreeSet<usize>,
    savepoints: Vec<Savepoint>,
    buffer: String,
    pub logger: Logger,
}

impl Screen {
    /// A screen that keeps quiet. See [`Screen::with_logger`] when
    /// debugging what a program does to the display.
    pub fn new(lines: usize, columns: usize) -> Result<Screen, ScreenError> {
        Screen::with_logger(lines, columns, Logger::root(Discard, o!()))
    }

    pub fn with_logger(
        lines: usize,
        columns: usize,
        logger: Logger,
    ) -> Result<Screen, ScreenError> {
        if lines == 0 || columns == 0 {
            return Err(ScreenError(format!(
                "invalid screen dimensions: {}x{}",
                lines, columns
            )));
        }
        let mut screen = Screen {
            grid: vec![vec![Cell::default(); columns]; lines],
            lines: lines,
            columns: columns,
            x: 0,
            y: 0,
            cursor_style: Cell::default(),
            mode: Mode::default(),
            margins: Margins {
                top: 0,
                bottom: lines - 1,
            },
            tabstops: BTreeSet::new(),
            savepoints: Vec::new(),
            buffer: String::new(),
            logger: logger,
        };
        screen.reset();
        Ok(screen)
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cursor position as `(x, y)`, 0-indexed. `x` equals `columns`
    /// while a wrap is pending.
    pub fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn margins(&self) -> Margins {
        self.margins
    }

    pub fn tabstops(&self) -> &BTreeSet<usize> {
        &self.tabstops
    }

    /// Everything the host should read back, e.g. DA replies.
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The rendition newly drawn characters receive.
    pub fn cursor_style(&self) -> Cell {
        self.cursor_style
    }

    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// The screen contents as one string per line.
    pub fn display(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|line| line.iter().map(|cell| cell.data).collect())
            .collect()
    }

    /// Back to the powered-up state: blank display, home cursor,
    /// default rendition, modes, margins and tab stops, empty
    /// savepoint stack and reply buffer.
    pub fn reset(&mut self) {
        for line in &mut self.grid {
            for cell in line.iter_mut() {
                *cell = Cell::default();
            }
        }
        self.x = 0;
        self.y = 0;
        self.cursor_style = Cell::default();
        self.mode = Mode::default();
        self.margins = Margins {
            top: 0,
            bottom: self.lines - 1,
        };
        // From `man terminfo`: hardware tabs are set every eight
        // columns when the terminal powers up.
        self.tabstops = (0..self.columns).filter(|c| c % 8 == 7).collect();
        self.savepoints.clear();
        self.buffer.clear();
    }

    /// Resize the display. Extra lines appear at the bottom and extra
    /// columns at the right; shrinking clips lines at the top and
    /// columns at the right. Passing `0` keeps that dimension. The
    /// cursor is left where it was.
    pub fn resize(&mut self, lines: usize, columns: usize) {
        let lines = if lines == 0 { self.lines } else { lines };
        let columns = if columns == 0 { self.columns } else { columns };

        if lines > self.lines {
            for _ in 0..lines - self.lines {
                self.grid.push(vec![Cell::default(); self.columns]);
            }
        } else if lines < self.lines {
            let surplus = self.lines - lines;
            self.grid.drain(..surplus);
        }

        if columns != self.columns {
            for line in &mut self.grid {
                line.resize(columns, Cell::default());
            }
        }

        self.lines = lines;
        self.columns = columns;

        // Margins must keep describing a region of the new display.
        let Margins { top, bottom } = self.margins;
        if bottom >= lines || bottom - top < 1 {
            self.margins = Margins {
                top: 0,
                bottom: lines - 1,
            };
        }
    }

    /// Select the scrolling region (DECSTBM). Arguments are 1-indexed
    /// and both are required; requests for a region of fewer than two
    /// lines are ignored, then the cursor homes.
    pub fn set_margins(&mut self, top: usize, bottom: usize) {
        if top == 0 || bottom == 0 {
            return;
        }
        let top = cmp::min(top - 1, self.lines - 1);
        let bottom = cmp::min(bottom - 1, self.lines - 1);

        // VT102 and VT220 require DECSTBM to ignore regions of width
        // less than 2, and aptitude relies on it.
        if bottom > top {
            self.margins = Margins {
                top: top,
                bottom: bottom,
            };
            self.cursor_position(0, 0);
        }
    }

    /// Enable the listed modes; `private` marks DEC private codes.
    pub fn set_mode(&mut self, codes: &[usize], private: bool) {
        let requested = self.lookup_modes(codes, private);
        self.mode.insert(requested);

        // Switching column mode erases the display and homes the
        // cursor.
        if requested.contains(Mode::DECCOLM) {
            self.resize(0, 132);
            self.erase_in_display(2);
            self.cursor_position(0, 0);
        }

        // `vttest` expects DECOM to home the cursor as well, see
        // vttest/main.c:303.
        if requested.contains(Mode::DECOM) {
            self.cursor_position(0, 0);
        }
    }

    /// Disable the listed modes; `private` marks DEC private codes.
    pub fn reset_mode(&mut self, codes: &[usize], private: bool) {
        let requested = self.lookup_modes(codes, private);
        self.mode.remove(requested);

        if requested.contains(Mode::DECCOLM) {
            self.resize(0, 80);
            self.erase_in_display(2);
            self.cursor_position(0, 0);
        }

        if requested.contains(Mode::DECOM) {
            self.cursor_position(0, 0);
        }
    }

    fn lookup_modes(&self, codes: &[usize], private: bool) -> Mode {
        let mut acc = Mode::empty();
        for &code in codes {
            match Mode::from_code(code, private) {
                Some(flag) => acc.insert(flag),
                None => debug!(
                    self.logger,
                    "absorbing unknown mode {} (private: {})", code, private
                ),
            }
        }
        acc
    }

    /// Display a character at the cursor position and advance.
    pub fn draw(&mut self, ch: char) {
        // A wrap deferred by the previous draw happens now: move on to
        // the next line, or overprint the last column when auto wrap
        // is off.
        if self.x == self.columns {
            if self.mode.contains(Mode::DECAWM) {
                self.linefeed();
                self.x = 0;
            } else {
                self.x -= 1;
            }
        }

        if self.mode.contains(Mode::IRM) {
            self.insert_characters(1);
        }

        let cell = Cell {
            data: ch,
            ..self.cursor_style
        };
        self.put_cell(cell);

        // Not cursor_forward(): `x` must be able to reach `columns`
        // so the next draw knows a wrap is pending.
        self.x += 1;
    }

    /// Writing outside the grid is a bug in this crate, not in the
    /// host program: fatal when debugging, logged and skipped in
    /// release so the grid is never left half-written.
    fn put_cell(&mut self, cell: Cell) {
        let (x, y) = (self.x, self.y);
        debug_assert!(
            y < self.lines && x < self.columns,
            "cell write outside the display: ({}, {})",
            x,
            y
        );
        match self.grid.get_mut(y).and_then(|line| line.get_mut(x)) {
            Some(slot) => *slot = cell,
            None => warn!(self.logger, "dropped a cell write at ({}, {})", x, y),
        }
    }

    pub fn bell(&mut self) {
        // Stub; anything audible is the embedder's business.
    }

    pub fn backspace(&mut self) {
        self.x = cmp::min(self.x.saturating_sub(1), self.columns - 1);
    }

    pub fn carriage_return(&mut self) {
        self.x = 0;
    }

    /// Move the cursor down one line; at the bottom margin the region
    /// scrolls up instead. Lines outside the margins never move.
    pub fn index(&mut self) {
        let Margins { top, bottom } = self.margins;
        if self.y == bottom {
            self.grid.remove(top);
            let row = self.default_row();
            self.grid.insert(bottom, row);
        } else {
            self.cursor_down(1);
        }
    }

    /// Move the cursor up one line; at the top margin the region
    /// scrolls down instead.
    pub fn reverse_index(&mut self) {
        let Margins { top, bottom } = self.margins;
        if self.y == top {
            self.grid.remove(bottom);
            let row = self.default_row();
            self.grid.insert(top, row);
        } else {
            self.cursor_up(1);
        }
    }

    /// An index, plus a carriage return when new line mode is set.
    pub fn linefeed(&mut self) {
        self.index();
        if self.mode.contains(Mode::LNM) {
            self.carriage_return();
        }
    }

    /// Move to the next tab stop, or the last column if none is left.
    pub fn tab(&mut self) {
        let stop = self.tabstops
            .range(self.x + 1..)
            .next()
            .cloned()
            .unwrap_or(self.columns - 1);
        // A stop can go stale when the screen narrows; never follow
        // one off the display.
        self.x = cmp::min(stop, self.columns - 1);
    }

    pub fn set_tab_stop(&mut self) {
        self.tabstops.insert(self.x);
    }

    /// `0` (or nothing) clears the stop at the cursor column, `3`
    /// clears them all; other kinds do nothing.
    pub fn clear_tab_stop(&mut self, kind: usize) {
        match kind {
            0 => {
                let x = self.x;
                self.tabstops.remove(&x);
            }
            3 => self.tabstops.clear(),
            _ => {}
        }
    }

    /// Push cursor position, rendition, origin and wrap mode.
    pub fn save_cursor(&mut self) {
        if self.savepoints.len() == SAVEPOINT_LIMIT {
            self.savepoints.remove(0);
        }
        self.savepoints.push(Savepoint {
            cursor: (self.x, self.y),
            style: self.cursor_style,
            origin: self.mode.contains(Mode::DECOM),
            wrap: self.mode.contains(Mode::DECAWM),
        });
    }

    /// Pop the savepoint stack. With nothing saved, origin mode is
    /// reset and the cursor homes.
    pub fn restore_cursor(&mut self) {
        match self.savepoints.pop() {
            Some(savepoint) => {
                // Flags go straight into the mode set; set_mode()
                // would home the cursor and clobber what we are about
                // to restore.
                if savepoint.origin {
                    self.mode.insert(Mode::DECOM);
                }
                if savepoint.wrap {
                    self.mode.insert(Mode::DECAWM);
                }
                self.cursor_style = savepoint.style;
                self.x = savepoint.cursor.0;
                self.y = savepoint.cursor.1;
                self.ensure_bounds(false);
            }
            None => {
                self.mode.remove(Mode::DECOM);
                self.cursor_position(0, 0);
            }
        }
    }

    /// Insert blank lines at the cursor, pushing the lines below it
    /// down and out past the bottom margin. Only acts while the
    /// cursor is inside the scrolling region.
    pub fn insert_lines(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        let Margins { top, bottom } = self.margins;
        if top <= self.y && self.y <= bottom {
            let until = cmp::min(bottom + 1, self.y + count);
            for line in self.y..until {
                self.grid.remove(bottom);
                let row = self.default_row();
                self.grid.insert(line, row);
            }
            self.carriage_return();
        }
    }

    /// Delete lines at the cursor, pulling the lines below it up and
    /// filling the bottom of the region with blanks. Only acts while
    /// the cursor is inside the scrolling region.
    pub fn delete_lines(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        let Margins { top, bottom } = self.margins;
        if top <= self.y && self.y <= bottom {
            for _ in 0..cmp::min(bottom - self.y + 1, count) {
                self.grid.remove(self.y);
                let row = self.default_row();
                self.grid.insert(bottom, row);
            }
            self.carriage_return();
        }
    }

    /// Insert blank characters at the cursor, shifting the rest of
    /// the line right; the cursor stays put.
    pub fn insert_characters(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        let limit = self.columns.saturating_sub(self.x);
        let x = self.x;
        if let Some(line) = self.grid.get_mut(self.y) {
            for _ in 0..cmp::min(count, limit) {
                line.insert(x, Cell::default());
                line.pop();
            }
        }
    }

    /// Delete characters starting at the cursor, shifting the rest of
    /// the line left and padding it with blanks; the cursor stays put.
    pub fn delete_characters(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        let limit = self.columns.saturating_sub(self.x);
        let x = self.x;
        if let Some(line) = self.grid.get_mut(self.y) {
            for _ in 0..cmp::min(count, limit) {
                line.remove(x);
                line.push(Cell::default());
            }
        }
    }

    /// Blank out characters starting at the cursor, in place; the
    /// cursor stays put.
    pub fn erase_characters(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        let from = self.x;
        let until = cmp::min(self.x.saturating_add(count), self.columns);
        if let Some(line) = self.grid.get_mut(self.y) {
            for cell in line.iter_mut().skip(from).take(until.saturating_sub(from)) {
                *cell = Cell::default();
            }
        }
    }

    /// Erase within the current line: `0` from the cursor to the end,
    /// `1` from the beginning through the cursor, `2` the whole line.
    pub fn erase_in_line(&mut self, kind: usize) {
        let (from, until) = match kind {
            0 => (self.x, self.columns),
            1 => (0, cmp::min(self.x + 1, self.columns)),
            2 => (0, self.columns),
            _ => return,
        };
        if let Some(line) = self.grid.get_mut(self.y) {
            for cell in line.iter_mut().skip(from).take(until.saturating_sub(from)) {
                *cell = Cell::default();
            }
        }
    }

    /// Erase within the display: `0` from the cursor to the end, `1`
    /// from the beginning through the cursor, `2` everything. The
    /// cursor does not move.
    pub fn erase_in_display(&mut self, kind: usize) {
        let interval = match kind {
            0 => cmp::min(self.y + 1, self.lines)..self.lines,
            1 => 0..cmp::min(self.y, self.lines),
            2 => 0..self.lines,
            _ => return,
        };
        for idx in interval {
            let row = self.default_row();
            self.grid[idx] = row;
        }
        // For 0 and 1 the cursor's own line is erased partially.
        if kind == 0 || kind == 1 {
            self.erase_in_line(kind);
        }
    }

    /// Move up within the scrolling region.
    pub fn cursor_up(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        self.y = self.y.saturating_sub(count);
        self.ensure_bounds(true);
    }

    /// Move up and return to column 0.
    pub fn cursor_up1(&mut self, count: usize) {
        self.cursor_up(count);
        self.carriage_return();
    }

    /// Move down within the scrolling region.
    pub fn cursor_down(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        self.y = self.y.saturating_add(count);
        self.ensure_bounds(true);
    }

    /// Move down and return to column 0.
    pub fn cursor_down1(&mut self, count: usize) {
        self.cursor_down(count);
        self.carriage_return();
    }

    /// Move left, stopping at the left edge.
    pub fn cursor_back(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        self.x = self.x.saturating_sub(count);
        self.ensure_bounds(false);
    }

    /// Move right, stopping at the right edge.
    pub fn cursor_forward(&mut self, count: usize) {
        let count = cmp::max(count, 1);
        self.x = self.x.saturating_add(count);
        self.ensure_bounds(false);
    }

    /// Move to a 1-indexed `(line, column)`; `0` reads as `1`. In
    /// origin mode lines count from the top margin and a request
    /// outside the scrolling region is ignored entirely.
    pub fn cursor_position(&mut self, line: usize, column: usize) {
        let column = (if column == 0 { 1 } else { column }) - 1;
        let mut line = (if line == 0 { 1 } else { line }) - 1;

        if self.mode.contains(Mode::DECOM) {
            line += self.margins.top;
            if line > self.margins.bottom {
                return;
            }
        }

        self.x = column;
        self.y = line;
        self.ensure_bounds(false);
    }

    /// Move to a 1-indexed column in the current line.
    pub fn cursor_to_column(&mut self, column: usize) {
        self.x = (if column == 0 { 1 } else { column }) - 1;
        self.ensure_bounds(false);
    }

    /// Move to a 1-indexed line in the current column; in origin mode
    /// lines count from the top margin.
    pub fn cursor_to_line(&mut self, line: usize) {
        let mut line = (if line == 0 { 1 } else { line }) - 1;
        if self.mode.contains(Mode::DECOM) {
            line += self.margins.top;
        }
        self.y = line;
        self.ensure_bounds(false);
    }

    /// Interpret SGR parameters in order, each on its own; unknown
    /// codes are skipped silently.
    pub fn select_graphic_rendition(&mut self, codes: &[usize]) {
        let default = [0];
        let codes = if codes.is_empty() { &default[..] } else { codes };
        for &code in codes {
            if code == 0 {
                self.cursor_style = Cell::default();
            } else if let Some(color) = graphics::foreground(code) {
                self.cursor_style.fg = color;
            } else if let Some(color) = graphics::background(code) {
                self.cursor_style.bg = color;
            } else if let Some(style) = graphics::text_set(code) {
                self.cursor_style.text.insert(style);
            } else if let Some(style) = graphics::text_reset(code) {
                self.cursor_style.text.remove(style);
            }
        }
    }

    /// Fill the screen with uppercase E's, the DEC screen-alignment
    /// test pattern.
    pub fn alignment_display(&mut self) {
        for line in &mut self.grid {
            for cell in line.iter_mut() {
                *cell = Cell {
                    data: 'E',
                    ..Cell::default()
                };
            }
        }
    }

    /// Reply to the primary DA exchange: a service class 2 terminal
    /// with 132 columns and selective erase. The secondary exchange
    /// asks about installed hardware and makes no sense for a
    /// software terminal.
    pub fn answer(&mut self) {
        self.buffer.push(control::CSI);
        self.buffer.push_str("?62;1;6c");
    }

    fn default_row(&self) -> Vec<Cell> {
        vec![Cell::default(); self.columns]
    }

    /// Pull the cursor back inside the display, or inside the
    /// scrolling region when asked to (origin mode always does).
    fn ensure_bounds(&mut self, use_margins: bool) {
        let (top, bottom) = if use_margins || self.mode.contains(Mode::DECOM) {
            (self.margins.top, self.margins.bottom)
        } else {
            (0, self.lines - 1)
        };
        self.x = cmp::min(self.x, self.columns - 1);
        self.y = cmp::min(cmp::max(self.y, top), bottom);
    }
}

impl Handler for Screen {
    fn on_event(&mut self, event: &Event) {
        trace!(self.logger, "(event) {:?}", event);
        match *event {
            Event::Bell => self.bell(),
            Event::Backspace => self.backspace(),
            Event::Tab => self.tab(),
            Event::Linefeed => self.linefeed(),
            Event::CarriageReturn => self.carriage_return(),
            // Only the default glyph sets are supported, so switching
            // between G0 and G1 changes nothing.
            Event::ShiftIn | Event::ShiftOut => {}
            Event::Draw(ch) => self.draw(ch),
            Event::Reset => self.reset(),
            Event::Index => self.index(),
            Event::ReverseIndex => self.reverse_index(),
            Event::SetTabStop => self.set_tab_stop(),
            Event::SaveCursor => self.save_cursor(),
            Event::RestoreCursor => self.restore_cursor(),
            Event::AlignmentDisplay => self.alignment_display(),
            Event::InsertCharacters(count) => self.insert_characters(count),
            Event::CursorUp(count) => self.cursor_up(count),
            Event::CursorDown(count) => self.cursor_down(count),
            Event::CursorForward(count) => self.cursor_forward(count),
            Event::CursorBack(count) => self.cursor_back(count),
            Event::CursorDown1(count) => self.cursor_down1(count),
            Event::CursorUp1(count) => self.cursor_up1(count),
            Event::CursorToColumn(column) => self.cursor_to_column(column),
            Event::CursorToLine(line) => self.cursor_to_line(line),
            Event::CursorPosition(line, column) => self.cursor_position(line, column),
            Event::EraseInDisplay(kind) => self.erase_in_display(kind),
            Event::EraseInLine(kind) => self.erase_in_line(kind),
            Event::InsertLines(count) => self.insert_lines(count),
            Event::DeleteLines(count) => self.delete_lines(count),
            Event::DeleteCharacters(count) => self.delete_characters(count),
            Event::EraseCharacters(count) => self.erase_characters(count),
            Event::ClearTabStop(kind) => self.clear_tab_stop(kind),
            Event::SetMode(ref codes, private) => self.set_mode(codes, private),
            Event::ResetMode(ref codes, private) => self.reset_mode(codes, private),
            Event::SelectGraphicRendition(ref codes) => self.select_graphic_rendition(codes),
            Event::SetMargins(top, bottom) => self.set_margins(top, bottom),
            Event::Answer => self.answer(),
            Event::Debug(ref literal) => {
                debug!(self.logger, "absorbing unrecognized sequence {:?}", literal)
            }
        }
    }
}
