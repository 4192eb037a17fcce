//! Control characters recognized by the parser, named after
//! `console_codes(4)`. Although the crate is called `vt102`, the set
//! here is the one for `TERM=linux`, which is a superset of vt102.

/// Null filler, ignored by the terminal.
pub const NUL: char = '\u{00}';
/// Bell, triggers the bell, buzzer, or beeper on the terminal.
pub const BEL: char = '\u{07}';
/// Backspace, one column to the left but not past the beginning of
/// the line.
pub const BS: char = '\u{08}';
/// Horizontal tabulation, move to the next tab stop, or to the end of
/// the line if there is no later stop.
pub const HT: char = '\u{09}';
/// Linefeed, and, when LNM (new line mode) is set, also a carriage
/// return.
pub const LF: char = '\u{0a}';
/// Vertical tabulation, same as `LF`.
pub const VT: char = '\u{0b}';
/// Form feed, same as `LF`.
pub const FF: char = '\u{0c}';
/// Carriage return, move to the left margin on the current line.
pub const CR: char = '\u{0d}';
/// Shift out, activate the G1 character set.
pub const SO: char = '\u{0e}';
/// Shift in, activate the G0 character set.
pub const SI: char = '\u{0f}';
/// Cancel, aborts an escape or control sequence and displays the
/// substitution character.
pub const CAN: char = '\u{18}';
/// Substitute, same as `CAN` (VT100 displays parity errors with it).
pub const SUB: char = '\u{1a}';
/// Escape, starts an escape sequence.
pub const ESC: char = '\u{1b}';
/// Delete, ignored by the terminal.
pub const DEL: char = '\u{7f}';
/// Control sequence introducer, an equivalent for `ESC [`.
pub const CSI: char = '\u{9b}';
