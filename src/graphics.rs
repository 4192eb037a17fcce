//! Cells and the SGR code tables.
//!
//! A [`Cell`] bundles a displayed character with its colors and text
//! styling, so the grid is a single matrix instead of a character
//! buffer with a parallel attribute buffer that every mutator has to
//! keep in sync.

bitflags! {
    /// Text styling a terminal can apply without changing the
    /// character itself.
    pub struct TextStyle: u8 {
        const BOLD          = 0b000001;
        const ITALICS       = 0b000010;
        const UNDERSCORE    = 0b000100;
        const STRIKETHROUGH = 0b001000;
        const BLINK         = 0b010000;
        const REVERSE       = 0b100000;
    }
}

/// The named color palette of the linux console.
///
/// `Default` lets the renderer pick whatever its scheme uses for
/// ordinary text; note `Brown` where one would expect yellow, which
/// is what the hardware palette actually ships.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Default,
    Black,
    Red,
    Green,
    Brown,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Default for Color {
    fn default() -> Color {
        Color::Default
    }
}

/// A single character cell of the screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub data: char,
    pub fg: Color,
    pub bg: Color,
    pub text: TextStyle,
}

impl Default for Cell {
    /// A blank cell with default colors and no styling.
    fn default() -> Cell {
        Cell {
            data: ' ',
            fg: Color::Default,
            bg: Color::Default,
            text: TextStyle::empty(),
        }
    }
}

/// Foreground color selected by an SGR code, `39` being the default.
pub fn foreground(code: usize) -> Option<Color> {
    match code {
        30 => Some(Color::Black),
        31 => Some(Color::Red),
        32 => Some(Color::Green),
        33 => Some(Color::Brown),
        34 => Some(Color::Blue),
        35 => Some(Color::Magenta),
        36 => Some(Color::Cyan),
        37 => Some(Color::White),
        39 => Some(Color::Default),
        _ => None,
    }
}

/// Background color selected by an SGR code, `49` being the default.
pub fn background(code: usize) -> Option<Color> {
    match code {
        40 => Some(Color::Black),
        41 => Some(Color::Red),
        42 => Some(Color::Green),
        43 => Some(Color::Brown),
        44 => Some(Color::Blue),
        45 => Some(Color::Magenta),
        46 => Some(Color::Cyan),
        47 => Some(Color::White),
        49 => Some(Color::Default),
        _ => None,
    }
}

/// Text style switched on by an SGR code.
pub fn text_set(code: usize) -> Option<TextStyle> {
    match code {
        1 => Some(TextStyle::BOLD),
        3 => Some(TextStyle::ITALICS),
        4 => Some(TextStyle::UNDERSCORE),
        5 => Some(TextStyle::BLINK),
        7 => Some(TextStyle::REVERSE),
        9 => Some(TextStyle::STRIKETHROUGH),
        _ => None,
    }
}

/// Text style switched off by an SGR code.
pub fn text_reset(code: usize) -> Option<TextStyle> {
    match code {
        22 => Some(TextStyle::BOLD),
        23 => Some(TextStyle::ITALICS),
        24 => Some(TextStyle::UNDERSCORE),
        25 => Some(TextStyle::BLINK),
        27 => Some(TextStyle::REVERSE),
        29 => Some(TextStyle::STRIKETHROUGH),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.data, ' ');
        assert_eq!(cell.fg, Color::Default);
        assert_eq!(cell.bg, Color::Default);
        assert!(cell.text.is_empty());
    }

    #[test]
    fn set_and_reset_codes_pair_up() {
        for (on, off) in [(1, 22), (3, 23), (4, 24), (5, 25), (7, 27), (9, 29)].iter() {
            assert_eq!(text_set(*on), text_reset(*off));
        }
    }

    #[test]
    fn palette_lookup() {
        assert_eq!(foreground(30), Some(Color::Black));
        assert_eq!(foreground(33), Some(Color::Brown));
        assert_eq!(foreground(39), Some(Color::Default));
        assert_eq!(background(42), Some(Color::Green));
        assert_eq!(background(49), Some(Color::Default));
        assert_eq!(foreground(38), None);
        assert_eq!(background(48), None);
    }
}
