//! Replays a captured byte stream (e.g. `script` output or a raw pty
//! dump) through the emulator and paints the resulting screen, so you
//! can see what a program actually did to the display.
//!
//!     cargo run --example termdbg -- capture.log

extern crate termion;
extern crate vt102_emulator as vt102;

use std::env;
use std::fs::File;
use std::io::{self, Read, Write};
use std::process;

use termion::color;
use vt102::{Color, LogType, OpenMode, Severity, TermSetting};

fn paint<W: Write>(out: &mut W, fg: Color) -> io::Result<()> {
    match fg {
        Color::Default => write!(out, "{}", color::Fg(color::Reset)),
        Color::Black => write!(out, "{}", color::Fg(color::Black)),
        Color::Red => write!(out, "{}", color::Fg(color::Red)),
        Color::Green => write!(out, "{}", color::Fg(color::Green)),
        // The palette says brown; yellow is as close as it gets.
        Color::Brown => write!(out, "{}", color::Fg(color::Yellow)),
        Color::Blue => write!(out, "{}", color::Fg(color::Blue)),
        Color::Magenta => write!(out, "{}", color::Fg(color::Magenta)),
        Color::Cyan => write!(out, "{}", color::Fg(color::Cyan)),
        Color::White => write!(out, "{}", color::Fg(color::White)),
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let mut bytes = Vec::new();
    if args.len() > 1 {
        let mut file = match File::open(&args[1]) {
            Ok(file) => file,
            Err(why) => {
                eprintln!("couldn't open {}: {}", args[1], why);
                process::exit(1);
            }
        };
        file.read_to_end(&mut bytes).expect("couldn't read the capture");
    } else {
        io::stdin()
            .read_to_end(&mut bytes)
            .expect("couldn't read stdin");
    }

    let mut term = TermSetting::new()
        .lines(24)
        .columns(80)
        .debug_type(LogType::File((
            "termdbg.log".to_owned(),
            Severity::Debug,
            OpenMode::Truncate,
        )))
        .build()
        .expect("couldn't build the terminal");
    term.feed(&String::from_utf8_lossy(&bytes));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let border: String = "-".repeat(term.screen().columns());
    writeln!(out, "+{}+", border).unwrap();
    for line in term.screen().grid() {
        write!(out, "|").unwrap();
        for cell in line {
            paint(&mut out, cell.fg).unwrap();
            write!(out, "{}", cell.data).unwrap();
        }
        write!(out, "{}", color::Fg(color::Reset)).unwrap();
        writeln!(out, "|").unwrap();
    }
    writeln!(out, "+{}+", border).unwrap();
    let (x, y) = term.screen().cursor();
    writeln!(out, "cursor: ({}, {}); replies: {:?}", x, y, term.screen().buffer()).unwrap();
}
