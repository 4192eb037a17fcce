extern crate vt102_emulator as vt102;

use vt102::TermSetting;

fn main() {
    let mut term = TermSetting::new()
        .lines(24)
        .columns(80)
        .build()
        .expect("couldn't build the terminal");
    term.feed("Hello world!");
    for line in term.display() {
        println!("{}", line);
    }
    let (x, y) = term.screen().cursor();
    println!("cursor: ({}, {})", x, y);
}
