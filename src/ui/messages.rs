//! One-line status messages for the terminal.
//!
//! Tables and charts go to stdout untouched; anything about the run
//! itself is a short prefixed line, warnings on stderr.

use ansi_term::Colour;
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Blue.bold().paint("clocklog:"), msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{} {}", Colour::Green.bold().paint("ok:"), msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{} {}", Colour::Yellow.bold().paint("warning:"), msg);
}
