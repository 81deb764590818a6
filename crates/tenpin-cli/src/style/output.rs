//! Line printers shared by the commands.

use super::tone::Tone;

pub fn print_success(msg: &str) {
    println!("{} {msg}", Tone::Score.paint("✓"));
}

pub fn print_hint(msg: &str) {
    println!("{} {}", Tone::Muted.paint("→"), Tone::Muted.paint(msg));
}

/// Indented `key: value` line under a heading.
pub fn print_labeled(key: &str, value: &str) {
    println!("  {}: {value}", Tone::Muted.paint(key));
}

pub fn print_command(cmd: &str) {
    println!("  {}", Tone::Code.paint(cmd));
}
