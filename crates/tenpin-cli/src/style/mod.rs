//! Terminal styling: color switch, tones, line printers and the trace table.

use std::sync::atomic::{AtomicBool, Ordering};

use tenpin_config::OutputConfig;

pub mod output;
pub mod table;
pub mod tone;

pub use output::*;
pub use table::*;
pub use tone::Tone;

static NO_COLOR: AtomicBool = AtomicBool::new(false);

pub fn set_no_color(value: bool) {
    NO_COLOR.store(value, Ordering::SeqCst);
}

pub fn no_color() -> bool {
    NO_COLOR.load(Ordering::SeqCst)
}

/// Turns colors off when the loaded config disables them. Never turns them
/// back on, so `--no-color` and `NO_COLOR` always win.
pub fn apply_output_config(output: &OutputConfig) {
    if !output.color {
        set_no_color(true);
    }
}
