//! Score command - prints the final score of a throw sequence.

use anyhow::Result;
use serde::Serialize;
use tenpin_config::OutputFormat;
use tenpin_kernel::{Runtime, TracingSink};

use super::game::{self, PreparedGame};
use crate::GameArgs;
use crate::style::{Tone, print_labeled};

#[derive(Serialize)]
struct ScoreReport {
    score: i64,
    throws: u64,
    bonus_armed: bool,
    state_hash: String,
}

pub fn run(args: &GameArgs, format: Option<&str>) -> Result<()> {
    let PreparedGame { config, throws } = game::prepare(args)?;
    let format = game::output_format(format, &config)?;

    let mut runtime = Runtime::new(TracingSink);
    runtime.record_all(throws);
    let tracker = runtime.tracker();

    let report = ScoreReport {
        score: tracker.score(),
        throws: tracker.throw_count(),
        bonus_armed: tracker.is_bonus_armed(),
        state_hash: game::hash_hex(tracker.compute_state_hash()),
    };

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            println!("{} {}", Tone::Header.paint("Score:"), Tone::Score.paint(report.score));
            print_labeled("Throws", &report.throws.to_string());
            if report.bonus_armed {
                print_labeled("Pending", "next throw would be doubled");
            }
        }
    }

    Ok(())
}
