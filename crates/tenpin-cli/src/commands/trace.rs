//! Trace command - shows how each throw was scored.

use anyhow::Result;
use serde::Serialize;
use tenpin_config::OutputFormat;
use tenpin_kernel::{Effect, RecordingSink, Runtime};

use super::game::{self, PreparedGame};
use crate::GameArgs;
use crate::style::{Tone, print_trace_table};

/// One scored throw.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct TraceRow {
    pub throw_number: u64,
    pub pins: i32,
    pub multiplier: i64,
    pub points: i64,
    pub score: i64,
    pub bonus_armed: bool,
}

pub fn run(args: &GameArgs, format: Option<&str>) -> Result<()> {
    let PreparedGame { config, throws } = game::prepare(args)?;
    let format = game::output_format(format, &config)?;

    let mut runtime = Runtime::new(RecordingSink::new());
    let mut rows = Vec::with_capacity(throws.len());

    for throw in throws {
        runtime.record(throw);
        let score = runtime.tracker().score();
        rows.extend(row_from_effects(&runtime.sink_mut().drain(), score));
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
        OutputFormat::Text => {
            print_trace_table(&rows);
            println!(
                "{} {}",
                Tone::Header.paint("Final score:"),
                Tone::Score.paint(runtime.tracker().score())
            );
        }
    }

    Ok(())
}

/// Folds the effects of a single throw into a table row.
fn row_from_effects(effects: &[Effect], score: i64) -> Option<TraceRow> {
    let mut row = None;

    for effect in effects {
        match *effect {
            Effect::PointsAwarded {
                throw_number,
                pins,
                multiplier,
                points,
            } => {
                row = Some(TraceRow {
                    throw_number,
                    pins,
                    multiplier: multiplier.factor(),
                    points,
                    score,
                    bonus_armed: false,
                });
            }
            Effect::BonusArmed { .. } => {
                if let Some(row) = row.as_mut() {
                    row.bonus_armed = true;
                }
            }
        }
    }

    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use tenpin_kernel::{ScoreTracker, Throw, apply_throw};

    #[test]
    fn bonus_marks_the_row_that_completed_the_pair() {
        let (state, _) = apply_throw(ScoreTracker::new(), Throw::new(5));
        let (state, effects) = apply_throw(state, Throw::new(5));

        let row = row_from_effects(&effects, state.score()).expect("row for throw 2");

        assert_eq!(
            row,
            TraceRow {
                throw_number: 2,
                pins: 5,
                multiplier: 1,
                points: 5,
                score: 10,
                bonus_armed: true,
            }
        );
    }

    #[test]
    fn no_effects_no_row() {
        assert_eq!(row_from_effects(&[], 0), None);
    }
}
