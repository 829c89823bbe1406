use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use log::{debug, info};
use nav_merge_core::{MergeConfig, NavMerger, State, merge_main};

use crate::records::{MeasurementRecord, StateRecord};

/// Feeds every measurement line through `merger` and writes one state line
/// per measurement. Blank lines are skipped. Returns the number of steps.
pub fn replay<R: BufRead, W: Write>(merger: &mut NavMerger, input: R, mut output: W) -> Result<usize> {
    let mut steps = 0;

    for (i, line) in input.lines().enumerate() {
        let line_number = i + 1;
        let line = line.with_context(|| format!("failed to read line {}", line_number))?;
        if line.trim().is_empty() {
            continue;
        }

        let record: MeasurementRecord = serde_json::from_str(&line)
            .with_context(|| format!("malformed measurement on line {}", line_number))?;
        let state = merger.update(&record.into());
        debug!("line {}: t = {}", line_number, state.time);

        serde_json::to_writer(&mut output, &StateRecord::from(state))?;
        writeln!(output)?;
        steps += 1;
    }

    output.flush()?;
    info!("replayed {} measurements", steps);
    Ok(steps)
}

/// One merge step on inline JSON, returns the new state as a JSON line.
pub fn step(config: &MergeConfig, state_json: &str, measurement_json: &str) -> Result<String> {
    let state: StateRecord = serde_json::from_str(state_json).context("malformed --state")?;
    let measurement: MeasurementRecord =
        serde_json::from_str(measurement_json).context("malformed --measurement")?;

    let new_state = merge_main(config, &State::from(state), &measurement.into());
    Ok(serde_json::to_string(&StateRecord::from(&new_state))?)
}
