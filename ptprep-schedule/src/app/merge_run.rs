use super::{MergeApp, MergeCliError, MergeConfiguration};
use crate::{
    io::{write_schedule, write_vehicles},
    merge::{merge_feeds, FeedInput, MergeError, MergeSummary},
    model::check_integrity,
};
use itertools::Itertools;
use ptprep_core::{fs_ops, write_atomic};
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// number of integrity violations listed in the log before the run aborts
const REPORTED_VIOLATIONS: usize = 20;

/// runs a merge end to end. every input is checked before any feed is read,
/// and outputs are only written once all feeds merged successfully.
pub fn run(app: &MergeApp) -> Result<MergeSummary, MergeCliError> {
    let inputs = feed_inputs(&app.inputs)?;
    let configuration =
        MergeConfiguration::load(app.configuration_file.as_deref())?.with_overrides(app);
    log::debug!("merge configuration: {configuration:?}");

    validate_inputs(&inputs)?;
    for output in [&app.output_schedule, &app.output_vehicles] {
        fs_ops::create_parent_dirs(output).map_err(|source| MergeCliError::OutputDirectory {
            path: output.clone(),
            source,
        })?;
    }
    if !configuration.overwrite {
        if let Some(existing) = [&app.output_schedule, &app.output_vehicles]
            .into_iter()
            .find(|p| p.exists())
        {
            return Err(MergeCliError::OutputExists(existing.clone()));
        }
    }

    let output = merge_feeds(&inputs, configuration.prefix_policy)?;
    output.summary.log();

    if configuration.validate_output {
        let violations = check_integrity(&output.schedule, &output.fleet);
        if !violations.is_empty() {
            for violation in violations.iter().take(REPORTED_VIOLATIONS) {
                log::error!("{violation}");
            }
            return Err(MergeError::IntegrityError(violations).into());
        }
    }

    write_schedule(&output.schedule, &app.output_schedule)?;
    log::info!("wrote merged schedule to {}", app.output_schedule.display());
    write_vehicles(&output.fleet, &app.output_vehicles)?;
    log::info!("wrote merged vehicles to {}", app.output_vehicles.display());

    if let Some(summary_file) = &configuration.summary_file {
        write_summary(&output.summary, summary_file)?;
    }
    Ok(output.summary)
}

/// pairs up the positional input paths as (schedule, vehicles)
pub fn feed_inputs(paths: &[PathBuf]) -> Result<Vec<FeedInput>, MergeCliError> {
    if paths.is_empty() || paths.len() % 2 != 0 {
        return Err(MergeCliError::Usage(format!(
            "expected <schedule> <vehicles> pairs after the two output paths, found {} input path(s)",
            paths.len()
        )));
    }
    let inputs = paths
        .iter()
        .tuples()
        .map(|(schedule, vehicles)| FeedInput {
            schedule: schedule.clone(),
            vehicles: vehicles.clone(),
        })
        .collect_vec();
    Ok(inputs)
}

/// fails on the first schedule that is not a regular file, then on the
/// first vehicles file that is not
pub fn validate_inputs(inputs: &[FeedInput]) -> Result<(), MergeCliError> {
    if let Some(input) = inputs.iter().find(|i| !i.schedule.is_file()) {
        return Err(MergeCliError::MissingSchedule(input.schedule.clone()));
    }
    if let Some(input) = inputs.iter().find(|i| !i.vehicles.is_file()) {
        return Err(MergeCliError::MissingVehicles(input.vehicles.clone()));
    }
    Ok(())
}

fn write_summary(summary: &MergeSummary, summary_file: &Path) -> Result<(), MergeCliError> {
    let summary_error = |source: std::io::Error| MergeCliError::SummaryError {
        path: summary_file.to_path_buf(),
        source,
    };
    let json = summary
        .to_json()
        .map_err(|e| summary_error(std::io::Error::other(e)))?;
    fs_ops::create_parent_dirs(summary_file).map_err(summary_error)?;
    write_atomic(summary_file, |sink| sink.write_all(json.as_bytes())).map_err(summary_error)?;
    log::info!("wrote merge summary to {}", summary_file.display());
    Ok(())
}
