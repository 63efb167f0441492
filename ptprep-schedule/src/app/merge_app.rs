use super::{merge_run, MergeCliError};
use crate::merge::{MergeSummary, PrefixPolicy};
use clap::Parser;
use std::path::PathBuf;

/// merges independently converted MATSim transit schedules and their vehicle
/// files into one schedule and one vehicles file. every id of a feed is
/// prefixed with a namespace derived from the feed's directory name.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct MergeApp {
    /// merged transit schedule to write (.xml or .xml.gz)
    pub output_schedule: PathBuf,
    /// merged vehicles file to write (.xml or .xml.gz)
    pub output_vehicles: PathBuf,
    /// input files as pairs: <schedule_1> <vehicles_1> [<schedule_2> <vehicles_2> ...]
    #[arg(required = true, num_args = 2..)]
    pub inputs: Vec<PathBuf>,
    /// TOML or JSON file with merge settings
    #[arg(long)]
    pub configuration_file: Option<PathBuf>,
    /// overrides the configured prefix policy
    #[arg(long, value_enum)]
    pub prefix_policy: Option<PrefixPolicy>,
    /// write a JSON summary of the merge to this file
    #[arg(long)]
    pub summary_file: Option<PathBuf>,
}

impl MergeApp {
    pub fn run(&self) -> Result<MergeSummary, MergeCliError> {
        merge_run::run(self)
    }
}
