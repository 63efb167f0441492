mod merge_app;
mod merge_cli_error;
mod merge_configuration;
mod merge_run;

pub use merge_app::MergeApp;
pub use merge_cli_error::MergeCliError;
pub use merge_configuration::MergeConfiguration;
pub use merge_run::{feed_inputs, run, validate_inputs};
