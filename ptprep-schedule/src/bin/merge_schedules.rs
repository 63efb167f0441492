//! merges MATSim transit schedules and vehicle files produced by independent
//! GTFS conversions into one consistent schedule and vehicles file.
use clap::{error::ErrorKind, Parser};
use ptprep_schedule::app::MergeApp;

fn main() {
    env_logger::init();
    let app = match MergeApp::try_parse() {
        Ok(app) => app,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };
    if let Err(e) = app.run() {
        let _ = e.write_diagnostic(&mut std::io::stderr());
        std::process::exit(e.exit_code());
    }
}
