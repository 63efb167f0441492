use clap::{error::ErrorKind, Parser};
use ptprep_gtfs::app::ConvertGtfsCoordinatesApp;

fn main() {
    env_logger::init();
    let app = match ConvertGtfsCoordinatesApp::try_parse() {
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
    match app.run() {
        Ok(counts) => println!(
            "Converted {} rows from {} to {} (skipped {} rows) -> {}",
            counts.converted,
            app.input_file.display(),
            app.target_crs,
            counts.skipped,
            app.output_file.display()
        ),
        Err(e) => {
            let _ = e.write_diagnostic(&mut std::io::stderr());
            std::process::exit(e.exit_code());
        }
    }
}
