use clap::{error::ErrorKind, Parser};
use ptprep_osm::app::OsmPbfToXmlApp;

fn main() {
    env_logger::init();
    let app = match OsmPbfToXmlApp::try_parse() {
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
