use std::io;

use lightcurve_convert::ConvertOptions;
use lightcurve_convert::app::{self, BANNER};

fn main() {
    env_logger::init();

    println!("{BANNER}\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = app::run_interactive(stdin.lock(), stdout.lock(), ConvertOptions::default()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
