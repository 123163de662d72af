use clap::Parser;
use std::process::ExitCode;
use wc_cli::args::Args;
use wc_cli::config::Config;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let args = Args::parse();
    let config = Config::from(args);
    log::debug!("running with {config:?}");

    let stdout = std::io::stdout();
    match wc_cli::execute(&config, &mut stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("wc: {e}");
            ExitCode::FAILURE
        }
    }
}
