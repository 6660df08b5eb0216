use clap::Parser;
use std::{io, process::ExitCode};

use upload_release::{Args, Result, SystemRunner, command};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("upload_release")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let args = Args::parse();

    if let Err(err) = initialize_logger(args.debug) {
        println!("{err:#}");
        return Ok(ExitCode::FAILURE);
    }

    Ok(command::execute(
        &args,
        Box::new(SystemRunner),
        &mut io::stdout(),
    ))
}
