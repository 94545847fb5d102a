use std::path::PathBuf;

use log::LevelFilter;
use structopt::StructOpt;

pub mod message;
pub mod output;
pub mod printer;
pub mod factory;
pub mod config;
pub mod logging;

#[cfg(test)]
mod test_helpers;

use crate::config::FileConfig;
use crate::factory::Variant;
use crate::output::ConsoleOutput;

#[derive(Debug, StructOpt)]
#[structopt(name="hello-printer", about="Prints a greeting through a message printer")]
struct CommandLineInput {
    #[structopt(long, help="The message variant to print (default: hello-world)")]
    variant: Option<Variant>,
    #[structopt(long, default_value="1", help="The number of times to print the message")]
    repeat: usize,
    #[structopt(long, help="The toml configuration file")]
    config: Option<PathBuf>,
    #[structopt(long, help="Enables debug logging on stderr")]
    verbose: bool
}

fn main_run(command_line_input: CommandLineInput) -> Result<(), String> {
    let file_config = FileConfig::load(command_line_input.config.as_deref())?;

    let level = if command_line_input.verbose {
        LevelFilter::Debug
    } else {
        file_config.level_filter()?
    };
    logging::setup_logger(level)?;

    let variant = command_line_input.variant.unwrap_or(file_config.variant);
    log::info!("Using variant {}", variant);

    let factory = variant.factory(ConsoleOutput::new());
    let printer = factory.create_printer();
    for _ in 0..command_line_input.repeat {
        printer.print_message().map_err(|err| format!("{}", err))?;
    }

    Ok(())
}

fn main() {
    let command_line_input = CommandLineInput::from_args();

    if let Err(err) = main_run(command_line_input) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
