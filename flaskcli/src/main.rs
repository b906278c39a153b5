use colored::Colorize;

use flaskcli::cli::{parse_args, Action};
use flaskcli::commands::{self, help};
use flaskcli::error::CliError;
use flaskcli::logging;
use flaskcli::process::SystemRunner;
use flaskcli::prompt::TerminalPrompter;

fn main() {
    let cli = match parse_args(std::env::args_os()) {
        Ok(Action::Execute(cli)) => cli,
        Ok(Action::Usage) => {
            help::print_usage();
            return;
        }
        Ok(Action::Unknown(name)) => exit_with(CliError::UnknownCommand(name)),
        Err(e) => e.exit(),
    };

    logging::init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli, &SystemRunner, &TerminalPrompter) {
        exit_with(e);
    }
}

fn exit_with(e: CliError) -> ! {
    eprintln!("{}", format!("Error: {e}").red());
    std::process::exit(e.exit_code());
}
