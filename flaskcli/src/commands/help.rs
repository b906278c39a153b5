use colored::Colorize;

/// Static usage text printed by `flaskcli help`.
pub const USAGE: &str = "
Usage: flaskcli <command> [options]

Commands:
  init                  Initialize a new Flask project.
  install <deps>        Install dependencies to the current project.
  route <method> <path> Add a new route to app.py
  run                   Run the Flask Application
  doctor                Check the health of the current project.
  help                  Show this help message.

Options (init):
  --name <name>         Project name (skips the prompt).
  --dependencies <deps> Specify additional dependencies to install (comma-separated).
  --no-interactive      Never prompt; use flags and defaults only.
  --template <dir>      Copy the project skeleton from <dir> instead of the bundled one.

Global options:
  -v, --verbose         Print debug logs to stderr.
  --python <path>       Interpreter used to create virtual environments.
";

const HELP_TRIGGERS: &[&str] = &["help", "h", "-h", "--help", "--h"];

/// Whether `arg` asks for usage text. Case-insensitive, so `H` and `--H` count.
pub fn is_help_trigger(arg: &str) -> bool {
    let arg = arg.to_ascii_lowercase();
    HELP_TRIGGERS.contains(&arg.as_str())
}

pub fn print_usage() {
    println!("{}", USAGE.blue());
}
