//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

use argsieve_core::UnknownKeyPolicy;

/// Split keyword arguments between the `foo` and `bar` consumers.
#[derive(Parser, Debug)]
#[command(name = "argsieve")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Keyword argument as key=value (value is parsed as JSON when possible)
    ///
    /// `a=5` is the number 5. A string field given a numeric-looking value
    /// needs JSON quotes: `--arg a='"5"'`.
    #[arg(long = "arg", short = 'a', value_name = "KEY=VALUE")]
    pub args: Vec<String>,

    /// Number of rounds (overrides the config file)
    #[arg(long, short = 't')]
    pub times: Option<u32>,

    /// What to do with keys neither consumer accepts (overrides the config file)
    #[arg(long, value_name = "drop|warn|reject")]
    pub unknown_keys: Option<UnknownKeyPolicy>,

    /// Path to a JSON configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn arg_help_explains_quoting() {
        let help = Cli::command().render_long_help().to_string();
        assert!(help.contains(r#"a='"5"'"#));
    }

    #[test]
    fn repeated_args_are_collected_in_order() {
        let cli = Cli::try_parse_from(["argsieve", "-a", "a=hi", "--arg", "b=5", "-t", "5"]).unwrap();
        assert_eq!(cli.args, vec!["a=hi", "b=5"]);
        assert_eq!(cli.times, Some(5));
    }
}
