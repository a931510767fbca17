use clap::{Parser, Subcommand};

// The built-in help subcommand and -h flag are disabled because any bad
// invocation (no verb, unknown verb, extra args, stray flags) routes to the
// stash's own usage text with exit code 0 instead of a clap error.
#[derive(Parser, Debug)]
#[command(name = "simplestash")]
#[command(about = "A minimalist command-line link stash", long_about = None)]
#[command(disable_help_subcommand = true, disable_help_flag = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Stash a new link interactively
    New,
    /// Show the built-in help text
    Help,
    /// List the links you've already stashed
    List,
    /// Copy a stashed link's URL to the clipboard
    Cp,
    /// Delete the log and database files (not finished yet)
    Reset,
    /// Show where the log file lives (not finished yet)
    Viewlog,
}

impl Commands {
    pub fn verb(&self) -> &'static str {
        match self {
            Commands::New => "new",
            Commands::Help => "help",
            Commands::List => "list",
            Commands::Cp => "cp",
            Commands::Reset => "reset",
            Commands::Viewlog => "viewlog",
        }
    }
}
