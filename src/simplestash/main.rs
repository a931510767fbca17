use clap::Parser;
use colored::*;
use simplestash::api::StashApi;
use simplestash::clipboard::set_clipboard;
use simplestash::commands::{CmdMessage, MessageLevel};
use simplestash::config::{self, StashPaths};
use simplestash::error::{Result, StashError};
use simplestash::logging;
use simplestash::parser;
use simplestash::selector::TermSelector;
use simplestash::store::fs::FileStore;
use std::io::{self, BufRead, Write};

mod args;
use args::{Cli, Commands};

const CHECK_SYMBOL: &str = "(✓)";
const BULLET_SYMBOL: &str = "•";

fn main() {
    let paths = match StashPaths::resolve() {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    logging::init(paths.log_file.clone());

    if let Err(e) = run(&paths) {
        std::process::exit(report_error(&e));
    }
    log::info!("app closing");
}

fn run(paths: &StashPaths) -> Result<()> {
    // Argument validation precedes dispatch: anything but exactly one known
    // verb shows the usage text and never opens the store.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            log::warn!("invalid arguments entered, help message shown instead");
            print_usage(Some(
                "Your arguments don't seem quite right! Check the list below.",
            ));
            return Ok(());
        }
    };
    let Some(command) = cli.command else {
        log::warn!("no arguments entered, help message shown instead");
        print_usage(Some(
            "You seem to have forgotten to enter an argument! Check the list below.",
        ));
        return Ok(());
    };

    log::info!("simplestash started normally with verb '{}'", command.verb());

    match command {
        Commands::Help => {
            print_usage(None);
            Ok(())
        }
        Commands::Reset => Err(StashError::NotImplemented("reset")),
        Commands::Viewlog => Err(StashError::NotImplemented("viewlog")),
        Commands::New => handle_new(&mut open_store(paths)?),
        Commands::List => handle_list(&open_store(paths)?),
        Commands::Cp => handle_cp(&open_store(paths)?),
    }
}

/// Wires the file store, running first-launch setup when the database file
/// is not there yet.
fn open_store(paths: &StashPaths) -> Result<StashApi<FileStore>> {
    let mut api = StashApi::new(FileStore::new(paths.store_file.clone()));
    if !api.store_exists() {
        first_launch_setup(&mut api, paths)?;
    }
    Ok(api)
}

fn first_launch_setup(api: &mut StashApi<FileStore>, paths: &StashPaths) -> Result<()> {
    println!("Hello there! Your simplestash database is missing or hasn't been created yet.");
    println!("If you're starting simplestash for the first time, this is normal.");
    println!("Is this your first time using simplestash?");
    if !confirm()? {
        println!();
        println!(
            "Please locate your {} and place it back in your home folder.",
            config::STORE_FILENAME
        );
        return Err(StashError::StoreMissing(paths.store_file.clone()));
    }

    println!();
    println!("That's great! Just a few things to set up...");
    println!();
    log::info!("first-run setup started");
    println!("Setting up the database...");
    let result = api.initialize()?;
    print_messages(&result.messages);
    api.complete_onboarding()?;
    log::info!("new database created at {}", paths.store_file.display());
    println!(
        "{} Database file created at {}!",
        CHECK_SYMBOL.green(),
        paths.store_file.display()
    );
    println!(
        "{} Debug log lives at {}.",
        CHECK_SYMBOL.green(),
        paths.log_file.display()
    );
    println!();
    println!("Great! You're all set.");
    println!();
    Ok(())
}

/// Plain stdin Y/N prompt. Loops on anything else; EOF counts as a decline.
fn confirm() -> Result<bool> {
    let stdin = io::stdin();
    loop {
        print!("[Y/N]: ");
        io::stdout().flush()?;
        let mut answer = String::new();
        if stdin.read_line(&mut answer)? == 0 {
            return Ok(false);
        }
        match answer.trim() {
            "Y" | "y" => return Ok(true),
            "N" | "n" => return Ok(false),
            other => {
                println!("Your answer of '{}' is not a valid option.", other);
                println!("Try again. Please enter Y, y, N, or n.");
            }
        }
    }
}

fn handle_new(api: &mut StashApi<FileStore>) -> Result<()> {
    println!("Enter your new link below:");
    let stdin = io::stdin();
    let lines = std::iter::from_fn(|| {
        print!("> ");
        io::stdout().flush().ok();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            // Only the line ending comes off; the URL itself is never trimmed.
            Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
        }
    });

    let record = parser::first_valid_record(lines, |err| {
        log::warn!("rejected link input: {err}");
        println!();
        println!("You seem to have used the wrong input syntax.");
        println!("The correct syntax is #Link Name:https://your-link-url");
        println!();
        println!("Enter your link below again:");
    });

    match record {
        Some(record) => {
            log::info!("stashed label '{}' -> '{}'", record.label, record.url);
            let result = api.add_link(record)?;
            print_messages(&result.messages);
            Ok(())
        }
        None => {
            log::info!("link entry cancelled");
            println!("No link added.");
            Ok(())
        }
    }
}

fn handle_list(api: &StashApi<FileStore>) -> Result<()> {
    let result = api.list_links()?;
    println!();
    println!("  Your Links");
    println!("  ----------");
    println!();
    for record in &result.listed_links {
        println!(" {} {} -> {}", BULLET_SYMBOL, record.label.bold(), record.url);
    }
    if !result.listed_links.is_empty() {
        println!();
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_cp(api: &StashApi<FileStore>) -> Result<()> {
    let mut selector = TermSelector;
    let result = match api.copy_link(&mut selector) {
        Ok(result) => result,
        Err(StashError::Cancelled) => {
            log::info!("copy cancelled, nothing copied");
            println!("Nothing copied.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    print_messages(&result.messages);

    if let Some(record) = result.copied {
        match set_clipboard(&record.url) {
            Ok(()) => {
                log::info!("copied link '{}' to the clipboard", record.label);
                println!(
                    "{} Copied link {}!",
                    CHECK_SYMBOL.green(),
                    record.url.underline()
                );
            }
            Err(e) => {
                // Recoverable: the stash itself is untouched, so hand the
                // URL over for a manual copy instead of failing the run.
                log::warn!("clipboard failed: {e}");
                eprintln!("Warning: failed to copy to the clipboard: {}", e);
                println!("Here is the link so you can copy it yourself: {}", record.url);
            }
        }
    }
    Ok(())
}

fn print_usage(error: Option<&str>) {
    println!("Welcome to simplestash! You are viewing its built-in help utility!");
    if let Some(error) = error {
        println!("{}", error.yellow());
    }
    println!();
    println!("Simplestash accepts these command-line arguments:");
    println!();
    println!("    simplestash new");
    println!("        Stashes a new link using the syntax #Link Name:https://your-link.com");
    println!("    simplestash list");
    println!("        Lists the links you've already stashed");
    println!("    simplestash cp");
    println!("        Copies the URL of a stashed link to the clipboard");
    println!("    simplestash help");
    println!("        Shows this help text");
    println!("    simplestash reset");
    println!("        Deletes the log and database files (not finished yet)");
    println!("    simplestash viewlog");
    println!("        Shows where the log file lives (not finished yet)");
    println!();
    println!("Simplestash saves its data in ~/{}.", config::STORE_FILENAME);
    println!(
        "You can read its debug log at ~/{} to troubleshoot an error.",
        config::LOG_FILENAME
    );
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => {
                println!("{} {}", CHECK_SYMBOL.green(), message.content.green())
            }
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn report_error(err: &StashError) -> i32 {
    log::warn!("exiting on error: {err}");
    match err {
        StashError::NotImplemented(_) => {
            println!("Sorry, this feature is not finished yet.");
            0
        }
        StashError::Cancelled => 0,
        StashError::StoreMissing(path) => {
            eprintln!("Error: {}", err);
            eprintln!(
                "Restore the file to {} and try again, or run a command to recreate it.",
                path.display()
            );
            1
        }
        StashError::StoreCorrupt { path, .. } => {
            eprintln!("Error: {}", err);
            eprintln!(
                "Fix or remove {} and run simplestash again to start fresh.",
                path.display()
            );
            1
        }
        _ => {
            eprintln!("Error: {}", err);
            1
        }
    }
}
