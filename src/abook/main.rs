use abook::api::AbookApi;
use abook::commands::{CmdMessage, MessageLevel};
use abook::config::AbookConfig;
use abook::dispatch::CommandTable;
use abook::error::{AbookError, Result};
use abook::logging::init_logging;
use abook::store::fs::FileStore;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

mod args;
use args::Cli;

const PROMPT: &str = ">>> ";

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(&cli)?;

    let config = AbookConfig::load(&data_dir).unwrap_or_else(|e| {
        eprintln!("Warning: ignoring config ({}), using defaults", e);
        AbookConfig::default()
    });

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    if let Err(e) = init_logging(level, &data_dir.join("logs")) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let store = FileStore::in_dir(&data_dir, &config.data_file);
    let mut api =
        AbookApi::new(store, CommandTable::standard()).with_page_size(config.page_size);

    println!("Hello, I'm a bot assistant.\nTo get started, type hello.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush().map_err(AbookError::Io)?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(AbookError::Io)?;

        let result = api.handle_line(&line);
        print_messages(&result.messages);
        if result.terminate {
            break;
        }
    }
    Ok(())
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    let proj_dirs = ProjectDirs::from("com", "abook", "abook")
        .ok_or_else(|| AbookError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
