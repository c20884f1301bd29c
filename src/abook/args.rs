use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "abook")]
#[command(about = "Address-book assistant: type commands, get answers", long_about = None)]
pub struct Cli {
    /// Directory holding the address book, config and logs
    #[arg(long, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug-level logging)
    #[arg(short, long)]
    pub verbose: bool,
}
