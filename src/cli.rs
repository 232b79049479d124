use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "sniplink")]
#[command(about = "Shorten long URLs from your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shorten a URL and print the result without launching the TUI
    Shorten {
        /// The long URL to shorten
        url: String,

        /// Also copy the short URL to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
}
