use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "feedpane")]
#[command(about = "Feed reader widget: list, load and register feeds")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List registered feeds
    List {
        /// Print the registry as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a feed by registry index and print its rendered entries
    Load {
        /// Zero-based index into the feed registry
        index: usize,

        /// Print the rendered pane as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new feed and load it
    Add {
        /// Display name for the feed
        name: String,

        /// Feed URL
        url: String,
    },
}
