use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todo", bin_name = "todo", version)]
#[command(about = "A small todo list with explicit saves", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the global todo list instead of the project one
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the todo list
    #[command(alias = "ls")]
    List,

    /// Add a todo and save
    #[command(alias = "a")]
    Add {
        /// Text of the todo (words are joined with spaces)
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Check or uncheck todos and save
    #[command(alias = "check")]
    Toggle {
        /// Ids of the todos (e.g. 1 todo2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Delete todos and save
    #[command(alias = "rm")]
    Delete {
        /// Ids of the todos (e.g. 1 todo2)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Interactive session; changes are kept until `save`
    #[command(alias = "s")]
    Session,

    /// Get or set configuration
    Config {
        /// Configuration key (slot-key, pretty)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the data directory
    Init,
}
