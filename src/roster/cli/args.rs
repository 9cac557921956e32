use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", version)]
#[command(about = "Manage validated student records from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster data
    #[arg(long, global = true, env = "ROSTER_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a")]
    Add {
        /// Full name (letters and spaces)
        #[arg(long)]
        name: Option<String>,

        /// Student ID (digits)
        #[arg(long = "id", value_name = "ID")]
        student_id: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Contact number (at least 10 digits)
        #[arg(long)]
        contact: Option<String>,
    },

    /// List students
    #[command(alias = "ls")]
    List,

    /// Edit a student; fields not given keep their current value
    #[command(alias = "e")]
    Edit {
        /// Index of the student (e.g. 1)
        index: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long = "id", value_name = "ID")]
        student_id: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        contact: Option<String>,
    },

    /// Delete a student
    #[command(alias = "rm")]
    Delete {
        /// Index of the student (e.g. 1)
        index: String,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Fill in the form interactively, with edit, update and cancel
    #[command(alias = "i")]
    Interactive,

    /// Get or set configuration
    Config {
        /// Configuration key (storage-key, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the path of the student data file
    Path,
}
