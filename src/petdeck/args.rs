use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "petdeck")]
#[command(about = "Local-first pet care tracker for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show pets, reminders and the chat transcript
    #[command(alias = "ls")]
    Show,

    /// Add a pet
    #[command(alias = "ap")]
    AddPet {
        /// Pet's name (may be empty)
        name: String,

        /// Age in years; missing or non-numeric input counts as 0
        #[arg(long)]
        age: Option<String>,

        /// Breed, e.g. Beagle
        #[arg(long, default_value = "")]
        breed: String,

        /// Species, e.g. Dog or Cat
        #[arg(long, default_value = "")]
        species: String,

        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Remove a pet by id
    #[command(alias = "rm-pet")]
    RemovePet {
        /// Pet id as shown in the list
        id: String,
    },

    /// Add a care reminder
    #[command(alias = "ar")]
    AddReminder {
        /// Reminder title
        title: String,

        /// Owning pet id (may be left empty)
        #[arg(long, default_value = "")]
        pet: String,

        /// Due time, e.g. 2026-08-20T09:00
        #[arg(long)]
        at: String,

        /// once, daily, weekly, ...
        #[arg(long, default_value = "once")]
        freq: String,
    },

    /// Remove a reminder by id
    #[command(alias = "rm-rem")]
    RemoveReminder {
        /// Reminder id as shown in the list
        id: String,
    },

    /// Send a chat message to the care bot
    Chat {
        /// Message text
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Clear the chat transcript
    ClearChat {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Seed demo data into an empty store
    Seed,

    /// Export all data as pretty-printed JSON
    Export {
        /// Output path (defaults to petcare.json)
        output: Option<PathBuf>,
    },

    /// Import a previously exported JSON file, replacing all data
    Import {
        /// Path to a .json export
        file: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (bot-name, seed-demo-data)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
