use crate::core::report::StatusFilter;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance clock: clock in/out, lunch breaks and CSV reports on SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Attendance dataset to read/write (default: configured, then role based)
    #[arg(global = true, long = "namespace")]
    pub namespace: Option<String>,

    /// Pin the current time ("YYYY-MM-DD HH:MM[:SS]")
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Start a session as the given user
    Login {
        #[arg(long = "id", help = "Employee id")]
        id: String,

        #[arg(long = "name", help = "Display name")]
        name: String,

        #[arg(
            long = "role",
            default_value = "employee",
            help = "Role: employee, hr or admin"
        )]
        role: String,
    },

    /// End the current session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Clock in
    In,

    /// Start the lunch break
    LunchStart,

    /// End the lunch break
    LunchEnd,

    /// Clock out
    Out,

    /// Show today's attendance status of the logged-in user
    Status,

    /// List attendance entries
    List {
        #[arg(long, short, value_enum, default_value = "all")]
        filter: StatusFilter,

        #[arg(long, short, help = "Case-insensitive text search (name, date, time, status)")]
        search: Option<String>,

        #[arg(long = "mine", help = "Only the logged-in user's entries")]
        mine: bool,
    },

    /// Export attendance entries
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long = "mine", help = "Only the logged-in user's entries")]
        mine: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
