use clap::{Parser, Subcommand};

/// Command-line interface definition for rworklog
#[derive(Parser)]
#[command(
    name = "rworklog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A terminal time tracker: log work entries, run a single active timer and export to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update, no log file)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Create a work entry for today
    Add {
        title: String,

        #[arg(long, short = 'p', help = "Project name")]
        project: Option<String>,

        #[arg(long, short = 't', requires = "project", help = "Tag name (must belong to the project)")]
        tag: Option<String>,
    },

    /// Change title, project or tag of a work entry
    Edit {
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, conflicts_with = "no_project")]
        project: Option<String>,

        #[arg(long = "no-project", help = "Remove the project (and the tag)")]
        no_project: bool,

        #[arg(long, conflicts_with = "no_tag")]
        tag: Option<String>,

        #[arg(long = "no-tag", help = "Remove the tag")]
        no_tag: bool,
    },

    /// Delete a work entry
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Start or stop tracking on an entry (entries from past days are copied to today)
    Toggle {
        id: i64,

        #[arg(long, help = "Keep showing the live timer until Enter is pressed")]
        follow: bool,
    },

    /// Flip the confirmed flag of an entry
    Confirm { id: i64 },

    /// Set the accumulated time of an entry (missing parts count as 0)
    Timer {
        id: i64,

        #[arg(long = "hours", short = 'H')]
        hours: Option<String>,

        #[arg(long = "minutes", short = 'M')]
        minutes: Option<String>,

        #[arg(long = "seconds", short = 'S')]
        seconds: Option<String>,
    },

    /// Show one work entry
    Show { id: i64 },

    /// Print the day-grouped work table
    List {
        #[arg(long, help = "Days of history to include (default: the relative-date setting)")]
        days: Option<u32>,

        #[arg(long, help = "Print the day groups as JSON")]
        json: bool,
    },

    /// Export every work entry to CSV
    Export {
        #[arg(long, value_name = "DIR", help = "Target directory (default: download path setting)")]
        dir: Option<String>,
    },

    /// Show or change runtime settings
    Setting {
        #[arg(long = "relative-date")]
        relative_date: Option<String>,

        #[arg(long = "person-day")]
        person_day: Option<String>,

        #[arg(long = "display-person-day")]
        display_person_day: Option<bool>,

        #[arg(long = "download-path")]
        download_path: Option<String>,
    },

    /// Manage tags
    Tag {
        #[command(subcommand)]
        action: TagCommand,
    },

    /// Manage project types
    Project {
        #[command(subcommand)]
        action: ProjectCommand,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Interactive work table
    Session,
}

#[derive(Subcommand)]
pub enum TagCommand {
    Add { name: String },
    List,
    Rename { old: String, new: String },
    Del { name: String },
}

#[derive(Subcommand)]
pub enum ProjectCommand {
    Add {
        name: String,

        #[arg(long, value_delimiter = ',', help = "Comma separated tag names")]
        tags: Vec<String>,
    },
    List,
    Edit {
        name: String,

        #[arg(long = "name", help = "New project name")]
        new_name: Option<String>,

        #[arg(long, value_delimiter = ',', help = "Replace the tag list")]
        tags: Option<Vec<String>>,
    },
    Del { name: String },
}
