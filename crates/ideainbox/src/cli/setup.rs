use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use ideainboxapp::handoff::HandoffMethod;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "ideainbox",
    bin_name = "ideainbox",
    version,
    disable_help_subcommand = true,
    after_help = "Typical flow:\n  ideainbox process \"half-formed idea\"   # preview, saves the draft\n  ideainbox send --via clipboard         # hand it off, clears the draft"
)]
#[command(about = "Capture an idea, tidy it into a note, and hand it off to your notes app", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,

    /// Data directory (settings, draft, ideainbox.toml)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true, help_heading = "Options")]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn text into a note and preview it
    #[command(alias = "p", display_order = 1)]
    Process {
        /// Note text; read from stdin or the saved draft when omitted
        text: Vec<String>,

        /// Use the local enhancer even if a service is configured
        #[arg(long)]
        local: bool,
    },

    /// Process and hand the note off to your notes app
    #[command(alias = "s", display_order = 2)]
    Send {
        /// Note text; read from stdin or the saved draft when omitted
        text: Vec<String>,

        /// How to hand the note off
        #[arg(long, value_enum, default_value_t = Via::Link)]
        via: Via,

        /// Target directory for --via download
        #[arg(long, value_name = "DIR")]
        dir: Option<PathBuf>,

        /// Use the local enhancer even if a service is configured
        #[arg(long)]
        local: bool,
    },

    /// Show, set, clear, or locate the saved draft
    #[command(display_order = 3)]
    Draft {
        #[command(subcommand)]
        action: Option<DraftCommands>,
    },

    /// Show or change where notes are sent
    #[command(display_order = 4)]
    Settings {
        /// Collection (vault/workspace) in your notes app
        #[arg(long)]
        collection: Option<String>,

        /// Folder inside the collection; "" for the root
        #[arg(long)]
        path: Option<String>,
    },

    /// Show the effective configuration
    #[command(display_order = 5)]
    Config {
        /// Print a commented ideainbox.toml template instead
        #[arg(long)]
        template: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum DraftCommands {
    /// Print the saved draft
    Show,
    /// Replace the saved draft
    Set { text: Vec<String> },
    /// Delete the saved draft
    Clear,
    /// Print where the draft is stored
    Path,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Via {
    /// Open a deep link into the notes app
    Link,
    /// Copy the note to the clipboard
    Clipboard,
    /// Write the note to a .md file
    Download,
}

impl From<Via> for HandoffMethod {
    fn from(via: Via) -> Self {
        match via {
            Via::Link => HandoffMethod::Link,
            Via::Clipboard => HandoffMethod::Clipboard,
            Via::Download => HandoffMethod::Download,
        }
    }
}
