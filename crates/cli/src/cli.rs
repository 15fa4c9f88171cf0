//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "projects")]
#[command(about = "Manage the registry of known projects")]
#[command(version)]
pub struct Cli {
    /// Registry file (defaults to ~/.umi/ui/data.json)
    #[arg(long, global = true, env = "PROJECTS_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all registered projects
    List,

    /// Show one project, or a summary of the whole registry when no key is
    /// given (`--json` prints the full document)
    Show {
        key: Option<String>,
    },

    /// Register a project without activating it
    Add(AddArgs),

    /// Register a directory and make it the current project
    Open {
        /// Directory, relative to the working directory or absolute
        path: PathBuf,
    },

    /// Make a registered project the current one
    Use {
        key: String,
    },

    /// Remove a project from the registry
    Remove {
        key: String,
    },

    /// Change fields of a registered project
    Edit(EditArgs),

    /// Set the package manager of a project
    NpmClient {
        key: String,
        client: String,
    },

    /// Update the creation progress of a project
    Progress(ProgressArgs),

    /// Clear the creation progress of a project
    ProgressDone {
        key: String,
    },

    /// Print the registry file location
    Path,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Absolute project path, stored as given
    pub path: String,

    /// Display name (defaults to the last path segment)
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long)]
    pub npm_client: Option<String>,

    #[arg(long)]
    pub taobao_speed_up: bool,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    pub key: String,

    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub path: Option<String>,

    #[arg(long)]
    pub npm_client: Option<String>,

    #[arg(long, value_name = "BOOL")]
    pub taobao_speed_up: Option<bool>,
}

#[derive(Args, Debug)]
pub struct ProgressArgs {
    pub key: String,

    /// Zero-based index of the current step
    #[arg(long)]
    pub step: Option<u32>,

    /// Status code of the current step (-1 failed, 0 waiting, 1 loading, 2 success)
    #[arg(long, allow_hyphen_values = true)]
    pub status: Option<i32>,

    /// Comma-separated step labels
    #[arg(long, value_delimiter = ',')]
    pub steps: Option<Vec<String>>,

    /// Mark the workflow as successful
    #[arg(long, conflicts_with = "failure")]
    pub success: bool,

    /// Mark the workflow as failed with this message
    #[arg(long, value_name = "MESSAGE")]
    pub failure: Option<String>,
}
