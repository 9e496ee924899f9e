//! CLI module for alsonotify
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::schemas::{RequirementType, UserRole};

/// AlsoNotify workflow core - inspect requirement and task workflows, timers and settings
#[derive(Parser, Debug)]
#[command(name = "alsonotify")]
#[command(version)]
#[command(about = "Inspect AlsoNotify requirement and task workflows, timers and settings")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List allowed transitions from a status, or check one transition
    Transitions {
        /// Current status
        from: String,

        /// Target status to check instead of listing
        #[arg(long)]
        to: Option<String>,

        /// Viewer role (sender, receiver, internal; leader or member with --task)
        #[arg(long, default_value = "internal")]
        role: String,

        /// Use the task table instead of the requirement table
        #[arg(long)]
        task: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve the call-to-action buttons for a status
    Cta {
        #[command(subcommand)]
        target: CtaTarget,
    },

    /// Resolve a member's start/complete action on a task
    Turn {
        /// Path to the task JSON record
        task: PathBuf,

        /// Acting user id
        #[arg(long)]
        user: u64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the active work timer
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Apply a tab change to a URL
    Tab {
        /// Current URL (path and query)
        url: String,

        /// Tab to switch to; omit to only read the active tab
        tab: Option<String>,

        /// Default tab, kept out of the URL
        #[arg(long)]
        default: String,

        /// Valid tabs, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        valid: Vec<String>,
    },

    /// Evaluate the route guard for a path
    Route {
        /// Request path
        path: String,

        /// Raw Cookie header of the request
        #[arg(long, default_value = "")]
        cookie: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or edit cached settings
    Settings {
        #[command(subcommand)]
        target: SettingsTarget,
    },
}

#[derive(Subcommand, Debug)]
pub enum CtaTarget {
    /// Requirement actions for a viewer
    Requirement {
        /// Requirement status
        status: String,

        /// Viewer role (sender, receiver, internal)
        #[arg(long, default_value = "sender")]
        role: UserRole,

        /// Requirement type (outsourced, inhouse, client)
        #[arg(long = "type", default_value = "outsourced")]
        requirement_type: RequirementType,

        /// Receiver has mapped the requirement into a workspace
        #[arg(long)]
        mapped: bool,

        /// The sender did the rejecting
        #[arg(long)]
        rejected_by_sender: bool,

        /// A quoted price exists
        #[arg(long)]
        quoted: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Task actions for a viewer
    Task {
        /// Task status
        status: String,

        #[arg(long)]
        leader: bool,

        #[arg(long)]
        member: bool,

        /// Viewer holds the turn
        #[arg(long)]
        current_turn: bool,

        /// Task runs in sequential mode
        #[arg(long)]
        sequential: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TimerAction {
    /// Show the active timer
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start a timer for a task
    Start {
        task_id: u64,

        task_name: String,

        /// Backend worklog id
        #[arg(long)]
        worklog: Option<u64>,
    },

    /// Pause the running timer
    Pause,

    /// Resume the paused timer
    Resume {
        /// Backend worklog id of the new session
        #[arg(long)]
        worklog: Option<u64>,
    },

    /// Stop and clear the timer
    Stop,
}

#[derive(Subcommand, Debug)]
pub enum SettingsTarget {
    /// Required employee document types
    Documents {
        /// Drop the saved list and use the defaults
        #[arg(long)]
        reset: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Invoice payment presets
    Presets {
        /// Add a preset
        #[arg(long, num_args = 3, value_names = ["ID", "NAME", "CONTENT"])]
        add: Option<Vec<String>>,

        /// Delete the preset with this id
        #[arg(long)]
        delete: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
