//! CLI argument parsing using clap v4

use clap::{Parser, Subcommand};

use crate::demo::DemoCase;
use crate::roles::Role;

/// Academic roles by composition
///
/// A member is not a student or a teacher; it holds any number of roles and
/// delegates its daily activities to them.
#[derive(Parser, Debug)]
#[command(name = "academic-roles")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all diagnostics except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the scripted demonstration
    Demo {
        /// Path to configuration file
        #[arg(short, long, env = "ACADEMIC_ROLES_CONFIG")]
        config: Option<String>,

        /// Case to run (student, teacher, hybrid); repeat to run several in order
        #[arg(long = "case", value_name = "CASE")]
        cases: Vec<DemoCase>,
    },

    /// Build a member from the command line and run its daily activities
    Member {
        /// Member name
        #[arg(long)]
        name: String,

        /// Member national id
        #[arg(long)]
        national_id: String,

        /// Role to attach, in order: student:<enrollment_id>:<program> or
        /// teacher:<department>:<specialty>
        #[arg(long = "role", value_name = "SPEC")]
        roles: Vec<Role>,

        /// Also print a one-line description of every role
        #[arg(long)]
        describe: bool,

        /// Path to configuration file
        #[arg(short, long, env = "ACADEMIC_ROLES_CONFIG")]
        config: Option<String>,
    },

    /// Display version and build information
    Version,

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
