//! academic-roles - composition over inheritance, on the console
//!
//! Members gain student and teacher roles at runtime and delegate their
//! daily activities to whatever roles they hold.

mod cli;
mod config;
mod demo;
mod error;
mod logging;
mod member;
mod roles;
mod sink;
mod version;

use clap::Parser;
use tracing::{debug, error};

use crate::cli::{Cli, Commands, ConfigSubcommand};
use crate::config::RolesConfig;
use crate::error::Result;
use crate::member::Member;
use crate::roles::{AcademicRole, Role};
use crate::sink::{Console, Sink};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        error!("{}", e.format_for_log());
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Version => {
            version::print_version();
            Ok(())
        }
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            handle_config_command(subcommand)
        }
        Commands::Demo { config, cases } => {
            let cfg = RolesConfig::load(config.as_deref())?;
            let _log_guards = logging::init_logging(&cfg.logging, cli.verbose, cli.quiet)?;

            let cases = if cases.is_empty() {
                cfg.demo.cases.clone()
            } else {
                cases
            };
            debug!(?cases, "Starting demonstration");

            demo::run(&cfg.demo, &cases, &mut Console::stdout());
            Ok(())
        }
        Commands::Member {
            name,
            national_id,
            roles,
            describe,
            config,
        } => {
            let cfg = RolesConfig::load(config.as_deref())?;
            let _log_guards = logging::init_logging(&cfg.logging, cli.verbose, cli.quiet)?;

            let mut member = Member::new(name, national_id);
            for role in roles {
                member.add_role(role);
            }
            debug!(
                member = %member.name(),
                national_id = %member.national_id(),
                roles = member.roles().len(),
                "Member assembled"
            );

            let mut console = Console::stdout();
            member.show_identity(&mut console);
            member.run_daily_activities(&mut console);
            if describe {
                print_descriptions(member.roles(), &mut console);
            }
            Ok(())
        }
    }
}

/// One summary line per role, in attachment order
fn print_descriptions(roles: &[Role], sink: &mut dyn Sink) {
    sink.line("Roles:");
    if roles.is_empty() {
        sink.line("  (none)");
    }
    for role in roles {
        sink.line(&format!("  * {}", role.describe()));
    }
}

fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = RolesConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate { config } => {
            RolesConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_descriptions() {
        let roles = vec![
            Role::student("DOC-2024", "Doutorado em Computação"),
            Role::teacher("Computação", "Compiladores"),
        ];
        let mut lines: Vec<String> = Vec::new();
        print_descriptions(&roles, &mut lines);

        assert_eq!(
            lines,
            vec![
                "Roles:",
                "  * Student of Doutorado em Computação",
                "  * Teacher of Compiladores",
            ]
        );
    }

    #[test]
    fn test_print_descriptions_empty() {
        let mut lines: Vec<String> = Vec::new();
        print_descriptions(&[], &mut lines);
        assert_eq!(lines, vec!["Roles:", "  (none)"]);
    }
}
