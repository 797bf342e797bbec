//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use superstrings_core::SolverKind;

use crate::output::OutputFormat;

pub mod generate;
pub mod generate_config;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a superstring and offset table from a word list
    Generate(generate::GenerateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write the default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available solvers
    Solvers,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Generate(args) => args.execute(),
            Commands::List { subcommand } => {
                print!("{}", subcommand.render());
                Ok(())
            }
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Text printed for this listing
    pub fn render(&self) -> String {
        let rows: Vec<(&str, &str)> = match self {
            ListCommands::Solvers => SolverKind::ALL
                .iter()
                .map(|kind| (kind.as_str(), kind.description()))
                .collect(),
            ListCommands::Formats => OutputFormat::ALL
                .iter()
                .map(|format| (format.as_str(), format.description()))
                .collect(),
        };

        rows.iter()
            .map(|(name, description)| format!("  {name:<12} {description}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_solvers() {
        let text = ListCommands::Solvers.render();
        assert!(text.contains("greedy"));
        assert!(text.contains("brute-force"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_list_formats() {
        let text = ListCommands::Formats.render();
        assert!(text.contains("text"));
        assert!(text.contains("json"));
    }

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Solvers,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Solvers"));
    }
}
