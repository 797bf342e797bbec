//! Generate config command implementation

use crate::config::CliConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = self.generate_template()?;

        match &self.output {
            Some(path) => {
                fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;
                eprintln!("Configuration written to {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }

    /// Default configuration with a short header
    fn generate_template(&self) -> Result<String> {
        let body = CliConfig::default().to_toml()?;
        Ok(format!(
            "# superstrings configuration\n# Command-line flags override these values.\n\n{body}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_back() {
        let args = GenerateConfigArgs { output: None };
        let template = args.generate_template().unwrap();
        let parsed: CliConfig = toml::from_str(&template).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("superstrings.toml");
        let args = GenerateConfigArgs {
            output: Some(path.clone()),
        };

        args.execute().unwrap();
        let loaded = CliConfig::load(&path).unwrap();
        assert_eq!(loaded, CliConfig::default());
    }
}
