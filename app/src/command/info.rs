use std::path::PathBuf;

use tvlog_config::Config;

/// Input parameters for the Info command strategy.
#[derive(Debug, Clone)]
pub struct InfoInput {
    /// Where the config was looked up
    pub path: PathBuf,
    /// The effective configuration
    pub config: Config,
}

/// Strategy for displaying the effective configuration.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = InfoInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        println!("{}", render(&input));
        Ok(())
    }
}

fn render(input: &InfoInput) -> String {
    let source = if input.path.exists() {
        input.path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", input.path.display())
    };
    let rust_log = std::env::var("RUST_LOG").unwrap_or_else(|_| "(not set)".to_string());

    format!(
        "=== tvlog Configuration ===\n\n\
         Config File: {source}\n\n\
         Display:\n  Indent: {}\n\n\
         Logging:\n  Level: {}\n  RUST_LOG: {rust_log}",
        input.config.display.indent, input.config.logging.level
    )
}
