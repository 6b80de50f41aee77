use std::io::{BufRead, Write};

use tracing::info;
use tvlog_core::{Console, DisplayConfig, Session};

/// Input parameters for the Run command strategy.
#[derive(Debug, Clone, Default)]
pub struct RunInput {
    /// How records are listed
    pub display: DisplayConfig,
}

/// Strategy for the interactive session on stdin/stdout.
#[derive(Debug, Clone, Copy)]
pub struct RunStrategy;

impl RunStrategy {
    /// Run a session over any reader and writer.
    pub fn run_with<R: BufRead, W: Write>(
        input: RunInput,
        reader: R,
        writer: W,
    ) -> anyhow::Result<()> {
        info!("Display indent: {}", input.display.indent);

        let mut session = Session::new(Console::new(reader, writer), input.display);
        session.run()?;
        Ok(())
    }
}

impl super::CommandStrategy for RunStrategy {
    type Input = RunInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        Self::run_with(input, stdin.lock(), stdout.lock())
    }
}
