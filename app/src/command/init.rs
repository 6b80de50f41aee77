use std::path::PathBuf;

use tvlog_config::Config;

/// Strategy for initializing the configuration.
///
/// Writes the config template to the given path, `~/tvlog/config.json`
/// unless overridden with `--config`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = PathBuf;

    fn execute(&self, path: Self::Input) -> anyhow::Result<()> {
        Config::create_config_at(&path)
    }
}
