//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input type, so
//! dispatch in `main` is a plain `match` with no trait objects.

mod info;
mod init;
mod run;
mod version;

pub use info::{InfoInput, InfoStrategy};
pub use init::InitStrategy;
pub use run::{RunInput, RunStrategy};
pub use version::VersionStrategy;

/// Contract shared by all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}
