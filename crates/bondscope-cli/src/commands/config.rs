//! Config command implementation.
//!
//! Prints the configuration after file loading and defaults.

use anyhow::Result;

use crate::commands::Context;

/// Execute the config command.
pub fn execute(ctx: &Context) -> Result<()> {
    print!("{}", ctx.config.to_toml_string()?);
    Ok(())
}
