//! Command implementations for promptform.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod wizard;

use crate::cli::{Command, TokenArgs};
use crate::error::Result;
use crate::prompt::token_for;

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Wizard(args) => wizard::cmd_wizard(args),
        Command::Token(args) => cmd_token(args),
    }
}

/// Execute the `promptform token` command.
fn cmd_token(args: TokenArgs) -> Result<()> {
    println!("{}", token_for(&args.label));
    Ok(())
}
