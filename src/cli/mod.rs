// CLI module
// Public interface for the command line and the interactive screen

mod args;
mod input;
pub mod tui;

pub use args::{Cli, Command};
pub use input::{InputAction, InputController, ScrollRequest};
