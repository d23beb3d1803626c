//! Command registry for the curses client.
//!
//! * [`CommandDescriptor`]: name, description, default keys and [`CommandFlags`]
//! * [`builtins`]: UI-only commands handled entirely on the client
//! * [`CommandRegistry`]: game commands followed by built-ins, addressed by [`CommandId`]

pub mod builtins;
mod command;
mod error;
mod flags;
mod registry;


pub use command::{CommandDescriptor, DirStyle, MAX_COMMAND_NAME, UiCommand};
pub use error::RegistryError;
pub use flags::CommandFlags;
pub use registry::{CommandId, CommandRegistry, CommandSource, validate_commands};
