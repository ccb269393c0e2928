//! Domain layer: grammar, commands and the entry buffer. No I/O.

pub mod buffer;
pub mod command;
pub mod grammar;

pub use buffer::{Edit, KeypadBuffer, KeypadKey};
pub use command::KeypadCommand;
