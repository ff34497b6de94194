mod action;
mod command;
mod console;
mod dog;
mod error;
mod invoker;

pub use crate::action::DogAction;
pub use crate::command::{Command, DogCommand, PrintCommand};
pub use crate::console::Console;
pub use crate::dog::Dog;
pub use crate::error::InvokerError;
pub use crate::invoker::Invoker;
