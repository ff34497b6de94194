use log::debug;

use crate::Command;

/// An Invoker holds an ordered list of commands and runs them in batch.
///
/// Commands can be added, but never removed. Every run executes each
/// registered command exactly once, in insertion order, each one to
/// completion before the next begins.
///
/// # Examples
/// ```
/// use invoker::{Console, Dog, DogAction, DogCommand, Invoker, PrintCommand};
///
/// let console = Console::capture();
/// let dog = Dog::new(console.clone());
///
/// let mut invoker = Invoker::new();
/// invoker.add_command(PrintCommand::new(console.clone(), "hi"));
/// invoker.add_command(DogCommand::new(&dog, [DogAction::Sit]));
/// invoker.run_commands();
///
/// assert_eq!(console.lines(), vec!["[PrintCommand] hi", "Dog sits"]);
/// ```
#[derive(Default)]
pub struct Invoker<'a> {
    commands: Vec<Box<dyn Command + 'a>>,
}

impl<'a> Invoker<'a> {
    /// Create an invoker with no commands.
    pub fn new() -> Self {
        Invoker {
            commands: Vec::new(),
        }
    }

    /// Append a command at the end of the list.
    pub fn add_command(&mut self, command: impl Command + 'a) {
        self.commands.push(Box::new(command));

        debug!("> invoker: command #{} registered", self.commands.len());
    }

    /// Execute every registered command, in insertion order.
    ///
    /// Commands cannot fail. A panicking command propagates to the caller,
    /// and the remaining commands are not run.
    pub fn run_commands(&self) {
        debug!("> invoker: running {} command(s)", self.commands.len());

        for (i, command) in self.commands.iter().enumerate() {
            debug!("> invoker: command #{}", i + 1);
            command.execute();
        }
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<'a> Extend<Box<dyn Command + 'a>> for Invoker<'a> {
    fn extend<I: IntoIterator<Item = Box<dyn Command + 'a>>>(&mut self, iter: I) {
        for command in iter {
            self.commands.push(command);
        }

        debug!("> invoker: {} command(s) registered", self.commands.len());
    }
}

impl<'a> FromIterator<Box<dyn Command + 'a>> for Invoker<'a> {
    fn from_iter<I: IntoIterator<Item = Box<dyn Command + 'a>>>(iter: I) -> Self {
        let mut invoker = Invoker::new();
        invoker.extend(iter);
        invoker
    }
}
