//! This module contains the `Command` trait and its implementations.

mod dog;
mod print;

pub use dog::DogCommand;
pub use print::PrintCommand;

/// A Command wraps an effect behind a single, uniform `execute` operation.
///
/// Commands take no input and produce no output besides their side effects.
pub trait Command {
    fn execute(&self);
}

impl<T> Command for Box<T>
where
    T: Command + ?Sized,
{
    fn execute(&self) {
        (**self).execute()
    }
}

impl<T> Command for &T
where
    T: Command + ?Sized,
{
    fn execute(&self) {
        (**self).execute()
    }
}
