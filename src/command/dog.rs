use log::trace;

use crate::{Command, Dog, DogAction};

/// Make a dog perform a sequence of actions, in order.
///
/// The command borrows its dog; the dog must outlive it.
/// The action sequence is owned by the command and fixed at construction.
#[derive(Debug, Clone)]
pub struct DogCommand<'a> {
    dog: &'a Dog,
    actions: Vec<DogAction>,
}

impl<'a> DogCommand<'a> {
    pub fn new(dog: &'a Dog, actions: impl IntoIterator<Item = DogAction>) -> Self {
        DogCommand {
            dog,
            actions: actions.into_iter().collect(),
        }
    }

    pub fn actions(&self) -> &[DogAction] {
        &self.actions
    }
}

impl Command for DogCommand<'_> {
    fn execute(&self) {
        trace!("> dog command: {} action(s)", self.actions.len());

        for &action in &self.actions {
            self.dog.perform(action);
        }
    }
}
