use log::trace;

use crate::{Console, DogAction};

/// A good dog. Knows one trick per `DogAction`.
#[derive(Debug, Clone)]
pub struct Dog {
    console: Console,
}

impl Dog {
    pub fn new(console: Console) -> Self {
        Dog { console }
    }

    pub fn sit(&self) {
        self.console.println("Dog sits");
    }

    pub fn stay(&self) {
        self.console.println("Dog stays");
    }

    /// Perform the trick matching the given action.
    pub fn perform(&self, action: DogAction) {
        trace!("> dog: {}", action);

        match action {
            DogAction::Sit => self.sit(),
            DogAction::Stay => self.stay(),
        }
    }
}
