use std::fmt;
use std::str::FromStr;

use crate::InvokerError;

/// Something a dog knows how to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DogAction {
    Sit,
    Stay,
}

impl DogAction {
    /// Every action, in declaration order.
    pub const ALL: [DogAction; 2] = [DogAction::Sit, DogAction::Stay];

    /// The verb naming this action.
    pub fn verb(&self) -> &'static str {
        match self {
            DogAction::Sit => "sit",
            DogAction::Stay => "stay",
        }
    }
}

impl fmt::Display for DogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

impl FromStr for DogAction {
    type Err = InvokerError;

    /// Parse a verb, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verb = s.trim();

        DogAction::ALL
            .into_iter()
            .find(|action| action.verb().eq_ignore_ascii_case(verb))
            .ok_or_else(|| InvokerError::UnknownAction(s.to_string()))
    }
}
