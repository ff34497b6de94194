use crate::{Command, Console};

const LABEL: &str = "[PrintCommand]";

/// Print a fixed message, prefixed by `[PrintCommand]`.
///
/// # Examples
/// ```
/// use invoker::{Command, Console, PrintCommand};
///
/// let console = Console::capture();
/// let cmd = PrintCommand::new(console.clone(), "hello");
///
/// cmd.execute();
///
/// assert_eq!(console.lines(), vec!["[PrintCommand] hello"]);
/// ```
#[derive(Debug, Clone)]
pub struct PrintCommand {
    console: Console,
    message: String,
}

impl PrintCommand {
    pub fn new(console: Console, message: impl Into<String>) -> Self {
        PrintCommand {
            console,
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Command for PrintCommand {
    fn execute(&self) {
        self.console.println(&format!("{} {}", LABEL, self.message));
    }
}
