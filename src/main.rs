mod setup;

use anyhow::{Context, Result};
use log::info;

use invoker::{Console, Dog, DogCommand, Invoker, PrintCommand};

fn main() -> Result<()> {
    let setup = setup::setup();
    let actions = setup.actions().context("invalid --actions")?;

    info!("Sit. Stay. Good dog.");

    let console = Console::stdout();
    let print = PrintCommand::new(console.clone(), setup.message);

    let dog = Dog::new(console);
    let dog_command = DogCommand::new(&dog, actions);

    let mut invoker = Invoker::new();
    invoker.add_command(print);
    invoker.add_command(dog_command);

    invoker.run_commands();

    Ok(())
}
