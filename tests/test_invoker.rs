use invoker::{Command, Console, Dog, DogAction, DogCommand, Invoker, PrintCommand};

fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_scenario() {
    init();

    let console = Console::capture();
    let print = PrintCommand::new(console.clone(), "print test ####");

    let dog = Dog::new(console.clone());
    let dog_command = DogCommand::new(&dog, [DogAction::Sit, DogAction::Stay, DogAction::Sit]);

    let mut invoker = Invoker::new();
    invoker.add_command(print);
    invoker.add_command(dog_command);

    invoker.run_commands();

    assert_eq!(
        console.lines(),
        vec![
            "[PrintCommand] print test ####",
            "Dog sits",
            "Dog stays",
            "Dog sits",
        ]
    );
}

#[test]
fn test_registration_order_wins() {
    init();

    let console = Console::capture();
    let dog = Dog::new(console.clone());

    let mut invoker = Invoker::new();
    invoker.add_command(DogCommand::new(&dog, [DogAction::Stay]));
    invoker.add_command(PrintCommand::new(console.clone(), "between"));
    invoker.add_command(DogCommand::new(&dog, [DogAction::Sit]));

    invoker.run_commands();

    assert_eq!(
        console.lines(),
        vec!["Dog stays", "[PrintCommand] between", "Dog sits"]
    );
}

#[test]
fn test_print_not_interleaved() {
    init();

    let console = Console::capture();
    let print = PrintCommand::new(console.clone(), "M");

    print.execute();

    let lines = console.lines();

    assert_eq!(lines.iter().filter(|l| l.contains('M')).count(), 1);
    assert_eq!(lines, vec!["[PrintCommand] M"]);
}

#[test]
fn test_empty_invoker() {
    init();

    let console = Console::capture();
    let invoker = Invoker::new();

    invoker.run_commands();

    assert_eq!(invoker.len(), 0);
    assert!(console.lines().is_empty());
}
