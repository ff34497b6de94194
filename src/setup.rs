use clap::Parser;
use env_logger::WriteStyle;
use log::LevelFilter;

use invoker::{DogAction, InvokerError};

/// Initialize the logger
fn loginit(level: LevelFilter) {
    env_logger::builder()
        .filter_level(level)
        .write_style(WriteStyle::Always)
        .format_timestamp_millis()
        .format_indent(Some(4))
        .init();
}

/// Command Line Interface definition
#[derive(Parser, Debug)]
#[command(name = "invoker")]
#[command(author, about, version)]
pub struct Setup {
    /// Verbose mode (-v, -vv, -vvv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Message printed by the print command
    #[arg(short, long, default_value = "print test ####")]
    pub message: String,

    /// Comma separated dog actions (sit, stay)
    #[arg(short, long, default_value = "sit,stay,sit")]
    pub actions: String,
}

impl Setup {
    /// Parse the dog actions, in order. Empty items are ignored.
    pub fn actions(&self) -> Result<Vec<DogAction>, InvokerError> {
        self.actions
            .split(',')
            .filter(|verb| !verb.trim().is_empty())
            .map(|verb| verb.parse::<DogAction>())
            .collect()
    }
}

/// Parse command line arguments and initialize logger
pub fn setup() -> Setup {
    let setup = Setup::parse();

    match setup.verbose {
        0 => loginit(LevelFilter::Warn),
        1 => loginit(LevelFilter::Info),
        _ => loginit(LevelFilter::Debug),
    };

    setup
}
