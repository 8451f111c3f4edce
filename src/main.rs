//! Diamond - print a letter diamond for a given uppercase letter.
//!
//! # Usage
//!
//! ```bash
//! diamond E
//! ```

use anyhow::Result;
use clap::Parser;

use diamond::build;

/// Print a letter diamond for a given uppercase letter
#[derive(Parser, Debug)]
#[command(name = "diamond", version, about, long_about = None)]
struct Cli {
    /// The letter at the widest point of the diamond, in the range [A-Z]
    #[arg(value_name = "LETTER")]
    args: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    // Anything other than exactly one argument is guidance, not an error.
    let [arg] = cli.args.as_slice() else {
        println!("Usage: diamond <letter>");
        println!("Example: diamond E");
        return Ok(());
    };

    let mut chars = arg.chars();
    let (Some(letter), None) = (chars.next(), chars.next()) else {
        println!(
            "You specified an invalid character. Please input a single character in the range [A-Z]."
        );
        return Ok(());
    };

    match build(letter) {
        Ok(diamond) => print!("{diamond}"),
        Err(_) => println!(
            "You specified an invalid character. The character must be in range [A-Z]."
        ),
    }

    Ok(())
}
