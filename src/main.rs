use std::io::{self, Write};

use tracing_subscriber::EnvFilter;
use wordscope::{Word, config::Config, pipeline::Pipeline};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Keep stdout clean for the lookup output; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    // Load configuration
    let config = Config::load()?;
    let pipeline = Pipeline::new(&config)?;

    let word = prompt_for_word()?;

    let report = pipeline.run(&word).await;

    match report.definition {
        Ok(definition) if definition.is_empty() => println!("No definition found."),
        Ok(definition) => println!("{}", definition),
        Err(err) => println!("Definition not available: {}", err),
    }

    println!("Discovered pages:");
    match report.links {
        Ok(links) if links.is_empty() => println!("No pages found."),
        Ok(links) => {
            for link in links {
                println!("{}", link);
            }
        }
        Err(err) => println!("Pages not available: {}", err),
    }

    wait_for_enter()?;
    Ok(())
}

fn prompt_for_word() -> Result<Word, Box<dyn std::error::Error>> {
    print!("Enter a word to look up: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;

    // Strip the line terminator only; the word itself passes through as typed.
    let word = Word::new(line.trim_end_matches(['\r', '\n']))?;
    Ok(word)
}

fn wait_for_enter() -> io::Result<()> {
    print!("Press Enter to exit.");
    io::stdout().flush()?;

    let mut discard = String::new();
    io::stdin().read_line(&mut discard)?;
    Ok(())
}
