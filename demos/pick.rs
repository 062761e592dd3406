//! Interactive picker demo - run with:
//! cargo run --example pick -- apple banana cherry date

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pick")]
#[command(about = "Pick items from a grid prompt")]
struct Cli {
    /// Title shown above the grid
    #[arg(long, default_value = "Pick your items")]
    title: String,

    /// The items to choose from
    #[arg(required = true)]
    items: Vec<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so RUST_LOG output can be redirected away from
    // the prompt.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match gridselect::show(cli.items, &cli.title) {
        Ok(picked) => {
            println!("{} item(s) picked", picked.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
