use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "diplobot", version, about = "Diplomacy turn reminder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the game clock and send a reminder if one is due
    Check(commands::check::CheckArgs),
    /// Show when the last reminder was sent
    Last,
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check(args) => commands::check::run(args),
        Commands::Last => commands::last::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
