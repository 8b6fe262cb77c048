#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use bulls_and_cows::{
    init_logging, CommandChain, ConsolePrinter, GameSession, LeaderboardFormat, LineReader,
    RngSource,
};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Guess the secret number: bulls and cows in your terminal", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Player name for the leaderboard; skips the name prompt")]
    name: Option<String>,
    #[arg(long, help = "Print the leaderboard as JSON")]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let rng = if let Some(s) = cli.seed {
        log::info!("using fixed seed {}", s);
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let format = if cli.json {
        LeaderboardFormat::Json
    } else {
        LeaderboardFormat::Table
    };

    let chain = CommandChain::standard()?;
    let printer = ConsolePrinter::stdout().with_format(format);
    let mut session = GameSession::new(chain, LineReader::stdin(), printer, RngSource::new(rng))?;
    if let Some(name) = cli.name {
        session = session.with_player_name(name);
    }

    if let Err(e) = session.play() {
        eprintln!("Game ended with an error: {}", e);
    }
    Ok(())
}
