#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use naval_hotseat::{init_logging, parse_fleet, run_hotseat, GameConfig, Match};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a two-player match on this terminal.
    Play {
        #[arg(long, help = "Grid size (5-20)")]
        size: Option<usize>,
        #[arg(long, help = "Fleet as length:count pairs (e.g., --fleet 5:1,4:1,3:2,2:1)")]
        fleet: Option<String>,
        #[arg(long, help = "Read size and fleet from a JSON file", conflicts_with_all = ["size", "fleet"])]
        config: Option<std::path::PathBuf>,
        #[arg(long, help = "Place both fleets at random and start in combat")]
        random_placement: bool,
        #[arg(long, help = "Fix RNG seed for reproducible placement (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "Player 1")]
        first: String,
        #[arg(long, default_value = "Player 2")]
        second: String,
    },
}

#[cfg(feature = "std")]
fn load_config(
    size: Option<usize>,
    fleet: Option<String>,
    path: Option<std::path::PathBuf>,
) -> anyhow::Result<GameConfig> {
    if let Some(path) = path {
        let text = std::fs::read_to_string(&path)?;
        return Ok(serde_json::from_str(&text)?);
    }
    let defaults = GameConfig::default();
    let fleet = match fleet {
        Some(pairs) => parse_fleet(&pairs)?,
        None => defaults.fleet().clone(),
    };
    Ok(GameConfig::new(size.unwrap_or(defaults.size()), fleet)?)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            fleet,
            config,
            random_placement,
            seed,
            first,
            second,
        } => {
            let config = load_config(size, fleet, config)?;
            let mut rng = if let Some(s) = seed {
                println!("Using fixed seed: {} (placement will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let mut game = Match::with_names(&config, first, second);
            if random_placement {
                // First call places player 1 and hands over, second places player 2.
                game.place_fleet_randomly(&mut rng)?;
                game.place_fleet_randomly(&mut rng)?;
            }

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            if run_hotseat(&mut game, stdin.lock(), &mut stdout, &mut rng)?.is_none() {
                println!("Match abandoned.");
            }
        }
    }
    Ok(())
}
