//! `atlas`: generate, inspect and animate procedural star systems.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{self, OptionExt, WrapErr};
use forge::{GeneratorConfig, generate_system, generate_system_named, generate_universe};
use orbits::OrbitalSystem;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use star_system::{BodyId, CelestialBody, Ship, StarSystem, catalog_name, seed_from_name};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod render;


#[derive(Debug, Parser)]
#[command(name = "atlas", version, about = "Procedural star-system atlas")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a universe of uniquely named systems
    Universe {
        #[arg(long, default_value_t = 10)]
        systems: usize,
        /// Mean planet count per system
        #[arg(long, default_value_t = 3.0)]
        lambda: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        config: Option<PathBuf>,
        /// Write the universe as JSON to this file
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },
    /// Generate one system and print its body tree
    System {
        #[command(flatten)]
        system: SystemArgs,
        /// Dock a ship with this name at the star
        #[arg(long)]
        ship: Option<String>,
    },
    /// Scan a body of a generated system and print its surface
    Scan {
        #[command(flatten)]
        system: SystemArgs,
        #[arg(long)]
        body: String,
    },
    /// Load an orbit tree from JSON and print absolute positions
    Orbits {
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value_t = 0.0)]
        age: f64,
        /// Also sample each orbit curve with this many points
        #[arg(long, default_value_t = 0)]
        samples: usize,
    },
    /// Generate a system and print its orbital view at an age
    View {
        #[command(flatten)]
        system: SystemArgs,
        #[arg(long, default_value_t = 0.0)]
        age: f64,
    },
}

#[derive(Debug, Args)]
struct SystemArgs {
    /// Catalog name; drawn from the seed when omitted
    #[arg(long)]
    name: Option<String>,
    #[arg(long, default_value_t = 5)]
    planets: usize,
    /// Stream seed; the name seeds the system when omitted
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    config: Option<PathBuf>,
    /// Restrict the star to these spectral classes
    #[arg(long = "class")]
    classes: Vec<String>,
}

fn load_config(path: Option<&PathBuf>) -> eyre::Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_toml_file(path)
            .wrap_err_with(|| format!("loading {}", path.display())),
        None => Ok(GeneratorConfig::default()),
    }
}

fn build_system(args: &SystemArgs) -> eyre::Result<StarSystem> {
    let mut config = load_config(args.config.as_ref())?;
    if !args.classes.is_empty() {
        config.restrict_spectral_classes(args.classes.iter().map(String::as_str))?;
    }

    let name = match &args.name {
        Some(name) => name.clone(),
        None => catalog_name(&mut ChaChaRng::seed_from_u64(args.seed.unwrap_or_default())),
    };
    let system = match args.seed {
        Some(seed) => {
            let mut rng = ChaChaRng::seed_from_u64(seed);
            generate_system(&config, 1, &name, args.planets, &mut rng)?
        }
        None => generate_system_named(&config, 1, &name, args.planets)?,
    };
    debug!(system = %system.name, bodies = system.star.subtree_len(), "system ready");
    Ok(system)
}

fn run(command: Command) -> eyre::Result<()> {
    match command {
        Command::Universe {
            systems,
            lambda,
            seed,
            config,
            snapshot,
        } => {
            let config = load_config(config.as_ref())?;
            let universe = generate_universe(&config, systems, lambda, seed)?;
            print!("{}", render::universe_summary(&universe));

            if let Some(path) = snapshot {
                std::fs::write(&path, universe.to_snapshot_json()?)
                    .wrap_err_with(|| format!("writing {}", path.display()))?;
                info!(path = %path.display(), "snapshot written");
            }
        }
        Command::System { system, ship } => {
            let mut system = build_system(&system)?;
            if let Some(ship_name) = ship {
                let star = system.star.name.clone();
                let vessel = CelestialBody::ship(BodyId(0), ship_name, Ship::default());
                system
                    .dock_ship(vessel, &star)
                    .map_err(|(err, _)| err)?;
            }
            print!("{}", render::system_tree(&system));
        }
        Command::Scan { system, body } => {
            let mut system = build_system(&system)?;
            let mut rng = ChaChaRng::seed_from_u64(seed_from_name(&body));
            let surface = system.scan(&body, &mut rng)?.clone();

            let scanned = system
                .find_by_name(&body)
                .ok_or_eyre("scanned body vanished")?;
            if let Some(card) = render::body_card(scanned) {
                print!("{}", card);
            }
            print!("{}", render::scan_report(scanned, &surface));
        }
        Command::Orbits {
            input,
            age,
            samples,
        } => {
            let json = std::fs::read_to_string(&input)
                .wrap_err_with(|| format!("reading {}", input.display()))?;
            let orbits = OrbitalSystem::from_json_str(&json)?;
            info!(system = %orbits.name, bodies = orbits.body_count(), "orbit tree loaded");

            print!("{}", render::positions(age, &orbits.positions_at(age)));
            if samples > 0 {
                print!("{}", render::traces(&orbits.traces_at(age, samples)));
            }
        }
        Command::View { system, age } => {
            let system = build_system(&system)?;
            let view = system.orbital_view();
            print!("{}", render::positions(age, &view.positions_at(age)));
        }
    }
    Ok(())
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    run(cli.command)
}
