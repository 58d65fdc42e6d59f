/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::{debug, warn};

use dimensional::{RegistryError, Scalar, UnitRegistry};

#[derive(Parser, Debug)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit converter
///
/// Converts a value between named units. The SI and customary units
/// are always available; more can be defined in a JSON file.
struct Args {
    /// Increase verbosity (repeat for more). Messages go to stderr.
    #[clap(short = 'v', long, action = clap::ArgAction::Count)]
    verbosity: u8,
    /// JSON file with additional unit definitions.
    #[clap(long)]
    registry: Option<PathBuf>,
    /// List the known units and exit.
    #[clap(long)]
    list: bool,
    /// Print the converted quantity as JSON.
    #[clap(long)]
    json: bool,
    /// The value to convert.
    #[clap(required_unless_present = "list", allow_hyphen_values = true)]
    value: Option<Scalar>,
    /// The unit of the value.
    #[clap(required_unless_present = "list")]
    from: Option<String>,
    /// The unit to convert to.
    #[clap(required_unless_present = "list")]
    to: Option<String>,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbosity {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Info,
                2 => simplelog::LevelFilter::Debug,
                3.. => simplelog::LevelFilter::Trace,
            },
            simplelog::Config::default(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), RegistryError> {
    let mut registry = UnitRegistry::with_catalog();
    if let Some(path) = &args.registry {
        registry.load(path)?;
    }

    if args.list {
        for (name, unit) in registry.iter() {
            println!("{name}\t{unit}");
        }
        return Ok(());
    }

    let (Some(value), Some(from), Some(to)) =
        (args.value, args.from.as_deref(), args.to.as_deref())
    else {
        return Ok(());
    };

    let quantity = registry.quantity(value, from)?;
    let result = registry.convert(&quantity, to)?;
    debug!("{quantity} -> {result}");
    if let (Scalar::Integer(_), Scalar::Float(_)) = (value, result.0) {
        warn!("{from} -> {to} is not exact; the result is approximate");
    }

    match args.json {
        true => println!("{}", serde_json::to_string(&result)?),
        false => println!("{} {}", result.0, to),
    }
    Ok(())
}
