/* 3rd party libraries */
use clap::{Arg, Command};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;

/* Custom libraries */
use elevator_dispatch::config;
use elevator_dispatch::console::Console;
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::{CostModel, Fleet, RequestQueue};

/* Main */
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = Command::new("elevator-dispatch")
        .about("Multi-elevator dispatch simulator")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .takes_value(true)
                .help("Seed for the initial elevator floors"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print fleet snapshots as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let config = unwrap_or_exit!(config::load_config(config_path), "Loading configuration");
    let sim = config.simulation;

    let seed = match matches.value_of("seed") {
        Some(s) => Some(unwrap_or_exit!(s.parse::<u64>(), "Parsing --seed")),
        None => sim.seed,
    };

    // Create the fleet and the request queue
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let fleet = unwrap_or_exit!(
        Fleet::new(sim.n_elevators, sim.floors(), &mut rng),
        "Creating fleet"
    );
    let queue = RequestQueue::new(sim.queue_capacity, sim.floors());
    info!(
        "Starting with {} elevators, floors {}-{}, queue capacity {}",
        sim.n_elevators, sim.lowest_floor, sim.highest_floor, sim.queue_capacity
    );

    // Run the menu on stdin/stdout
    let stdin = io::stdin();
    let mut console = Console::new(
        fleet,
        queue,
        CostModel::new(sim.direction_penalty),
        stdin.lock(),
        io::stdout(),
        matches.is_present("json"),
    );
    unwrap_or_exit!(console.run(), "Console I/O");
}
