use clap::Parser;

use dynamic_search::config::Config;
use dynamic_search::simulation::Simulation;

fn main() {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let config = Config::parse();

    if !config.quiet {
        println!("Starting search comparison...");
        println!("Grid size: {}x{}", config.width, config.height);
        println!(
            "Walls: {}, Spawn probability: {}",
            config.num_walls, config.spawn_probability
        );
        println!("Algorithm: {}", config.algorithm);
        println!();
    }

    let simulation = match Simulation::new(config) {
        Ok(simulation) => simulation,
        Err(e) => {
            eprintln!("Failed to set up simulation: {}", e);
            std::process::exit(1);
        }
    };

    simulation.print_header();
    let results = simulation.run_all_algorithms();
    simulation.print_comparison_results(&results);
}
