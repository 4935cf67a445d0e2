use boxmd::{ParticleSystem, Simulation, Trajectory, Vector2D};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // enable collection of profiling data
    time_graph::enable_data_collection(true);
    // clear any existing collected data
    time_graph::clear_collected_data();

    // run the simulation
    let _trajectory = run_simulation()?;

    // get the call graph and display it
    let graph = time_graph::get_full_graph();
    // (this requires the "table" feature for the time_graph crate)
    println!("{}", graph.as_short_table());

    // also available for saving profiling data to the disk & future analysis
    // (this requires the "json" feature for the time_graph crate)
    println!("{}", graph.as_json());

    Ok(())
}

/// Run a simulation of 100 particles, this is the same setup as the
/// 'run-simulation' example
fn run_simulation() -> Result<Trajectory, Box<dyn std::error::Error>> {
    let parameters = r#"{
        "dt": 0.005,
        "num_steps": 500,
        "box_size": 15.0,
        "parallel": true,
        "potential": {
            "harmonic": {"k": 0.0},
            "morse": {"depth": 0.5, "a": 1.5, "r_eq": 1.5}
        }
    }"#;

    let trajectory = time_graph::spanned!("Full simulation", {
        let simulation = Simulation::from_json(parameters)?;

        let cell = simulation.cell();
        let mut system = ParticleSystem::new(cell);
        for i in 0..10 {
            for j in 0..10 {
                let position = Vector2D::new(1.5 * i as f64 + 0.75, 1.5 * j as f64 + 0.75);
                let sign = if (i + j) % 2 == 0 { 1.0 } else { -1.0 };
                system.add_particle(position, Vector2D::new(0.5 * sign, 0.25 * sign))?;
            }
        }

        simulation.run(&system)?
    });

    Ok(trajectory)
}
