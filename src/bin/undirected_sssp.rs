use std::env;
use std::process::ExitCode;
use std::time::Instant;

use undirected_sssp::config::RunConfig;
use undirected_sssp::graph::{Graph, RandomGraphGenerator, RandomWeightAssigner};
use undirected_sssp::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};

const USAGE: &str = "usage: undirected_sssp [--config FILE] [--dump] [VERTICES] [EDGE_LIMIT] [SEED]";

// Generate, weigh and search, printing each phase's timing
fn run(config: &RunConfig, dump: bool) -> undirected_sssp::Result<()> {
    let start = Instant::now();
    let mut graph: UndirectedGraph<u64> = RandomGraphGenerator::new(config.seed)
        .clamp_edge_limit(config.clamp_edge_limit)
        .generate(config.vertex_count, config.edge_limit)?;
    println!(
        "Random generation of {} vertices and {} edges with seed {} took {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        config.seed,
        start.elapsed()
    );

    let start = Instant::now();
    RandomWeightAssigner::new(config.seed, config.min_weight, config.max_weight)?.assign(&mut graph);
    println!(
        "Random cost generation in [{}, {}] took {:?}",
        config.min_weight,
        config.max_weight,
        start.elapsed()
    );

    if dump {
        print!("{}", graph);
    }

    let start = Instant::now();
    let result = Dijkstra::new().compute_shortest_paths(&graph, config.source)?;
    let duration = start.elapsed();

    for (vertex, distance) in result.distances.iter().enumerate() {
        match distance {
            Some(d) => println!("Distance from {} to {}: {}", config.source, vertex, d),
            None => println!("Distance from {} to {}: INF", config.source, vertex),
        }
    }
    println!(
        "Dijkstra for {} vertices took {:?} ({} reachable, {} stale heap entries skipped)",
        graph.vertex_count(),
        duration,
        result.reachable_count(),
        result.stats.stale_entries
    );

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(RunConfig, bool), String> {
    let mut config = RunConfig::default();
    let mut dump = false;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                let path = iter.next().ok_or("--config needs a file path")?;
                config = RunConfig::from_json_file(path).map_err(|e| e.to_string())?;
            }
            "--dump" => dump = true,
            "-h" | "--help" => return Err(USAGE.to_string()),
            _ => positional.push(arg),
        }
    }

    if positional.len() > 3 {
        return Err(USAGE.to_string());
    }
    if let Some(v) = positional.first() {
        config.vertex_count = v.parse().map_err(|_| format!("invalid vertex count: {}", v))?;
    }
    if let Some(e) = positional.get(1) {
        config.edge_limit = e.parse().map_err(|_| format!("invalid edge limit: {}", e))?;
    }
    if let Some(s) = positional.get(2) {
        config.seed = s.parse().map_err(|_| format!("invalid seed: {}", s))?;
    }

    config.validate().map_err(|e| e.to_string())?;
    Ok((config, dump))
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let (config, dump) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    match run(&config, dump) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
