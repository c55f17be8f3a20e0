use anyhow::{Context, Result};
use clap::Parser;

use traffic_congestion_monitor::{
    Config, CongestionEngine, CongestionResponse, data, storage,
};

#[derive(Parser, Debug)]
#[clap(
    name = "congestion-monitor",
    about = "Detect traffic congestion regions in a batch of vehicle observations"
)]
struct Cli {
    /// Path to the JSON request document ({"observations": [...]})
    #[clap(long)]
    input: String,
    
    /// Output directory for results; prints the response to stdout when omitted
    #[clap(long)]
    output_dir: Option<String>,
    
    /// JSON file with engine parameters
    #[clap(long)]
    config: Option<String>,
    
    /// Linkage distance between clustered vehicles, in meters
    #[clap(long)]
    radius_meters: Option<f64>,
    
    /// Minimum number of vehicles in a reported region
    #[clap(long)]
    min_cluster_size: Option<usize>,
    
    /// Region size at which congestion is high
    #[clap(long)]
    high_vehicle_threshold: Option<usize>,
    
    /// Region size at which congestion is at least medium
    #[clap(long)]
    medium_vehicle_threshold: Option<usize>,
    
    /// Average speed (km/h) below which congestion is high
    #[clap(long)]
    high_speed_threshold: Option<f64>,
    
    /// Average speed (km/h) below which congestion is at least medium
    #[clap(long)]
    medium_speed_threshold: Option<f64>,
    
    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,
    
    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    /// Configuration file (or defaults) with command line overrides applied
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)?,
            None => Config::default(),
        };
        
        if let Some(value) = self.radius_meters {
            config.radius_meters = value;
        }
        if let Some(value) = self.min_cluster_size {
            config.min_cluster_size = value;
        }
        if let Some(value) = self.high_vehicle_threshold {
            config.high_vehicle_threshold = value;
        }
        if let Some(value) = self.medium_vehicle_threshold {
            config.medium_vehicle_threshold = value;
        }
        if let Some(value) = self.high_speed_threshold {
            config.high_speed_threshold = value;
        }
        if let Some(value) = self.medium_speed_threshold {
            config.medium_speed_threshold = value;
        }
        
        config.validate().context("invalid engine configuration")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();
    
    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    
    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();
    
    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };
    
    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;
    
    let config = args.resolve_config()?;
    log::info!(
        "Radius {} m, minimum cluster size {}",
        config.radius_meters,
        config.min_cluster_size
    );
    
    // 1. Load and validate observations
    let request = data::load_request(&args.input)?;
    request.validate().context("rejected congestion request")?;
    
    // 2. Detect congestion
    let engine = CongestionEngine::new(config);
    let congested_regions = engine.detect(&request.observations);
    
    log::info!("Found {} congested regions", congested_regions.len());
    
    let response = CongestionResponse { congested_regions };
    
    // 3. Save or print results
    match &args.output_dir {
        Some(output_dir) => {
            storage::save_results(&response, engine.config(), output_dir)?;
            log::info!("Detection complete. Results saved to {}", output_dir);
        }
        None => println!("{}", serde_json::to_string_pretty(&response)?),
    }
    
    Ok(())
}
