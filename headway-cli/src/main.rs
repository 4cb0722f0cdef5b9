use std::rc::Rc;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use headway_data::StaticRouteSource;
use headway_sim::{AnimationDriver, RoutePathSource, SimulationConfig, VehicleId, plan_fleet};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

mod surface;

use surface::{TickScheduler, TracingSurface};

#[derive(Parser)]
#[command(name = "headway", author, version, about, long_about = None)]
struct Cli {
    /// Subcommand/tool to run
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the live map animation headlessly, rendering marker updates as log lines
    Simulate {
        /// Number of frames to run before stopping; 0 runs until ctrl-c
        #[arg(env, long, default_value_t = 300)]
        frames: u64,

        /// Frame cadence in milliseconds (a display refresh would supply this)
        #[arg(env, long, default_value_t = 33)]
        frame_interval_ms: u64,
    },
    /// Pretty-print the bus fleet as JSON
    Vehicles,
    /// Pretty-print the bus stop listing as JSON
    Stops,
    /// Pretty-print service events as JSON
    Events,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        // Standard logger, configured via the RUST_LOG env variable
        .with(tracing_subscriber::fmt::layer().with_filter(EnvFilter::from_default_env()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Simulate {
            frames,
            frame_interval_ms,
        } => simulate(frames, frame_interval_ms).await,
        Commands::Vehicles => print_json(&headway_data::fleet()),
        Commands::Stops => print_json(&headway_data::bus_stops()),
        Commands::Events => print_json(&headway_data::service_events()),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn simulate(frames: u64, frame_interval_ms: u64) -> anyhow::Result<()> {
    let routes = match StaticRouteSource.load_route_paths().await {
        Ok(routes) => routes,
        Err(e) => {
            // A failed load leaves the driver Idle: nothing animates, and
            // no fallback geometry is substituted for the real thing.
            error!("route geometry failed to load: {e}");
            return Ok(());
        }
    };

    let config = SimulationConfig::default();
    let fleet = plan_fleet(headway_data::fleet(), routes.len(), &config);
    let on_select = Rc::new(|id: &VehicleId| info!(vehicle = %id, "marker activated"));
    let mut driver: AnimationDriver<TracingSurface, TickScheduler> =
        AnimationDriver::new(fleet, config, on_select);
    let mut surface = TracingSurface::default();
    let mut scheduler = TickScheduler::default();

    driver.start(routes, Instant::now(), &mut scheduler);
    info!(frames, frame_interval_ms, "simulation running; ctrl-c to stop");

    let mut ticker = tokio::time::interval(Duration::from_millis(frame_interval_ms));
    let mut frame: u64 = 0;
    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("ctrl-c received; shutting down");
                break;
            }
            _ = ticker.tick() => {
                driver.on_frame(Instant::now(), &mut surface, &mut scheduler);
                frame += 1;
                if frames != 0 && frame >= frames {
                    break;
                }
            }
        }
    }

    driver.stop(&mut surface, &mut scheduler);
    info!(live_markers = surface.live_markers(), "simulation stopped");
    Ok(())
}
