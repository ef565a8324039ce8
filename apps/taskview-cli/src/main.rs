use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use tracing_subscriber::EnvFilter;

use taskview_common::{EntitySnapshot, TaskState};
use taskview_scene::{DebugTextRenderer, RenderView, Renderer};
use taskview_visual::VisualRegistry;

#[derive(Parser)]
#[command(name = "taskview-cli", about = "CLI tool for taskview operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Simulate a task being worked off and render each tick
    Demo {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10")]
        ticks: u64,
        /// Display scale factor applied to all spatial quantities
        #[arg(short, long, default_value = "1.0")]
        scale: f32,
        /// Initial work quantity of the demo task
        #[arg(short, long, default_value = "100.0")]
        init_demand: f64,
    },
    /// Apply a JSON array of entity snapshots and render the result
    Render {
        /// Path to the snapshot feed file
        path: String,
        /// Display scale factor applied to all spatial quantities
        #[arg(short, long, default_value = "1.0")]
        scale: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("taskview-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", taskview_common::crate_info());
            println!("scene: {}", taskview_scene::crate_info());
            println!("visual: {}", taskview_visual::crate_info());
        }
        Commands::Demo {
            ticks,
            scale,
            init_demand,
        } => {
            println!("Demo: ticks={ticks}, scale={scale}, init_demand={init_demand}");

            let mut registry = VisualRegistry::new(scale);
            let renderer = DebugTextRenderer::new();
            let view = RenderView::default();

            for tick in 0..=ticks {
                // Drain the demand linearly to zero across the run.
                let remaining = if ticks == 0 {
                    0.0
                } else {
                    init_demand * (1.0 - tick as f64 / ticks as f64)
                };
                let snapshot = demo_snapshot(remaining, init_demand);
                registry.apply(&snapshot)?;

                println!("tick {tick}:");
                print!("{}", renderer.render(&registry.groups(), &view));
            }
        }
        Commands::Render { path, scale } => {
            let data = std::fs::read_to_string(&path)?;
            let snapshots: Vec<EntitySnapshot> = serde_json::from_str(&data)?;
            tracing::info!(count = snapshots.len(), "loaded snapshot feed");

            let mut registry = VisualRegistry::new(scale);
            for snapshot in &snapshots {
                registry.apply(snapshot)?;
            }

            let renderer = DebugTextRenderer::new();
            print!(
                "{}",
                renderer.render(&registry.groups(), &RenderView::default())
            );
        }
    }

    Ok(())
}

fn demo_snapshot(demand: f64, init_demand: f64) -> EntitySnapshot {
    EntitySnapshot {
        id: "demo_task".into(),
        position: Some(Vec3::new(2.0, 3.0, 0.0)),
        orientation: Some(Quat::IDENTITY),
        scale: Vec3::new(4.0, 4.0, 1.0),
        is_movable: false,
        task: TaskState {
            demand,
            init_demand,
        },
    }
}
