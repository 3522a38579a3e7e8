//! Trigon CLI — mesh loading, inspection, and attribute export.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "trigon")]
#[command(version, about = "Trigon — mesh differential-geometry attribute pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a model file and print an attribute summary.
    Info {
        /// Path to the model file.
        path: String,

        /// Model format tag (obj).
        #[arg(short, long, default_value = "obj")]
        format: String,

        /// UV projection (none, spherical, cylindrical, planar).
        #[arg(short, long, default_value = "none")]
        projection: String,

        /// Debug-line magnitude to rescale to after loading.
        #[arg(short, long)]
        line_length: Option<f32>,
    },

    /// Load a model file and check mesh integrity.
    Validate {
        /// Path to the model file.
        path: String,

        /// Model format tag (obj).
        #[arg(short, long, default_value = "obj")]
        format: String,
    },

    /// Load a model file and export the derived attributes as JSON.
    Export {
        /// Path to the model file.
        path: String,

        /// Output JSON file path.
        #[arg(short, long, default_value = "attributes.json")]
        output: String,

        /// Model format tag (obj).
        #[arg(short, long, default_value = "obj")]
        format: String,

        /// UV projection (none, spherical, cylindrical, planar).
        #[arg(short, long, default_value = "none")]
        projection: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info {
            path,
            format,
            projection,
            line_length,
        } => commands::info(&path, &format, &projection, line_length),
        Commands::Validate { path, format } => commands::validate(&path, &format),
        Commands::Export {
            path,
            output,
            format,
            projection,
        } => commands::export(&path, &output, &format, &projection),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
