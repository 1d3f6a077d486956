//! Lucent CLI — mesh inspection, export, and validation.

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "lucent")]
#[command(version, about = "Lucent — triangle mesh inspection and export")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a summary of a serialized mesh.
    Info {
        /// Path to a standalone mesh file.
        path: String,

        /// Archive segment to load (0-based).
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Emit the summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Export a serialized mesh to Wavefront OBJ.
    Export {
        /// Path to a standalone mesh file.
        path: String,

        /// Output OBJ path.
        output: String,

        /// Archive segment to load (0-based).
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },

    /// Load a mesh and run integrity checks.
    Validate {
        /// Path to a standalone mesh file.
        path: String,

        /// Archive segment to load (0-based).
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Info { path, index, json } => commands::info(&path, index, json),
        Commands::Export {
            path,
            output,
            index,
        } => commands::export(&path, &output, index),
        Commands::Validate { path, index } => commands::validate(&path, index),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
