//! Nuxtrails CLI - Rails-style scaffolding for Nuxt applications

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use nuxtrails_core::toolchain::check::ensure_node_runtime;
use nuxtrails_core::{init, project, run_generate, ProcessToolchain, Workspace};

#[derive(Parser, Debug)]
#[command(name = "nuxtrails")]
#[command(about = "Scaffold Nuxt + Prisma + Pinia applications, Rails-style")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Set up a local toolchain in the current project
    Init {
        #[command(subcommand)]
        target: InitTarget,
    },
    /// Generate resource files for a model
    Generate {
        /// What to generate (only "model" is recognized)
        kind: String,
        /// Resource name, e.g. "post"
        name: String,
        /// Field declarations as name:type (string, text, boolean, int, float, date)
        fields: Vec<String>,
    },
    /// Create a new Nuxt project with Prisma and Pinia wired in
    New {
        /// Project name (also the directory to create)
        project: String,
    },
}

#[derive(Subcommand, Debug)]
enum InitTarget {
    /// Set up Prisma with SQLite
    Prisma,
}

async fn run(args: Args) -> Result<()> {
    let ws = Workspace::current()?;
    let tc = ProcessToolchain;

    match args.command {
        Command::Init {
            target: InitTarget::Prisma,
        } => {
            ensure_node_runtime()?;
            init::init_prisma(&ws, &tc).await
        }
        Command::Generate { kind, name, fields } => {
            // Unknown generate types are a printed no-op and need no runtime
            if kind == "model" {
                ensure_node_runtime()?;
            }
            run_generate(&ws, &tc, &kind, &name, &fields).await?;
            Ok(())
        }
        Command::New { project: name } => {
            ensure_node_runtime()?;
            project::new_project(&ws, &tc, &name).await
        }
    }
}

#[tokio::main]
async fn main() {
    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
