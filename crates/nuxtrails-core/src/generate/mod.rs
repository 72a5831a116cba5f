//! The `generate model` cascade
//!
//! Fixed stage order: schema write, Prisma migration + client generation,
//! then route, store, page, and component emission. Each stage runs to
//! completion before the next; there is no branching.
//!
//! File-writing stages record a compensating action ([`Undo`]) as they
//! commit. When a later stage fails, recorded compensations unwind in
//! reverse order before the failure propagates, so a half-generated model
//! does not linger in the project. Toolchain stages record nothing: an
//! applied migration or an installed package is external state this tool
//! does not claim to reverse.

pub mod components;
pub mod fileset;
pub mod pages;
pub mod routes;
pub mod store;

pub use fileset::GeneratedFileSet;

use crate::init;
use crate::model::ModelSpec;
use crate::schema;
use crate::toolchain::{self, Toolchain};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tokio::fs;

/// How a cascade invocation ended (short of an error)
#[derive(Debug, PartialEq, Eq)]
pub enum CascadeOutcome {
    /// All stages ran; artifacts are on disk
    Generated,
    /// The schema already declares this model; nothing was written
    ModelExists,
    /// The generate kind was not recognized; printed no-op
    UnknownKind,
}

/// Entry point for `generate <kind> <name> [field:type ...]`
///
/// Only the "model" kind is recognized. Any other kind prints a message
/// and writes nothing - a no-op, not an error.
pub async fn run_generate<T: Toolchain>(
    ws: &Workspace,
    tc: &T,
    kind: &str,
    name: &str,
    fields: &[String],
) -> Result<CascadeOutcome> {
    if kind != "model" {
        println!("[nuxtrails] Unknown generate type: {}", kind);
        return Ok(CascadeOutcome::UnknownKind);
    }

    println!(
        "[nuxtrails] Generating model \"{}\" with fields: {}",
        name,
        fields.join(" ")
    );
    let spec = ModelSpec::new(name, fields)?;
    run_model_cascade(ws, tc, &spec).await
}

/// Compensating action for one committed stage
enum Undo {
    /// Put the schema document back to its pre-append text
    RestoreSchema { path: PathBuf, previous: String },
    /// Remove a directory created for this model
    RemoveDir(PathBuf),
    /// Remove files written into a shared directory
    RemoveFiles(Vec<PathBuf>),
}

/// Run the full generation cascade for one model
pub async fn run_model_cascade<T: Toolchain>(
    ws: &Workspace,
    tc: &T,
    spec: &ModelSpec,
) -> Result<CascadeOutcome> {
    let schema_path = ws.schema_path();

    // First-time setup if the schema file is missing
    if !schema_path.exists() {
        println!(
            "{} Prisma not initialized. Running init...",
            "->".blue()
        );
        init::init_prisma(ws, tc).await?;
    }

    let current = fs::read_to_string(&schema_path)
        .await
        .with_context(|| format!("failed to read {}", schema_path.display()))?;

    // At-most-once per model name: warn and stop, not an error
    if schema::contains_model(&current, &spec.class_name) {
        println!(
            "{} Model \"{}\" already exists in prisma/schema.prisma",
            "Warning:".yellow(),
            spec.class_name
        );
        return Ok(CascadeOutcome::ModelExists);
    }

    let mut undos: Vec<Undo> = Vec::new();

    // Stage 1: append the model block
    let updated = schema::append_model(&current, &schema::model_block(spec));
    fs::write(&schema_path, &updated)
        .await
        .with_context(|| format!("failed to write {}", schema_path.display()))?;
    undos.push(Undo::RestoreSchema {
        path: schema_path.clone(),
        previous: current,
    });
    println!(
        "{} Added model \"{}\" to prisma/schema.prisma",
        "✓".green(),
        spec.class_name
    );

    // Stage 2: migration + client regeneration (external, fail-fast)
    println!("{} Running Prisma migration...", "->".blue());
    if let Err(e) = toolchain::prisma_migrate_dev(tc, ws, &spec.table_slug).await {
        unwind(undos).await;
        return Err(e);
    }
    println!("{} Generating Prisma client...", "->".blue());
    if let Err(e) = toolchain::prisma_generate(tc, ws).await {
        unwind(undos).await;
        return Err(e);
    }

    // Stage 3: server API routes
    println!("{} Generating API routes...", "->".blue());
    if let Err(e) = routes::file_set(spec).flush(ws).await {
        unwind(undos).await;
        return Err(e);
    }
    undos.push(Undo::RemoveDir(ws.api_dir(&spec.table_slug)));
    println!(
        "{} API routes generated in server/api/{}/",
        "✓".green(),
        spec.table_slug
    );

    // Stage 4: Pinia store
    match store::file_set(spec).flush(ws).await {
        Ok(written) => undos.push(Undo::RemoveFiles(written)),
        Err(e) => {
            unwind(undos).await;
            return Err(e);
        }
    }
    println!(
        "{} Pinia store generated at stores/{}.ts",
        "✓".green(),
        spec.table_slug
    );

    // Stage 5: pages
    if let Err(e) = pages::file_set(spec).flush(ws).await {
        unwind(undos).await;
        return Err(e);
    }
    undos.push(Undo::RemoveDir(ws.pages_dir(&spec.table_slug)));
    println!(
        "{} Nuxt pages generated in pages/{}/",
        "✓".green(),
        spec.table_slug
    );

    // Stage 6: components (terminal stage)
    if let Err(e) = components::file_set(spec).flush(ws).await {
        unwind(undos).await;
        return Err(e);
    }
    println!(
        "{} Components generated: {}Form.vue, {}Table.vue",
        "✓".green(),
        spec.class_name,
        spec.class_name
    );

    print_route_summary(spec);
    Ok(CascadeOutcome::Generated)
}

/// Informational summary printed after the terminal stage
fn print_route_summary(spec: &ModelSpec) {
    let slug = &spec.table_slug;
    println!("{}", "Your CRUD pages are ready:".blue());
    println!("  List:   /{}", slug);
    println!("  Create: /{}/create", slug);
    println!("  Detail: /{}/:id", slug);
    println!("  Edit:   /{}/:id/edit", slug);
}

/// Best-effort reverse-order unwind of committed stages
async fn unwind(undos: Vec<Undo>) {
    for undo in undos.into_iter().rev() {
        let outcome = match undo {
            Undo::RestoreSchema { path, previous } => fs::write(&path, previous)
                .await
                .map_err(|e| (path.display().to_string(), e)),
            Undo::RemoveDir(path) => fs::remove_dir_all(&path)
                .await
                .map_err(|e| (path.display().to_string(), e)),
            Undo::RemoveFiles(paths) => {
                let mut failed = Ok(());
                for path in paths {
                    if let Err(e) = fs::remove_file(&path).await {
                        failed = Err((path.display().to_string(), e));
                    }
                }
                failed
            }
        };
        if let Err((path, e)) = outcome {
            eprintln!(
                "{} could not undo changes to {}: {}",
                "Warning:".yellow(),
                path,
                e
            );
        }
    }
}
