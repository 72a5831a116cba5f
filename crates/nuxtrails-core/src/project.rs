//! Project bootstrap - `nuxtrails new <project>`
//!
//! Independent of the generate cascade. Creates a Nuxt skeleton via
//! `nuxi`, installs the Prisma and Pinia stack, initializes Prisma, and
//! lays down the base folders the generators write into. Steps are
//! sequential and fail-fast; completed toolchain steps are not rolled
//! back when a later one fails.

use crate::error::ScaffoldError;
use crate::toolchain::{self, Toolchain};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

/// Base folders created inside every new project
const BASE_FOLDERS: &[&str] = &["server/api", "stores", "components"];

/// Create a new Nuxt project under the workspace root
pub async fn new_project<T: Toolchain>(ws: &Workspace, tc: &T, name: &str) -> Result<()> {
    let project_dir = ws.join(name);
    if project_dir.exists() {
        return Err(ScaffoldError::ProjectExists(name.to_string()).into());
    }

    println!(
        "{} Creating new Nuxt project: {}",
        "->".blue(),
        name.green()
    );
    toolchain::nuxi_init(tc, ws.root(), name).await?;

    println!("{} Installing dependencies...", "->".blue());
    toolchain::npm_install(tc, &project_dir, &[], false).await?;
    toolchain::npm_install(tc, &project_dir, &["prisma"], true).await?;
    toolchain::npm_install(tc, &project_dir, &["@prisma/client", "pinia"], false).await?;

    println!("{} Initializing Prisma...", "->".blue());
    toolchain::prisma_init(tc, &project_dir).await?;

    for folder in BASE_FOLDERS {
        let path = project_dir.join(folder);
        fs::create_dir_all(&path)
            .await
            .with_context(|| format!("failed to create directory: {}", path.display()))?;
    }

    println!(
        "{} Project {} created!",
        "✓".green().bold(),
        name.green()
    );
    println!();
    println!("Next steps:");
    println!("  cd {}", name);
    println!("  nuxtrails generate model post title:string body:text");

    Ok(())
}
