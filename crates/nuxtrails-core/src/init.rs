//! Prisma setup - `nuxtrails init prisma`
//!
//! Also runs implicitly the first time `generate model` finds no schema
//! file. Installs the toolchain, lets `prisma init` lay out its
//! directory, then overwrites the schema with the fixed SQLite
//! boilerplate this tool builds on.

use crate::schema::SCHEMA_BOILERPLATE;
use crate::toolchain::{self, Toolchain};
use crate::workspace::Workspace;
use anyhow::{Context, Result};
use colored::Colorize;
use tokio::fs;

/// Set up Prisma with SQLite in the workspace
pub async fn init_prisma<T: Toolchain>(ws: &Workspace, tc: &T) -> Result<()> {
    println!("{} Installing Prisma...", "->".blue());
    toolchain::npm_install(tc, ws.root(), &["prisma", "@prisma/client"], false).await?;

    println!("{} Initializing Prisma...", "->".blue());
    toolchain::prisma_init(tc, ws.root()).await?;

    let schema_path = ws.schema_path();
    if let Some(parent) = schema_path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create directory: {}", parent.display()))?;
    }
    fs::write(&schema_path, SCHEMA_BOILERPLATE)
        .await
        .with_context(|| format!("failed to write {}", schema_path.display()))?;
    println!("{} Created prisma/schema.prisma", "✓".green());

    println!("{} Generating Prisma client...", "->".blue());
    toolchain::prisma_generate(tc, ws).await?;

    println!("{} Prisma setup complete!", "✓".green().bold());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingToolchain {
        calls: Mutex<Vec<String>>,
    }

    impl Toolchain for RecordingToolchain {
        async fn run(&self, program: &str, args: &[&str], _cwd: &Path) -> Result<()> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("{} {}", program, args.join(" ")));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_init_writes_boilerplate_and_runs_toolchain_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        let tc = RecordingToolchain::default();

        init_prisma(&ws, &tc).await.unwrap();

        assert_eq!(
            *tc.calls.lock().unwrap(),
            [
                "npm install prisma @prisma/client",
                "npx prisma init",
                "npx prisma generate",
            ]
        );
        assert_eq!(
            std::fs::read_to_string(ws.schema_path()).unwrap(),
            SCHEMA_BOILERPLATE
        );
    }

    #[tokio::test]
    async fn test_init_overwrites_whatever_prisma_init_wrote() {
        let dir = tempfile::tempdir().unwrap();
        let ws = Workspace::new(dir.path());
        std::fs::create_dir_all(ws.schema_path().parent().unwrap()).unwrap();
        std::fs::write(ws.schema_path(), "datasource db { provider = \"postgresql\" }").unwrap();

        let tc = RecordingToolchain::default();
        init_prisma(&ws, &tc).await.unwrap();

        assert_eq!(
            std::fs::read_to_string(ws.schema_path()).unwrap(),
            SCHEMA_BOILERPLATE
        );
    }
}
