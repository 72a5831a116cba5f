//! External toolchain boundary
//!
//! This module provides:
//! - Runtime detection for Node.js and npm
//! - The [`Toolchain`] seam the workflows call instead of spawning
//!   processes directly, plus the npm/npx command wrappers built on it
//!
//! The toolchain is a black box: nothing here parses tool output, only
//! the exit status is observed. Calls block until the child exits, with
//! no timeout - a hung tool hangs the invocation.

pub mod check;
pub mod process;

pub use check::{check_node, check_npm, ensure_node_runtime, RuntimeInfo};
pub use process::ProcessToolchain;

use crate::workspace::Workspace;
use anyhow::Result;
use std::path::Path;

/// Seam for invoking external tools
///
/// The production implementation is [`ProcessToolchain`]; tests substitute
/// a recording fake so workflows run without child processes.
pub trait Toolchain {
    /// Run `program` with `args` in `cwd`, waiting for it to exit.
    /// A non-zero exit status is an error.
    fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: &Path,
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// `npx prisma migrate dev --name create-<slug>`
pub async fn prisma_migrate_dev<T: Toolchain>(tc: &T, ws: &Workspace, slug: &str) -> Result<()> {
    let migration = format!("create-{}", slug);
    tc.run(
        "npx",
        &["prisma", "migrate", "dev", "--name", migration.as_str()],
        ws.root(),
    )
    .await
}

/// `npx prisma generate`
pub async fn prisma_generate<T: Toolchain>(tc: &T, ws: &Workspace) -> Result<()> {
    tc.run("npx", &["prisma", "generate"], ws.root()).await
}

/// `npx prisma init`
pub async fn prisma_init<T: Toolchain>(tc: &T, cwd: &Path) -> Result<()> {
    tc.run("npx", &["prisma", "init"], cwd).await
}

/// `npx nuxi init <name>`, run from the directory the project will be
/// created under
pub async fn nuxi_init<T: Toolchain>(tc: &T, cwd: &Path, name: &str) -> Result<()> {
    tc.run("npx", &["nuxi", "init", name], cwd).await
}

/// `npm install [packages...]`, optionally as dev dependencies
pub async fn npm_install<T: Toolchain>(
    tc: &T,
    cwd: &Path,
    packages: &[&str],
    dev: bool,
) -> Result<()> {
    let mut args = vec!["install"];
    if dev {
        args.push("-D");
    }
    args.extend_from_slice(packages);
    tc.run("npm", &args, cwd).await
}
