//! Nuxtrails Core - Rails-style scaffolding for Nuxt applications
//!
//! This library provides the generation pipeline behind the `nuxtrails`
//! CLI: parse a model description, append it to the Prisma schema, run the
//! Prisma toolchain, then emit server routes, a Pinia store, pages, and
//! components for the model. It also bootstraps new Nuxt projects.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Pure functions** - Field parsing, schema text handling,
//!   template rendering ([`model`], [`schema`], [`generate`])
//! - **Layer 2: Side effects** - File flushing and the external toolchain
//!   boundary ([`generate::fileset`], [`toolchain`])
//! - **Layer 3: Workflows** - The generate cascade, project bootstrap, and
//!   Prisma setup ([`generate::run_model_cascade`], [`project`], [`init`])
//!
//! Everything takes an explicit [`Workspace`] root so workflows can run
//! against any directory, and the toolchain boundary is the [`Toolchain`]
//! trait so workflows can run without spawning processes.

pub mod error;
pub mod generate;
pub mod init;
pub mod model;
pub mod project;
pub mod schema;
pub mod toolchain;
pub mod workspace;

// Re-export main types for convenience
pub use error::ScaffoldError;
pub use generate::{run_generate, run_model_cascade, CascadeOutcome};
pub use model::{FieldDescriptor, ModelSpec};
pub use toolchain::{ProcessToolchain, Toolchain};
pub use workspace::Workspace;
