//! Explicit project root
//!
//! All generated paths hang off a [`Workspace`] value instead of the
//! ambient current directory, so workflows can target any root (the CLI
//! passes the invocation directory, tests pass a temp directory).

use std::path::{Path, PathBuf};

/// Relative path of the Prisma schema inside a project
pub const SCHEMA_RELATIVE_PATH: &str = "prisma/schema.prisma";

/// Root directory of the Nuxt project being scaffolded
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Workspace rooted at the process's current directory
    pub fn current() -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a project-relative path
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    /// `prisma/schema.prisma`
    pub fn schema_path(&self) -> PathBuf {
        self.root.join(SCHEMA_RELATIVE_PATH)
    }

    /// `server/api/<slug>/` - Nitro route handlers for one model
    pub fn api_dir(&self, slug: &str) -> PathBuf {
        self.root.join("server").join("api").join(slug)
    }

    /// `stores/` - Pinia store modules
    pub fn stores_dir(&self) -> PathBuf {
        self.root.join("stores")
    }

    /// `pages/<slug>/` - Nuxt pages for one model
    pub fn pages_dir(&self, slug: &str) -> PathBuf {
        self.root.join("pages").join(slug)
    }

    /// `components/` - shared Vue components
    pub fn components_dir(&self) -> PathBuf {
        self.root.join("components")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_rooted() {
        let ws = Workspace::new("/tmp/app");
        assert_eq!(ws.schema_path(), Path::new("/tmp/app/prisma/schema.prisma"));
        assert_eq!(ws.api_dir("posts"), Path::new("/tmp/app/server/api/posts"));
        assert_eq!(ws.stores_dir(), Path::new("/tmp/app/stores"));
        assert_eq!(ws.pages_dir("posts"), Path::new("/tmp/app/pages/posts"));
        assert_eq!(ws.components_dir(), Path::new("/tmp/app/components"));
    }
}
