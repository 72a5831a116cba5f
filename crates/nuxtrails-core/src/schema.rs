//! Prisma schema document handling
//!
//! Pure string functions over the full text of `prisma/schema.prisma`:
//! the boilerplate written on first setup, model block rendering, the
//! duplicate-model guard, and the append operation. The document is
//! append-only from this pipeline's point of view - existing content is
//! never rewritten, new blocks go at the end.

use crate::model::ModelSpec;

/// Schema written by `init prisma` and by the implicit first-time setup
pub const SCHEMA_BOILERPLATE: &str = r#"// nuxtrails auto-generated schema
generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "sqlite"
  url      = "file:./dev.db"
}
"#;

/// Render the model block for one spec: id column, declared fields, and
/// the two implicit timestamp columns
pub fn model_block(spec: &ModelSpec) -> String {
    let mut block = String::new();
    block.push_str(&format!("model {} {{\n", spec.class_name));
    block.push_str("  id        Int      @id @default(autoincrement())\n");
    for field in &spec.fields {
        block.push_str(&format!("  {} {}\n", field.name, field.prisma_type));
    }
    block.push_str("  createdAt DateTime @default(now())\n");
    block.push_str("  updatedAt DateTime @updatedAt\n");
    block.push_str("}\n");
    block
}

/// Whether the schema already declares a model with this class name.
///
/// Matches the block header `model <Class> {` rather than a bare
/// substring, so a class name that prefixes another model's name does
/// not collide. Still a textual scan, not a structural parse.
pub fn contains_model(schema: &str, class_name: &str) -> bool {
    let header = format!("model {} {{", class_name);
    schema
        .lines()
        .any(|line| line.trim_start().starts_with(&header))
}

/// Append a model block to the schema text: trimmed existing content, a
/// blank line, then the block
pub fn append_model(schema: &str, block: &str) -> String {
    format!("{}\n\n{}", schema.trim(), block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelSpec;

    fn post_spec() -> ModelSpec {
        let tokens: Vec<String> = ["title:string", "body:text", "published:boolean"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        ModelSpec::new("post", &tokens).unwrap()
    }

    #[test]
    fn test_model_block_shape() {
        let block = model_block(&post_spec());
        assert!(block.starts_with("model Post {\n"));
        assert!(block.contains("  id        Int      @id @default(autoincrement())\n"));
        assert!(block.contains("  title String\n"));
        assert!(block.contains("  body String\n"));
        assert!(block.contains("  published Boolean\n"));
        assert!(block.contains("  createdAt DateTime @default(now())\n"));
        assert!(block.contains("  updatedAt DateTime @updatedAt\n"));
        assert!(block.ends_with("}\n"));
    }

    #[test]
    fn test_fields_keep_declaration_order() {
        let block = model_block(&post_spec());
        let title = block.find("title").unwrap();
        let body = block.find("body").unwrap();
        let published = block.find("published").unwrap();
        assert!(title < body && body < published);
    }

    #[test]
    fn test_contains_model_matches_header() {
        let schema = format!("{}\n{}", SCHEMA_BOILERPLATE, model_block(&post_spec()));
        assert!(contains_model(&schema, "Post"));
        assert!(!contains_model(&schema, "Comment"));
    }

    #[test]
    fn test_contains_model_ignores_prefix_collisions() {
        // A "Postscript" model must not block generation of "Post"
        let schema = "model Postscript {\n  id Int @id\n}\n";
        assert!(!contains_model(schema, "Post"));
        assert!(contains_model(schema, "Postscript"));
    }

    #[test]
    fn test_append_preserves_existing_text() {
        let block = model_block(&post_spec());
        let appended = append_model(SCHEMA_BOILERPLATE, &block);
        assert!(appended.starts_with(SCHEMA_BOILERPLATE.trim()));
        assert!(appended.ends_with(&block));
        // Exactly one blank line between existing content and the block
        assert!(appended.contains("}\n\nmodel Post {"));
    }

    #[test]
    fn test_boilerplate_declares_client_and_sqlite() {
        assert!(SCHEMA_BOILERPLATE.contains("generator client"));
        assert!(SCHEMA_BOILERPLATE.contains("provider = \"prisma-client-js\""));
        assert!(SCHEMA_BOILERPLATE.contains("provider = \"sqlite\""));
        assert!(SCHEMA_BOILERPLATE.contains("url      = \"file:./dev.db\""));
    }
}
