//! Field spec parsing and model naming
//!
//! Turns the CLI's `name:type` tokens into [`FieldDescriptor`]s and
//! derives the names every generated artifact shares: the capitalized
//! class name and the pluralized table slug.

use crate::error::ScaffoldError;
use std::collections::HashSet;

/// Prisma scalar type a field token maps to
///
/// The mapping is case-sensitive and exact; anything outside the known
/// set (including a missing annotation) falls back to `String`.
fn map_prisma_type(raw: Option<&str>) -> &'static str {
    match raw {
        Some("string") => "String",
        Some("text") => "String",
        Some("boolean") => "Boolean",
        Some("int") => "Int",
        Some("float") => "Float",
        Some("date") => "DateTime",
        _ => "String",
    }
}

/// One parsed `name:type` token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as written
    pub name: String,
    /// Raw type annotation, if the token carried one
    pub source_type: Option<String>,
    /// Prisma scalar type the annotation maps to
    pub prisma_type: &'static str,
}

impl FieldDescriptor {
    /// Parse a single `name:type` token. Splits on the first ':'; a token
    /// without ':' has no annotation and maps to `String`.
    pub fn parse(token: &str) -> Result<Self, ScaffoldError> {
        let (name, source_type) = match token.split_once(':') {
            Some((name, ty)) => (name, Some(ty.to_string())),
            None => (token, None),
        };

        if name.is_empty() {
            return Err(ScaffoldError::EmptyFieldName(token.to_string()));
        }

        let prisma_type = map_prisma_type(source_type.as_deref());
        Ok(Self {
            name: name.to_string(),
            source_type,
            prisma_type,
        })
    }

    /// Whether this field renders as plain text in the UI (maps to a
    /// Prisma `String` via the `string` annotation or a fallback)
    pub fn is_string_like(&self) -> bool {
        self.prisma_type == "String"
    }
}

/// Everything the generators need to know about one model
///
/// Derived once per invocation and passed down the cascade unchanged.
#[derive(Debug, Clone)]
pub struct ModelSpec {
    /// Model name exactly as the user typed it
    pub raw_name: String,
    /// First character upper-cased, rest unchanged
    pub class_name: String,
    /// Lower-cased class name with a trailing "s"
    ///
    /// Naive pluralization, kept compatible with the schema files this
    /// tool has always produced ("Bus" becomes "buss").
    pub table_slug: String,
    /// Declared fields, in the order they were given
    pub fields: Vec<FieldDescriptor>,
}

impl ModelSpec {
    /// Build a spec from the raw model name and field tokens.
    ///
    /// Rejects duplicate field names and empty names; unknown type
    /// annotations are accepted and fall back to `String`.
    pub fn new(raw_name: &str, field_tokens: &[String]) -> Result<Self, ScaffoldError> {
        let class_name = capitalize(raw_name);
        let table_slug = format!("{}s", class_name.to_lowercase());

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(field_tokens.len());
        for token in field_tokens {
            let field = FieldDescriptor::parse(token)?;
            if !seen.insert(field.name.clone()) {
                return Err(ScaffoldError::DuplicateField(field.name));
            }
            fields.push(field);
        }

        Ok(Self {
            raw_name: raw_name.to_string(),
            class_name,
            table_slug,
            fields,
        })
    }

    /// Field used by list/detail pages for display: the first
    /// string-typed field, or "id" when the model has none
    pub fn display_field(&self) -> &str {
        self.fields
            .iter()
            .find(|f| f.is_string_like())
            .map(|f| f.name.as_str())
            .unwrap_or("id")
    }

    /// Pinia store composable name, e.g. `usePostStore`
    pub fn store_composable(&self) -> String {
        format!("use{}Store", self.class_name)
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
