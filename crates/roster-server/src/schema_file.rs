//! Schema document loading and contract checks.
//!
//! The schema file is the published API contract. It is parsed at startup
//! and every field the resolvers serve must be declared in it with the same
//! arguments and type.

use async_graphql::parser::types::{FieldDefinition, TypeKind, TypeSystemDefinition};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fields each object type must declare. Root types are resolved through
/// the document's `schema` block when it has one.
const QUERY_FIELDS: &[&str] = &["allPeople"];
const MUTATION_FIELDS: &[&str] = &["createPerson"];
const PERSON_FIELDS: &[&str] = &["id", "name", "date", "daysAgo"];

/// Errors raised while loading the schema document
#[derive(Debug, Error)]
pub enum SchemaFileError {
    /// File could not be read
    #[error("Failed to read schema file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document is not valid GraphQL SDL
    #[error("Failed to parse schema: {0}")]
    Parse(String),

    /// An object type the resolvers serve is not declared
    #[error("Schema does not declare type {0}")]
    MissingType(String),

    /// A field the resolvers serve is not declared
    #[error("Schema type {type_name} does not declare field {field}")]
    MissingField { type_name: String, field: String },

    /// A field is declared with arguments or a type the resolvers do not serve
    #[error("Schema field {type_name}.{field} is declared as `{declared}` but served as `{served}`")]
    FieldMismatch {
        type_name: String,
        field: String,
        declared: String,
        served: String,
    },
}

/// Object types and their field signatures as declared by a schema document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDocument {
    /// Name of the root query type
    pub query_type: String,
    /// Name of the root mutation type
    pub mutation_type: String,
    /// Object type name to field name to signature, e.g. `(name: String!): Person!`
    pub objects: HashMap<String, HashMap<String, String>>,
}

/// Render a field's arguments and type the way SDL writes them
fn field_signature(field: &FieldDefinition) -> String {
    let mut signature = String::new();

    if !field.arguments.is_empty() {
        let arguments: Vec<String> = field
            .arguments
            .iter()
            .map(|arg| format!("{}: {}", arg.node.name.node, arg.node.ty.node))
            .collect();
        signature.push('(');
        signature.push_str(&arguments.join(", "));
        signature.push(')');
    }

    signature.push_str(": ");
    signature.push_str(&field.ty.node.to_string());
    signature
}

impl SchemaDocument {
    /// Parse SDL, merging `extend type` blocks into their base type
    pub fn parse(source: &str) -> Result<Self, SchemaFileError> {
        let document = async_graphql::parser::parse_schema(source)
            .map_err(|e| SchemaFileError::Parse(e.to_string()))?;

        let mut parsed = Self {
            query_type: "Query".to_string(),
            mutation_type: "Mutation".to_string(),
            objects: HashMap::new(),
        };

        for definition in document.definitions {
            match definition {
                TypeSystemDefinition::Schema(schema) => {
                    let schema = schema.node;
                    if let Some(query) = schema.query {
                        parsed.query_type = query.node.to_string();
                    }
                    if let Some(mutation) = schema.mutation {
                        parsed.mutation_type = mutation.node.to_string();
                    }
                }
                TypeSystemDefinition::Type(ty) => {
                    let ty = ty.node;
                    if let TypeKind::Object(object) = ty.kind {
                        let fields = parsed.objects.entry(ty.name.node.to_string()).or_default();
                        for field in object.fields {
                            let field = field.node;
                            fields.insert(field.name.node.to_string(), field_signature(&field));
                        }
                    }
                }
                TypeSystemDefinition::Directive(_) => {}
            }
        }

        Ok(parsed)
    }

    /// Signature of `type_name.field`, if declared
    pub fn field(&self, type_name: &str, field: &str) -> Option<&str> {
        self.objects
            .get(type_name)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
    }

    /// Check that `type_name` declares every field in `fields` with the
    /// signature `served` gives it on `served_type`
    pub fn require_fields(
        &self,
        type_name: &str,
        served: &SchemaDocument,
        served_type: &str,
        fields: &[&str],
    ) -> Result<(), SchemaFileError> {
        if !self.objects.contains_key(type_name) {
            return Err(SchemaFileError::MissingType(type_name.to_string()));
        }

        for field in fields {
            let declared = self
                .field(type_name, field)
                .ok_or_else(|| SchemaFileError::MissingField {
                    type_name: type_name.to_string(),
                    field: field.to_string(),
                })?;

            let expected = served.field(served_type, field).unwrap_or_default();
            if declared != expected {
                return Err(SchemaFileError::FieldMismatch {
                    type_name: type_name.to_string(),
                    field: field.to_string(),
                    declared: declared.to_string(),
                    served: expected.to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Parse SDL and check it against the resolver surface
pub fn check_schema(source: &str) -> Result<SchemaDocument, SchemaFileError> {
    let document = SchemaDocument::parse(source)?;
    let served = SchemaDocument::parse(&roster_core::served_sdl())?;

    document.require_fields(&document.query_type, &served, &served.query_type, QUERY_FIELDS)?;
    document.require_fields(
        &document.mutation_type,
        &served,
        &served.mutation_type,
        MUTATION_FIELDS,
    )?;
    document.require_fields("Person", &served, "Person", PERSON_FIELDS)?;

    Ok(document)
}

/// Read and check the schema file at `path`
pub fn load_schema_document(path: &Path) -> Result<SchemaDocument, SchemaFileError> {
    let source = std::fs::read_to_string(path).map_err(|source| SchemaFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let document = check_schema(&source)?;

    tracing::debug!(
        path = %path.display(),
        types = document.objects.len(),
        "Schema document loaded"
    );

    Ok(document)
}
