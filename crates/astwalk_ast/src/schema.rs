//! Visitor keys: which fields of each node type hold child nodes.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::SchemaError;

const BABEL_KEYS_JSON: &str = include_str!("../../../schemas/babel-visitor-keys.json");
static BABEL_KEYS: OnceLock<VisitorKeys> = OnceLock::new();

/// Looks up the traversal-relevant fields of a node type.
///
/// Returning `None` means the type has no entry; such nodes are leaves and
/// are not reported to handlers at all.
pub trait SchemaProvider {
    /// Returns the ordered child field names for `node_type`.
    fn fields_for(&self, node_type: &str) -> Option<&[String]>;
}

/// An immutable-by-convention table of node type → child field names.
///
/// Field order is traversal order.
///
/// # Example
///
/// ```rust
/// use astwalk_ast::{SchemaProvider, VisitorKeys};
///
/// let keys = VisitorKeys::new()
///     .with("Program", ["body"])
///     .with("BinaryExpression", ["left", "right"]);
///
/// assert_eq!(keys.fields_for("BinaryExpression").unwrap(), ["left", "right"]);
/// assert!(keys.fields_for("Identifier").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitorKeys {
    entries: BTreeMap<String, Vec<String>>,
}

impl VisitorKeys {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the bundled Babel/ESTree visitor keys.
    ///
    /// Covers the JavaScript and JSX node types together with the TypeScript
    /// (`TS*`) and Flow type annotation nodes, so annotated trees are walked
    /// into their types.
    pub fn babel() -> &'static VisitorKeys {
        BABEL_KEYS.get_or_init(|| {
            VisitorKeys::from_json(BABEL_KEYS_JSON).expect("Invalid embedded visitor keys")
        })
    }

    /// Parses a table from JSON: an object mapping node types to arrays of
    /// field names.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        let entries: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| SchemaError::invalid(format!("Invalid JSON: {}", e)))?;

        for (node_type, fields) in &entries {
            if node_type.is_empty() {
                return Err(SchemaError::invalid("Empty node type"));
            }
            if let Some(duplicate) = first_duplicate(fields) {
                return Err(SchemaError::invalid(format!(
                    "Field `{}` listed twice for `{}`",
                    duplicate, node_type
                )));
            }
        }

        Ok(Self { entries })
    }

    /// Loads a table from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Sets the fields of `node_type`, returning the previous entry.
    pub fn insert<I>(&mut self, node_type: impl Into<String>, fields: I) -> Option<Vec<String>>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.entries.insert(
            node_type.into(),
            fields.into_iter().map(Into::into).collect(),
        )
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<I>(mut self, node_type: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.insert(node_type, fields);
        self
    }

    /// Merges `other` into this table. Entries of `other` win.
    pub fn extend(&mut self, other: VisitorKeys) {
        self.entries.extend(other.entries);
    }

    /// Returns the fields of `node_type`.
    #[inline]
    pub fn get(&self, node_type: &str) -> Option<&[String]> {
        self.entries.get(node_type).map(Vec::as_slice)
    }

    /// Returns true if `node_type` has an entry.
    pub fn contains(&self, node_type: &str) -> bool {
        self.entries.contains_key(node_type)
    }

    /// Number of node types in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries sorted by node type.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(node_type, fields)| (node_type.as_str(), fields.as_slice()))
    }
}

fn first_duplicate(fields: &[String]) -> Option<&str> {
    fields
        .iter()
        .enumerate()
        .find(|(i, field)| fields[..*i].contains(*field))
        .map(|(_, field)| field.as_str())
}

impl<K, F> FromIterator<(K, F)> for VisitorKeys
where
    K: Into<String>,
    F: IntoIterator,
    F::Item: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, F)>>(iter: T) -> Self {
        let mut keys = Self::new();
        for (node_type, fields) in iter {
            keys.insert(node_type, fields);
        }
        keys
    }
}

impl SchemaProvider for VisitorKeys {
    #[inline]
    fn fields_for(&self, node_type: &str) -> Option<&[String]> {
        self.get(node_type)
    }
}

impl<S: BuildHasher> SchemaProvider for HashMap<String, Vec<String>, S> {
    fn fields_for(&self, node_type: &str) -> Option<&[String]> {
        self.get(node_type).map(Vec::as_slice)
    }
}

impl SchemaProvider for BTreeMap<String, Vec<String>> {
    fn fields_for(&self, node_type: &str) -> Option<&[String]> {
        self.get(node_type).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_from_json_keeps_field_order() {
        let keys = VisitorKeys::from_json(r#"{ "ForStatement": ["init", "test", "update", "body"] }"#)
            .unwrap();

        assert_eq!(
            keys.get("ForStatement").unwrap(),
            ["init", "test", "update", "body"]
        );
    }

    #[test]
    fn test_empty_entry_is_not_missing() {
        let keys = VisitorKeys::from_json(r#"{ "ThisExpression": [] }"#).unwrap();

        assert!(keys.contains("ThisExpression"));
        assert_eq!(keys.fields_for("ThisExpression"), Some(&[][..]));
        assert_eq!(keys.fields_for("Super"), None);
    }

    #[rstest]
    #[case::not_an_object(r#"["Program"]"#, "Invalid JSON")]
    #[case::fields_not_array(r#"{ "Program": "body" }"#, "Invalid JSON")]
    #[case::field_not_string(r#"{ "Program": [1] }"#, "Invalid JSON")]
    #[case::empty_node_type(r#"{ "": ["body"] }"#, "Empty node type")]
    #[case::duplicate_field(r#"{ "Program": ["body", "body"] }"#, "listed twice")]
    fn test_from_json_rejects_invalid_tables(#[case] json: &str, #[case] expected: &str) {
        let err = VisitorKeys::from_json(json).unwrap_err();
        assert!(
            err.to_string().contains(expected),
            "Error message '{}' should contain '{}'",
            err,
            expected
        );
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("keys.json");
        fs::write(&path, r#"{ "Program": ["body"] }"#).unwrap();

        let keys = VisitorKeys::from_file(&path).unwrap();
        assert_eq!(keys.len(), 1);
    }

    #[test]
    fn test_from_file_missing() {
        let dir = tempfile::tempdir().unwrap();
        let err = VisitorKeys::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SchemaError::Io { .. }));
    }

    #[test]
    fn test_extend_overrides_entries() {
        let mut keys = VisitorKeys::new()
            .with("Program", ["body"])
            .with("Identifier", ["typeAnnotation"]);
        keys.extend(VisitorKeys::new().with("Program", ["directives", "body"]));

        assert_eq!(keys.get("Program").unwrap(), ["directives", "body"]);
        assert_eq!(keys.get("Identifier").unwrap(), ["typeAnnotation"]);
    }

    #[test]
    fn test_insert_returns_previous_entry() {
        let mut keys = VisitorKeys::new();
        assert_eq!(keys.insert("Program", ["body"]), None);
        assert_eq!(
            keys.insert("Program", ["directives"]),
            Some(vec!["body".to_string()])
        );
    }

    #[test]
    fn test_from_iterator() {
        let keys: VisitorKeys = [("A", vec!["b"]), ("B", vec!["c", "d"])].into_iter().collect();

        let collected: Vec<(&str, usize)> = keys.iter().map(|(t, f)| (t, f.len())).collect();
        assert_eq!(collected, vec![("A", 1), ("B", 2)]);
    }

    #[test]
    fn test_babel_keys() {
        let keys = VisitorKeys::babel();

        assert_eq!(keys.get("Program").unwrap(), ["directives", "body"]);
        assert_eq!(keys.get("ObjectExpression").unwrap(), ["properties"]);
        assert_eq!(keys.get("SpreadElement").unwrap(), ["argument"]);
        assert!(keys.get("StringLiteral").unwrap().is_empty());
    }

    #[rstest]
    #[case::ts_annotation("TSTypeAnnotation", &["typeAnnotation"])]
    #[case::ts_reference("TSTypeReference", &["typeName", "typeParameters"])]
    #[case::ts_interface("TSInterfaceDeclaration", &["id", "typeParameters", "extends", "body"])]
    #[case::ts_keyword("TSStringKeyword", &[])]
    #[case::flow_annotation("TypeAnnotation", &["typeAnnotation"])]
    #[case::flow_object(
        "ObjectTypeAnnotation",
        &["properties", "indexers", "callProperties", "internalSlots"]
    )]
    #[case::flow_generic("GenericTypeAnnotation", &["id", "typeParameters"])]
    #[case::flow_keyword("NumberTypeAnnotation", &[])]
    fn test_babel_keys_cover_type_annotations(#[case] node_type: &str, #[case] fields: &[&str]) {
        assert_eq!(VisitorKeys::babel().get(node_type).unwrap(), fields);
    }

    #[test]
    fn test_hash_map_is_a_schema() {
        let mut map = HashMap::new();
        map.insert("Program".to_string(), vec!["body".to_string()]);

        assert_eq!(map.fields_for("Program").unwrap(), ["body"]);
        assert!(map.fields_for("File").is_none());
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let keys = VisitorKeys::new().with("Program", ["body"]);
        let json = serde_json::to_string(&keys).unwrap();
        assert_eq!(json, r#"{"Program":["body"]}"#);
    }
}
