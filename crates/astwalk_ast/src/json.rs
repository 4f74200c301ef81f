//! [`AstNode`] for `serde_json::Value` trees.
//!
//! ESTree/Babel ASTs serialized as JSON are walked directly: an object's
//! string `"type"` member is its discriminant, arrays are sequences and
//! falsy values (`null`, `false`, `0`, `""`) are absent, whether they fill a
//! field or a sequence slot.

use std::borrow::Cow;

use serde_json::Value;

use crate::node::{AstNode, Field};

impl AstNode for Value {
    fn node_type(&self) -> Option<&str> {
        self.as_object()?.get("type")?.as_str()
    }

    fn field(&self, key: &str) -> Field<'_, Self> {
        match self.as_object().and_then(|object| object.get(key)) {
            Some(Value::Array(items)) => Field::List(Cow::Owned(
                items
                    .iter()
                    .map(|item| is_present(item).then_some(item))
                    .collect(),
            )),
            Some(value) if is_present(value) => Field::Node(value),
            _ => Field::Absent,
        }
    }
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[test]
    fn test_node_type_reads_type_member() {
        let node = json!({ "type": "Identifier", "name": "x" });
        assert_eq!(node.node_type(), Some("Identifier"));
    }

    #[rstest]
    #[case::missing(json!({ "name": "x" }))]
    #[case::not_a_string(json!({ "type": 3 }))]
    #[case::not_an_object(json!("Identifier"))]
    #[case::array(json!([{ "type": "Identifier" }]))]
    fn test_values_without_discriminant(#[case] value: Value) {
        assert_eq!(value.node_type(), None);
    }

    #[rstest]
    #[case::missing(json!({ "type": "ReturnStatement" }))]
    #[case::null(json!({ "type": "ReturnStatement", "argument": null }))]
    #[case::false_value(json!({ "type": "ReturnStatement", "argument": false }))]
    #[case::empty_string(json!({ "type": "ReturnStatement", "argument": "" }))]
    fn test_absent_fields(#[case] node: Value) {
        assert!(node.field("argument").is_absent());
    }

    #[test]
    fn test_object_field_is_single_child() {
        let node = json!({
            "type": "ReturnStatement",
            "argument": { "type": "ThisExpression" }
        });

        match node.field("argument") {
            Field::Node(child) => assert_eq!(child.node_type(), Some("ThisExpression")),
            other => panic!("expected a single child, got {:?}", other),
        }
    }

    #[test]
    fn test_array_field_marks_holes() {
        let node = json!({
            "type": "ArrayExpression",
            "elements": [{ "type": "Identifier" }, null, { "type": "Identifier" }]
        });

        let Field::List(items) = node.field("elements") else {
            panic!("expected a list");
        };
        let present: Vec<bool> = items.iter().map(Option::is_some).collect();
        assert_eq!(present, vec![true, false, true]);
    }

    #[test]
    fn test_fields_of_non_objects_are_absent() {
        assert!(json!([1, 2, 3]).field("0").is_absent());
        assert!(json!(null).field("body").is_absent());
    }
}
