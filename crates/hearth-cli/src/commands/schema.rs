use hearth_schema::SchemaRegistry;
use serde::Serialize;
use serde_json::Value;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::table::Table;
use crate::output::{Tabular, output};

/// Handle `hearth schema`.
///
/// Without a type name, prints the sorted list of registered names.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new();
    let Some(type_name) = args.type_name.as_deref() else {
        return output(&SchemaNames(registry.list()), flags.format);
    };

    let schema = registry.require(type_name)?;
    output(&SchemaView(schema), flags.format)
}

#[derive(Serialize)]
#[serde(transparent)]
struct SchemaNames(Vec<&'static str>);

impl Tabular for SchemaNames {
    fn tables(&self) -> Vec<Table> {
        let mut table = Table::new(&["name"]).titled("Schemas");
        for name in &self.0 {
            table.push(vec![(*name).to_string()]);
        }
        vec![table]
    }
}

/// A schema document; tables list its top-level properties.
#[derive(Serialize)]
#[serde(transparent)]
struct SchemaView<'a>(&'a Value);

impl Tabular for SchemaView<'_> {
    fn tables(&self) -> Vec<Table> {
        let title = self
            .0
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or("schema");
        let required: Vec<&str> = self
            .0
            .get("required")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default();

        let mut table = Table::new(&["property", "type", "required"]).titled(title);
        if let Some(properties) = self.0.get("properties").and_then(Value::as_object) {
            for (name, property) in properties {
                table.push(vec![
                    name.clone(),
                    type_label(property),
                    required.contains(&name.as_str()).to_string(),
                ]);
            }
        }
        vec![table]
    }
}

/// `string`, `Urgency`, `Attachment[]`, `Category|null`, and so on.
fn type_label(property: &Value) -> String {
    if let Some(reference) = property.get("$ref").and_then(Value::as_str) {
        return reference.rsplit('/').next().unwrap_or(reference).to_string();
    }
    if let Some(alternatives) = property
        .get("anyOf")
        .or_else(|| property.get("oneOf"))
        .and_then(Value::as_array)
    {
        return alternatives
            .iter()
            .map(type_label)
            .collect::<Vec<_>>()
            .join("|");
    }
    match property.get("type") {
        Some(Value::String(kind)) if kind == "array" => property
            .get("items")
            .map_or_else(|| "array".to_string(), |items| format!("{}[]", type_label(items))),
        Some(Value::String(kind)) => kind.clone(),
        Some(Value::Array(kinds)) => {
            let kinds: Vec<&str> = kinds.iter().filter_map(Value::as_str).collect();
            if kinds.contains(&"array") {
                let items = property
                    .get("items")
                    .map_or_else(|| "array".to_string(), |items| format!("{}[]", type_label(items)));
                let rest = kinds.iter().filter(|kind| **kind != "array").copied();
                std::iter::once(items.as_str())
                    .chain(rest)
                    .collect::<Vec<_>>()
                    .join("|")
            } else {
                kinds.join("|")
            }
        }
        _ => "any".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unknown_type_is_an_error() {
        let args = SchemaArgs {
            type_name: Some("invoice".to_string()),
        };
        let flags = GlobalFlags {
            format: crate::cli::OutputFormat::Raw,
            limit: None,
            quiet: true,
            color: crate::cli::ColorMode::Never,
        };
        let err = handle(&args, &flags).expect_err("invoice is not a schema");
        assert!(err.to_string().contains("unknown schema type 'invoice'"));
    }

    #[test]
    fn type_labels_follow_refs_and_arrays() {
        assert_eq!(type_label(&json!({"$ref": "#/$defs/Urgency"})), "Urgency");
        assert_eq!(type_label(&json!({"type": "string"})), "string");
        assert_eq!(
            type_label(&json!({"type": ["array", "null"], "items": {"$ref": "#/$defs/Attachment"}})),
            "Attachment[]|null"
        );
        assert_eq!(
            type_label(&json!({"anyOf": [{"$ref": "#/$defs/WorkflowStatus"}, {"type": "null"}]})),
            "WorkflowStatus|null"
        );
    }

    #[test]
    fn request_schema_table_marks_required_fields() {
        let registry = SchemaRegistry::new();
        let schema = registry.get("maintenance_request").expect("registered");
        let tables = SchemaView(schema).tables();
        let rendered = tables[0].render(crate::output::table::TableOptions {
            max_width: None,
            color: false,
        });
        let description = rendered
            .lines()
            .find(|line| line.starts_with("description"))
            .expect("description row");
        assert!(description.ends_with("true"));
        let tenant = rendered
            .lines()
            .find(|line| line.starts_with("tenant"))
            .expect("tenant row");
        assert!(tenant.ends_with("false"));
    }
}
