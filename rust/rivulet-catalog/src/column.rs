use serde::{Deserialize, Serialize};

/// One column of a catalog entity's schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDefinition {
    /// Column name.
    pub name: String,
    /// Name of the column's data type, as reported by the catalog.
    pub type_name: String,
    /// Hidden columns exist in the schema but are not surfaced to users.
    #[serde(default)]
    pub is_hidden: bool,
}

impl ColumnDefinition {
    /// The human-readable `"name (type)"` form of this column.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.name, self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, type_name: &str) -> ColumnDefinition {
        ColumnDefinition {
            name: name.into(),
            type_name: type_name.into(),
            is_hidden: false,
        }
    }

    #[test]
    fn describe_joins_name_and_type() {
        assert_eq!(column("id", "int4").describe(), "id (int4)");
        assert_eq!(column("ts", "timestamptz").describe(), "ts (timestamptz)");
    }

    #[test]
    fn deserializes_camel_case_fields() -> anyhow::Result<()> {
        let column: ColumnDefinition =
            serde_json::from_str(r#"{"name":"id","typeName":"int4","isHidden":false}"#)?;
        assert_eq!(column.name, "id");
        assert_eq!(column.type_name, "int4");
        assert!(!column.is_hidden);
        Ok(())
    }

    #[test]
    fn hidden_flag_defaults_to_false() -> anyhow::Result<()> {
        let column: ColumnDefinition =
            serde_json::from_str(r#"{"name":"_row_id","typeName":"serial"}"#)?;
        assert!(!column.is_hidden);
        Ok(())
    }
}
