//! Table configuration types (Functional Core - pure data).

/// Default name of the records table.
pub const DEFAULT_TABLE_NAME: &str = "filedrop-records";

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

/// DynamoDB attribute types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
}

impl AttributeType {
    /// DynamoDB type descriptor (`S`).
    pub fn descriptor(&self) -> &'static str {
        match self {
            AttributeType::String => "S",
        }
    }
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

impl TableConfig {
    /// Sets the table name.
    pub fn with_table_name(mut self, name: &str) -> Self {
        self.table_name = name.to_string();
        self
    }
}

/// Records table: one item per record, keyed by the `id` string hash key.
/// This is a pure function - no I/O.
pub fn records_table_config() -> TableConfig {
    TableConfig {
        table_name: DEFAULT_TABLE_NAME.to_string(),
        partition_key: KeyAttribute {
            name: "id".to_string(),
            attribute_type: AttributeType::String,
        },
        billing_mode: BillingMode::PayPerRequest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_table_is_keyed_by_id() {
        let config = records_table_config();

        assert_eq!(config.partition_key.name, "id");
        assert_eq!(config.partition_key.attribute_type.descriptor(), "S");
        assert_eq!(config.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn test_with_table_name() {
        let config = records_table_config().with_table_name("uploads-dev");
        assert_eq!(config.table_name, "uploads-dev");
    }
}
