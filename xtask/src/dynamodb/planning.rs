//! Pure functions for calculating deployment plans (Functional Core).

use super::config::TableConfig;

/// Represents the current state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the hash key attribute, if the table reported one.
    pub partition_key: Option<String>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists with a different hash key. Handlers cannot use it and
    /// DynamoDB cannot change a key schema in place.
    KeyMismatch {
        table_name: String,
        expected: String,
        actual: Option<String>,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

/// Plan for destroying a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    match current {
        None => DeployPlan::CreateTable {
            config: desired.clone(),
        },
        Some(state) if state.partition_key.as_deref() == Some(desired.partition_key.name.as_str()) => {
            DeployPlan::NoChanges {
                table_name: desired.table_name.clone(),
            }
        }
        Some(state) => DeployPlan::KeyMismatch {
            table_name: desired.table_name.clone(),
            expected: desired.partition_key.name.clone(),
            actual: state.partition_key.clone(),
        },
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => vec![
            format!("+ Create table: {}", config.table_name),
            format!(
                "  Partition key: {} ({})",
                config.partition_key.name,
                config.partition_key.attribute_type.descriptor()
            ),
            "  Billing: PAY_PER_REQUEST".to_string(),
        ],
        DeployPlan::KeyMismatch {
            table_name,
            expected,
            actual,
        } => vec![
            format!("! Table '{}' has an incompatible key schema", table_name),
            format!("  Expected partition key: {}", expected),
            format!(
                "  Found partition key: {}",
                actual.as_deref().unwrap_or("<none>")
            ),
        ],
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}
