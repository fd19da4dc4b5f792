//! Typed view of the base metadata response

use serde::Deserialize;

/// The schema of a base: an ordered list of tables
#[derive(Debug, Clone, Deserialize)]
pub struct BaseSchema {
    /// Tables in the base, in API order
    #[serde(default)]
    pub tables: Vec<Table>,
}

/// One table and its column definitions
#[derive(Debug, Clone, Deserialize)]
pub struct Table {
    /// Table identifier (e.g. `tblXXXXXXXXXXXXXX`)
    #[serde(default)]
    pub id: Option<String>,

    /// Table name, used to address the records endpoint
    pub name: String,

    /// Column definitions, in API order
    #[serde(default)]
    pub fields: Vec<TableField>,
}

/// A single column definition
#[derive(Debug, Clone, Deserialize)]
pub struct TableField {
    /// Column name
    pub name: String,

    /// Column type as reported by the API
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
}
