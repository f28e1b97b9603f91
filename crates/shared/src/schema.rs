//! Introspection of the named queries

use serde::{Deserialize, Serialize};

/// One named query and its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDescriptor {
    pub name: String,
    pub returns: String,
    pub arguments: Vec<ArgumentDescriptor>,
}

/// An argument accepted by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArgumentDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub required: bool,
}

impl QueryDescriptor {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            returns: returns.into(),
            arguments: Vec::new(),
        }
    }

    pub fn with_optional_argument(
        mut self,
        name: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        self.arguments.push(ArgumentDescriptor {
            name: name.into(),
            type_name: type_name.into(),
            required: false,
        });
        self
    }
}
