use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const BUSINESS_CRITICALITY_UNSPECIFIED: &str = "unspecified";
pub const BUSINESS_CRITICALITY_VALUES: &[&str] = &[
    BUSINESS_CRITICALITY_UNSPECIFIED,
    "low",
    "medium",
    "high",
    "critical",
];

pub const MATURITY_LEVEL_UNSPECIFIED: &str = "unspecified";
pub const MATURITY_LEVEL_VALUES: &[&str] = &[
    MATURITY_LEVEL_UNSPECIFIED,
    "experimental",
    "production",
    "end_of_life",
];

/// An application as sent to the create and update endpoints.
///
/// Every optional field is omitted from the JSON body when it is `None`, so an
/// update only carries the fields the user actually passed. Labels and owners
/// are sent as `null` when their flag was given an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppDescriptor {
    #[serde(default)]
    pub application_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maturity_level: Option<String>,
    #[serde(
        rename = "criticality",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub business_criticality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Option<BTreeMap<String, String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_owners: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_owners: Option<Option<Vec<String>>>,
}
