use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindPackageRequest {
    pub package_type: String,
    #[serde(rename = "package_name")]
    pub name: String,
    #[serde(rename = "package_version")]
    pub version: String,
}
