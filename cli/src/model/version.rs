use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PROMOTION_TYPE_COPY: &str = "copy";
pub const PROMOTION_TYPE_MOVE: &str = "move";
pub const PROMOTION_TYPE_KEEP: &str = "keep";
/// Never accepted from `--promotion-type`; sent only when `--dry-run` is set.
pub const PROMOTION_TYPE_DRY_RUN: &str = "dry_run";

pub const PROMOTION_TYPE_VALUES: &[&str] =
    &[PROMOTION_TYPE_COPY, PROMOTION_TYPE_MOVE, PROMOTION_TYPE_KEEP];

pub const OVERWRITE_STRATEGY_VALUES: &[&str] = &["DISABLED", "LATEST", "ALL"];

fn is_false(value: &bool) -> bool {
    !*value
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateAppVersionRequest {
    pub application_key: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<CreateVersionSources>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    #[serde(skip_serializing_if = "is_false")]
    pub draft: bool,
}

/// The sources a new version is assembled from. Also the shape of a
/// version-create spec file, which is why unknown keys are tolerated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionSources {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub artifacts: Vec<CreateVersionArtifact>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub packages: Vec<CreateVersionPackage>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub builds: Vec<CreateVersionBuild>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub release_bundles: Vec<CreateVersionReleaseBundle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<CreateVersionReference>,
}

impl CreateVersionSources {
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
            && self.packages.is_empty()
            && self.builds.is_empty()
            && self.release_bundles.is_empty()
            && self.versions.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionArtifact {
    pub path: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub sha256: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionPackage {
    #[serde(rename = "type")]
    pub package_type: String,
    pub name: String,
    pub version: String,
    #[serde(rename = "repository_key")]
    pub repository: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionBuild {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository_key: String,
    pub name: String,
    pub number: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub started: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub include_dependencies: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionReleaseBundle {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub project_key: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository_key: String,
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateVersionReference {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub application_key: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactProperty {
    pub key: String,
    pub values: Vec<String>,
}

/// Fields shared by promotion and release.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommonPromoteAppVersion {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub promotion_type: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub included_repository_keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excluded_repository_keys: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artifact_additional_properties: Vec<ArtifactProperty>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub overwrite_strategy: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromoteAppVersionRequest {
    #[serde(flatten)]
    pub common: CommonPromoteAppVersion,
    #[serde(rename = "target_stage")]
    pub stage: String,
}

/// A release is a promotion to the production stage, which the server picks,
/// so no stage is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReleaseAppVersionRequest {
    #[serde(flatten)]
    pub common: CommonPromoteAppVersion,
}

impl ReleaseAppVersionRequest {
    pub fn new(common: CommonPromoteAppVersion) -> Self {
        Self { common }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollbackAppVersionRequest {
    pub from_stage: String,
}

impl RollbackAppVersionRequest {
    pub fn new(from_stage: impl Into<String>) -> Self {
        Self {
            from_stage: from_stage.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RollbackAppVersionResponse {
    pub application_key: String,
    pub version: String,
    pub project_key: String,
    pub rollback_from_stage: String,
    pub rollback_to_stage: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateAppVersionRequest {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub tag: String,
    /// An empty value list clears the property on the server
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Vec<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delete_properties: Vec<String>,
}
