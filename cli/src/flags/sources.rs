//! Parsers for the `--source-type-*` flags of `version-create`.
//!
//! Each flag holds `;`-separated entries of `,`-separated `key=value` fields,
//! e.g. `name=build1, id=7, include-deps=true; name=build2, id=9`.
use std::collections::HashMap;

use super::{
    parse_bool, parse_key_value_string, parse_slice_flag, validate_required_fields,
    FIELD_SEPARATOR,
};
use crate::error::{AppTrustError, Result};
use crate::model::{
    CreateVersionArtifact, CreateVersionBuild, CreateVersionPackage, CreateVersionReference,
    CreateVersionReleaseBundle,
};

fn parse_entries<T>(
    value: &str,
    kind: &str,
    required: &[&str],
    build: impl Fn(&mut HashMap<String, String>) -> Result<T>,
) -> Result<Vec<T>> {
    let invalid = |err: AppTrustError| AppTrustError::parse(format!("invalid {kind} format: {err}"));

    parse_slice_flag(value)
        .unwrap_or_default()
        .iter()
        .map(|entry| {
            let mut fields = parse_key_value_string(entry, FIELD_SEPARATOR).map_err(invalid)?;
            validate_required_fields(&fields, required).map_err(invalid)?;
            build(&mut fields).map_err(invalid)
        })
        .collect()
}

fn take(fields: &mut HashMap<String, String>, key: &str) -> String {
    fields.remove(key).unwrap_or_default()
}

pub fn parse_builds(value: &str) -> Result<Vec<CreateVersionBuild>> {
    parse_entries(value, "build", &["name", "id"], |fields| {
        let include_deps = fields
            .remove("include-deps")
            .or_else(|| fields.remove("include_deps"));
        let include_dependencies = match include_deps {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                AppTrustError::parse(format!("invalid boolean value for include-deps: '{raw}'"))
            })?,
            None => false,
        };

        Ok(CreateVersionBuild {
            repository_key: take(fields, "repo-key"),
            name: take(fields, "name"),
            number: take(fields, "id"),
            started: take(fields, "started"),
            include_dependencies,
        })
    })
}

pub fn parse_release_bundles(value: &str) -> Result<Vec<CreateVersionReleaseBundle>> {
    parse_entries(value, "release bundle", &["name", "version"], |fields| {
        Ok(CreateVersionReleaseBundle {
            project_key: take(fields, "project-key"),
            repository_key: take(fields, "repo-key"),
            name: take(fields, "name"),
            version: take(fields, "version"),
        })
    })
}

pub fn parse_source_versions(value: &str) -> Result<Vec<CreateVersionReference>> {
    parse_entries(
        value,
        "application version",
        &["application-key", "version"],
        |fields| {
            Ok(CreateVersionReference {
                application_key: take(fields, "application-key"),
                version: take(fields, "version"),
            })
        },
    )
}

pub fn parse_packages(value: &str) -> Result<Vec<CreateVersionPackage>> {
    parse_entries(
        value,
        "package",
        &["type", "name", "version", "repo-key"],
        |fields| {
            Ok(CreateVersionPackage {
                package_type: take(fields, "type"),
                name: take(fields, "name"),
                version: take(fields, "version"),
                repository: take(fields, "repo-key"),
            })
        },
    )
}

pub fn parse_artifacts(value: &str) -> Result<Vec<CreateVersionArtifact>> {
    parse_entries(value, "artifact", &["path"], |fields| {
        Ok(CreateVersionArtifact {
            path: take(fields, "path"),
            sha256: take(fields, "sha256"),
        })
    })
}
