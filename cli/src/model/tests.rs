#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use serde_json::json;

    use crate::model::*;

    #[test]
    fn test_app_descriptor_omits_unset_fields() {
        let descriptor = AppDescriptor {
            application_key: "app-key".to_string(),
            ..Default::default()
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(value, json!({ "application_key": "app-key" }));
    }

    #[test]
    fn test_app_descriptor_keeps_explicitly_empty_fields() {
        let descriptor = AppDescriptor {
            application_key: "app-key".to_string(),
            description: Some(String::new()),
            user_owners: Some(Some(Vec::new())),
            group_owners: Some(None),
            labels: Some(None),
            business_criticality: Some("high".to_string()),
            ..Default::default()
        };

        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            json!({
                "application_key": "app-key",
                "description": "",
                "criticality": "high",
                "user_owners": [],
                "group_owners": null,
                "labels": null,
            })
        );
    }

    #[test]
    fn test_create_version_request_shape() {
        let request = CreateAppVersionRequest {
            application_key: "app".to_string(),
            version: "1.0.0".to_string(),
            sources: Some(CreateVersionSources {
                packages: vec![CreateVersionPackage {
                    package_type: "npm".to_string(),
                    name: "pkg".to_string(),
                    version: "1.0.0".to_string(),
                    repository: "npm-local".to_string(),
                }],
                builds: vec![CreateVersionBuild {
                    name: "build".to_string(),
                    number: "7".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            tag: String::new(),
            draft: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "application_key": "app",
                "version": "1.0.0",
                "sources": {
                    "packages": [
                        { "type": "npm", "name": "pkg", "version": "1.0.0", "repository_key": "npm-local" }
                    ],
                    "builds": [ { "name": "build", "number": "7" } ]
                }
            })
        );
    }

    #[test]
    fn test_promote_request_flattens_common_fields() {
        let request = PromoteAppVersionRequest {
            common: CommonPromoteAppVersion {
                promotion_type: PROMOTION_TYPE_MOVE.to_string(),
                excluded_repository_keys: vec!["repo3".to_string()],
                artifact_additional_properties: vec![ArtifactProperty {
                    key: "status".to_string(),
                    values: vec!["rc".to_string()],
                }],
                overwrite_strategy: "LATEST".to_string(),
                ..Default::default()
            },
            stage: "QA".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "promotion_type": "move",
                "excluded_repository_keys": ["repo3"],
                "artifact_additional_properties": [ { "key": "status", "values": ["rc"] } ],
                "overwrite_strategy": "LATEST",
                "target_stage": "QA",
            })
        );
    }

    #[test]
    fn test_release_request_has_no_stage() {
        let request = ReleaseAppVersionRequest::new(CommonPromoteAppVersion {
            promotion_type: PROMOTION_TYPE_COPY.to_string(),
            ..Default::default()
        });

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "promotion_type": "copy" }));
    }

    #[test]
    fn test_update_request_keeps_empty_property_values() {
        let mut properties = BTreeMap::new();
        properties.insert("old_flag".to_string(), Vec::new());
        let request = UpdateAppVersionRequest {
            properties,
            ..Default::default()
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value, json!({ "properties": { "old_flag": [] } }));
    }

    #[test]
    fn test_bind_package_request_field_names() {
        let request = BindPackageRequest {
            package_type: "npm".to_string(),
            name: "@scope/pkg".to_string(),
            version: "1.2.3".to_string(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "package_type": "npm",
                "package_name": "@scope/pkg",
                "package_version": "1.2.3",
            })
        );
    }

    #[test]
    fn test_rollback_response_is_lenient() {
        let response: RollbackAppVersionResponse =
            serde_json::from_str(r#"{"application_key":"app","rollback_to_stage":"DEV","extra":1}"#)
                .unwrap();
        assert_eq!(response.application_key, "app");
        assert_eq!(response.rollback_to_stage, "DEV");
        assert!(response.version.is_empty());
    }
}
