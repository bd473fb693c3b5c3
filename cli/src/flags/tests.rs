#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};
    use std::fs;

    use serde::Deserialize;
    use tempfile::tempdir;

    use crate::flags::*;
    use crate::model::{
        CreateVersionArtifact, CreateVersionBuild, CreateVersionPackage, CreateVersionReference,
        CreateVersionReleaseBundle,
    };

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_slice_flag() {
        assert_eq!(parse_slice_flag(""), None);
        assert_eq!(parse_slice_flag("foo"), Some(strings(&["foo"])));
        assert_eq!(parse_slice_flag("a;b"), Some(strings(&["a", "b"])));
        assert_eq!(
            parse_slice_flag(" foo ; bar ;baz "),
            Some(strings(&["foo", "bar", "baz"]))
        );
    }

    #[test]
    fn test_parse_map_flag() {
        assert_eq!(parse_map_flag("").unwrap(), None);

        let map = parse_map_flag("k=v;k2=v2").unwrap().unwrap();
        let expected: BTreeMap<String, String> = [("k", "v"), ("k2", "v2")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert_eq!(map, expected);

        let map = parse_map_flag(" foo = bar ; baz = a=b ").unwrap().unwrap();
        assert_eq!(map["foo"], "bar");
        assert_eq!(map["baz"], "a=b");

        let map = parse_map_flag("foo=;=bar").unwrap().unwrap();
        assert_eq!(map["foo"], "");
        assert_eq!(map[""], "bar");
    }

    #[test]
    fn test_parse_map_flag_rejects_segment_without_equals() {
        let err = parse_map_flag("bad").unwrap_err();
        assert!(err.to_string().contains("'bad'"));

        assert!(parse_map_flag("foo;bar=baz").is_err());
    }

    #[test]
    fn test_parse_list_properties_flag() {
        assert_eq!(parse_list_properties_flag("").unwrap(), None);

        let props = parse_list_properties_flag("status=rc,validated").unwrap().unwrap();
        assert_eq!(props["status"], strings(&["rc", "validated"]));

        let props = parse_list_properties_flag("status=rc;deployed_to= staging-A , staging-B ")
            .unwrap()
            .unwrap();
        assert_eq!(props["status"], strings(&["rc"]));
        assert_eq!(props["deployed_to"], strings(&["staging-A", "staging-B"]));
    }

    #[test]
    fn test_parse_list_properties_flag_empty_value_clears() {
        let props = parse_list_properties_flag("x=").unwrap().unwrap();
        assert_eq!(props.len(), 1);
        assert!(props["x"].is_empty());
    }

    #[test]
    fn test_parse_list_properties_flag_errors() {
        let err = parse_list_properties_flag("invalid-format").unwrap_err();
        assert!(err.to_string().contains("invalid property format"));

        let err = parse_list_properties_flag("=value").unwrap_err();
        assert!(err.to_string().contains("property key cannot be empty"));
    }

    #[test]
    fn test_validate_enum_flag() {
        let allowed = ["foo", "bar", "baz"];

        assert_eq!(validate_enum_flag("test-flag", "foo", "", &allowed).unwrap(), "foo");
        assert_eq!(validate_enum_flag("test-flag", "", "baz", &allowed).unwrap(), "baz");

        let err = validate_enum_flag("test-flag", "invalid", "bar", &allowed).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for --test-flag: 'invalid'. Allowed values: foo, bar, baz"
        );
    }

    #[test]
    fn test_validate_enum_flag_is_case_sensitive() {
        let allowed = ["DISABLED", "LATEST", "ALL"];
        assert!(validate_enum_flag("overwrite-strategy", "disabled", "", &allowed).is_err());
    }

    #[test]
    fn test_validate_required_fields() {
        let mut map = HashMap::new();
        map.insert("name".to_string(), "x".to_string());

        assert!(validate_required_fields(&map, &["name"]).is_ok());
        let err = validate_required_fields(&map, &["name", "id"]).unwrap_err();
        assert_eq!(err.to_string(), "missing required field: id");
    }

    #[test]
    fn test_parse_builds() {
        let builds = parse_builds(
            "name=build1,id=1.0.0,include_deps=true;name=build2, id=2.0.0, include-deps=false;name=build3,id=3.0.0,repo-key=my-build-info",
        )
        .unwrap();

        assert_eq!(
            builds,
            vec![
                CreateVersionBuild {
                    name: "build1".to_string(),
                    number: "1.0.0".to_string(),
                    include_dependencies: true,
                    ..Default::default()
                },
                CreateVersionBuild {
                    name: "build2".to_string(),
                    number: "2.0.0".to_string(),
                    ..Default::default()
                },
                CreateVersionBuild {
                    name: "build3".to_string(),
                    number: "3.0.0".to_string(),
                    repository_key: "my-build-info".to_string(),
                    ..Default::default()
                },
            ]
        );
        assert!(parse_builds("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_builds_errors() {
        let cases = [
            ("id=1.0.0", "missing required field: name"),
            ("name=build1", "missing required field: id"),
            ("build1", "invalid build format"),
            ("name=build1,id=1.0.0,include_deps=invalid", "invalid build format"),
        ];
        for (input, expected) in cases {
            let err = parse_builds(input).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{input}: {err} does not contain {expected}"
            );
        }
    }

    #[test]
    fn test_parse_release_bundles() {
        let bundles =
            parse_release_bundles("name=rb1,version=1.0.0;name=rb2,version=2.0.0,project-key=proj1,repo-key=repo1")
                .unwrap();

        assert_eq!(
            bundles,
            vec![
                CreateVersionReleaseBundle {
                    name: "rb1".to_string(),
                    version: "1.0.0".to_string(),
                    ..Default::default()
                },
                CreateVersionReleaseBundle {
                    name: "rb2".to_string(),
                    version: "2.0.0".to_string(),
                    project_key: "proj1".to_string(),
                    repository_key: "repo1".to_string(),
                },
            ]
        );

        assert!(parse_release_bundles("version=1.0.0")
            .unwrap_err()
            .to_string()
            .contains("missing required field: name"));
        assert!(parse_release_bundles("rb1")
            .unwrap_err()
            .to_string()
            .contains("invalid release bundle format"));
    }

    #[test]
    fn test_parse_source_versions() {
        let versions =
            parse_source_versions("application-key=app1,version=1.0.0;application-key=app2,version=2.0.0")
                .unwrap();
        assert_eq!(
            versions,
            vec![
                CreateVersionReference {
                    application_key: "app1".to_string(),
                    version: "1.0.0".to_string(),
                },
                CreateVersionReference {
                    application_key: "app2".to_string(),
                    version: "2.0.0".to_string(),
                },
            ]
        );

        assert!(parse_source_versions("version=1.0.0")
            .unwrap_err()
            .to_string()
            .contains("missing required field: application-key"));
        assert!(parse_source_versions("app1")
            .unwrap_err()
            .to_string()
            .contains("invalid application version format"));
    }

    #[test]
    fn test_parse_packages() {
        let packages = parse_packages(
            "type=npm, name=pkg1, version=1.0.0, repo-key=repo1;type=docker,name=pkg2,version=2.0.0,repo-key=repo2",
        )
        .unwrap();
        assert_eq!(
            packages,
            vec![
                CreateVersionPackage {
                    package_type: "npm".to_string(),
                    name: "pkg1".to_string(),
                    version: "1.0.0".to_string(),
                    repository: "repo1".to_string(),
                },
                CreateVersionPackage {
                    package_type: "docker".to_string(),
                    name: "pkg2".to_string(),
                    version: "2.0.0".to_string(),
                    repository: "repo2".to_string(),
                },
            ]
        );

        for (input, expected) in [
            ("name=pkg1,version=1.0.0,repo-key=repo1", "missing required field: type"),
            ("type=npm,version=1.0.0,repo-key=repo1", "missing required field: name"),
            ("type=npm,name=pkg1,repo-key=repo1", "missing required field: version"),
            ("type=npm,name=pkg1,version=1.0.0", "missing required field: repo-key"),
            ("pkg1", "invalid package format"),
        ] {
            assert!(parse_packages(input).unwrap_err().to_string().contains(expected));
        }
    }

    #[test]
    fn test_parse_artifacts() {
        let artifacts =
            parse_artifacts("path=repo/path/to/artifact1.jar,sha256=abc123def456;path=repo/path/to/artifact2.war")
                .unwrap();
        assert_eq!(
            artifacts,
            vec![
                CreateVersionArtifact {
                    path: "repo/path/to/artifact1.jar".to_string(),
                    sha256: "abc123def456".to_string(),
                },
                CreateVersionArtifact {
                    path: "repo/path/to/artifact2.war".to_string(),
                    sha256: String::new(),
                },
            ]
        );

        assert!(parse_artifacts("sha256=abc")
            .unwrap_err()
            .to_string()
            .contains("missing required field: path"));
        assert!(parse_artifacts("artifact1.jar")
            .unwrap_err()
            .to_string()
            .contains("invalid artifact format"));
    }

    #[test]
    fn test_spec_vars_to_map() {
        let vars = spec_vars_to_map("PROJECT=proj;APP_NAME=my app;broken;QUERY=a=b");
        assert_eq!(vars.len(), 3);
        assert_eq!(vars["PROJECT"], "proj");
        assert_eq!(vars["APP_NAME"], "my app");
        assert_eq!(vars["QUERY"], "a=b");
    }

    #[test]
    fn test_spec_vars_to_map_escaped_separator() {
        let vars = spec_vars_to_map(r"LIST=a\;b;OTHER=c");
        assert_eq!(vars["LIST"], "a;b");
        assert_eq!(vars["OTHER"], "c");
    }

    #[test]
    fn test_replace_vars() {
        let vars = spec_vars_to_map("KEY=value;N=1");
        assert_eq!(
            replace_vars(r#"{"k": "${KEY}", "n": "${N}${N}", "other": "${MISSING}"}"#, &vars),
            r#"{"k": "value", "n": "11", "other": "${MISSING}"}"#
        );
    }

    #[derive(Debug, Deserialize)]
    struct Sample {
        project_key: String,
    }

    #[test]
    fn test_load_spec_with_vars() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(&path, r#"{"project_key": "${PROJECT}", "ignored": true}"#).unwrap();

        let sample: Sample = load_spec(&path, Some("PROJECT=catalog")).unwrap();
        assert_eq!(sample.project_key, "catalog");

        let sample: Sample = load_spec(&path, None).unwrap();
        assert_eq!(sample.project_key, "${PROJECT}");
    }

    #[test]
    fn test_load_spec_errors() {
        let dir = tempdir().unwrap();

        let missing = dir.path().join("missing.json");
        let err = load_spec::<Sample>(&missing, None).unwrap_err();
        assert!(err.to_string().contains("failed to read spec file"));

        let invalid = dir.path().join("invalid.json");
        fs::write(&invalid, r#"{"project_key": "#).unwrap();
        let err = load_spec::<Sample>(&invalid, None).unwrap_err();
        assert!(err.to_string().contains("invalid spec file"));
    }
}
