//! Tests for server configuration and fixture loading.

use datagrid_error::{ConfigErrorKind, DatagridErrorKind};
use datagrid_query::GridParams;
use datagrid_server::{DatagridServerConfig, ViewResponse, fixture_view, load_fixture};
use std::path::PathBuf;

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("datagrid_{}_{}", std::process::id(), name));
    std::fs::write(&path, contents).expect("Temp file writable");
    path
}

#[test]
fn test_full_config_parses() {
    let config = DatagridServerConfig::from_toml(
        r#"
        [server]
        bind_address = "0.0.0.0:9000"

        [[views]]
        name = "users"
        route = "/people/"
        template_name = "people.html"
        columns = ["username", "last_name"]
        fixture = "users.json"
        filtering_enabled = true
        sorting_enabled = true
        per_page_default = 25
        "#,
    )
    .expect("Valid configuration");

    assert_eq!(config.server.bind_address, "0.0.0.0:9000");
    let view = &config.views[0];
    assert_eq!(view.route(), "/people/");
    assert_eq!(view.template_name(), "people.html");
    assert_eq!(view.fixture, Some(PathBuf::from("users.json")));
    assert!(*view.options.filtering_enabled());
    assert!(*view.options.sorting_enabled());
    assert_eq!(*view.options.per_page_default(), 25);
}

#[test]
fn test_defaults_apply() {
    let config = DatagridServerConfig::from_toml(
        r#"
        [[views]]
        name = "teams"
        columns = ["name"]
        "#,
    )
    .expect("Valid configuration");

    assert_eq!(config.server.bind_address, "127.0.0.1:8000");
    let view = &config.views[0];
    assert_eq!(view.route(), "/teams/");
    assert_eq!(view.template_name(), "teams/list.html");
    assert!(!*view.options.filtering_enabled());
    assert!(!*view.options.sorting_enabled());
    assert_eq!(*view.options.per_page_default(), 10);
}

#[test]
fn test_empty_config_is_valid() {
    let config = DatagridServerConfig::from_toml("").expect("Valid configuration");
    assert!(config.views.is_empty());
}

#[test]
fn test_invalid_configs_rejected() {
    let cases = [
        (
            "per_page_default",
            "[[views]]\nname = \"a\"\ncolumns = [\"x\"]\nper_page_default = 0\n",
        ),
        ("columns", "[[views]]\nname = \"a\"\n"),
        ("name", "[[views]]\nname = \" \"\ncolumns = [\"x\"]\n"),
        ("route", "[[views]]\nname = \"a\"\nroute = \"a/\"\ncolumns = [\"x\"]\n"),
        (
            "route",
            "[[views]]\nname = \"a\"\ncolumns = [\"x\"]\n[[views]]\nname = \"b\"\nroute = \"/a/\"\ncolumns = [\"x\"]\n",
        ),
    ];
    for (expected_key, contents) in cases {
        let err = DatagridServerConfig::from_toml(contents).unwrap_err();
        let DatagridErrorKind::Config(config) = err.kind() else {
            panic!("{} should be a configuration error", expected_key);
        };
        assert!(
            matches!(&config.kind, ConfigErrorKind::InvalidValue { key, .. } if key == expected_key),
            "Expected an invalid {}, got {}",
            expected_key,
            config.kind
        );
    }
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let err = DatagridServerConfig::from_toml("[[views]\nname = \"a\"\n").unwrap_err();
    assert!(matches!(
        err.kind(),
        DatagridErrorKind::Config(config) if matches!(config.kind, ConfigErrorKind::Parse { .. })
    ));
}

#[test]
fn test_from_file_missing() {
    let err = DatagridServerConfig::from_file("/nonexistent/datagrid.toml").unwrap_err();
    let DatagridErrorKind::Config(config) = err.kind() else {
        panic!("Expected a configuration error");
    };
    assert!(matches!(
        &config.kind,
        ConfigErrorKind::Read { path, .. } if path == "/nonexistent/datagrid.toml"
    ));
}

#[test]
fn test_fixture_loading() {
    let path = temp_file(
        "users.json",
        r#"[{"username": "user_0", "team": {"name": "red"}}, {"username": "user_1", "team": null}]"#,
    );
    let collection = load_fixture(&path).expect("Valid fixture");
    assert_eq!(collection.records().len(), 2);

    let not_array = temp_file("object.json", r#"{"username": "user_0"}"#);
    let err = load_fixture(&not_array).unwrap_err();
    assert!(matches!(
        err.kind(),
        DatagridErrorKind::Config(config)
            if matches!(&config.kind, ConfigErrorKind::InvalidValue { key, .. } if key == "fixture")
    ));

    let not_objects = temp_file("numbers.json", "[1, 2]");
    let err = load_fixture(&not_objects).unwrap_err();
    assert!(matches!(
        err.kind(),
        DatagridErrorKind::Config(config) if config.kind == ConfigErrorKind::NotAnObject("1".to_string())
    ));

    let malformed = temp_file("malformed.json", "[{");
    let err = load_fixture(&malformed).unwrap_err();
    assert!(matches!(
        err.kind(),
        DatagridErrorKind::Config(config) if matches!(config.kind, ConfigErrorKind::Parse { .. })
    ));

    for path in [path, not_array, not_objects, malformed] {
        let _ = std::fs::remove_file(path);
    }
}

#[test]
fn test_fixture_view_serves_records() {
    let fixture = temp_file(
        "teams.json",
        r#"[{"username": "user_0", "team": {"name": "red"}}, {"username": "user_1", "team": null}]"#,
    );
    let config = DatagridServerConfig::from_toml(&format!(
        "[[views]]\nname = \"users\"\ncolumns = [\"username\", \"team.name\"]\nfixture = {:?}\nsorting_enabled = true\n",
        fixture.display().to_string()
    ))
    .expect("Valid configuration");

    let view = fixture_view(&config.views[0]).expect("View builds");
    let params = GridParams::from_pairs([
        ("json", ""),
        ("iSortingCols", "1"),
        ("iSortCol_0", "0"),
        ("sSortDir_0", "desc"),
        ("bSortable_0", "true"),
    ]);
    let ViewResponse::Json(response) = view.handle(&params).unwrap() else {
        panic!("Expected a JSON response");
    };
    assert_eq!(
        response.to_json()["aaData"],
        serde_json::json!([["user_1", null], ["user_0", "red"]])
    );

    let _ = std::fs::remove_file(fixture);
}

#[test]
fn test_fixture_view_without_fixture_is_empty() {
    let config = DatagridServerConfig::from_toml("[[views]]\nname = \"users\"\ncolumns = [\"username\"]\n")
        .expect("Valid configuration");
    let view = fixture_view(&config.views[0]).expect("View builds");

    let ViewResponse::Json(response) = view.handle(&GridParams::from_pairs([("json", "")])).unwrap() else {
        panic!("Expected a JSON response");
    };
    assert_eq!(*response.total_records(), 0);
    assert!(response.rows().is_empty());
}
