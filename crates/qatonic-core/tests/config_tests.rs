use qatonic_core::{Error, FileRepository};
use qatonic_domain::Qualifier;
use qatonic_test_utils::TestProject;
use serde_json::json;

#[test]
fn test_load_config_default_name() {
    let project = TestProject::new();
    project.write_config(
        "qatonic",
        &json!({"runners": ["smoke.all"], "ignore": ["db.seed"]}),
    );

    let repo = FileRepository::new(project.root());
    let config = repo.load_config().unwrap();

    assert_eq!(config.runners, vec![Qualifier::new("smoke", "all").unwrap()]);
    assert_eq!(config.ignore, vec![Qualifier::new("db", "seed").unwrap()]);
}

#[test]
fn test_load_config_missing_ignore_defaults_to_empty() {
    let project = TestProject::new();
    project.write_config("qatonic", &json!({"runners": ["smoke.all"]}));

    let repo = FileRepository::new(project.root());
    let config = repo.load_config().unwrap();
    assert!(config.ignore.is_empty());
}

#[test]
fn test_load_named_config() {
    let project = TestProject::new();
    project.write_config("staging", &json!({"runners": ["smoke.fast"]}));

    let repo = FileRepository::new(project.root());
    let config = repo.load_named_config("staging").unwrap();
    assert_eq!(config.runners.len(), 1);
}

#[test]
fn test_load_config_missing_file_is_not_found() {
    let project = TestProject::new();
    let repo = FileRepository::new(project.root());

    let err = repo.load_config().unwrap_err();
    assert!(err.is_not_found(), "got: {err}");
}

#[test]
fn test_load_config_malformed_is_parse_error() {
    let project = TestProject::new();
    project.write_raw("qatonic.json", "{runners: nope");

    let repo = FileRepository::new(project.root());
    let err = repo.load_config().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got: {err}");
}

#[test]
fn test_load_config_invalid_qualifier_is_parse_error() {
    let project = TestProject::new();
    project.write_config("qatonic", &json!({"runners": ["no-dot-here"]}));

    let repo = FileRepository::new(project.root());
    let err = repo.load_config().unwrap_err();
    assert!(matches!(err, Error::Parse { .. }), "got: {err}");
}
