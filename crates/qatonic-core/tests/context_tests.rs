use pretty_assertions::assert_eq;
use qatonic_core::{Error, FileRepository};
use qatonic_test_utils::TestProject;
use serde_json::{Value, json};

#[test]
fn test_context_unions_disjoint_files() {
    let project = TestProject::new();
    project.write_vars("dev", "api", &json!({"v1": "a"}));
    project.write_vars("dev", "db", &json!({"v2": "b"}));

    let repo = FileRepository::with_env(project.root(), "dev");
    let context = repo.context().unwrap();

    assert_eq!(Value::Object(context), json!({"v1": "a", "v2": "b"}));
}

#[test]
fn test_context_later_file_wins_collision() {
    // Files merge in sorted name order, so zz.json overwrites aa.json.
    let project = TestProject::new();
    project.write_vars("dev", "aa", &json!({"host": "first", "port": 80}));
    project.write_vars("dev", "zz", &json!({"host": "second"}));

    let repo = FileRepository::with_env(project.root(), "dev");
    let context = repo.context().unwrap();

    assert_eq!(
        Value::Object(context),
        json!({"host": "second", "port": 80})
    );
}

#[test]
fn test_context_empty_vars_dir_yields_empty_context() {
    let project = TestProject::new();
    project.mkdir("envs/dev/vars");

    let repo = FileRepository::with_env(project.root(), "dev");
    assert!(repo.context().unwrap().is_empty());
}

#[test]
fn test_context_missing_vars_dir_is_not_found() {
    let project = TestProject::new();
    let repo = FileRepository::with_env(project.root(), "dev");

    let err = repo.context().unwrap_err();
    assert!(err.is_not_found(), "got: {err}");
}

#[test]
fn test_context_foreign_file_poisons_aggregation() {
    let project = TestProject::new();
    project.write_vars("dev", "api", &json!({"v1": "a"}));
    project.write_raw("envs/dev/vars/notes.yaml", "v2: b");

    let repo = FileRepository::with_env(project.root(), "dev");
    let err = repo.context().unwrap_err();
    assert!(matches!(err, Error::UnsupportedFileType { .. }), "got: {err}");
}

#[test]
fn test_context_malformed_file_aborts_whole_aggregation() {
    let project = TestProject::new();
    project.write_vars("dev", "good", &json!({"v1": "a"}));
    project.write_raw("envs/dev/vars/bad.json", "{broken");

    let repo = FileRepository::with_env(project.root(), "dev");
    let err = repo.context().unwrap_err();
    match err {
        Error::ContextLoad { file, .. } => assert_eq!(file, "bad.json"),
        other => panic!("expected ContextLoad, got: {other}"),
    }
}

#[test]
fn test_context_non_object_file_aborts() {
    let project = TestProject::new();
    project.write_raw("envs/dev/vars/list.json", "[1, 2]");

    let repo = FileRepository::with_env(project.root(), "dev");
    let err = repo.context().unwrap_err();
    assert!(matches!(err, Error::ContextLoad { .. }), "got: {err}");
}

#[test]
fn test_context_without_environment_fails_fast() {
    let project = TestProject::new();
    let repo = FileRepository::new(project.root());

    let err = repo.context().unwrap_err();
    assert!(matches!(err, Error::EnvironmentNotSet { .. }), "got: {err}");
}

#[test]
fn test_context_reads_only_active_environment() {
    let project = TestProject::new();
    project.write_vars("dev", "api", &json!({"env": "dev"}));
    project.write_vars("prod", "api", &json!({"env": "prod"}));

    let repo = FileRepository::with_env(project.root(), "prod");
    let context = repo.context().unwrap();

    assert_eq!(Value::Object(context), json!({"env": "prod"}));
}
