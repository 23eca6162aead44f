//! End-to-end test over a realistic artifact tree
//!
//! Exercises the complete flow: root config -> discovery -> artifact load ->
//! properties cascade -> context aggregation, against one project layout.

use pretty_assertions::assert_eq;
use qatonic_core::FileRepository;
use qatonic_domain::Qualifier;
use qatonic_test_utils::TestProject;
use serde_json::{Value, json};

/// Lay out a small but complete qatonic project.
fn setup_project() -> TestProject {
    let project = TestProject::new();

    project.write_config(
        "qatonic",
        &json!({"runners": ["smoke.all", "smoke.slow"], "ignore": ["smoke.slow"]}),
    );

    project.write_command(
        "api",
        "login",
        &json!({"plugin": "http-client", "method": "POST", "url": "{{host}}/login"}),
    );
    project.write_command(
        "api",
        "health",
        &json!({"plugin": "http-client", "method": "GET", "url": "{{host}}/health"}),
    );
    project.write_group_properties("api", &json!({"timeout": 1200, "base": "{{host}}"}));

    project.write_runner(
        "smoke",
        "all",
        &json!({"steps": [{"cmd": "api.login"}, {"cmd": "api.health"}]}),
    );

    project.write_env_properties(
        "dev",
        &json!({"http-client": {"timeout": 300, "verify_tls": false}}),
    );
    project.write_vars("dev", "hosts", &json!({"host": "http://localhost:8080"}));
    project.write_vars("dev", "users", &json!({"user": "admin", "host": "overridden"}));

    project
}

#[test]
fn test_full_resolution_flow() {
    let project = setup_project();
    let repo = FileRepository::with_env(project.root(), "dev");

    // Root config with ignore filtering
    let config = repo.load_config().unwrap();
    let active: Vec<String> = config.active_runners().map(|q| q.to_string()).collect();
    assert_eq!(active, vec!["smoke.all"]);

    // Discovery
    assert_eq!(repo.command_groups().unwrap(), vec!["api"]);
    assert_eq!(repo.commands("api").unwrap(), vec!["health", "login"]);
    assert_eq!(repo.runner_groups().unwrap(), vec!["smoke"]);
    assert_eq!(repo.runners("smoke").unwrap(), vec!["all"]);

    // Runner load, then each of its command steps
    let runner = repo
        .load_runner(&Qualifier::new("smoke", "all").unwrap())
        .unwrap();
    assert_eq!(runner.steps().len(), 2);

    for step in runner.steps() {
        let qualifier: Qualifier = step["cmd"].as_str().unwrap().parse().unwrap();
        let command = repo.load_command(&qualifier).unwrap();
        assert_eq!(command.plugin(), "http-client");
    }

    // Properties cascade: group layer wins over environment layer
    let props = repo.properties("http-client", Some("api")).unwrap();
    assert_eq!(
        Value::Object(props),
        json!({"timeout": 1200, "verify_tls": false, "base": "{{host}}"})
    );

    // Context aggregation: later file (users.json) wins the host collision
    let context = repo.context().unwrap();
    assert_eq!(
        Value::Object(context),
        json!({"host": "overridden", "user": "admin"})
    );
}

#[test]
fn test_repository_is_stateless_between_calls() {
    let project = setup_project();
    let repo = FileRepository::with_env(project.root(), "dev");

    assert_eq!(repo.commands("api").unwrap().len(), 2);

    // A file added after construction is visible on the next call
    project.write_command("api", "logout", &json!({"plugin": "http-client"}));
    assert_eq!(
        repo.commands("api").unwrap(),
        vec!["health", "login", "logout"]
    );
}

#[test]
fn test_independent_repositories_share_a_tree() {
    let project = setup_project();
    let dev = FileRepository::with_env(project.root(), "dev");
    let bare = FileRepository::new(project.root());

    // Environment-agnostic queries agree regardless of environment binding
    assert_eq!(
        dev.command_groups().unwrap(),
        bare.command_groups().unwrap()
    );
    assert!(bare.context().is_err());
    assert!(dev.context().is_ok());
}
