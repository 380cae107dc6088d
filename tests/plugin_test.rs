//! Integration tests for out-of-process plugin rules.
#![cfg(unix)]

use std::collections::BTreeMap;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use gqlint::lint::{
    render, LintWarning, OutputFormat, PluginLoader, RuleOrigin, RuleRegistry, RuleRunner,
    DEFAULT_IGNORE_MARKER,
};
use gqlint::schema::{parse_sources, SourceFile};
use tempfile::TempDir;

fn write_plugin(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Reports every type named `Foo` at line 1, column 1, regardless of input.
const NO_FOO_PLUGIN: &str = r#"case "$1" in
  describe)
    echo '{"protocol":1,"name":"no-foo","description":"Types must not be named Foo"}'
    ;;
  check)
    if grep -q '"name":"Foo"'; then
      echo '{"diagnostics":[{"message":"Do not name types Foo.","location":{"file":"schema.graphql","line":1,"column":1}}]}'
    else
      echo '{"diagnostics":[]}'
    fi
    ;;
  *)
    exit 2
    ;;
esac"#;

#[test]
fn one_good_plugin_and_one_malformed() {
    let plugins = TempDir::new().unwrap();
    let good = write_plugin(plugins.path(), "no-foo", NO_FOO_PLUGIN);
    let bad = write_plugin(plugins.path(), "broken", "echo '{\"protocol\":1}'");
    let mut registry = RuleRegistry::with_builtins().unwrap();
    let builtins = registry.len();

    let warnings = PluginLoader::new().load_dir(&mut registry, plugins.path());

    assert_eq!(registry.len(), builtins + 1);
    assert_eq!(registry.origin("no-foo"), Some(&RuleOrigin::Plugin(good)));
    assert_eq!(warnings.len(), 1);
    assert!(matches!(&warnings[0], LintWarning::PluginLoad { path, .. } if *path == bad));
}

#[test]
fn plugin_diagnostics_flow_through_runner() {
    let plugins = TempDir::new().unwrap();
    write_plugin(plugins.path(), "no-foo", NO_FOO_PLUGIN);
    let mut registry = RuleRegistry::with_builtins().unwrap();
    PluginLoader::new().load_dir(&mut registry, plugins.path());

    let sources = vec![SourceFile::new("schema.graphql", "type Foo {\n  a: String\n}\n")];
    let schema = parse_sources(&sources).unwrap();
    let (active, warnings) = registry.resolve(&["types-have-descriptions".to_string()], &[]);

    let report = RuleRunner::new().run(&schema, &sources, &active, DEFAULT_IGNORE_MARKER);
    let text = render(OutputFormat::Text, &report.diagnostics, false, &BTreeMap::new()).unwrap();

    assert!(warnings.is_empty());
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    insta::assert_snapshot!(text, @r"
    schema.graphql:1:1: Do not name types Foo. (no-foo)
    schema.graphql:1:1: The object type `Foo` is missing a description. (types-have-descriptions)
    ");
}

#[test]
fn plugin_can_be_excluded() {
    let plugins = TempDir::new().unwrap();
    write_plugin(plugins.path(), "no-foo", NO_FOO_PLUGIN);
    let mut registry = RuleRegistry::with_builtins().unwrap();
    PluginLoader::new().load_dir(&mut registry, plugins.path());

    let (active, _) = registry.resolve(&[], &["no-foo".to_string()]);

    assert!(!active.contains("no-foo"));
}

#[test]
fn failing_check_becomes_execution_warning() {
    let plugins = TempDir::new().unwrap();
    write_plugin(
        plugins.path(),
        "flaky",
        r#"if [ "$1" = describe ]; then
  echo '{"protocol":1,"name":"flaky","description":"Fails when checking"}'
else
  echo 'internal error' >&2
  exit 1
fi"#,
    );
    let mut registry = RuleRegistry::with_builtins().unwrap();
    PluginLoader::new().load_dir(&mut registry, plugins.path());

    let sources = vec![SourceFile::new("schema.graphql", "type Query {\n  a: String\n}\n")];
    let schema = parse_sources(&sources).unwrap();
    let (active, _) = registry.resolve(&["fields-have-descriptions".to_string()], &[]);

    let report = RuleRunner::new().run(&schema, &sources, &active, DEFAULT_IGNORE_MARKER);

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.warnings.len(), 1);
    match &report.warnings[0] {
        LintWarning::RuleExecution { rule, message } => {
            assert_eq!(rule, "flaky");
            assert!(message.contains("internal error"), "{message}");
        }
        other => panic!("unexpected warning: {other:?}"),
    }
}

#[test]
fn hung_plugin_times_out_during_load() {
    let plugins = TempDir::new().unwrap();
    write_plugin(plugins.path(), "hang", "exec sleep 10");
    let mut registry = RuleRegistry::new();

    let warnings = PluginLoader::with_timeout(Duration::from_millis(300))
        .load_dir(&mut registry, plugins.path());

    assert!(registry.is_empty());
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].to_string().contains("timed out"));
}
