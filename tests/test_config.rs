use go_deps_hook::config::Config;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_environment_is_empty() {
    let cfg = Config::from_lookup(lookup_from(&[]));
    assert_eq!(cfg, Config::default());
    assert_eq!(cfg.bazel_command, "bazel");
    assert_eq!(cfg.gazelle_target, "//:gazelle");
}

#[test]
fn reads_directories_and_overrides() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("BUILD_WORKSPACE_DIRECTORY", "/src/ws"),
        ("USER_CONFIG_DIR", "/home/dev/.config/bb"),
        ("GO_DEPS_BAZEL", "bazelisk"),
        ("GO_DEPS_GAZELLE_TARGET", "//tools:gazelle"),
    ]));
    assert_eq!(cfg.workspace_dir, Some(PathBuf::from("/src/ws")));
    assert_eq!(cfg.bazel_command, "bazelisk");
    assert_eq!(cfg.gazelle_target, "//tools:gazelle");
    assert_eq!(
        cfg.preferences_path().unwrap(),
        PathBuf::from("/home/dev/.config/bb/bb-go-deps-plugin/preferences.json")
    );
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = Config::from_lookup(lookup_from(&[
        ("BUILD_WORKSPACE_DIRECTORY", ""),
        ("USER_CONFIG_DIR", "  "),
        ("GO_DEPS_BAZEL", ""),
    ]));
    assert_eq!(cfg.workspace_dir, None);
    assert!(cfg.preferences_path().is_err());
    assert_eq!(cfg.bazel_command, "bazel");
}
