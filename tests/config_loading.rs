use cmake_projectgen::cli::ShapeArgs;
use cmake_projectgen::errors::ProjectGenError;
use cmake_projectgen::utils::config::{self};
use std::fs;
use std::path::Path;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    fs::write(path, content).unwrap();
}

#[test]
fn parses_full_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("projectgen.toml");
    let data = r#"
[project]
targets = 50
percent_unique = 20
common_macros = 3
common_includes = 4
unique_macros = 6
unique_includes = 2
output = "out/huge"
"#;
    write(&cfg_path, data);

    let cfg = config::load_config_at(&cfg_path).expect("config parsed");
    let project = cfg.project.as_ref().unwrap();
    assert_eq!(project.targets, Some(50));
    assert_eq!(project.unique_includes, Some(2));

    let params = cfg.apply(cmake_projectgen::params::ParameterSet::builder()).build().unwrap();
    assert_eq!(params.num_targets(), 50);
    assert_eq!(params.num_unique_targets(), 10);
    assert_eq!(params.num_common_macros(), 3);
    assert_eq!(params.num_common_includes(), 4);
    assert_eq!(params.num_unique_macros_per_target(), 6);
    assert_eq!(params.output_root(), Path::new("out/huge"));
}

#[test]
fn flags_override_config_and_config_overrides_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg_path = tmp.path().join("projectgen.toml");
    write(&cfg_path, "[project]\ntargets = 40\ncommon_macros = 9\noutput = 'from-config'\n");

    let args = ShapeArgs {
        targets: Some(12),
        config: Some(cfg_path),
        ..ShapeArgs::default()
    };
    let params = args.resolve().unwrap();
    assert_eq!(params.num_targets(), 12);
    assert_eq!(params.num_common_macros(), 9);
    // untouched keys keep the built-in defaults
    assert_eq!(params.percent_unique(), 15);
    assert_eq!(params.num_unique_includes_per_target(), 3);
    assert_eq!(params.output_root(), Path::new("from-config"));
}

#[test]
fn unknown_keys_and_missing_files_are_configuration_errors() {
    let tmp = tempfile::tempdir().unwrap();
    let bad = tmp.path().join("bad.toml");
    write(&bad, "[project]\ntargetz = 1\n");
    assert!(matches!(config::load_config_at(&bad), Err(ProjectGenError::Configuration(_))));

    let missing = tmp.path().join("nope.toml");
    let err = config::load_config_at(&missing).unwrap_err();
    assert!(err.to_string().contains("cannot read config"));
}
