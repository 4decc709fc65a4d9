use cmake_projectgen::app::run_cli;
use cmake_projectgen::cli::{Cli, Commands, OutputFormat, ShapeArgs};
use std::fs;
use tempfile::tempdir;

fn shape(targets: u32, output: Option<std::path::PathBuf>) -> ShapeArgs {
    ShapeArgs { targets: Some(targets), percent_unique: Some(50), output, ..ShapeArgs::default() }
}

#[test]
fn app_generate_writes_project() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("p");
    let cli = Cli {
        quiet: true,
        verbose: 0,
        command: Commands::Generate {
            shape: shape(4, Some(root.clone())),
            parallel: false,
            format: OutputFormat::Text,
        },
    };
    assert_eq!(run_cli(cli), 0);
    let top = fs::read_to_string(root.join("CMakeLists.txt")).unwrap();
    assert_eq!(top.matches("add_subdirectory(").count(), 4);
    let frag = fs::read_to_string(root.join("src/src_0001/CMakeLists.txt")).unwrap();
    assert!(frag.contains("target_compile_definitions(main_0001"));
    let frag = fs::read_to_string(root.join("src/src_0002/CMakeLists.txt")).unwrap();
    assert!(!frag.contains("target_compile_definitions"));
}

#[test]
fn app_generate_without_output_returns_two() {
    let cli = Cli {
        quiet: false,
        verbose: 0,
        command: Commands::Generate { shape: shape(1, None), parallel: false, format: OutputFormat::Json },
    };
    assert_eq!(run_cli(cli), 2);
}

#[test]
fn app_plan_text_and_json_branches() {
    for format in [OutputFormat::Text, OutputFormat::Json] {
        let cli = Cli {
            quiet: false,
            verbose: 1,
            command: Commands::Plan { shape: shape(100, None), format },
        };
        assert_eq!(run_cli(cli), 0);
    }
}
