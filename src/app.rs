use crate::cli::{Cli, Commands, OutputFormat};
use crate::errors::ProjectGenError;
use crate::generator::{GenerationSummary, ProjectEmitter, ProjectPlan};
use crate::stats::{EstimatedMemoryStats, MemoryTotal, ProjectStats};
use crate::utils::number::thousands;
use crate::utils::table;
use clap::CommandFactory;
use clap_complete::generate;
use serde::Serialize;
use std::io;
use std::path::Path;

/// Run the CLI logic in-process.
///
/// Returns an exit code: 0 on success, 1 on I/O failure, 2 on configuration errors.
#[must_use]
pub fn run_cli(cli: Cli) -> i32 {
    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let bin_name = env!("CARGO_PKG_NAME");
            let mut out = io::stdout();
            generate(shell, &mut cmd, bin_name, &mut out);
            0
        }
        Commands::Generate { shape, parallel, format } => {
            let params = match shape.resolve() {
                Ok(p) => p,
                Err(e) => return report_configuration_error(&e),
            };
            let summary = match ProjectEmitter::new(&params).parallel(parallel).generate() {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Generation failed: {e}");
                    return e.exit_code();
                }
            };
            if cli.quiet {
                return 0;
            }
            match format {
                OutputFormat::Json => print_json(&summary),
                OutputFormat::Text => {
                    print_summary(&summary);
                    0
                }
            }
        }
        Commands::Plan { shape, format } => {
            // nothing is written, so the output directory is optional here
            let params = match shape.resolve_with_root(Some(Path::new("."))) {
                Ok(p) => p,
                Err(e) => return report_configuration_error(&e),
            };
            let plan = ProjectPlan::compute(&params);
            match format {
                OutputFormat::Json => print_json(&plan),
                OutputFormat::Text => {
                    print_plan(&plan);
                    0
                }
            }
        }
    }
}

fn report_configuration_error(e: &ProjectGenError) -> i32 {
    eprintln!("{e}");
    if matches!(e, ProjectGenError::Configuration(_)) {
        eprintln!("\n{}", Cli::command().render_usage());
    }
    e.exit_code()
}

fn print_json<T: Serialize>(value: &T) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(s) => {
            println!("{s}");
            0
        }
        Err(e) => {
            eprintln!("JSON encode error: {e}");
            1
        }
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!(
        "Generated project at {} with {} targets ({} with unique options)",
        summary.output_root.display(),
        thousands(summary.targets as u64),
        thousands(summary.unique_targets as u64)
    );
    println!("{}", stats_table(&summary.stats));
    println!("{}", totals_table(summary.deduplicated, summary.per_target_copy));
}

fn print_plan(plan: &ProjectPlan) {
    let rows = vec![
        vec!["Targets".to_string(), thousands(plan.targets as u64)],
        vec!["Percent unique".to_string(), plan.percent_unique.to_string()],
        vec!["Unique targets".to_string(), thousands(plan.unique_targets as u64)],
        vec!["Common macros".to_string(), plan.common_macros.to_string()],
        vec!["Common include paths".to_string(), plan.common_includes.to_string()],
        vec!["Unique macros per target".to_string(), plan.unique_macros_per_target.to_string()],
        vec!["Unique include paths per target".to_string(), plan.unique_includes_per_target.to_string()],
    ];
    println!("{}", table::render(&["Parameter", "Value"], &rows));
    println!("{}", stats_table(&plan.stats));
    println!("{}", totals_table(plan.deduplicated, plan.per_target_copy));
}

fn scope_row(label: &str, st: &EstimatedMemoryStats) -> Vec<String> {
    vec![
        label.to_string(),
        thousands(st.macros),
        thousands(st.macro_name_chars),
        thousands(st.macro_value_chars),
        thousands(st.include_paths),
        thousands(st.include_path_chars),
    ]
}

fn stats_table(stats: &ProjectStats) -> String {
    let rows = vec![scope_row("common", &stats.common), scope_row("unique", &stats.unique)];
    table::render(
        &["Scope", "Macros", "Name chars", "Value chars", "Include paths", "Path chars"],
        &rows,
    )
}

fn totals_table(dedup: MemoryTotal, copies: MemoryTotal) -> String {
    let rows = vec![
        vec!["deduplicated".to_string(), thousands(dedup.chars), thousands(dedup.strings)],
        vec!["per-target copies".to_string(), thousands(copies.chars), thousands(copies.strings)],
    ];
    table::render(&["Estimate", "Characters", "Strings"], &rows)
}
