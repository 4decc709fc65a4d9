//! Project generation pipeline.
//!
//! `ProjectEmitter::generate` runs the whole pipeline: create the output
//! root, build the common macro/include tables, emit every target in index
//! order, then write the top-level `CMakeLists.txt` last so it can list
//! every target directory and report fully accumulated statistics.
//!
//! The unique-scope statistics are not shared mutable state: each target
//! returns its own tally in an [`EmittedTarget`] and the emitter folds them.
//! This lets `--parallel` runs produce byte-identical output.
use crate::errors::ProjectGenError;
use crate::naming::{self, IncludePath, MacroSet, Scope};
use crate::params::ParameterSet;
use crate::stats::{EstimatedMemoryStats, MemoryTotal, ProjectStats};
use crate::utils::number::thousands;
use rayon::prelude::*;
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod target;

pub use target::{EmittedTarget, TargetEmitter, TargetOptions};

/// Name of every generated build description file.
pub const CMAKE_LISTS: &str = "CMakeLists.txt";

/// Macros and include paths applied to every target; built once per run.
#[derive(Debug, Clone, Default)]
pub struct CommonTables {
    pub macros: MacroSet,
    pub includes: Vec<IncludePath>,
}

impl CommonTables {
    #[must_use]
    pub fn build(params: &ParameterSet) -> Self {
        Self {
            macros: naming::macro_set(Scope::Common, params.num_common_macros()),
            includes: naming::include_paths(Scope::Common, params.num_common_includes()),
        }
    }

    #[must_use]
    pub fn stats(&self) -> EstimatedMemoryStats {
        let mut st = EstimatedMemoryStats::default();
        st.add_macros(&self.macros);
        st.add_includes(&self.includes);
        st
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub output_root: PathBuf,
    pub targets: usize,
    pub unique_targets: usize,
    /// Relative target directories in index order.
    pub target_dirs: Vec<String>,
    pub stats: ProjectStats,
    pub deduplicated: MemoryTotal,
    pub per_target_copy: MemoryTotal,
}

/// Derived shape of a project, computed without writing anything.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectPlan {
    pub targets: usize,
    pub percent_unique: u8,
    pub unique_targets: usize,
    pub common_macros: usize,
    pub common_includes: usize,
    pub unique_macros_per_target: usize,
    pub unique_includes_per_target: usize,
    pub stats: ProjectStats,
    pub deduplicated: MemoryTotal,
    pub per_target_copy: MemoryTotal,
}

impl ProjectPlan {
    /// Uses the same naming rules as a real run, so the figures match exactly.
    #[must_use]
    pub fn compute(params: &ParameterSet) -> Self {
        let common = CommonTables::build(params).stats();
        let mut unique = EstimatedMemoryStats::default();
        for index in 0..params.num_unique_targets() {
            unique.merge(&TargetOptions::for_index(params, index, true).stats());
        }
        let stats = ProjectStats { common, unique };
        Self {
            targets: params.num_targets(),
            percent_unique: params.percent_unique(),
            unique_targets: params.num_unique_targets(),
            common_macros: params.num_common_macros(),
            common_includes: params.num_common_includes(),
            unique_macros_per_target: params.num_unique_macros_per_target(),
            unique_includes_per_target: params.num_unique_includes_per_target(),
            deduplicated: stats.deduplicated_total(),
            per_target_copy: stats.per_target_copy_total(params.num_targets()),
            stats,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ProjectEmitter<'a> {
    params: &'a ParameterSet,
    parallel: bool,
}

impl<'a> ProjectEmitter<'a> {
    #[must_use]
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params, parallel: false }
    }

    /// Emit targets on the rayon pool. Output is identical to a sequential run.
    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Write the complete project below the output root.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Io` on the first directory or file that cannot
    /// be written. Files written before the failure are left in place.
    pub fn generate(&self) -> Result<GenerationSummary, ProjectGenError> {
        let params = self.params;
        let root = params.output_root();
        info!(
            root = %root.display(),
            targets = params.num_targets(),
            unique_targets = params.num_unique_targets(),
            parallel = self.parallel,
            "generating project"
        );
        fs::create_dir_all(root).map_err(|e| ProjectGenError::io(root, e))?;

        let common = CommonTables::build(params);
        let emitter = TargetEmitter::new(root, params, &common);
        let emitted: Vec<EmittedTarget> = if self.parallel {
            (0..params.num_targets())
                .into_par_iter()
                .map(|i| emitter.emit(i, params.is_unique_target(i)))
                .collect::<Result<_, ProjectGenError>>()?
        } else {
            (0..params.num_targets())
                .map(|i| emitter.emit(i, params.is_unique_target(i)))
                .collect::<Result<_, ProjectGenError>>()?
        };

        let mut stats = ProjectStats { common: common.stats(), ..ProjectStats::default() };
        let mut target_dirs = Vec::with_capacity(emitted.len());
        for t in emitted {
            stats.unique.merge(&t.stats);
            target_dirs.push(t.rel_dir);
        }

        let top = render_top_level(params, &common, &stats, &target_dirs);
        write_file(&root.join(CMAKE_LISTS), &top)?;
        info!(root = %root.display(), targets = target_dirs.len(), "project generated");

        Ok(GenerationSummary {
            output_root: root.to_path_buf(),
            targets: params.num_targets(),
            unique_targets: params.num_unique_targets(),
            deduplicated: stats.deduplicated_total(),
            per_target_copy: stats.per_target_copy_total(params.num_targets()),
            target_dirs,
            stats,
        })
    }
}

/// Sequential generation with default options.
///
/// # Errors
/// See [`ProjectEmitter::generate`].
pub fn generate(params: &ParameterSet) -> Result<GenerationSummary, ProjectGenError> {
    ProjectEmitter::new(params).generate()
}

pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ProjectGenError> {
    fs::write(path, contents).map_err(|e| ProjectGenError::io(path, e))?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote file");
    Ok(())
}

/// Top-level `CMakeLists.txt`.
#[must_use]
pub fn render_top_level(
    params: &ParameterSet,
    common: &CommonTables,
    stats: &ProjectStats,
    target_dirs: &[String],
) -> String {
    let n = params.num_targets();
    let u = params.num_unique_targets();
    let c_d = common.macros.len();
    let c_i = common.includes.len();
    let u_d = params.num_unique_macros_per_target();
    let u_i = params.num_unique_includes_per_target();
    let actual_percent = if n == 0 { 0 } else { u * 100 / n };

    let mut s = String::new();
    s.push_str("# Auto-generated project for IDE indexer performance testing.\n");
    let _ = write!(s, "# Generated with {}\n\n", env!("CARGO_PKG_NAME"));
    s.push_str("cmake_minimum_required(VERSION 2.8.12)\n");

    let _ = write!(s, "\n# This project has {} source files, each to compile with\n", thousands(n as u64));
    let _ = writeln!(s, "# - {c_d} common preprocessor symbols (-D compiler option) and");
    let _ = writeln!(s, "# - {c_i} common include paths (-I compiler option)");
    s.push_str("# on each compiler command line.\n");
    let _ = writeln!(s, "#\n# {u} ({actual_percent} percent) of the source files compile with");
    let _ = writeln!(s, "# - {u_d} additional unique preprocessor symbols (-D compiler option) and");
    let _ = writeln!(s, "# - {u_i} additional unique include paths (-I compiler option).");

    let _ = write!(s, "\nproject(\"HUGE-{n}/{c_d}cD-{c_i}cI-{u_d}uD-{u_i}uI\")\n");

    let _ = write!(s, "\n# macros passed to each source file (-D compiler option) -> {c_d}cD\n");
    for (name, value) in &common.macros {
        let _ = writeln!(s, "add_definitions(-D{name}={value})");
    }

    let _ = write!(s, "\n# include paths passed to each source file (-I compiler option) -> {c_i}cI\n");
    for incl in &common.includes {
        let system = if incl.system { "SYSTEM " } else { "" };
        let _ = writeln!(s, "include_directories({system}{})", incl.path);
    }

    s.push('\n');
    s.push_str(&stats.render_report(n));

    s.push('\n');
    for dir in target_dirs {
        let _ = writeln!(s, "add_subdirectory({dir})");
    }
    s
}
