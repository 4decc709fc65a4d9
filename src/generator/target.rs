//! Emission of one target: its stub C source and its `CMakeLists.txt` fragment.
use super::{write_file, CommonTables, CMAKE_LISTS};
use crate::errors::ProjectGenError;
use crate::naming::{self, IncludePath, MacroSet, Scope, TargetNames};
use crate::params::ParameterSet;
use crate::stats::EstimatedMemoryStats;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Names and per-target options of one target, computed without touching disk.
#[derive(Debug, Clone)]
pub struct TargetOptions {
    pub names: TargetNames,
    pub unique: bool,
    /// Empty unless `unique`.
    pub macros: MacroSet,
    /// Empty unless `unique`.
    pub includes: Vec<IncludePath>,
}

impl TargetOptions {
    #[must_use]
    pub fn for_index(params: &ParameterSet, index: usize, unique: bool) -> Self {
        let names = TargetNames::for_index(index);
        let (macros, includes) = if unique {
            let scope = Scope::Unique(&names.id);
            (
                naming::macro_set(scope, params.num_unique_macros_per_target()),
                naming::include_paths(scope, params.num_unique_includes_per_target()),
            )
        } else {
            (MacroSet::new(), Vec::new())
        };
        Self { names, unique, macros, includes }
    }

    /// Contribution of this target to the unique-scope tally.
    #[must_use]
    pub fn stats(&self) -> EstimatedMemoryStats {
        let mut st = EstimatedMemoryStats::default();
        if self.unique {
            st.add_macros(&self.macros);
            st.add_includes(&self.includes);
        }
        st
    }
}

/// What survives of a target once its files are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedTarget {
    pub rel_dir: String,
    pub stats: EstimatedMemoryStats,
}

/// Writes target directories below one project root.
#[derive(Debug, Clone, Copy)]
pub struct TargetEmitter<'a> {
    root: &'a Path,
    params: &'a ParameterSet,
    common: &'a CommonTables,
}

impl<'a> TargetEmitter<'a> {
    #[must_use]
    pub fn new(root: &'a Path, params: &'a ParameterSet, common: &'a CommonTables) -> Self {
        Self { root, params, common }
    }

    /// Create `src/src_<ID>/` with its source file and fragment.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Io` if the directory or either file cannot be written.
    pub fn emit(&self, index: usize, unique: bool) -> Result<EmittedTarget, ProjectGenError> {
        let opts = TargetOptions::for_index(self.params, index, unique);
        let dir = self.root.join(&opts.names.rel_dir);
        fs::create_dir_all(&dir).map_err(|e| ProjectGenError::io(&dir, e))?;

        let source = render_source(&opts.names.source_file, &self.common.macros, &opts.macros);
        write_file(&dir.join(&opts.names.source_file), &source)?;
        write_file(&dir.join(CMAKE_LISTS), &render_fragment(&opts))?;

        debug!(target_id = %opts.names.id, unique, "emitted target");
        Ok(EmittedTarget { rel_dir: opts.names.rel_dir.clone(), stats: opts.stats() })
    }
}

/// Stub translation unit with one existence check and one value check per macro.
#[must_use]
pub fn render_source(file_name: &str, common: &MacroSet, unique: &MacroSet) -> String {
    let mut s = String::new();
    let _ = write!(s, "/* {file_name} -- generated file */\n\n");
    s.push_str("#include <stdio.h>  // on built-in include path\n");
    s.push_str("#include <stdlib.h> // on built-in include path\n");
    s.push('\n');
    s.push_str("/* Conditionals to show whether your IDE detects preprocessor symbols... */");
    write_conditionals(&mut s, common);
    write_conditionals(&mut s, unique);
    s.push('\n');
    let _ = write!(
        s,
        "\nint main(int argc, char **argv) {{\n  puts(\"!!! {file_name} says hello.\");\n"
    );
    s.push_str("  return EXIT_SUCCESS;\n}\n");
    s
}

// `#else` lines carry no trailing whitespace, and both branches of the value
// check name `NAME=VALUE` so a reader can match them without the `#if` line.
fn write_conditionals(s: &mut String, macros: &MacroSet) {
    for (name, value) in macros {
        let _ = write!(s, "\n#if defined({name})\n\t// is macro '{name}' recognized by IDE?");
        let _ = write!(s, "\n#else\n\t// macro '{name}' is NOT recognized by IDE");
        let _ = write!(s, "\n#endif // {name}");
        let _ = write!(s, "\n#if {name}-0 == {value}\n\t// is macro value '{name}={value}' recognized by IDE?");
        let _ = write!(s, "\n#else\n\t// macro value '{name}={value}' is NOT recognized by IDE");
        let _ = write!(s, "\n#endif // {name} == {value}");
    }
    s.push('\n');
}

/// Per-target `CMakeLists.txt`; directives follow the collection order.
#[must_use]
pub fn render_fragment(opts: &TargetOptions) -> String {
    let exe = &opts.names.executable;
    let src = &opts.names.source_file;
    let mut s = String::new();
    let _ = writeln!(s, "add_executable({exe} {src})");
    if opts.unique {
        let _ = writeln!(s, "# non-common include paths to compile {src} (-I compiler option)");
        for incl in &opts.includes {
            let system = if incl.system { "SYSTEM " } else { "" };
            let _ = writeln!(s, "target_include_directories({exe} {system}PUBLIC {})", incl.path);
        }
        let _ = writeln!(s, "# non-common macros to compile {src} (-D compiler option)");
        for (name, value) in &opts.macros {
            let _ = writeln!(s, "target_compile_definitions({exe} PUBLIC -D{name}={value})");
        }
    }
    s
}
