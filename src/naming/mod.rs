//! Deterministic names for everything the generator writes.
//!
//! All functions here are pure functions of an index and a [`Scope`]; no
//! randomness is involved so repeated runs produce identical trees.
use serde::Serialize;
use std::collections::BTreeMap;

/// Macro name -> value, iterated in lexicographic name order.
pub type MacroSet = BTreeMap<String, String>;

const PROJECT_PREFIX: &str = "src";
const SYSTEM_PREFIX: &str = "/usr/local/com.example";

/// Where a generated option applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// Applied to every target.
    Common,
    /// Applied to one target only; carries that target's identifier.
    Unique(&'a str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludePath {
    pub path: String,
    /// Emit with the `SYSTEM` keyword.
    pub system: bool,
}

/// Zero-padded, fixed-width identifier so lexicographic and numeric order agree.
#[must_use]
pub fn target_identifier(index: usize) -> String {
    format!("{index:04}")
}

#[must_use]
pub fn macro_name(scope: Scope<'_>, index: usize) -> String {
    match scope {
        Scope::Common => format!("COMMON_MACRO_{}", index + 1),
        Scope::Unique(id) => format!("UNIQ_MACRO_{id}_{index}"),
    }
}

#[must_use]
pub fn macro_value(scope: Scope<'_>, index: usize) -> String {
    match scope {
        Scope::Common => format!("471{}", index + 1),
        Scope::Unique(id) => format!("{}{id}", index + 1),
    }
}

/// Path prefix alternates by parity; the `SYSTEM` flag uses its own modulus
/// per scope (odd indices for common paths, every index not divisible by
/// three for unique paths).
///
/// For common paths the flag therefore coincides with the system-style
/// prefix. Only unique paths vary the flag independently of the prefix.
#[must_use]
pub fn include_path(scope: Scope<'_>, index: usize) -> IncludePath {
    let prefix = if index % 2 == 0 { PROJECT_PREFIX } else { SYSTEM_PREFIX };
    match scope {
        Scope::Common => IncludePath {
            path: format!("{prefix}/include/common_{index}"),
            system: index % 2 != 0,
        },
        Scope::Unique(id) => IncludePath {
            path: format!("{prefix}/include/uniq{id}_{index}"),
            system: index % 3 != 0,
        },
    }
}

#[must_use]
pub fn macro_set(scope: Scope<'_>, count: usize) -> MacroSet {
    (0..count).map(|i| (macro_name(scope, i), macro_value(scope, i))).collect()
}

#[must_use]
pub fn include_paths(scope: Scope<'_>, count: usize) -> Vec<IncludePath> {
    (0..count).map(|i| include_path(scope, i)).collect()
}

/// Names derived from a target identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetNames {
    pub id: String,
    /// Executable / CMake target name.
    pub executable: String,
    pub source_file: String,
    /// Directory relative to the project root, always `/`-separated.
    pub rel_dir: String,
}

impl TargetNames {
    #[must_use]
    pub fn for_index(index: usize) -> Self {
        let id = target_identifier(index);
        let executable = format!("main_{id}");
        let source_file = format!("{executable}.c");
        let rel_dir = format!("src/src_{id}");
        Self { id, executable, source_file, rel_dir }
    }
}
