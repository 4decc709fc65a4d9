//! Character and item tallies behind the estimated-memory report.
//!
//! The figures are informational only; nothing in the generated files
//! depends on them.
use crate::naming::{IncludePath, MacroSet};
use crate::utils::number::thousands;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EstimatedMemoryStats {
    pub macro_name_chars: u64,
    pub macro_value_chars: u64,
    pub include_path_chars: u64,
    pub macros: u64,
    pub include_paths: u64,
}

fn len64(s: &str) -> u64 {
    s.len() as u64
}

impl EstimatedMemoryStats {
    pub fn add_macros(&mut self, macros: &MacroSet) {
        for (name, value) in macros {
            self.macro_name_chars += len64(name);
            self.macro_value_chars += len64(value);
        }
        self.macros += macros.len() as u64;
    }

    pub fn add_includes(&mut self, includes: &[IncludePath]) {
        for incl in includes {
            self.include_path_chars += len64(&incl.path);
        }
        self.include_paths += includes.len() as u64;
    }

    /// Fold another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        self.macro_name_chars += other.macro_name_chars;
        self.macro_value_chars += other.macro_value_chars;
        self.include_path_chars += other.include_path_chars;
        self.macros += other.macros;
        self.include_paths += other.include_paths;
    }

    #[must_use]
    pub fn chars(&self) -> u64 {
        self.macro_name_chars + self.macro_value_chars + self.include_path_chars
    }

    /// Each macro counts as two strings (name and value).
    #[must_use]
    pub fn strings(&self) -> u64 {
        self.macros * 2 + self.include_paths
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryTotal {
    pub chars: u64,
    pub strings: u64,
}

/// Common-scope tally plus the tally accumulated over all unique targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProjectStats {
    pub common: EstimatedMemoryStats,
    pub unique: EstimatedMemoryStats,
}

impl ProjectStats {
    /// Duplicate strings shared between targets are stored once.
    #[must_use]
    pub fn deduplicated_total(&self) -> MemoryTotal {
        MemoryTotal {
            chars: self.common.chars() + self.unique.chars(),
            strings: self.common.strings() + self.unique.strings(),
        }
    }

    /// Every target keeps its own copy of the common strings.
    #[must_use]
    pub fn per_target_copy_total(&self, num_targets: usize) -> MemoryTotal {
        let n = num_targets as u64;
        let c = &self.common;
        MemoryTotal {
            chars: (c.macro_name_chars + c.macro_value_chars) * n
                + c.include_path_chars * n
                + self.unique.chars(),
            strings: c.macros * 2 * n + c.include_paths * n + self.unique.strings(),
        }
    }

    /// Render the report as a block of CMake comment lines.
    #[must_use]
    pub fn render_report(&self, num_targets: usize) -> String {
        const RULE: &str =
            "# ---------------------------------------------------------------------------";
        let mut s = String::new();
        s.push_str(RULE);
        s.push('\n');
        s.push_str("# Estimated minimum memory consumption\n");
        s.push_str("#\n");
        s.push_str("# After extracting the include paths and preprocessor symbols\n");
        s.push_str("# from the compile_commands.json file and elimination of duplicate strings,\n");
        s.push_str("# at minimum the following memory is required:\n");
        s.push_str("#\n");
        write_scope(&mut s, &self.common, "common");
        s.push_str("#\n");
        write_scope(&mut s, &self.unique, "unique");
        s.push_str("#\n");
        let dedup = self.deduplicated_total();
        let _ = write!(
            s,
            "# Total with elimination of duplicate strings:\n#\t{} characters in {} string objects.\n",
            thousands(dedup.chars),
            thousands(dedup.strings)
        );
        s.push_str("#\n");
        let copies = self.per_target_copy_total(num_targets);
        let _ = write!(
            s,
            "# Total when keeping duplicate strings:\n#\t{} characters in {} string objects.\n",
            thousands(copies.chars),
            thousands(copies.strings)
        );
        s.push_str(RULE);
        s.push('\n');
        s
    }
}

fn write_scope(s: &mut String, st: &EstimatedMemoryStats, label: &str) {
    let _ = writeln!(
        s,
        "#\t{} characters for names of {} {label} macros",
        thousands(st.macro_name_chars),
        thousands(st.macros)
    );
    let _ = writeln!(
        s,
        "#\t{} characters for values of {} {label} macros",
        thousands(st.macro_value_chars),
        thousands(st.macros)
    );
    let _ = writeln!(
        s,
        "#\t{} characters for {} {label} include paths",
        thousands(st.include_path_chars),
        thousands(st.include_paths)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::{include_paths, macro_set, Scope};

    #[test]
    fn counts_characters_and_items() {
        let mut st = EstimatedMemoryStats::default();
        st.add_macros(&macro_set(Scope::Common, 2));
        st.add_includes(&include_paths(Scope::Common, 1));
        // COMMON_MACRO_1 / COMMON_MACRO_2, 4711 / 4712, src/include/common_0
        assert_eq!(st.macro_name_chars, 28);
        assert_eq!(st.macro_value_chars, 8);
        assert_eq!(st.include_path_chars, 20);
        assert_eq!(st.macros, 2);
        assert_eq!(st.include_paths, 1);
        assert_eq!(st.strings(), 5);
    }

    #[test]
    fn merge_is_additive() {
        let mut a = EstimatedMemoryStats::default();
        a.add_macros(&macro_set(Scope::Unique("0000"), 3));
        let mut b = EstimatedMemoryStats::default();
        b.add_macros(&macro_set(Scope::Unique("0001"), 3));
        let mut merged = a;
        merged.merge(&b);
        assert_eq!(merged.macros, 6);
        assert_eq!(merged.macro_name_chars, a.macro_name_chars + b.macro_name_chars);
    }

    #[test]
    fn totals_differ_only_in_common_multiplier() {
        let stats = ProjectStats {
            common: EstimatedMemoryStats {
                macro_name_chars: 10,
                macro_value_chars: 4,
                include_path_chars: 6,
                macros: 1,
                include_paths: 1,
            },
            unique: EstimatedMemoryStats {
                macro_name_chars: 100,
                macro_value_chars: 0,
                include_path_chars: 0,
                macros: 5,
                include_paths: 0,
            },
        };
        assert_eq!(stats.deduplicated_total(), MemoryTotal { chars: 120, strings: 13 });
        assert_eq!(stats.per_target_copy_total(3), MemoryTotal { chars: 160, strings: 19 });

        let report = stats.render_report(3);
        assert!(report.contains("#\t10 characters for names of 1 common macros"));
        assert!(report.contains("#\t160 characters in 19 string objects."));
    }
}
