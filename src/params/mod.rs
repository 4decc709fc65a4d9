//! Validated generation parameters.
//!
//! A `ParameterSet` is built once through `ParameterSetBuilder` and never
//! mutated afterwards. Raw counts are accepted as signed integers so that
//! callers can pass user input straight through: negative counts collapse
//! to zero and the percentage is clamped into `0..=100`.
use crate::errors::ProjectGenError;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_TARGETS: i64 = 1000;
pub const DEFAULT_PERCENT_UNIQUE: i64 = 15;
pub const DEFAULT_COMMON_MACROS: i64 = 5;
pub const DEFAULT_COMMON_INCLUDES: i64 = 7;
pub const DEFAULT_UNIQUE_MACROS: i64 = 5;
pub const DEFAULT_UNIQUE_INCLUDES: i64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParameterSet {
    num_targets: usize,
    percent_unique: u8,
    num_common_macros: usize,
    num_common_includes: usize,
    num_unique_macros_per_target: usize,
    num_unique_includes_per_target: usize,
    output_root: PathBuf,
    num_unique_targets: usize,
}

impl ParameterSet {
    #[must_use]
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::default()
    }

    #[must_use]
    pub fn num_targets(&self) -> usize {
        self.num_targets
    }

    #[must_use]
    pub fn percent_unique(&self) -> u8 {
        self.percent_unique
    }

    #[must_use]
    pub fn num_common_macros(&self) -> usize {
        self.num_common_macros
    }

    #[must_use]
    pub fn num_common_includes(&self) -> usize {
        self.num_common_includes
    }

    #[must_use]
    pub fn num_unique_macros_per_target(&self) -> usize {
        self.num_unique_macros_per_target
    }

    #[must_use]
    pub fn num_unique_includes_per_target(&self) -> usize {
        self.num_unique_includes_per_target
    }

    #[must_use]
    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    /// Number of targets that receive unique options: the first
    /// `num_unique_targets` indices.
    #[must_use]
    pub fn num_unique_targets(&self) -> usize {
        self.num_unique_targets
    }

    #[must_use]
    pub fn is_unique_target(&self, index: usize) -> bool {
        index < self.num_unique_targets
    }
}

/// `round(targets * percent / 100)`, half away from zero, never above `targets`.
#[must_use]
pub fn unique_target_count(num_targets: usize, percent_unique: u8) -> usize {
    let percent = usize::from(percent_unique.min(100));
    // integer form of round-half-up; avoids f64 drift for huge target counts
    let scaled = num_targets.saturating_mul(percent);
    (scaled.saturating_add(50) / 100).min(num_targets)
}

#[derive(Debug, Clone)]
pub struct ParameterSetBuilder {
    num_targets: i64,
    percent_unique: i64,
    num_common_macros: i64,
    num_common_includes: i64,
    num_unique_macros_per_target: i64,
    num_unique_includes_per_target: i64,
    output_root: Option<PathBuf>,
}

impl Default for ParameterSetBuilder {
    fn default() -> Self {
        Self {
            num_targets: DEFAULT_TARGETS,
            percent_unique: DEFAULT_PERCENT_UNIQUE,
            num_common_macros: DEFAULT_COMMON_MACROS,
            num_common_includes: DEFAULT_COMMON_INCLUDES,
            num_unique_macros_per_target: DEFAULT_UNIQUE_MACROS,
            num_unique_includes_per_target: DEFAULT_UNIQUE_INCLUDES,
            output_root: None,
        }
    }
}

fn non_negative(v: i64) -> usize {
    usize::try_from(v.max(0)).unwrap_or(usize::MAX)
}

impl ParameterSetBuilder {
    #[must_use]
    pub fn targets(mut self, n: i64) -> Self {
        self.num_targets = n;
        self
    }

    #[must_use]
    pub fn percent_unique(mut self, p: i64) -> Self {
        self.percent_unique = p;
        self
    }

    #[must_use]
    pub fn common_macros(mut self, n: i64) -> Self {
        self.num_common_macros = n;
        self
    }

    #[must_use]
    pub fn common_includes(mut self, n: i64) -> Self {
        self.num_common_includes = n;
        self
    }

    #[must_use]
    pub fn unique_macros_per_target(mut self, n: i64) -> Self {
        self.num_unique_macros_per_target = n;
        self
    }

    #[must_use]
    pub fn unique_includes_per_target(mut self, n: i64) -> Self {
        self.num_unique_includes_per_target = n;
        self
    }

    #[must_use]
    pub fn output_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.output_root = Some(root.into());
        self
    }

    /// Clamp the raw values and derive the unique target count.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Configuration` if no output root was given
    /// or the given one is empty.
    pub fn build(self) -> Result<ParameterSet, ProjectGenError> {
        let output_root = match self.output_root {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => return Err(ProjectGenError::Configuration("Missing output directory".into())),
        };
        let num_targets = non_negative(self.num_targets);
        // 0..=100 after the clamp, the cast cannot truncate
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let percent_unique = self.percent_unique.clamp(0, 100) as u8;
        Ok(ParameterSet {
            num_targets,
            percent_unique,
            num_common_macros: non_negative(self.num_common_macros),
            num_common_includes: non_negative(self.num_common_includes),
            num_unique_macros_per_target: non_negative(self.num_unique_macros_per_target),
            num_unique_includes_per_target: non_negative(self.num_unique_includes_per_target),
            output_root,
            num_unique_targets: unique_target_count(num_targets, percent_unique),
        })
    }
}
