// Small helpers shared by the generator and the CLI

pub mod number {
    /// Format with `,` as thousands separator: `1234567` -> `1,234,567`.
    #[must_use]
    pub fn thousands(n: u64) -> String {
        let digits = n.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

pub mod table {
    // Numeric cells are right-aligned, everything else left-aligned
    fn is_numeric(cell: &str) -> bool {
        !cell.is_empty() && cell.chars().all(|c| c.is_ascii_digit() || c == ',')
    }

    fn sep(widths: &[usize]) -> String {
        let mut s = String::from("+");
        for w in widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s
    }

    fn line(cells: &[String], widths: &[usize]) -> String {
        let mut s = String::from("|");
        for (cell, &w) in cells.iter().zip(widths) {
            let pad = " ".repeat(w.saturating_sub(cell.len()));
            s.push(' ');
            if is_numeric(cell) {
                s.push_str(&pad);
                s.push_str(cell);
            } else {
                s.push_str(cell);
                s.push_str(&pad);
            }
            s.push_str(" |");
        }
        s
    }

    /// Render an ASCII table; short rows are padded with empty cells.
    #[must_use]
    pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
        let cols = headers.len();
        let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (c, w) in widths.iter_mut().enumerate() {
                *w = (*w).max(row.get(c).map_or(0, String::len));
            }
        }

        let mut out = String::new();
        out.push_str(&sep(&widths));
        out.push('\n');
        let header_cells: Vec<String> = headers.iter().map(|s| (*s).to_string()).collect();
        out.push_str(&line(&header_cells, &widths));
        out.push('\n');
        out.push_str(&sep(&widths));
        out.push('\n');
        for row in rows {
            let cells: Vec<String> = (0..cols).map(|i| row.get(i).cloned().unwrap_or_default()).collect();
            out.push_str(&line(&cells, &widths));
            out.push('\n');
        }
        out.push_str(&sep(&widths));
        out
    }
}

pub mod config {
    use crate::errors::ProjectGenError;
    use crate::params::ParameterSetBuilder;
    use serde::Deserialize;
    use std::fs;
    use std::path::{Path, PathBuf};

    /// Values of the `[project]` table; every key is optional.
    #[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct ProjectConfig {
        pub targets: Option<i64>,
        pub percent_unique: Option<i64>,
        pub common_macros: Option<i64>,
        pub common_includes: Option<i64>,
        pub unique_macros: Option<i64>,
        pub unique_includes: Option<i64>,
        pub output: Option<PathBuf>,
    }

    #[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
    #[serde(deny_unknown_fields)]
    pub struct Config {
        pub project: Option<ProjectConfig>,
    }

    impl Config {
        /// Seed a builder with the configured values; unset keys keep the defaults.
        #[must_use]
        pub fn apply(&self, mut builder: ParameterSetBuilder) -> ParameterSetBuilder {
            let Some(p) = self.project.as_ref() else { return builder };
            if let Some(v) = p.targets {
                builder = builder.targets(v);
            }
            if let Some(v) = p.percent_unique {
                builder = builder.percent_unique(v);
            }
            if let Some(v) = p.common_macros {
                builder = builder.common_macros(v);
            }
            if let Some(v) = p.common_includes {
                builder = builder.common_includes(v);
            }
            if let Some(v) = p.unique_macros {
                builder = builder.unique_macros_per_target(v);
            }
            if let Some(v) = p.unique_includes {
                builder = builder.unique_includes_per_target(v);
            }
            if let Some(v) = p.output.as_ref() {
                builder = builder.output_root(v.clone());
            }
            builder
        }
    }

    /// Load a TOML config file.
    ///
    /// # Errors
    /// Returns `ProjectGenError::Configuration` if the file cannot be read or parsed.
    pub fn load_config_at(path: &Path) -> Result<Config, ProjectGenError> {
        let data = fs::read_to_string(path).map_err(|e| {
            ProjectGenError::Configuration(format!("cannot read config {}: {e}", path.display()))
        })?;
        toml::from_str::<Config>(&data).map_err(|e| {
            ProjectGenError::Configuration(format!("invalid config {}: {e}", path.display()))
        })
    }
}

pub mod logging {
    use std::sync::OnceLock;
    use tracing_subscriber::{fmt, EnvFilter};

    /// Default directive for the given `-v` count; `quiet` wins over verbosity.
    #[must_use]
    pub fn level_directive(verbose: u8, quiet: bool) -> &'static str {
        if quiet {
            return "error";
        }
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Install the stderr subscriber once; `RUST_LOG` overrides the level.
    pub fn init(verbose: u8, quiet: bool) {
        static INITIALISED: OnceLock<()> = OnceLock::new();
        let _ = INITIALISED.get_or_init(|| {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose, quiet)));
            let subscriber = fmt::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .compact()
                .finish();
            let _ = tracing::subscriber::set_global_default(subscriber);
        });
    }
}
