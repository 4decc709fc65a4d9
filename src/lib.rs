//! cmake-projectgen — synthetic CMake project generator
//!
//! Generate a CMake project with a configurable number of executables,
//! common and per-target preprocessor symbols and include paths, sized to
//! stress-test IDE indexers and build-system front ends.
//!
//! # Layout
//! ```text
//! CMakeLists.txt                  top-level project, lists every target
//! src/src_<ID>/CMakeLists.txt     one add_executable per target
//! src/src_<ID>/main_<ID>.c        stub source with preprocessor checks
//! ```
//!
//! # Quickstart (Library)
//! ```no_run
//! use cmake_projectgen::generator::ProjectEmitter;
//! use cmake_projectgen::params::ParameterSet;
//!
//! let params = ParameterSet::builder()
//!     .targets(100)
//!     .percent_unique(20)
//!     .output_root("/tmp/huge")
//!     .build()
//!     .expect("valid parameters");
//! let summary = ProjectEmitter::new(&params).generate().expect("generate project");
//! println!("targets: {} unique: {}", summary.targets, summary.unique_targets);
//! ```
//!
//! # Quickstart (CLI)
//! ```text
//! cmake-projectgen generate -n 1000 -p 15 --cD 5 --cI 7 --uD 5 --uI 3 -o /tmp/huge
//! cmake-projectgen plan -n 100000 -p 30 -o /tmp/huge --format json
//! ```
pub mod app;
pub mod cli;
pub mod errors;
pub mod generator;
pub mod naming;
pub mod params;
pub mod stats;
pub mod utils;
