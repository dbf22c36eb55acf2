//! `loadgen` manufactures command streams for load testing a line oriented
//! drawing engine, one that reads commands such as `ADD RECT x y w h` from
//! its standard input until it sees `QUIT`.
//!
//! # Output format
//!
//! The generated stream is plain ASCII with one command per `\n` terminated
//! line. For a record count of `N` the stream has exactly `N + 1` lines:
//!
//! ```text
//! ADD RECT 0 0 10 10
//! ADD RECT 1 1 10 10
//! ...
//! ADD RECT N-1 N-1 10 10
//! QUIT
//! ```
//!
//! The loop index is used as the entity id and as both coordinates, so the
//! rectangles march down the diagonal of the canvas. Width and height are
//! the same for every rectangle. The stream is fully deterministic: two runs
//! with the same [`GeneratorConfig`] produce byte identical output.
//!
//! # Usage
//!
//! ```no_run
//! use loadgen::{generate, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     record_count: 1000,
//!     ..GeneratorConfig::default()
//! };
//! let summary = generate(config).unwrap();
//! assert_eq!(summary.records, 1000);
//! ```
//!
//! Any [`std::io::Write`] sink can stand in for the output file:
//!
//! ```
//! use loadgen::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig {
//!     record_count: 2,
//!     ..GeneratorConfig::default()
//! });
//! let mut out = Vec::new();
//! generator.write_to(&mut out).unwrap();
//! assert_eq!(out, b"ADD RECT 0 0 10 10\nADD RECT 1 1 10 10\nQUIT\n");
//! ```
//!
//! The `loadgen` binary wraps this crate with a command line and an optional
//! TOML config file, see [`GeneratorConfig`] for the recognized options.

pub mod command;
pub mod config;
pub mod error;
pub mod generator;

pub use command::{Command, Rect};
pub use config::GeneratorConfig;
pub use error::Error;
pub use generator::{generate, Generator, Summary};
