//! Configuration for the generator, either built in code or read from a TOML
//! file.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Error;

/// Where the stream is written if nothing else is configured
pub const DEFAULT_OUTPUT_PATH: &str = "test_load.txt";
/// Number of `ADD RECT` commands written if nothing else is configured
pub const DEFAULT_RECORD_COUNT: u64 = 400_000;
/// Largest record count, every index has to fit in an `i64` coordinate
pub const MAX_RECORD_COUNT: u64 = i64::MAX as u64;
/// Width and height of every generated rectangle
pub const DEFAULT_SIDE: i64 = 10;
/// How many records are written between two progress log lines
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Everything the generator needs to know to produce a stream.
///
/// Every key may be left out of a config file, missing keys take the value
/// from [`GeneratorConfig::default`]. Unknown keys are rejected.
///
/// ```toml
/// output_path = "test_load.txt"
/// record_count = 400000
/// width = 10
/// height = 10
/// progress_interval = 100000
/// ```
#[derive(PartialEq, Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// The file the stream is written to, truncated if it already exists
    pub output_path: PathBuf,
    /// The number of `ADD RECT` commands before the `QUIT` sentinel
    pub record_count: u64,
    /// The width of every rectangle
    pub width: i64,
    /// The height of every rectangle
    pub height: i64,
    /// Records between two progress log lines, 0 turns progress logging off
    pub progress_interval: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            record_count: DEFAULT_RECORD_COUNT,
            width: DEFAULT_SIDE,
            height: DEFAULT_SIDE,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl GeneratorConfig {
    /// Reads a config from the TOML file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).map_err(|source| Error::ReadConfig {
                path: path.to_path_buf(),
                source,
            })?;
        let config: GeneratorConfig = toml::from_str(&contents).map_err(|source| {
            Error::ParseConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;
        log::debug!("loaded config from {}: {:?}", path.display(), config);
        config.validate()?;
        Ok(config)
    }

    /// Checks that every index of the stream can be written as a coordinate.
    pub fn validate(&self) -> Result<(), Error> {
        if self.record_count > MAX_RECORD_COUNT {
            return Err(Error::RecordCount {
                count: self.record_count,
                max: MAX_RECORD_COUNT,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn config_file(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_path, PathBuf::from("test_load.txt"));
        assert_eq!(config.record_count, 400_000);
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 10);
    }

    #[test]
    fn full_file() {
        let f = config_file(
            "output_path = \"out.txt\"\n\
             record_count = 3\n\
             width = 4\n\
             height = 5\n\
             progress_interval = 0\n",
        );
        let config = GeneratorConfig::from_file(f.path()).unwrap();
        assert_eq!(
            config,
            GeneratorConfig {
                output_path: PathBuf::from("out.txt"),
                record_count: 3,
                width: 4,
                height: 5,
                progress_interval: 0,
            }
        );
    }

    #[test]
    fn missing_keys_take_defaults() {
        let f = config_file("record_count = 12\n");
        let config = GeneratorConfig::from_file(f.path()).unwrap();
        assert_eq!(config.record_count, 12);
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.width, DEFAULT_SIDE);

        let empty = config_file("");
        assert_eq!(
            GeneratorConfig::from_file(empty.path()).unwrap(),
            GeneratorConfig::default()
        );
    }

    #[test]
    fn bad_files() {
        let unknown = config_file("colour = \"blue\"\n");
        match GeneratorConfig::from_file(unknown.path()) {
            Err(Error::ParseConfig { .. }) => (),
            other => panic!("expected a parse error, got {:?}", other),
        }

        // record counts can't be negative
        let negative = config_file("record_count = -1\n");
        match GeneratorConfig::from_file(negative.path()) {
            Err(Error::ParseConfig { .. }) => (),
            other => panic!("expected a parse error, got {:?}", other),
        }

        let too_many = config_file("record_count = 18446744073709551615\n");
        assert!(GeneratorConfig::from_file(too_many.path()).is_err());

        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        match GeneratorConfig::from_file(&missing) {
            Err(Error::ReadConfig { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected a read error, got {:?}", other),
        }
    }

    #[test]
    fn record_count_bound() {
        let largest = GeneratorConfig {
            record_count: MAX_RECORD_COUNT,
            ..GeneratorConfig::default()
        };
        assert!(largest.validate().is_ok());

        let over = GeneratorConfig {
            record_count: MAX_RECORD_COUNT + 1,
            ..GeneratorConfig::default()
        };
        match over.validate() {
            Err(Error::RecordCount { count, .. }) => assert_eq!(count, MAX_RECORD_COUNT + 1),
            other => panic!("expected a record count error, got {:?}", other),
        }
    }
}
