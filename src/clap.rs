use ::clap::Parser;
use loadgen::{Error, GeneratorConfig};
use std::path::{Path, PathBuf};

/// Writes a stream of `ADD RECT` commands ending in `QUIT`, ready to be piped
/// into a drawing engine's standard input.
///
/// Flags override values read from `--config`, which override the built in
/// defaults.
#[derive(Parser, Debug)]
#[command(name = "loadgen", version)]
pub(crate) struct ProgArgs {
    /// Where to write the stream, `-` for standard output
    /// [default: test_load.txt]
    #[arg(short = 'o', long = "output")]
    pub(crate) output: Option<PathBuf>,
    /// The number of `ADD RECT` commands to write before `QUIT`
    /// [default: 400000]
    #[arg(short = 'n', long = "count")]
    pub(crate) count: Option<u64>,
    /// The width of every rectangle [default: 10]
    #[arg(long = "width")]
    pub(crate) width: Option<i64>,
    /// The height of every rectangle [default: 10]
    #[arg(long = "height")]
    pub(crate) height: Option<i64>,
    /// A TOML file with any of `output_path`, `record_count`, `width`,
    /// `height` and `progress_interval`
    #[arg(short = 'c', long = "config")]
    pub(crate) config: Option<PathBuf>,
}

impl ProgArgs {
    /// Builds the generator config: the config file if one was given (or the
    /// defaults), with every flag that was passed on top.
    pub(crate) fn into_config(self) -> Result<GeneratorConfig, Error> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_file(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(output) = self.output {
            config.output_path = output;
        }
        if let Some(count) = self.count {
            config.record_count = count;
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        config.validate()?;
        Ok(config)
    }
}

/// True if the stream should go to standard output instead of a file
pub(crate) fn is_stdout(path: &Path) -> bool {
    path == Path::new("-")
}
