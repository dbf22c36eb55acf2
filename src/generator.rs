//! The generator builds the command stream and writes it out, one command
//! per line, ending with the `QUIT` sentinel.

use std::convert::TryFrom;
use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::command::{Command, Rect};
use crate::config::GeneratorConfig;
use crate::error::Error;

/// What was written by a successful run
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Summary {
    /// Number of `ADD RECT` lines, the sentinel is not counted
    pub records: u64,
    /// Total bytes written, newlines included
    pub bytes: u64,
}

/// Produces the diagonal rectangle stream described by a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Returns the command stream in the order it is written: one
    /// `AddRect` for every index in `0..record_count` with the index as id,
    /// x and y, then a single `Quit`.
    ///
    /// Indices are coordinates, so a `record_count` above
    /// [`MAX_RECORD_COUNT`](crate::config::MAX_RECORD_COUNT) is capped there.
    /// [`Generator::write_to`] refuses such configs instead.
    pub fn commands(&self) -> Commands {
        Commands {
            next: 0,
            count: i64::try_from(self.config.record_count).unwrap_or(i64::MAX),
            width: self.config.width,
            height: self.config.height,
            finished: false,
        }
    }

    /// Writes the whole stream to `sink` and flushes it.
    ///
    /// Errors are reported against the configured output path. Whatever was
    /// written before a failure stays in the sink.
    pub fn write_to<W: Write>(&self, sink: W) -> Result<Summary, Error> {
        self.config.validate()?;

        let interval = self.config.progress_interval;
        let mut sink = CountingWriter {
            inner: sink,
            bytes: 0,
        };
        let mut records = 0;

        for cmd in self.commands() {
            writeln!(sink, "{}", cmd).map_err(|source| self.write_error(source))?;

            if let Command::AddRect(_) = cmd {
                records += 1;
                if interval != 0 && records % interval == 0 {
                    log::debug!(
                        "wrote {} of {} records",
                        records,
                        self.config.record_count
                    );
                }
            }
        }

        sink.flush().map_err(|source| self.write_error(source))?;
        Ok(Summary {
            records,
            bytes: sink.bytes,
        })
    }

    /// Creates (or truncates) the configured output file and writes the
    /// stream into it. The file is flushed before returning and closed on
    /// every path out of this function.
    ///
    /// A process killed by a signal never reaches the flush, so up to one
    /// buffer of already generated lines can be missing from the file, along
    /// with the `QUIT` sentinel.
    pub fn generate(&self) -> Result<Summary, Error> {
        self.config.validate()?;

        let path = &self.config.output_path;
        log::info!(
            "writing {} records to {}",
            self.config.record_count,
            path.display()
        );

        let file = File::create(path).map_err(|source| Error::Create {
            path: path.clone(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        let summary = self.write_to(&mut writer)?;

        log::info!(
            "finished {}: {} records, {} bytes",
            path.display(),
            summary.records,
            summary.bytes
        );
        Ok(summary)
    }

    fn write_error(&self, source: io::Error) -> Error {
        Error::Write {
            path: self.config.output_path.clone(),
            source,
        }
    }
}

/// Shorthand for `Generator::new(config).generate()`.
pub fn generate(config: GeneratorConfig) -> Result<Summary, Error> {
    Generator::new(config).generate()
}

// Passes writes through, keeping a tally of the bytes accepted
struct CountingWriter<W> {
    inner: W,
    bytes: u64,
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Iterator over a generator's command stream, see [`Generator::commands`].
#[derive(Debug, Clone)]
pub struct Commands {
    next: i64,
    count: i64,
    width: i64,
    height: i64,
    finished: bool,
}

impl Iterator for Commands {
    type Item = Command;

    fn next(&mut self) -> Option<Command> {
        if self.next < self.count {
            let i = self.next;
            self.next += 1;
            Some(Command::AddRect(Rect {
                id: i,
                x: i,
                y: i,
                width: self.width,
                height: self.height,
            }))
        } else if !self.finished {
            self.finished = true;
            Some(Command::Quit)
        } else {
            None
        }
    }

    // exact unless the remaining length doesn't fit in a usize
    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.count - self.next)
            .ok()
            .and_then(|n| n.checked_add((!self.finished) as usize));
        match left {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
