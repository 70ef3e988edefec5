//! Stream command implementation
//!
//! Writes raw generator output to stdout for consumption by a statistical
//! test suite, e.g.
//!
//! ```text
//! prng stream 'xoshiro256**' 1024 123 | dieharder -g 200 -d 201
//! ```

use std::io::{self, ErrorKind, Write};

use tracing::{debug, info};

use crate::config::StreamConfig;
use crate::generator::GeneratorKind;
use crate::{CliError, Result};

/// Bytes per mebibyte.
pub const MEBIBYTE: u64 = 1024 * 1024;

/// How a stream ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamOutcome {
    /// Every requested byte was written.
    Complete(u64),
    /// The consumer closed the output after this many bytes.
    Closed(u64),
}

/// Run the stream command
pub fn run(name: &str, mebibytes: u64, config: &StreamConfig) -> Result<()> {
    let kind: GeneratorKind = name.parse()?;
    let bytes = mebibytes.checked_mul(MEBIBYTE).ok_or_else(|| {
        CliError::InvalidArgument(format!("{} MiB does not fit in a u64 byte count", mebibytes))
    })?;

    info!(rng = %kind, seed = config.seed, bytes, "Streaming random bytes");

    let stdout = io::stdout();
    match stream_to(kind, bytes, config, &mut stdout.lock())? {
        StreamOutcome::Complete(written) => info!(written, "Stream complete"),
        StreamOutcome::Closed(written) => info!(written, "Output closed by consumer"),
    }
    Ok(())
}

/// Streams `bytes` bytes from `kind` into `out`.
///
/// A consumer that stops reading early (broken pipe) ends the stream
/// without error, reported as [`StreamOutcome::Closed`] with the number of
/// bytes it accepted.
pub fn stream_to<W: Write>(
    kind: GeneratorKind,
    bytes: u64,
    config: &StreamConfig,
    out: &mut W,
) -> Result<StreamOutcome> {
    let mut out = CountingWriter { inner: out, count: 0 };
    match kind.write_bytes(config.seed, bytes, config.block_size, &mut out) {
        Ok(written) => Ok(StreamOutcome::Complete(written)),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            debug!(written = out.count, "Broken pipe on output");
            Ok(StreamOutcome::Closed(out.count))
        }
        Err(e) => Err(e.into()),
    }
}

/// Counts the bytes the wrapped writer accepts.
struct CountingWriter<'a, W> {
    inner: &'a mut W,
    count: u64,
}

impl<W: Write> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.count += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
