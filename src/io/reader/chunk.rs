//! Bounded-size line batching over (possibly gzipped) corpus files.
use std::{
    fs::File,
    io::{BufRead, BufReader, Lines, Read},
    path::Path,
};

use flate2::read::MultiGzDecoder;

use crate::error::Error;

/// Yields batches of at most `chunk_size` lines, the last batch possibly
/// smaller. The source is never loaded whole; an empty source yields zero
/// batches. Restarting means opening a fresh reader.
pub struct ChunkReader<B> {
    lines: Lines<B>,
    chunk_size: usize,
}

impl ChunkReader<Box<dyn BufRead + Send>> {
    /// Open a corpus file, decompressing on the fly when the path ends in
    /// `.gz` (the upstream corpus variants ship gzipped).
    pub fn open(src: &Path, chunk_size: usize) -> Result<Self, Error> {
        Ok(Self::new(open_source(src)?, chunk_size))
    }
}

impl<B> ChunkReader<B>
where
    B: BufRead,
{
    pub fn new(reader: B, chunk_size: usize) -> Self {
        Self {
            lines: reader.lines(),
            chunk_size,
        }
    }
}

impl<B> Iterator for ChunkReader<B>
where
    B: BufRead,
{
    type Item = Result<Vec<String>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.chunk_size.min(1024));
        for line in self.lines.by_ref() {
            match line {
                Ok(line) => batch.push(line),
                Err(e) => return Some(Err(Error::Io(e))),
            }
            if batch.len() == self.chunk_size {
                return Some(Ok(batch));
            }
        }

        // close the eventual partial last batch
        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }
}

fn open_source(src: &Path) -> Result<Box<dyn BufRead + Send>, Error> {
    let file = File::open(src)?;
    if src.extension().map_or(false, |ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Count the lines of a corpus file without keeping any of them.
///
/// Used for progress reporting and for the empty-corpus short-circuit; a
/// trailing line without `\n` counts as a line.
pub fn count_lines(src: &Path) -> Result<u64, Error> {
    let mut reader = open_source(src)?;
    let mut buf = [0u8; 64 * 1024];
    let mut lines = 0u64;
    let mut last = b'\n';

    loop {
        let read = reader.read(&mut buf)?;
        if read == 0 {
            break;
        }
        lines += buf[..read].iter().filter(|b| **b == b'\n').count() as u64;
        last = buf[read - 1];
    }

    if last != b'\n' {
        lines += 1;
    }
    Ok(lines)
}
