//! Tests for the batch processor module


// Test helper functions and fixtures
use crate::app::services::batch_processor::BatchProcessor;
use std::io::{self, Read};

/// Run a manifest held in memory, returning the processor and the diagnostics text
pub fn run_manifest(manifest: &str) -> (BatchProcessor, String) {
    let mut processor = BatchProcessor::new();
    let mut diagnostics: Vec<u8> = Vec::new();
    processor
        .process_reader(manifest.as_bytes(), "test-manifest", &mut diagnostics)
        .expect("in-memory manifest is always readable");

    (processor, String::from_utf8(diagnostics).unwrap())
}

/// Reader that yields its content and then fails
pub struct FailingReader {
    content: io::Cursor<Vec<u8>>,
}

impl FailingReader {
    pub fn after(content: &str) -> Self {
        Self {
            content: io::Cursor::new(content.as_bytes().to_vec()),
        }
    }
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let read = self.content.read(buf)?;
        if read == 0 {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "device went away"))
        } else {
            Ok(read)
        }
    }
}
