//! Chunker: splits a document into overlapping, bounded windows of text.
//!
//! Sizes are counted in characters (Unicode scalar values), never bytes, so a
//! window can't split a code point. A window that stops short of the end of the
//! text is pulled back to the last whitespace inside it, as long as that keeps
//! the window longer than the overlap; otherwise it is cut hard at `chunk_size`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_CHUNK_SIZE: usize = 1000;
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkerConfigError {
    #[error("chunk size must be greater than zero")]
    ZeroChunkSize,

    #[error("chunk overlap ({overlap}) must be smaller than chunk size ({size})")]
    OverlapTooLarge { size: usize, overlap: usize },
}

/// Validated chunking parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkerConfig {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl ChunkerConfig {
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self, ChunkerConfigError> {
        if chunk_size == 0 {
            return Err(ChunkerConfigError::ZeroChunkSize);
        }
        if chunk_overlap >= chunk_size {
            return Err(ChunkerConfigError::OverlapTooLarge {
                size: chunk_size,
                overlap: chunk_overlap,
            });
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
        })
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// A bounded contiguous slice of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextChunk {
    pub content: String,
    /// Character offset of the first character of `content` in the source text.
    pub source_offset: usize,
}

impl TextChunk {
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    pub fn new(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Splits `text` into ordered chunks. Empty text yields no chunks.
    pub fn split(&self, text: &str) -> Vec<TextChunk> {
        // Byte offset of every char boundary, plus the end of the text.
        let boundaries: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .chain(std::iter::once(text.len()))
            .collect();
        let total = boundaries.len() - 1;

        let size = self.config.chunk_size;
        let overlap = self.config.chunk_overlap;
        let mut chunks = Vec::new();
        let mut start = 0;

        while start < total {
            let mut end = (start + size).min(total);

            if end < total {
                if let Some(cut) = last_whitespace_cut(text, &boundaries, start + overlap + 1, end) {
                    end = cut;
                }
            }

            let chunk = TextChunk {
                content: text[boundaries[start]..boundaries[end]].to_string(),
                source_offset: start,
            };
            debug_assert!(chunk.char_len() <= size);
            chunks.push(chunk);

            if end == total {
                break;
            }
            // end > start + overlap, so the window always advances.
            start = end - overlap;
        }

        chunks
    }
}

/// Finds the latest char index in `(min_end, end]` that directly follows a
/// whitespace character, so the chunk can end on a word boundary.
fn last_whitespace_cut(text: &str, boundaries: &[usize], min_end: usize, end: usize) -> Option<usize> {
    (min_end..=end).rev().find(|&i| {
        text[boundaries[i - 1]..boundaries[i]]
            .chars()
            .next()
            .is_some_and(char::is_whitespace)
    })
}
