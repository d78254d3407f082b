//! Clause segmentation.
//!
//! Splits raw document text into ordered, non-overlapping candidate clause
//! spans. Paragraphs (blank-line separated) are the primary unit; paragraphs
//! longer than a configured limit fall back to sentence-group boundaries,
//! which also covers documents with no paragraph delimiters at all.

use std::collections::VecDeque;

use lazy_static::lazy_static;
use lease_types::{ClauseSpan, SegmentationError};
use regex::Regex;

use crate::config::SegmenterConfig;

lazy_static! {
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n[ \t]*\n").unwrap();
    // '।' (danda) terminates sentences in Kannada documents.
    static ref SENTENCE_BREAK: Regex = Regex::new(r"[.!?\u{0964}]+\s+").unwrap();
}

/// Pure segmenter over document text. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Segmenter {
    min_document_chars: usize,
    min_clause_chars: usize,
    max_paragraph_chars: usize,
}

impl Segmenter {
    pub fn new(config: &SegmenterConfig) -> Self {
        Self {
            min_document_chars: config.min_document_chars,
            min_clause_chars: config.min_clause_chars,
            max_paragraph_chars: config.max_paragraph_chars,
        }
    }

    /// Lazily iterate candidate clause spans. Validates the input up front;
    /// calling `segment` again on the same text restarts from the beginning.
    pub fn segment<'a>(&self, text: &'a str) -> Result<ClauseSpans<'a>, SegmentationError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SegmentationError::EmptyText);
        }
        let length = trimmed.chars().count();
        if length < self.min_document_chars {
            return Err(SegmentationError::TooShort {
                length,
                minimum: self.min_document_chars,
            });
        }
        Ok(ClauseSpans {
            text,
            cursor: 0,
            pending: VecDeque::new(),
            segmenter: self.clone(),
        })
    }

    /// Collect every span eagerly.
    pub fn segment_all(&self, text: &str) -> Result<Vec<ClauseSpan>, SegmentationError> {
        Ok(self.segment(text)?.collect())
    }
}

/// Lazy span iterator returned by [`Segmenter::segment`].
pub struct ClauseSpans<'a> {
    text: &'a str,
    cursor: usize,
    pending: VecDeque<ClauseSpan>,
    segmenter: Segmenter,
}

impl Iterator for ClauseSpans<'_> {
    type Item = ClauseSpan;

    fn next(&mut self) -> Option<ClauseSpan> {
        loop {
            if let Some(span) = self.pending.pop_front() {
                return Some(span);
            }
            if self.cursor >= self.text.len() {
                return None;
            }

            let rest = &self.text[self.cursor..];
            let (para_end, next_cursor) = match PARAGRAPH_BREAK.find(rest) {
                Some(m) => (m.start(), m.end()),
                None => (rest.len(), rest.len()),
            };
            let base = self.cursor;
            self.cursor = base + next_cursor;
            self.queue_paragraph(&rest[..para_end], base);
        }
    }
}

impl ClauseSpans<'_> {
    /// Queue one paragraph as a single span, or as sentence-group spans when
    /// the paragraph is over the length limit.
    fn queue_paragraph(&mut self, paragraph: &str, base: usize) {
        let lead = paragraph.len() - paragraph.trim_start().len();
        let trimmed = paragraph.trim();
        if trimmed.is_empty() {
            return;
        }
        let start = base + lead;

        if trimmed.chars().count() <= self.segmenter.max_paragraph_chars {
            self.queue_piece(trimmed, start);
            return;
        }

        let mut piece_start = 0usize;
        for m in SENTENCE_BREAK.find_iter(trimmed) {
            let punct_len = m.as_str().trim_end().len();
            let piece = &trimmed[piece_start..m.start() + punct_len];
            self.queue_piece_relative(piece, start, piece_start);
            piece_start = m.end();
        }
        if piece_start < trimmed.len() {
            self.queue_piece_relative(&trimmed[piece_start..], start, piece_start);
        }
    }

    fn queue_piece_relative(&mut self, piece: &str, start: usize, offset: usize) {
        let lead = piece.len() - piece.trim_start().len();
        self.queue_piece(piece.trim(), start + offset + lead);
    }

    fn queue_piece(&mut self, piece: &str, start: usize) {
        if piece.chars().count() >= self.segmenter.min_clause_chars {
            self.pending
                .push_back(ClauseSpan::new(start, start + piece.len()));
        }
    }
}
