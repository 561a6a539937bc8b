// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting appended text into content units.

use core::ops::Range;

use icu_segmenter::{GraphemeClusterSegmenter, GraphemeClusterSegmenterBorrowed};

/// How appended text is split into content units.
///
/// Style ranges can only start and end between units, so the segmentation decides which
/// boundaries are addressable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Segmentation {
    /// Split on extended grapheme cluster boundaries (UAX #29).
    ///
    /// A family emoji, a flag or a letter followed by combining marks is a single unit.
    #[default]
    Grapheme,

    /// Split on Unicode scalar values.
    ///
    /// This still never splits a UTF-8 sequence, but may separate a base character from its
    /// combining marks.
    Char,
}

impl Segmentation {
    /// Returns the number of units `text` is split into.
    pub fn count(self, text: &str) -> usize {
        let mut count = 0;
        Segmenter::new(self).for_each_unit(text, |_| count += 1);
        count
    }
}

/// A [`Segmentation`] together with the segmenter data it needs.
///
/// Built once per builder and reused for every append.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Segmenter {
    segmentation: Segmentation,
    grapheme: GraphemeClusterSegmenterBorrowed<'static>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(Segmentation::default())
    }
}

impl Segmenter {
    pub(crate) fn new(segmentation: Segmentation) -> Self {
        Self {
            segmentation,
            grapheme: GraphemeClusterSegmenter::new(),
        }
    }

    pub(crate) fn segmentation(&self) -> Segmentation {
        self.segmentation
    }

    /// Calls `f` with the byte range of each unit of `text`, in order.
    ///
    /// Empty text produces no units.
    pub(crate) fn for_each_unit(&self, text: &str, mut f: impl FnMut(Range<usize>)) {
        if text.is_empty() {
            return;
        }
        match self.segmentation {
            Segmentation::Grapheme => {
                let mut breaks = self.grapheme.segment_str(text);
                // The segmenter always reports the start of the text first.
                let mut start = breaks.next().unwrap_or(0);
                for end in breaks {
                    if end > start {
                        f(start..end);
                        start = end;
                    }
                }
                debug_assert_eq!(start, text.len(), "segmenter must cover the whole text");
            }
            Segmentation::Char => {
                for (start, c) in text.char_indices() {
                    f(start..start + c.len_utf8());
                }
            }
        }
    }
}
