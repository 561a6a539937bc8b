// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cursor based style application.

use alloc::string::String;
use alloc::vec::Vec;

use crate::segment::Segmenter;
use crate::unit::Content;
use crate::{
    Attachment, Attribute, Error, LinkAttribute, Segmentation, Style, StyleRange, StyledRuns,
};

#[derive(Debug, Clone)]
struct OpenSpan<A> {
    attribute: A,
    start: usize,
}

/// Builder for styled text that tracks offsets for you.
///
/// Content is appended at a cursor that always sits at the end of the buffer. Styling is
/// prospective: [`set`](Self::set) opens an attribute at the cursor, so it applies to content
/// appended afterwards, and [`unset`](Self::unset) closes it at the cursor. Closed spans are
/// recorded as [`StyleRange`]s in unit coordinates.
///
/// At most one span per attribute key is open at a time. Setting a key that is already open
/// closes the old span at the cursor and opens the new value there, so the two never overlap.
/// Unsetting a key that isn't open does nothing, and anything still open when the runs are
/// finished is closed at the end.
///
/// Closing a span always records a range, even if nothing was appended while it was open;
/// such ranges are empty (`start == end`).
///
/// Every mutator returns `&mut Self` so calls can be chained.
#[derive(Debug, Clone)]
#[must_use]
pub struct StyleRunBuilder<A: Attribute> {
    content: Content,
    /// Open spans, ordered by when their key was first opened.
    open: Vec<OpenSpan<A>>,
    finished: Vec<StyleRange<A>>,
    segmenter: Segmenter,
}

impl<A: Attribute> Default for StyleRunBuilder<A> {
    fn default() -> Self {
        Self {
            content: Content::default(),
            open: Vec::new(),
            finished: Vec::new(),
            segmenter: Segmenter::default(),
        }
    }
}

impl<A: Attribute> StyleRunBuilder<A> {
    /// Create an empty builder that splits text into grapheme clusters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty builder using the given segmentation for appended text.
    pub fn with_segmentation(segmentation: Segmentation) -> Self {
        Self {
            segmenter: Segmenter::new(segmentation),
            ..Self::default()
        }
    }

    /// The segmentation used for appended text.
    pub fn segmentation(&self) -> Segmentation {
        self.segmenter.segmentation()
    }

    /// Discard all content and spans, keeping allocations for reuse.
    pub fn clear(&mut self) -> &mut Self {
        self.content.clear();
        self.open.clear();
        self.finished.clear();
        self
    }

    /// The cursor position, which is the number of units appended so far.
    pub fn position(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if a span for `key` is currently open.
    pub fn is_open(&self, key: &A::Key) -> bool {
        self.find_open(key).is_some()
    }

    /// Iterate over the currently open attributes, in the order their keys were opened.
    pub fn open_attributes(&self) -> impl ExactSizeIterator<Item = &A> + '_ {
        self.open.iter().map(|span| &span.attribute)
    }

    /// Append text, one unit per segment.
    ///
    /// Appending empty text does nothing.
    pub fn append(&mut self, text: &str) -> &mut Self {
        self.content.push_text(text, &self.segmenter);
        self
    }

    /// Append an inline object. It occupies exactly one unit.
    pub fn append_attachment(&mut self, attachment: Attachment) -> &mut Self {
        self.content.push_attachment(attachment);
        self
    }

    /// Append raw bytes that must be valid UTF-8.
    ///
    /// On failure nothing is appended.
    pub fn append_utf8(&mut self, bytes: &[u8]) -> Result<&mut Self, Error> {
        let text =
            core::str::from_utf8(bytes).map_err(|err| Error::invalid_utf8(bytes.len(), err))?;
        Ok(self.append(text))
    }

    /// Append raw bytes, replacing each invalid UTF-8 sequence with U+FFFD.
    pub fn append_utf8_lossy(&mut self, bytes: &[u8]) -> &mut Self {
        let text = String::from_utf8_lossy(bytes);
        self.append(&text)
    }

    /// Append a line feed.
    pub fn endl(&mut self) -> &mut Self {
        self.append("\n")
    }

    /// Append a tab.
    pub fn tab(&mut self) -> &mut Self {
        self.append("\t")
    }

    /// Open `attribute` at the cursor.
    ///
    /// If a span with the same key is already open it is closed at the cursor first.
    pub fn set(&mut self, attribute: A) -> &mut Self {
        let start = self.position();
        let key = attribute.key();
        match self.find_open(&key) {
            Some(ix) => {
                let previous =
                    core::mem::replace(&mut self.open[ix], OpenSpan { attribute, start });
                tracing::debug!(
                    key = ?key,
                    start = previous.start,
                    end = start,
                    "replacing open span"
                );
                self.close(previous);
            }
            None => self.open.push(OpenSpan { attribute, start }),
        }
        self
    }

    /// Open each of `attributes` at the cursor, in order.
    pub fn set_all(&mut self, attributes: impl IntoIterator<Item = A>) -> &mut Self {
        for attribute in attributes {
            self.set(attribute);
        }
        self
    }

    /// Open every attribute of `style` at the cursor.
    pub fn set_style(&mut self, style: &Style<A>) -> &mut Self {
        self.set_all(style.attributes().iter().cloned())
    }

    /// Close the span for `key` at the cursor, if one is open.
    pub fn unset(&mut self, key: &A::Key) -> &mut Self {
        if let Some(ix) = self.find_open(key) {
            let span = self.open.remove(ix);
            self.close(span);
        }
        self
    }

    /// Close the spans for each of `keys` at the cursor, in order.
    pub fn unset_many<'k>(&mut self, keys: impl IntoIterator<Item = &'k A::Key>) -> &mut Self
    where
        A::Key: 'k,
    {
        for key in keys {
            self.unset(key);
        }
        self
    }

    /// Close the spans for every key of `style` at the cursor.
    pub fn unset_style(&mut self, style: &Style<A>) -> &mut Self {
        for key in style.keys() {
            self.unset(&key);
        }
        self
    }

    /// Close every open span at the cursor.
    pub fn unset_all(&mut self) -> &mut Self {
        let end = self.position();
        self.finished.extend(
            self.open
                .drain(..)
                .map(|span| StyleRange::new(span.attribute, span.start..end)),
        );
        self
    }

    /// Append `text` with `attributes` applied to exactly that text.
    ///
    /// The attributes are closed again afterwards, even ones that were already open.
    pub fn append_styled(
        &mut self,
        text: &str,
        attributes: impl IntoIterator<Item = A>,
    ) -> &mut Self {
        let mut keys = Vec::new();
        for attribute in attributes {
            keys.push(attribute.key());
            self.set(attribute);
        }
        self.append(text);
        self.unset_many(&keys)
    }

    /// Close every open span and return a snapshot of the content and all style ranges.
    ///
    /// Calling this again without further changes returns an equal result.
    pub fn finish(&mut self) -> StyledRuns<A> {
        self.unset_all();
        tracing::trace!(
            units = self.content.len(),
            ranges = self.finished.len(),
            "finished style runs"
        );
        StyledRuns::new(self.content.clone(), self.finished.clone())
    }

    /// Like [`finish`](Self::finish), but consumes the builder to avoid copying.
    pub fn build(mut self) -> StyledRuns<A> {
        self.unset_all();
        tracing::trace!(
            units = self.content.len(),
            ranges = self.finished.len(),
            "built style runs"
        );
        StyledRuns::new(self.content, self.finished)
    }

    fn find_open(&self, key: &A::Key) -> Option<usize> {
        self.open
            .iter()
            .position(|span| span.attribute.key() == *key)
    }

    fn close(&mut self, span: OpenSpan<A>) {
        let end = self.position();
        self.finished
            .push(StyleRange::new(span.attribute, span.start..end));
    }
}

impl<A: LinkAttribute> StyleRunBuilder<A> {
    /// Append `url` as its own link text.
    pub fn link(&mut self, url: &str) -> &mut Self {
        self.link_with_text(url, url)
    }

    /// Append `text` linked to `url`.
    ///
    /// The link covers exactly `text` and is closed afterwards.
    pub fn link_with_text(&mut self, url: &str, text: &str) -> &mut Self {
        self.set(A::link(url));
        self.append(text);
        self.unset(&A::link_key())
    }
}

impl<A: Attribute> core::fmt::Write for StyleRunBuilder<A> {
    /// Appends `s`, so `write!` can interpolate values.
    ///
    /// Each formatted piece is appended separately, so a grapheme cluster split across two
    /// pieces becomes two units.
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        self.append(s);
        Ok(())
    }
}
