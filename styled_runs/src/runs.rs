// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::unit::Content;
use crate::{Attachment, Attribute, Error, Unit};

/// A closed attribute interval over unit coordinates.
///
/// The range is half-open and may be empty: setting and unsetting an attribute without
/// appending anything in between still produces a record.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRange<A> {
    attribute: A,
    range: Range<usize>,
}

impl<A: Attribute> StyleRange<A> {
    pub(crate) fn new(attribute: A, range: Range<usize>) -> Self {
        debug_assert!(
            range.start <= range.end,
            "style range {range:?} ends before it starts"
        );
        Self { attribute, range }
    }

    /// The attribute applied over this range.
    pub fn attribute(&self) -> &A {
        &self.attribute
    }

    /// The identity of the attribute applied over this range.
    pub fn key(&self) -> A::Key {
        self.attribute.key()
    }

    /// The unit range the attribute applies to.
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    /// The first unit covered.
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// The unit after the last unit covered.
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The number of units covered.
    pub fn len(&self) -> usize {
        self.range.end - self.range.start
    }

    /// Returns `true` if the range covers no units.
    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }

    /// Returns `true` if unit `index` is covered.
    pub fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }

    /// Consume the record, returning the attribute and its range.
    pub fn into_parts(self) -> (A, Range<usize>) {
        (self.attribute, self.range)
    }
}

/// The finished product of a [`StyleRunBuilder`](crate::StyleRunBuilder).
///
/// Holds the content units and every style range recorded while building, in the order they
/// were closed. It owns its data and is not affected by further use of the builder.
///
/// Positions are unit indices. Renderers that work on UTF-8 text can use [`as_str`] together
/// with [`byte_range`] or [`byte_spans`]; attachments show up in the text as
/// [`OBJECT_REPLACEMENT_CHARACTER`](crate::OBJECT_REPLACEMENT_CHARACTER).
///
/// [`as_str`]: Self::as_str
/// [`byte_range`]: Self::byte_range
/// [`byte_spans`]: Self::byte_spans
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRuns<A> {
    content: Content,
    ranges: Vec<StyleRange<A>>,
}

impl<A: Attribute> StyledRuns<A> {
    pub(crate) fn new(content: Content, ranges: Vec<StyleRange<A>>) -> Self {
        Self { content, ranges }
    }

    /// Returns the number of content units.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if there is no content.
    pub fn is_empty(&self) -> bool {
        self.content.len() == 0
    }

    /// The flattened text, with attachments as object replacement characters.
    pub fn as_str(&self) -> &str {
        self.content.as_str()
    }

    /// Returns the unit at `index`, if any.
    pub fn unit(&self, index: usize) -> Option<Unit<'_>> {
        self.content.unit(index)
    }

    /// Iterate over all content units in order.
    pub fn units(&self) -> impl ExactSizeIterator<Item = Unit<'_>> + '_ {
        (0..self.content.len()).map(|index| {
            self.content
                .unit(index)
                .expect("unit indices below len are always present")
        })
    }

    /// Iterate over attachments together with their unit index.
    pub fn attachments(&self) -> impl Iterator<Item = (usize, &Attachment)> + '_ {
        self.content.attachments()
    }

    /// All style ranges, in the order they were closed.
    pub fn ranges(&self) -> &[StyleRange<A>] {
        &self.ranges
    }

    /// Iterate over the style ranges covering unit `index`.
    ///
    /// Empty ranges cover nothing and are never yielded.
    pub fn ranges_at(&self, index: usize) -> impl Iterator<Item = &StyleRange<A>> + '_ {
        self.ranges.iter().filter(move |range| range.contains(index))
    }

    /// Iterate over the attributes applied to unit `index`.
    pub fn attributes_at(&self, index: usize) -> impl Iterator<Item = &A> + '_ {
        self.ranges_at(index).map(StyleRange::attribute)
    }

    /// Iterate over the style ranges recorded for `key`, in the order they were closed.
    ///
    /// Ranges for the same key never overlap.
    pub fn ranges_for<'a>(
        &'a self,
        key: &'a A::Key,
    ) -> impl Iterator<Item = &'a StyleRange<A>> + 'a {
        self.ranges.iter().filter(move |range| range.key() == *key)
    }

    /// Returns the byte offset of the boundary before unit `index`.
    ///
    /// `index == len()` gives the length of the text.
    pub fn byte_offset(&self, index: usize) -> Option<usize> {
        self.content.byte_offset(index)
    }

    /// Convert a unit range into a byte range of [`as_str`](Self::as_str).
    pub fn byte_range(&self, units: Range<usize>) -> Result<Range<usize>, Error> {
        let len = self.content.len();
        if units.start > units.end {
            return Err(Error::invalid_range(units.start, units.end, len));
        }
        if units.end > len {
            return Err(Error::invalid_bounds(units.start, units.end, len));
        }
        Ok(self.content.byte_range_unchecked(units))
    }

    /// Iterate over all style ranges in byte coordinates of [`as_str`](Self::as_str).
    ///
    /// This is the shape attributed text models such as Parley's ranged builder consume.
    pub fn byte_spans(&self) -> impl ExactSizeIterator<Item = (Range<usize>, &A)> + '_ {
        self.ranges.iter().map(|range| {
            (
                self.content.byte_range_unchecked(range.range()),
                range.attribute(),
            )
        })
    }

    /// Consume the result, returning the flattened text and the style ranges.
    pub fn into_parts(self) -> (alloc::string::String, Vec<StyleRange<A>>) {
        (self.content.into_text(), self.ranges)
    }
}
