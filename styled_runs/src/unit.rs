// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::segment::Segmenter;

/// The character an [`Attachment`] occupies in the flattened text.
pub const OBJECT_REPLACEMENT_CHARACTER: char = '\u{FFFC}';

/// An inline object, such as an image, embedded in the content.
///
/// An attachment occupies exactly one unit. Its payload is owned by the caller and identified
/// by `id`; renderers use the declared size to reserve space for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    /// User-specified identifier, used to find the payload this attachment stands for.
    pub id: u64,
    /// The intended display width.
    pub width: f32,
    /// The intended display height.
    pub height: f32,
}

impl Attachment {
    /// Create an attachment with the given identifier and display size.
    pub fn new(id: u64, width: f32, height: f32) -> Self {
        Self { id, width, height }
    }
}

/// A borrowed view of one content unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit<'a> {
    /// One grapheme cluster (or scalar value, depending on [`Segmentation`]).
    Text(&'a str),
    /// One embedded attachment.
    Attachment(&'a Attachment),
}

impl<'a> Unit<'a> {
    /// Returns the text of this unit, or `None` for attachments.
    pub fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Attachment(_) => None,
        }
    }

    /// Returns the attachment of this unit, or `None` for text.
    pub fn as_attachment(self) -> Option<&'a Attachment> {
        match self {
            Self::Text(_) => None,
            Self::Attachment(attachment) => Some(attachment),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct UnitSlot {
    bytes: Range<usize>,
    attachment: Option<usize>,
}

/// The unit buffer shared by the builder and its output.
///
/// Text is stored flattened, with attachments materialized as
/// [`OBJECT_REPLACEMENT_CHARACTER`], and a side table maps unit indices to byte ranges.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Content {
    text: String,
    units: Vec<UnitSlot>,
    attachments: Vec<Attachment>,
}

impl Content {
    pub(crate) fn clear(&mut self) {
        self.text.clear();
        self.units.clear();
        self.attachments.clear();
    }

    /// The number of units, which is also the cursor position.
    pub(crate) fn len(&self) -> usize {
        self.units.len()
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_text(self) -> String {
        self.text
    }

    /// Appends `text` as one unit per segment and returns the number of units added.
    pub(crate) fn push_text(&mut self, text: &str, segmenter: &Segmenter) -> usize {
        let base = self.text.len();
        let before = self.units.len();
        self.text.push_str(text);
        let units = &mut self.units;
        segmenter.for_each_unit(text, |range| {
            units.push(UnitSlot {
                bytes: base + range.start..base + range.end,
                attachment: None,
            });
        });
        self.units.len() - before
    }

    pub(crate) fn push_attachment(&mut self, attachment: Attachment) {
        let start = self.text.len();
        self.text.push(OBJECT_REPLACEMENT_CHARACTER);
        self.units.push(UnitSlot {
            bytes: start..self.text.len(),
            attachment: Some(self.attachments.len()),
        });
        self.attachments.push(attachment);
    }

    pub(crate) fn unit(&self, index: usize) -> Option<Unit<'_>> {
        let slot = self.units.get(index)?;
        Some(match slot.attachment {
            Some(attachment) => Unit::Attachment(&self.attachments[attachment]),
            None => Unit::Text(&self.text[slot.bytes.clone()]),
        })
    }

    pub(crate) fn attachments(&self) -> impl Iterator<Item = (usize, &Attachment)> + '_ {
        self.units
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| Some((index, &self.attachments[slot.attachment?])))
    }

    /// Byte offset of the boundary before unit `index`.
    ///
    /// `index == len()` maps to the end of the text.
    pub(crate) fn byte_offset(&self, index: usize) -> Option<usize> {
        match self.units.get(index) {
            Some(slot) => Some(slot.bytes.start),
            None if index == self.units.len() => Some(self.text.len()),
            None => None,
        }
    }

    /// Converts a unit range that is already known to be in bounds to bytes.
    pub(crate) fn byte_range_unchecked(&self, units: Range<usize>) -> Range<usize> {
        let start = self
            .byte_offset(units.start)
            .expect("style range start should be within the content");
        let end = self
            .byte_offset(units.end)
            .expect("style range end should be within the content");
        start..end
    }
}
