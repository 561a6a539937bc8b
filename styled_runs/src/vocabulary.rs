// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A ready-made attribute vocabulary.
//!
//! Nothing in the builder depends on these types; they exist so that common styling doesn't
//! need a custom [`Attribute`] implementation. Interpreting the values is up to the renderer.

use alloc::sync::Arc;

use peniko::Color;

use crate::{Attribute, LinkAttribute};

/// A common text attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum TextAttribute {
    /// Font family name.
    FontFamily(Arc<str>),
    /// Font size in points.
    FontSize(f32),
    /// Font weight, where 400 is normal and 700 is bold.
    FontWeight(f32),
    /// Italic or oblique style.
    Italic(bool),
    /// Text color.
    Foreground(Color),
    /// Background (highlight) color.
    Background(Color),
    /// Underline decoration.
    Underline(bool),
    /// Strikethrough decoration.
    Strikethrough(bool),
    /// Extra spacing between characters, in points.
    Kern(f32),
    /// Vertical offset from the baseline, in points.
    BaselineOffset(f32),
    /// Drop shadow.
    Shadow(Shadow),
    /// Paragraph layout.
    Paragraph(ParagraphStyle),
    /// Hyperlink target.
    Link(Arc<str>),
    /// Hover text.
    ToolTip(Arc<str>),
}

/// The identity of a [`TextAttribute`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextAttributeKey {
    /// [`TextAttribute::FontFamily`]
    FontFamily,
    /// [`TextAttribute::FontSize`]
    FontSize,
    /// [`TextAttribute::FontWeight`]
    FontWeight,
    /// [`TextAttribute::Italic`]
    Italic,
    /// [`TextAttribute::Foreground`]
    Foreground,
    /// [`TextAttribute::Background`]
    Background,
    /// [`TextAttribute::Underline`]
    Underline,
    /// [`TextAttribute::Strikethrough`]
    Strikethrough,
    /// [`TextAttribute::Kern`]
    Kern,
    /// [`TextAttribute::BaselineOffset`]
    BaselineOffset,
    /// [`TextAttribute::Shadow`]
    Shadow,
    /// [`TextAttribute::Paragraph`]
    Paragraph,
    /// [`TextAttribute::Link`]
    Link,
    /// [`TextAttribute::ToolTip`]
    ToolTip,
}

impl TextAttribute {
    /// Bold weight (700).
    pub const BOLD: Self = Self::FontWeight(700.0);

    /// Create a font family attribute.
    pub fn font_family(name: &str) -> Self {
        Self::FontFamily(Arc::from(name))
    }

    /// Create a tooltip attribute.
    pub fn tool_tip(text: &str) -> Self {
        Self::ToolTip(Arc::from(text))
    }
}

impl Attribute for TextAttribute {
    type Key = TextAttributeKey;

    fn key(&self) -> TextAttributeKey {
        match self {
            Self::FontFamily(_) => TextAttributeKey::FontFamily,
            Self::FontSize(_) => TextAttributeKey::FontSize,
            Self::FontWeight(_) => TextAttributeKey::FontWeight,
            Self::Italic(_) => TextAttributeKey::Italic,
            Self::Foreground(_) => TextAttributeKey::Foreground,
            Self::Background(_) => TextAttributeKey::Background,
            Self::Underline(_) => TextAttributeKey::Underline,
            Self::Strikethrough(_) => TextAttributeKey::Strikethrough,
            Self::Kern(_) => TextAttributeKey::Kern,
            Self::BaselineOffset(_) => TextAttributeKey::BaselineOffset,
            Self::Shadow(_) => TextAttributeKey::Shadow,
            Self::Paragraph(_) => TextAttributeKey::Paragraph,
            Self::Link(_) => TextAttributeKey::Link,
            Self::ToolTip(_) => TextAttributeKey::ToolTip,
        }
    }
}

impl LinkAttribute for TextAttribute {
    fn link(url: &str) -> Self {
        Self::Link(Arc::from(url))
    }

    fn link_key() -> TextAttributeKey {
        TextAttributeKey::Link
    }
}

/// A drop shadow behind text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Horizontal offset in points.
    pub offset_x: f32,
    /// Vertical offset in points.
    pub offset_y: f32,
    /// Blur radius in points. Zero means a hard shadow.
    pub blur_radius: f32,
    /// Shadow color.
    pub color: Color,
}

impl Default for Shadow {
    /// A hard shadow straight below the text, in black at one third opacity.
    fn default() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 1.0,
            blur_radius: 0.0,
            color: Color::from_rgba8(0, 0, 0, 85),
        }
    }
}

impl Shadow {
    /// Create the default shadow.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the offset.
    #[must_use]
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius.
    #[must_use]
    pub fn with_blur_radius(mut self, blur_radius: f32) -> Self {
        self.blur_radius = blur_radius;
        self
    }

    /// Set the color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
}

/// Horizontal alignment of lines in a paragraph.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Align to the start edge (left in left-to-right text).
    #[default]
    Start,
    /// Align to the end edge.
    End,
    /// Center lines.
    Center,
    /// Stretch lines to fill the width, except the last.
    Justify,
}

/// Paragraph-level layout settings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphStyle {
    /// Line alignment.
    pub alignment: Alignment,
    /// Extra space between lines, in points.
    pub line_spacing: f32,
    /// Extra space after the paragraph, in points.
    pub paragraph_spacing: f32,
    /// Indent of all lines but the first, in points.
    pub head_indent: f32,
    /// Indent of the first line, in points.
    pub first_line_head_indent: f32,
}

impl ParagraphStyle {
    /// Create the default paragraph style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the alignment.
    #[must_use]
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Set the line spacing.
    #[must_use]
    pub fn with_line_spacing(mut self, line_spacing: f32) -> Self {
        self.line_spacing = line_spacing;
        self
    }

    /// Set the paragraph spacing.
    #[must_use]
    pub fn with_paragraph_spacing(mut self, paragraph_spacing: f32) -> Self {
        self.paragraph_spacing = paragraph_spacing;
        self
    }

    /// Set the indent of lines after the first.
    #[must_use]
    pub fn with_head_indent(mut self, head_indent: f32) -> Self {
        self.head_indent = head_indent;
        self
    }

    /// Set the indent of the first line.
    #[must_use]
    pub fn with_first_line_head_indent(mut self, first_line_head_indent: f32) -> Self {
        self.first_line_head_indent = first_line_head_indent;
        self
    }
}
