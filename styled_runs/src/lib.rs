// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build attributed text by appending content and toggling styles, without computing offsets.
//!
//! Attributed text models apply attributes to ranges of a text buffer. Computing those ranges
//! by hand is error-prone once text is interpolated, localized, or contains characters that
//! span several code units. [`StyleRunBuilder`] instead keeps a cursor at the end of the
//! content: you [`set`](StyleRunBuilder::set) an attribute, append content, and
//! [`unset`](StyleRunBuilder::unset) it, and the builder records the ranges.
//!
//! - [`StyleRunBuilder`]: the accumulator.
//! - [`StyledRuns`]: the immutable result, content units plus [`StyleRange`]s.
//! - [`Attribute`]: the opaque attribute abstraction; any `(key, value)` tuple works.
//! - [`vocabulary`]: an optional ready-made attribute set.
//!
//! ## Units
//!
//! Positions count content units, not bytes. Appended text is split into extended grapheme
//! clusters by default (see [`Segmentation`]), so a range boundary never falls inside a
//! user-perceived character. An [`Attachment`] occupies exactly one unit.
//!
//! [`StyledRuns::byte_spans`] converts the recorded ranges into byte ranges of
//! [`StyledRuns::as_str`] for renderers that index UTF-8 text.
//!
//! ## Example
//!
//! ```
//! use styled_runs::StyleRunBuilder;
//!
//! let mut builder = StyleRunBuilder::new();
//! builder
//!     .append("AB")
//!     .set(("bold", true))
//!     .append("CD")
//!     .unset(&"bold")
//!     .append("E");
//! let runs = builder.finish();
//!
//! assert_eq!(runs.as_str(), "ABCDE");
//! assert_eq!(runs.ranges().len(), 1);
//! assert_eq!(runs.ranges()[0].range(), 2..4);
//! ```
//!
//! ## Example: Links and the bundled vocabulary
//!
//! ```
//! use styled_runs::StyleRunBuilder;
//! use styled_runs::vocabulary::{TextAttribute, TextAttributeKey};
//!
//! let mut builder = StyleRunBuilder::new();
//! builder
//!     .set(TextAttribute::FontSize(14.0))
//!     .append("See ")
//!     .link_with_text("https://example.invalid", "the docs")
//!     .append(" 👍🏽");
//! let runs = builder.build();
//!
//! let link = runs.ranges_for(&TextAttributeKey::Link).next().unwrap();
//! assert_eq!(link.range(), 4..12);
//! // The thumbs up with its skin tone modifier is a single unit.
//! assert_eq!(runs.len(), 14);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library for the color types.
//! - `libm`: Use floating point implementations from `libm` when `std` is disabled.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

pub mod vocabulary;

mod attribute;
mod builder;
mod error;
mod runs;
mod segment;
mod unit;


pub use crate::attribute::{Attribute, LinkAttribute, Style};
pub use crate::builder::StyleRunBuilder;
pub use crate::error::{Error, ErrorKind, Utf8Info};
pub use crate::runs::{StyleRange, StyledRuns};
pub use crate::segment::Segmentation;
pub use crate::unit::{Attachment, Unit, OBJECT_REPLACEMENT_CHARACTER};
