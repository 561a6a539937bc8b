// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::Debug;

/// A style attribute: an identity plus an opaque value.
///
/// The builder never looks inside an attribute. It only compares keys, so that at most one
/// span per key is open at a time and setting a key again replaces the open value.
///
/// Tuples `(K, V)` implement this trait with the first element as the key, for callers that
/// don't need a dedicated vocabulary type.
pub trait Attribute: Clone + Debug {
    /// The identity of this attribute.
    type Key: Clone + Eq + Debug;

    /// Returns the identity this attribute value belongs to.
    fn key(&self) -> Self::Key;
}

/// An attribute vocabulary that can express hyperlinks.
///
/// Required by [`StyleRunBuilder::link`](crate::StyleRunBuilder::link).
pub trait LinkAttribute: Attribute {
    /// Create a link attribute pointing at `url`.
    fn link(url: &str) -> Self;

    /// The key shared by all link attributes.
    fn link_key() -> Self::Key;
}

impl<K: Clone + Eq + Debug, V: Clone + Debug> Attribute for (K, V) {
    type Key = K;

    fn key(&self) -> K {
        self.0.clone()
    }
}

/// A reusable set of attributes applied together.
///
/// Styles are immutable and cheap to clone, so they can be built once (for example as a
/// "heading" or "emphasis" style) and applied from many places with
/// [`StyleRunBuilder::set_style`](crate::StyleRunBuilder::set_style).
#[derive(Debug, Clone, PartialEq)]
pub struct Style<A> {
    attributes: Arc<[A]>,
}

impl<A: Attribute> Style<A> {
    /// Create a style from a list of attributes.
    ///
    /// If several attributes share a key, the last one wins when the style is applied.
    pub fn new(attributes: impl IntoIterator<Item = A>) -> Self {
        Self {
            attributes: attributes.into_iter().collect(),
        }
    }

    /// Returns a new style with `attribute` added after the existing ones.
    #[must_use]
    pub fn with(&self, attribute: A) -> Self {
        let mut attributes: Vec<A> = self.attributes.to_vec();
        attributes.push(attribute);
        Self {
            attributes: attributes.into(),
        }
    }

    /// The attributes of this style, in application order.
    pub fn attributes(&self) -> &[A] {
        &self.attributes
    }

    /// The keys of this style's attributes, in application order.
    pub fn keys(&self) -> impl Iterator<Item = A::Key> + '_ {
        self.attributes.iter().map(Attribute::key)
    }

    /// Returns `true` if the style has no attributes.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<A: Attribute> Default for Style<A> {
    fn default() -> Self {
        Self::new([])
    }
}

impl<A: Attribute> FromIterator<A> for Style<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        Self::new(iter)
    }
}
