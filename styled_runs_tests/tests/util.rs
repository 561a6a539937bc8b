// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the integration tests.

use std::collections::BTreeMap;

use styled_runs::{Attachment, Attribute, LinkAttribute, Segmentation, StyleRunBuilder};

/// Key used by [`TestAttr::link`].
pub(crate) const LINK_KEY: u8 = 200;

/// A key the scripts never set.
pub(crate) const UNUSED_KEY: u8 = 99;

/// A minimal attribute: a small integer key and value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TestAttr {
    pub(crate) key: u8,
    pub(crate) value: u8,
}

impl TestAttr {
    pub(crate) fn new(key: u8, value: u8) -> Self {
        Self { key, value }
    }
}

impl Attribute for TestAttr {
    type Key = u8;

    fn key(&self) -> u8 {
        self.key
    }
}

impl LinkAttribute for TestAttr {
    fn link(url: &str) -> Self {
        Self::new(LINK_KEY, u8::try_from(url.len()).unwrap_or(u8::MAX))
    }

    fn link_key() -> u8 {
        LINK_KEY
    }
}

/// One builder call.
#[derive(Clone, Debug)]
pub(crate) enum Op {
    Append(&'static str),
    Attachment,
    Set(u8, u8),
    Unset(u8),
    UnsetAll,
    Endl,
    Tab,
    Link(&'static str),
}

/// Replays `ops` on a fresh builder.
pub(crate) fn run_script(ops: &[Op]) -> StyleRunBuilder<TestAttr> {
    let mut builder = StyleRunBuilder::new();
    for op in ops {
        match *op {
            Op::Append(text) => builder.append(text),
            Op::Attachment => builder.append_attachment(Attachment::new(1, 8.0, 8.0)),
            Op::Set(key, value) => builder.set(TestAttr::new(key, value)),
            Op::Unset(key) => builder.unset(&key),
            Op::UnsetAll => builder.unset_all(),
            Op::Endl => builder.endl(),
            Op::Tab => builder.tab(),
            Op::Link(text) => builder.link_with_text("https://example.invalid", text),
        };
    }
    builder
}

/// A deliberately naive model of the builder.
///
/// Instead of tracking spans, it records the active value of every key for every unit, and
/// counts how many spans the builder is expected to close.
#[derive(Debug, Default)]
pub(crate) struct Model {
    active: BTreeMap<u8, u8>,
    /// The active attributes of each unit.
    pub(crate) units: Vec<BTreeMap<u8, u8>>,
    /// Number of spans closed, including empty ones.
    pub(crate) closed: usize,
}

impl Model {
    pub(crate) fn run(ops: &[Op]) -> Self {
        let mut model = Self::default();
        for op in ops {
            match *op {
                Op::Append(text) => model.push(Segmentation::Grapheme.count(text)),
                Op::Attachment | Op::Endl | Op::Tab => model.push(1),
                Op::Set(key, value) => model.set(key, value),
                Op::Unset(key) => model.unset(key),
                Op::UnsetAll => {
                    model.closed += model.active.len();
                    model.active.clear();
                }
                Op::Link(text) => {
                    model.set(LINK_KEY, TestAttr::link("https://example.invalid").value);
                    model.push(Segmentation::Grapheme.count(text));
                    model.unset(LINK_KEY);
                }
            }
        }
        model.closed += model.active.len();
        model
    }

    fn push(&mut self, units: usize) {
        for _ in 0..units {
            self.units.push(self.active.clone());
        }
    }

    fn set(&mut self, key: u8, value: u8) {
        if self.active.insert(key, value).is_some() {
            self.closed += 1;
        }
    }

    fn unset(&mut self, key: u8) {
        if self.active.remove(&key).is_some() {
            self.closed += 1;
        }
    }
}
