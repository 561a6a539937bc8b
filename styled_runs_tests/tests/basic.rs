// Copyright 2026 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests.

use styled_runs::vocabulary::{TextAttribute, TextAttributeKey};
use styled_runs::{StyleRunBuilder, Unit};

use crate::util::{run_script, Op, TestAttr};

fn unit_texts(builder: &mut StyleRunBuilder<TestAttr>) -> Vec<String> {
    builder
        .finish()
        .units()
        .map(|unit| match unit {
            Unit::Text(text) => text.to_owned(),
            Unit::Attachment(_) => "[attachment]".to_owned(),
        })
        .collect()
}

#[test]
fn basic_bold_in_the_middle() {
    let mut builder = run_script(&[
        Op::Append("AB"),
        Op::Set(1, 1),
        Op::Append("CD"),
        Op::Unset(1),
        Op::Append("E"),
    ]);
    assert_eq!(unit_texts(&mut builder), ["A", "B", "C", "D", "E"]);

    let runs = builder.finish();
    let ranges: Vec<_> = runs
        .ranges()
        .iter()
        .map(|range| (*range.attribute(), range.range()))
        .collect();
    assert_eq!(ranges, [(TestAttr::new(1, 1), 2..4)]);
}

#[test]
fn basic_tab_and_endl() {
    let mut builder = run_script(&[Op::Append("x"), Op::Tab, Op::Append("y"), Op::Endl]);
    assert_eq!(unit_texts(&mut builder), ["x", "\t", "y", "\n"]);
    assert!(builder.finish().ranges().is_empty());
}

#[test]
fn basic_override_splits_cleanly() {
    let runs = run_script(&[
        Op::Append("s"),
        Op::Set(3, 1),
        Op::Append("abc"),
        Op::Set(3, 2),
        Op::Append("de"),
    ])
    .build();
    let ranges: Vec<_> = runs
        .ranges_for(&3)
        .map(|range| (range.attribute().value, range.range()))
        .collect();
    assert_eq!(ranges, [(1, 1..4), (2, 4..6)]);
}

#[test]
fn basic_zero_length_range_is_kept() {
    let runs = run_script(&[Op::Append("a"), Op::Set(5, 5), Op::Unset(5), Op::Append("b")]).build();
    assert_eq!(runs.ranges().len(), 1);
    let range = &runs.ranges()[0];
    assert!(range.is_empty());
    assert_eq!(range.range(), 1..1);
    assert_eq!(runs.ranges_at(1).count(), 0);
}

#[test]
fn basic_attachment_between_styles() {
    let mut builder = run_script(&[
        Op::Set(1, 1),
        Op::Append("ab"),
        Op::Attachment,
        Op::Unset(1),
        Op::Append("c"),
    ]);
    assert_eq!(unit_texts(&mut builder), ["a", "b", "[attachment]", "c"]);
    let runs = builder.build();
    assert_eq!(runs.ranges()[0].range(), 0..3);
    let (bytes, _) = runs.byte_spans().next().unwrap();
    assert_eq!(&runs.as_str()[bytes], "ab\u{FFFC}");
}

#[test]
fn basic_emoji_is_one_unit() {
    let family = "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}";
    let mut builder = StyleRunBuilder::new();
    builder
        .append("hi ")
        .set(TextAttribute::Underline(true))
        .append(family)
        .unset(&TextAttributeKey::Underline)
        .append(" \u{1F1EF}\u{1F1F5}");
    let runs = builder.finish();

    assert_eq!(runs.len(), 6);
    assert_eq!(runs.unit(3), Some(Unit::Text(family)));
    let underline = runs.ranges_for(&TextAttributeKey::Underline).next().unwrap();
    assert_eq!(underline.range(), 3..4);
    assert_eq!(runs.byte_range(underline.range()), Ok(3..3 + family.len()));
}

#[test]
fn basic_link_scoping() {
    let runs = run_script(&[
        Op::Set(1, 1),
        Op::Link("click here"),
        Op::Append("more text"),
    ])
    .build();
    let link: Vec<_> = runs.ranges_for(&crate::util::LINK_KEY).collect();
    assert_eq!(link.len(), 1);
    assert_eq!(link[0].range(), 0..10);
    // The surrounding attribute is untouched by the link.
    let outer: Vec<_> = runs
        .ranges_for(&1)
        .map(|range| (range.start(), range.end()))
        .collect();
    assert_eq!(outer, [(0, 19)]);
}
