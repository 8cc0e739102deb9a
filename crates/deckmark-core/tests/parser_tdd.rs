//! Behaviour tests for the deck parser
//!
//! Each test names the document shape it covers and the deck it must produce.

use deckmark_ast::{Layout, Region};
use deckmark_core::{parse, parse_with_config, write, ParseError, Parser, ParserConfig};

/// Headmatter, a title slide, a two-column slide and a closing slide
///
/// ```markdown
/// ---
/// theme: default
/// ---
///
/// # React Hooks
///
/// ---
/// layout: two-cols
/// ---
///
/// ## Class components
/// ::right::
/// ## Hooks
///
/// ---
///
/// # Thanks
/// ```
const LECTURE: &str = r#"---
theme: default
---

# React Hooks

---
layout: two-cols
---

## Class components
::right::
## Hooks

---

# Thanks
"#;

#[test]
fn test_parse_lecture_deck() {
    let deck = parse(LECTURE).expect("Parser should not error");

    assert_eq!(deck.slide_count(), 3);
    assert_eq!(deck.meta().theme(), Some("default"));

    let counts: Vec<usize> = deck.slides().map(|s| s.region_count()).collect();
    assert_eq!(counts, vec![1, 2, 1]);

    let title = deck.slide_at(0).unwrap();
    assert_eq!(title.layout(), &Layout::Default);
    assert_eq!(title.title(), Some("React Hooks"));
    assert_eq!(title.attribute("theme"), Some("default"));

    let columns = deck.slide_at(1).unwrap();
    assert_eq!(columns.layout(), &Layout::TwoCols);
    assert_eq!(
        columns.regions(),
        &[
            Region::new("default", "\n## Class components"),
            Region::new("right", "## Hooks\n"),
        ]
    );
    assert_eq!(columns.own_attributes().get("layout"), Some("two-cols"));

    let last = deck.slide_at(2).unwrap();
    assert_eq!(last.number(), 3);
    assert_eq!(last.title(), Some("Thanks"));
}

#[test]
fn test_narrative_preserves_order_without_metadata() {
    let deck = parse(LECTURE).unwrap();
    let narrative = deck.narrative("---");

    assert!(!narrative.contains("theme: default"));
    assert!(!narrative.contains("layout: two-cols"));

    let react = narrative.find("# React Hooks").unwrap();
    let class = narrative.find("## Class components").unwrap();
    let hooks = narrative.find("## Hooks").unwrap();
    let thanks = narrative.find("# Thanks").unwrap();
    assert!(react < class && class < hooks && hooks < thanks);
}

#[test]
fn test_narrative_matches_source_without_metadata() {
    let source = "# One\n---\n# Two\n---\n# Three";
    let deck = parse(source).unwrap();
    assert_eq!(deck.narrative("---"), source);
}

#[test]
fn test_separator_inside_fence_does_not_split() {
    let input = r#"# YAML in a slide

```yaml
---
title: not a slide break
---
```

---

# Next"#;

    let deck = parse(input).unwrap();
    assert_eq!(deck.slide_count(), 2);

    let first = deck.slide_at(0).unwrap();
    assert_eq!(first.code_blocks().len(), 1);
    assert_eq!(
        first.code_blocks()[0].content,
        "---\ntitle: not a slide break\n---"
    );
    assert_eq!(first.code_blocks()[0].lang.as_deref(), Some("yaml"));
    assert_eq!(first.code_blocks()[0].start_line, 3);
}

#[test]
fn test_region_marker_inside_fence_is_code() {
    let input = "# Markers\n\n```md\n::right::\n```\n";
    let deck = parse(input).unwrap();
    let slide = deck.slide_at(0).unwrap();
    assert_eq!(slide.region_count(), 1);
    assert!(slide.raw_content().contains("::right::"));
}

#[test]
fn test_tilde_fence_with_backticks_inside() {
    let input = "~~~md\n```js\n---\n```\n~~~\n---\n# B";
    let deck = parse(input).unwrap();
    assert_eq!(deck.slide_count(), 2);
    assert_eq!(deck.slide_at(0).unwrap().code_blocks()[0].content, "```js\n---\n```");
}

#[test]
fn test_code_block_verbatim_with_highlight_info() {
    let input = r#"## useEffect

```jsx {2-4}
useEffect(() => {
  fetch('/api/user')
    .then(r => r.json())
}, [])
```"#;

    let deck = parse(input).unwrap();
    let block = &deck.slide_at(0).unwrap().code_blocks()[0];
    assert_eq!(block.lang.as_deref(), Some("jsx"));
    assert_eq!(block.info.as_deref(), Some("{2-4}"));
    assert!(block.content.starts_with("useEffect(() => {"));
    assert!(block.content.ends_with("}, [])"));
}

#[test]
fn test_two_cols_without_marker_is_error() {
    let input = "# A\n---\nlayout: two-cols\n---\nonly one column\n";
    let err = parse(input).unwrap_err();

    match err {
        ParseError::RegionMismatch {
            slide,
            layout,
            expected,
            found,
        } => {
            assert_eq!(slide, 2);
            assert_eq!(layout, "two-cols");
            assert_eq!(expected, "right");
            assert_eq!(found, "");
        }
        other => panic!("expected RegionMismatch, got {other:?}"),
    }
}

#[test]
fn test_two_cols_with_two_markers_is_error() {
    let input = "---\nlayout: two-cols\n---\na\n::right::\nb\n::right::\nc";
    let err = parse(input).unwrap_err();
    assert_eq!(err.code(), "DECK005");
    assert_eq!(err.slide(), Some(1));
}

#[test]
fn test_marker_without_multi_column_layout_is_error() {
    let input = "# A\n---\n# B\n::right::\nstray";
    let err = parse(input).unwrap_err();

    match err {
        ParseError::InvalidRegionMarker {
            slide,
            line,
            marker,
        } => {
            assert_eq!(slide, 2);
            assert_eq!(line, 4);
            assert_eq!(marker, "right");
        }
        other => panic!("expected InvalidRegionMarker, got {other:?}"),
    }
}

#[test]
fn test_two_cols_header_regions() {
    let input = "---\nlayout: two-cols-header\n---\n# Compare\n::left::\nold\n::right::\nnew";
    let deck = parse(input).unwrap();
    let slide = deck.slide_at(0).unwrap();

    let names: Vec<&str> = slide.regions().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["default", "left", "right"]);
    assert_eq!(slide.region("left").unwrap().content, "old");
    assert_eq!(slide.region("right").unwrap().content, "new");
}

#[test]
fn test_two_cols_header_markers_out_of_order() {
    let input = "---\nlayout: two-cols-header\n---\n::right::\na\n::left::\nb";
    assert!(matches!(
        parse(input),
        Err(ParseError::RegionMismatch { .. })
    ));
}

#[test]
fn test_malformed_frontmatter_reports_slide() {
    let input = "# A\n---\nlayout: center\ntransition:slide-left\n---\n# B";
    let err = parse(input).unwrap_err();

    match err {
        ParseError::MalformedMetadata {
            slide,
            line,
            content,
        } => {
            assert_eq!(slide, 2);
            assert_eq!(line, 4);
            assert_eq!(content, "transition:slide-left");
        }
        other => panic!("expected MalformedMetadata, got {other:?}"),
    }
}

#[test]
fn test_malformed_headmatter_reports_slide_zero() {
    let err = parse("---\ntheme: default\ncolor scheme: dark\n---\n# A").unwrap_err();
    assert_eq!(err.code(), "DECK001");
    assert_eq!(err.slide(), Some(0));
    assert_eq!(err.line(), Some(3));
}

#[test]
fn test_unterminated_headmatter() {
    let err = parse("---\ntheme: default\n# A").unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnterminatedMetadata { slide: 0, line: 1 }
    ));
}

#[test]
fn test_unclosed_frontmatter_is_slide_content() {
    let deck = parse("# A\n---\nlayout: center\n# B").unwrap();
    assert_eq!(deck.slide_count(), 2);

    let second = deck.slide_at(1).unwrap();
    assert_eq!(second.layout(), &Layout::Default);
    assert!(second.frontmatter().is_none());
    assert_eq!(second.raw_content(), "layout: center\n# B");
}

#[test]
fn test_prose_with_colon_after_separator_is_content() {
    let input = "# A\n---\nExample: counting clicks\n\nuseState keeps it\n---\n# C";
    let deck = parse(input).unwrap();
    assert_eq!(deck.slide_count(), 3);

    let example = deck.slide_at(1).unwrap();
    assert!(example.own_attributes().is_empty());
    assert_eq!(
        example.raw_content(),
        "Example: counting clicks\n\nuseState keeps it"
    );
    assert_eq!(example.source_line(), Some(3));
    assert_eq!(deck.slide_at(2).unwrap().title(), Some("C"));
}

#[test]
fn test_prose_with_colon_on_last_slide_is_content() {
    let deck = parse("# A\n---\nNote: hooks run in order").unwrap();
    assert_eq!(deck.slide_count(), 2);
    assert_eq!(deck.slide_at(1).unwrap().raw_content(), "Note: hooks run in order");
}

#[test]
fn test_heading_after_leading_separator_is_kept() {
    let deck = parse("---\n# Welcome to Hooks\n---\n# Second").unwrap();
    assert_eq!(deck.slide_count(), 2);
    assert_eq!(deck.slide_at(0).unwrap().title(), Some("Welcome to Hooks"));
    assert_eq!(deck.slide_at(1).unwrap().title(), Some("Second"));
    assert!(deck.meta().attributes.is_empty());
}

#[test]
fn test_unterminated_fence_is_reported() {
    let input = "# A\n---\n# B\n\n```js\nconst x = 1\n---\nstill code";
    let err = parse(input).unwrap_err();
    assert!(matches!(
        err,
        ParseError::UnterminatedCodeFence { slide: 2, line: 5 }
    ));
}

#[test]
fn test_headmatter_only_is_empty_deck() {
    let deck = parse("---\ntheme: default\n---\n").unwrap();
    assert!(deck.is_empty());
    assert_eq!(deck.meta().theme(), Some("default"));
}

#[test]
fn test_headmatter_defaults_and_overrides() {
    let input = "---\nclass: text-center\nlayout: cover\n---\n# A\n---\nlayout: center\n---\n# B";
    let deck = parse(input).unwrap();

    let a = deck.slide_at(0).unwrap();
    assert_eq!(a.layout(), &Layout::Cover);

    let b = deck.slide_at(1).unwrap();
    assert_eq!(b.layout(), &Layout::Center);
    assert_eq!(b.attribute("class"), Some("text-center"));
}

#[test]
fn test_headmatter_not_inherited_when_disabled() {
    let config = ParserConfig {
        inherit_headmatter: false,
        ..Default::default()
    };
    let deck = parse_with_config("---\nlayout: cover\n---\n# A", &config).unwrap();
    assert_eq!(deck.slide_at(0).unwrap().layout(), &Layout::Default);
    assert_eq!(deck.meta().get_attribute("layout"), Some("cover"));
}

#[test]
fn test_unknown_layout_warns() {
    let input = "# A\n---\nlayout: image-right\n---\n# B";
    let output = Parser::new().parse_with_diagnostics(input).unwrap();

    let slide = output.deck.slide_at(1).unwrap();
    assert_eq!(slide.layout(), &Layout::Other("image-right".to_string()));
    assert_eq!(output.diagnostics.by_code("DECK102").count(), 1);
}

#[test]
fn test_unknown_layout_strict() {
    let input = "# A\n---\nlayout: image-right\n---\n# B";
    let err = parse_with_config(input, &ParserConfig::strict()).unwrap_err();
    assert!(matches!(err, ParseError::UnknownLayout { slide: 2, .. }));
}

#[test]
fn test_duplicate_key_warns() {
    let input = "---\ntheme: default\ntheme: seriph\n---\n# A";
    let output = Parser::new().parse_with_diagnostics(input).unwrap();
    assert_eq!(output.deck.meta().theme(), Some("seriph"));
    assert_eq!(output.diagnostics.by_code("DECK101").count(), 1);
}

#[test]
fn test_speaker_notes() {
    let input = "# useState\n\nState in function components\n\n<!--\nMention the rules of hooks.\n-->\n";
    let deck = parse(input).unwrap();
    assert_eq!(
        deck.slide_at(0).unwrap().notes(),
        Some("Mention the rules of hooks.")
    );
}

#[test]
fn test_custom_separator() {
    let config = ParserConfig::from_toml_str("separator = \"***\"").unwrap();
    let deck = parse_with_config("# A\n***\n# B\n---\nstill B", &config).unwrap();
    assert_eq!(deck.slide_count(), 2);
    assert!(deck.slide_at(1).unwrap().raw_content().contains("---"));
}

#[test]
fn test_parse_is_idempotent() {
    let first = parse(LECTURE).unwrap();
    let second = parse(LECTURE).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_write_then_parse_is_stable() {
    let deck = parse(LECTURE).unwrap();
    let written = write(&deck);
    assert_eq!(parse(&written).unwrap(), deck);
}

#[test]
fn test_write_keeps_comments_and_blank_lines_in_blocks() {
    let input = "---\ntheme: default\n# deck colours\n---\n# A\n---\nlayout: center\n\n# centred\n---\n# B";
    let deck = parse(input).unwrap();
    let lines: Vec<_> = deck.slides().map(|s| s.source_line()).collect();
    assert_eq!(lines, vec![Some(5), Some(11)]);

    let written = write(&deck);
    assert_eq!(written, format!("{input}\n"));
    assert_eq!(parse(&written).unwrap(), deck);
}

#[test]
fn test_write_then_parse_empty_headmatter() {
    let deck = parse("---\n---\n# A").unwrap();
    assert_eq!(parse(&write(&deck)).unwrap(), deck);
}

#[test]
fn test_write_then_parse_leading_separator() {
    let deck = parse("---\n# Welcome\n---\n# Second").unwrap();
    assert_eq!(write(&deck), "---\n# Welcome\n---\n# Second\n");
    assert_eq!(parse(&write(&deck)).unwrap(), deck);
}

#[test]
fn test_block_opening_with_comment_is_slide_content() {
    let input = "---\n# deck settings\ntheme: default\n---\n# A";
    let deck = parse(input).unwrap();
    assert_eq!(deck.slide_count(), 2);
    assert_eq!(deck.meta().theme(), None);
    assert_eq!(deck.slide_at(0).unwrap().title(), Some("deck settings"));
    assert_eq!(parse(&write(&deck)).unwrap(), deck);
}

#[test]
fn test_slide_count_matches_chunks() {
    let input = "# 1\n---\n# 2\n---\nlayout: center\n---\n# 3\n---\n# 4";
    let deck = parse(input).unwrap();
    assert_eq!(deck.slide_count(), 4);
    let numbers: Vec<usize> = deck.slides().map(|s| s.number()).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4]);
}

#[test]
fn test_deck_serializes_to_json() {
    let deck = parse(LECTURE).unwrap();
    let json = serde_json::to_string(&deck).unwrap();
    assert!(json.contains("two-cols"));
    let restored: deckmark_ast::Deck = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, deck);
}
