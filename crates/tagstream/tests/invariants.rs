//! Universal stream properties, checked over an adversarial corpus.

use tagstream::{ParseEvent, parse, perf_fixtures};
use tagstream_test_support::{check_balanced, check_self_closing_pairs};

/// Inputs chosen to hit every recovery path at least once.
const CORPUS: &[&str] = &[
    "",
    "plain text only",
    "<",
    "<<<<",
    "< div>",
    "<div",
    "<div ",
    "<div att",
    "<div att=",
    "<div att='x",
    "<div att=\"x\">y",
    "</",
    "</>",
    "</div>",
    "</div >",
    "<!--",
    "<!-- never closed",
    "<!--a--><!--b-->",
    "<!---->",
    "<script>",
    "<script>x",
    "<script>x</script>",
    "<script>x</SCRIPT>",
    "<script>a</script>b<script>c",
    "<p><p><p>",
    "<ul><li>a<li>b<li>c</ul>",
    "<p>a<div>b</div>c",
    "<dl><dt><dd><dt></dl>",
    "<table><thead><tr><td>x<tbody><tr><td>y",
    "<select><optgroup><option>a<option>b<optgroup></select>",
    "<br><br/><hr>",
    "<x/><y/><z>",
    "<a href='1' href=\"2\" href=3>",
    "<b><i>x</b></i>",
    "<div><span><p></div>",
    "mixed <P>CASE</P> <BR>",
    "ruby <ruby><rb>a<rt>b<rp>(</rp></ruby>",
    "<em>unclosed <strong>nested <b>deep",
    "<!doctype html><html><body><p>x",
    "a & b &amp; c",
];

#[test]
fn every_open_is_closed_in_lifo_order() {
    for input in CORPUS {
        check_balanced(parse(input)).unwrap_or_else(|err| panic!("{input:?}: {err}"));
    }
}

#[test]
fn self_closing_opens_pair_with_their_close() {
    for input in CORPUS {
        check_self_closing_pairs(parse(input)).unwrap_or_else(|err| panic!("{input:?}: {err}"));
    }
}

#[test]
fn no_two_adjacent_text_events() {
    for input in CORPUS {
        let events: Vec<ParseEvent<'_>> = parse(input).collect();
        for pair in events.windows(2) {
            assert!(
                !(matches!(pair[0], ParseEvent::Text { .. })
                    && matches!(pair[1], ParseEvent::Text { .. })),
                "adjacent text events for {input:?}: {events:?}"
            );
        }
    }
}

#[test]
fn top_level_text_survives_verbatim() {
    // Outside tags and comments, input text reaches the output unchanged,
    // stray brackets included.
    for input in ["a < b > c", "1 << 2", "plain", "< ", "tail<"] {
        let text: String = parse(input)
            .filter_map(|event| match event {
                ParseEvent::Text { text } => Some(text.into_owned()),
                _ => None,
            })
            .collect();
        assert_eq!(&text, input);
    }
}

#[test]
fn generated_fixtures_hold_the_invariants_at_scale() {
    let inputs = [
        perf_fixtures::make_blocks(500),
        perf_fixtures::make_list(500),
        perf_fixtures::make_rawtext(16 * 1024),
    ];
    for input in &inputs {
        check_balanced(parse(input)).expect("balanced");
        check_self_closing_pairs(parse(input)).expect("paired");
    }
}

#[test]
fn event_count_is_linear_in_input_length() {
    let small = perf_fixtures::make_blocks(100);
    let large = perf_fixtures::make_blocks(1_000);
    let small_count = parse(&small).count();
    let large_count = parse(&large).count();
    assert_eq!(small_count * 10, large_count);
}
