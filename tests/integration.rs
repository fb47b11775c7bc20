//! Integration tests for gilt-weave.
//!
//! These exercise the public API from outside the crate: measurement,
//! framing, joins, placement and compositing working together.

use gilt_weave::ansi::segments;
use gilt_weave::{
    block_height, block_width, frame, has_escapes, join_horizontal, join_vertical, line_width,
    place, strip, Align, Block, BorderSides, BorderSpec, Canvas, Layer, LayoutError,
    PlaceOptions,
};
use pretty_assertions::assert_eq;

fn styled_samples() -> Vec<&'static str> {
    vec![
        "",
        "plain",
        "\x1b[1;31mbold red\x1b[0m",
        "multi\nline\x1b[4m\nunder\x1b[24m",
        "日本語 \x1b[7mrev\x1b[27m",
        "\x1b]8;;https://example.com\x07link\x1b]8;;\x07",
        "broken\x1b[38;2",
        "\u{9b}1mc1\x1b(B",
    ]
}

// ---------------------------------------------------------------------------
// Escape model and measurement
// ---------------------------------------------------------------------------

#[test]
fn strip_is_idempotent() {
    for s in styled_samples() {
        let once = strip(s).into_owned();
        assert_eq!(strip(&once), once);
        assert!(!has_escapes(&once));
    }
}

#[test]
fn strip_equals_concatenated_visible_segments() {
    for s in styled_samples() {
        let visible: String = segments(s)
            .filter(|seg| seg.is_visible())
            .map(|seg| seg.text)
            .collect();
        assert_eq!(strip(s), visible);
    }
}

#[test]
fn segments_reassemble_the_input() {
    for s in styled_samples() {
        let joined: String = segments(s).map(|seg| seg.text).collect();
        assert_eq!(joined, s);
    }
}

#[test]
fn width_of_styled_text_equals_width_of_stripped_text() {
    for s in styled_samples() {
        assert_eq!(block_width(s), block_width(&strip(s)));
    }
}

#[test]
fn measurement_of_mixed_scripts() {
    assert_eq!(line_width("a日b"), 4);
    assert_eq!(line_width("cafe\u{301}"), 4);
    assert_eq!(block_height("a\nb\nc"), 3);
    assert_eq!(Block::new("日本\nabc").width(), 4);
}

// ---------------------------------------------------------------------------
// Borders
// ---------------------------------------------------------------------------

#[test]
fn frame_adds_two_columns() {
    let specs = [
        BorderSpec::normal(),
        BorderSpec::rounded(),
        BorderSpec::thick(),
        BorderSpec::double(),
        BorderSpec::custom().with_left('[').with_right(']'),
    ];
    for spec in specs {
        for text in styled_samples() {
            let block = Block::new(text);
            assert_eq!(frame(&spec, &block).width(), block.width() + 2);
        }
    }
}

#[test]
fn side_rails_add_two_columns() {
    let rails = BorderSpec::normal().with_sides(BorderSides::VERTICAL);
    let block = Block::new("a\n日本\nbc");
    let framed = frame(&rails, &block);
    assert_eq!(framed.width(), block.width() + 2);
    assert_eq!(framed.height(), block.height());
}

#[test]
fn frame_of_empty_content() {
    let framed = frame(&BorderSpec::normal(), &Block::new(""));
    assert_eq!(framed.lines(), ["┌┐", "└┘"]);
}

#[test]
fn frame_after_padding_is_rectangular() {
    let body = join_vertical(
        Align::Left,
        &[Block::new("\x1b[32mok\x1b[0m"), Block::new("longer")],
    );
    let framed = frame(&BorderSpec::double(), &body);
    for line in framed.lines() {
        assert_eq!(line_width(line), framed.width());
    }
}

#[test]
fn frame_keeps_ragged_content_ragged() {
    let framed = frame(&BorderSpec::normal(), &Block::new("a\nabc"));
    assert_eq!(framed.lines(), ["┌───┐", "│a│", "│abc│", "└───┘"]);
    assert_eq!(framed.width(), 5);
}

#[test]
fn single_side_corner_takes_the_edge_glyph() {
    let spec = BorderSpec::normal().with_sides(BorderSides::all() - BorderSides::LEFT);
    let framed = frame(&spec, &Block::new("ab"));
    assert_eq!(framed.lines(), ["───┐", "ab│", "───┘"]);
}

// ---------------------------------------------------------------------------
// Joins and placement
// ---------------------------------------------------------------------------

#[test]
fn singleton_joins_are_identity() {
    for text in styled_samples() {
        let block = Block::new(text);
        assert_eq!(join_horizontal(0.3, &[block.clone()]), block);
        assert_eq!(join_vertical(Align::Right, &[block.clone()]), block);
    }
}

#[test]
fn vertical_join_left_aligned() {
    let joined = join_vertical(0.0, &[Block::new("A"), Block::new("BB")]);
    assert_eq!(joined.lines(), ["A ", "BB"]);
}

#[test]
fn vertical_join_of_equal_widths_adds_heights() {
    let parts = [Block::new("ab\ncd"), Block::new("ef"), Block::new("gh\nij\nkl")];
    let joined = join_vertical(Align::Center, &parts);
    let total: usize = parts.iter().map(Block::height).sum();
    assert_eq!(joined.height(), total);
}

#[test]
fn horizontal_join_rows_have_equal_width() {
    let joined = join_horizontal(
        Align::Middle,
        &[Block::new("a\nbb\nccc"), Block::new(" | "), Block::new("x")],
    );
    assert_eq!(joined.height(), 3);
    for line in joined.lines() {
        assert_eq!(line_width(line), 7);
    }
}

#[test]
fn place_centers_single_char() {
    let placed = place(10, 3, 0.5, 0.5, &Block::new("X"), &PlaceOptions::default()).unwrap();
    assert_eq!(placed.lines(), ["          ", "    X     ", "          "]);
}

#[test]
fn place_rejects_negative_size() {
    let err = place(-1, 1, Align::Left, Align::Top, &Block::new("X"), &PlaceOptions::default())
        .unwrap_err();
    assert_eq!(err, LayoutError::NegativeWidth(-1));
    assert_eq!(err.to_string(), "field width must not be negative, got -1");
}

#[test]
fn alignment_tokens_parse() {
    let h: Align = "center".parse().unwrap();
    let v: Align = "0.5".parse().unwrap();
    let named = place(6, 3, h, v, &Block::new("ab"), &PlaceOptions::default()).unwrap();
    let fractional = place(6, 3, 0.5, 0.5, &Block::new("ab"), &PlaceOptions::default()).unwrap();
    assert_eq!(named, fractional);
    assert!("diagonal".parse::<Align>().is_err());
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

#[test]
fn later_layer_overwrites_earlier() {
    let canvas = Canvas::new()
        .with_layer(Layer::new("AAAA"))
        .with_layer(Layer::new("BB").at(1, 0));
    assert_eq!(canvas.render(), "ABBA");
}

#[test]
fn canvas_size_is_derived_from_layers() {
    let canvas = Canvas::new()
        .with_layer(Layer::new("abc\nd").at(2, 1))
        .with_layer(Layer::new("e"));
    assert_eq!((canvas.size().width, canvas.size().height), (5, 3));
}

#[test]
fn floating_panel_over_document() {
    let document = Block::new("The quick brown fox\njumps over the lazy\ndog. The end.");
    let panel = frame(&BorderSpec::rounded(), &Block::new("Note"));
    let canvas = Canvas::new()
        .with_layer(Layer::new(document))
        .with_layer(Layer::new(panel).at(4, 0).with_id("note"));

    insta::assert_snapshot!(canvas.render(), @r"
    The ╭────╮brown fox
    jump│Note│ the lazy
    dog.╰────╯nd.
    ");
    assert_eq!(canvas.hit(5, 1).and_then(Layer::id), Some("note"));
    assert_eq!(canvas.hit(0, 1).and_then(Layer::id), None);
}

#[test]
fn styled_layers_stay_balanced() {
    let canvas = Canvas::new()
        .with_layer(Layer::new("\x1b[41m      \x1b[0m\n\x1b[41m      \x1b[0m"))
        .with_layer(Layer::new("\x1b[1mhi\x1b[0m").at(2, 1));
    let out = canvas.render();
    assert_eq!(strip(&out), "      \n  hi  ");
    for row in out.lines() {
        assert!(row.ends_with("\x1b[0m"), "row not reset: {row:?}");
    }
}

#[test]
fn composed_layout_pipeline() {
    let title = place(
        12,
        1,
        Align::Center,
        Align::Top,
        &Block::new("Menu"),
        &PlaceOptions::new().with_fill_char('─'),
    )
    .unwrap();
    let items = join_vertical(Align::Left, &[Block::new("Open"), Block::new("Save as…")]);
    let body = join_vertical(Align::Left, &[title, items]);
    let boxed = frame(&BorderSpec::normal().with_sides(BorderSides::VERTICAL), &body);

    insta::assert_snapshot!(boxed.to_string(), @r"
    │────Menu────│
    │Open        │
    │Save as…    │
    ");
}

#[test]
fn many_colours_on_one_line_render_compactly() {
    let line: String = (0..2000).map(|n| format!("\x1b[38;5;{}m#", n % 256)).collect();
    let out = Canvas::new().with_layer(Layer::new(line.as_str())).render();
    assert_eq!(line_width(&out), 2000);
    assert!(out.len() < 2 * line.len(), "{} bytes out", out.len());
}

// ---------------------------------------------------------------------------
// Thread safety
// ---------------------------------------------------------------------------

#[test]
fn public_types_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Block>();
    assert_send_sync::<BorderSpec>();
    assert_send_sync::<Layer>();
    assert_send_sync::<Canvas>();
    assert_send_sync::<PlaceOptions>();
    assert_send_sync::<Align>();
    assert_send_sync::<LayoutError>();
    assert_send_sync::<gilt_weave::ansi::SgrState>();
}
