use approx::assert_relative_eq;
use canvas_chart::api::{TooltipContent, TooltipPanel, estimate_text_width, layout_tooltip};
use canvas_chart::core::{Color, CursorPoint, Viewport};

fn content(title: &str, texts: &[&str], footer: Option<&str>) -> TooltipContent {
    TooltipContent {
        title: title.to_owned(),
        panels: vec![TooltipPanel {
            color: Color::rgb(200, 60, 60),
            texts: texts.iter().map(|t| (*t).to_owned()).collect(),
            footer: footer.map(str::to_owned),
        }],
    }
}

#[test]
fn width_estimate_grows_with_text_length() {
    let short = estimate_text_width("ab", 12.0);
    let long = estimate_text_width("abcdef", 12.0);
    assert!(long > short);
    assert_eq!(estimate_text_width("", 12.0), 0.0);
}

#[test]
fn tooltip_sits_below_right_of_the_cursor_when_it_fits() {
    let viewport = Viewport::new(800, 600);
    let cursor = CursorPoint::new(100.0, 100.0);
    let layout = layout_tooltip(viewport, cursor, &content("Title", &["Value: 1"], None));

    assert_relative_eq!(layout.x, 114.0);
    assert_relative_eq!(layout.y, 114.0);
    assert!(layout.width >= 60.0);
    assert!(layout.height > 0.0);
}

#[test]
fn tooltip_clamps_inside_the_viewport_near_the_far_corner() {
    let viewport = Viewport::new(400, 300);
    let cursor = CursorPoint::new(395.0, 295.0);
    let layout = layout_tooltip(
        viewport,
        cursor,
        &content("Long tooltip title", &["Value: 123456"], Some("Total: 999")),
    );

    assert!(layout.x + layout.width <= viewport.width_px() + 1e-9);
    assert!(layout.y + layout.height <= viewport.height_px() + 1e-9);
    assert!(layout.x >= 0.0);
    assert!(layout.y >= 0.0);
}

#[test]
fn footer_adds_one_line_to_the_height() {
    let viewport = Viewport::new(800, 600);
    let cursor = CursorPoint::new(10.0, 10.0);

    let without = layout_tooltip(viewport, cursor, &content("T", &["a"], None));
    let with = layout_tooltip(viewport, cursor, &content("T", &["a"], Some("footer")));
    assert_relative_eq!(with.height - without.height, 18.0);
}

#[test]
fn minimum_width_applies_to_tiny_content() {
    let viewport = Viewport::new(800, 600);
    let cursor = CursorPoint::new(10.0, 10.0);
    let layout = layout_tooltip(viewport, cursor, &content("x", &[], None));
    assert_relative_eq!(layout.width, 60.0);
}
