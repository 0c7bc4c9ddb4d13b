use canvas_chart::api::ChartEngine;
use canvas_chart::chart::{ChartVariant, RawDataPoint, SliceChart};
use canvas_chart::core::{ChartKind, Color, Viewport};
use canvas_chart::render::NullRenderer;
use serde_json::json;

fn sample_data() -> Vec<RawDataPoint> {
    vec![
        RawDataPoint::new(1.0, "Alpha").with_color(Color::rgb(200, 40, 40)),
        RawDataPoint::new(3.0, "Beta").with_color(Color::rgb(40, 200, 40)),
    ]
}

fn engine_for(chart: SliceChart) -> ChartEngine<NullRenderer, SliceChart> {
    ChartEngine::new(NullRenderer::default(), chart, Viewport::new(400, 400)).expect("engine init")
}

#[test]
fn pie_renders_one_arc_and_caption_per_slice() {
    let mut engine = engine_for(SliceChart::pie(sample_data()));
    engine.render_to_completion().expect("render");

    assert_eq!(engine.renderer().last_arc_count, 2);
    // Percent captions are on by default, the center label is not.
    assert_eq!(engine.renderer().last_text_count, 2);
    assert_eq!(engine.variant().kind(), ChartKind::Pie);
}

#[test]
fn volumed_mode_doubles_the_arc_count() {
    let chart = SliceChart::pie(sample_data())
        .with_settings(&json!({ "data": { "volumed": true } }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");

    assert_eq!(engine.renderer().last_arc_count, 4);
}

#[test]
fn slice_angles_are_contiguous_and_proportional() {
    let mut engine = engine_for(SliceChart::pie(sample_data()));
    engine.render_to_completion().expect("render");

    let prepared = engine.variant().prepared();
    assert!((prepared[0].percent - 25.0).abs() < 1e-9);
    assert!((prepared[1].percent - 75.0).abs() < 1e-9);
    assert!((prepared[0].end_angle - prepared[1].start_angle).abs() < 1e-12);

    let full_sweep = prepared[1].end_angle - prepared[0].start_angle;
    assert!((full_sweep - std::f64::consts::TAU).abs() < 1e-9);
}

#[test]
fn hover_eases_to_full_state_and_shows_tooltip() {
    let mut engine = engine_for(SliceChart::pie(sample_data()));
    engine.render_to_completion().expect("render");

    // Straight below center, inside the larger slice's sweep.
    engine.pointer_move(200.0, 250.0);
    engine.render_to_completion().expect("render");

    let prepared = engine.variant().prepared();
    assert!(!prepared[0].hovered);
    assert!(prepared[1].hovered);
    assert!((prepared[1].state - 1.0).abs() < 1e-12);

    // Tooltip chrome: background plus the color swatch.
    assert_eq!(engine.renderer().last_rect_count, 2);
    assert!(engine.renderer().last_text_count > 2);
}

#[test]
fn disabled_hover_keeps_state_flat_and_tooltip_hidden() {
    let chart = SliceChart::pie(sample_data())
        .with_settings(&json!({ "data": { "hover": { "enabled": false } } }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");

    engine.pointer_move(200.0, 250.0);
    engine.render_to_completion().expect("render");

    let prepared = engine.variant().prepared();
    assert!(prepared.iter().all(|item| !item.hovered));
    assert!(prepared.iter().all(|item| item.state.abs() < 1e-12));
    assert_eq!(engine.renderer().last_rect_count, 0);
}

#[test]
fn tooltip_reports_value_percent_and_total() {
    let mut engine = engine_for(SliceChart::pie(sample_data()));
    engine.render_to_completion().expect("render");
    engine.pointer_move(200.0, 250.0);
    engine.render_to_completion().expect("render");

    let content = engine.variant().tooltip_content().expect("tooltip");
    assert_eq!(content.title, "Beta");
    assert_eq!(content.panels.len(), 1);
    assert_eq!(content.panels[0].texts[0], "Value: 3");
    assert_eq!(content.panels[0].texts[1], "Percent: 75.00%");
    assert_eq!(content.panels[0].footer.as_deref(), Some("Total: 4"));
}

#[test]
fn donut_center_label_renders_when_configured() {
    let chart = SliceChart::donut(sample_data())
        .with_settings(&json!({
            "texts": { "center": { "enabled": true, "value": "Total" } }
        }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");

    assert_eq!(engine.variant().kind(), ChartKind::Donut);
    // Two percent captions plus the center label.
    assert_eq!(engine.renderer().last_text_count, 3);
}

#[test]
fn donut_hover_hits_the_ring_but_not_the_hole() {
    let mut engine = engine_for(SliceChart::donut(sample_data()));
    engine.render_to_completion().expect("render");

    // 400x400, offsets 30, ring width 40: side 300, ring spans 130..170
    // from the center at (200, 200).
    engine.pointer_move(200.0, 350.0);
    engine.render_to_completion().expect("render");
    assert!(engine.variant().prepared()[1].hovered);

    engine.pointer_move(200.0, 260.0);
    engine.render_to_completion().expect("render");
    assert!(engine.variant().prepared().iter().all(|item| !item.hovered));
}

#[test]
fn dataset_without_positive_values_renders_nothing() {
    let mut engine = engine_for(SliceChart::pie(vec![
        RawDataPoint::new(0.0, "A"),
        RawDataPoint::new(-2.0, "B"),
    ]));
    engine.render_to_completion().expect("render");

    assert!(engine.variant().prepared().is_empty());
    assert_eq!(engine.renderer().last_arc_count, 0);
    assert_eq!(engine.renderer().last_text_count, 0);
}
