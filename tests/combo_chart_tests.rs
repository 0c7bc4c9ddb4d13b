use canvas_chart::api::ChartEngine;
use canvas_chart::chart::{ChartVariant, ComboChart, ComboData, ComboDataset, SeriesKind};
use canvas_chart::core::{Color, Viewport};
use canvas_chart::render::NullRenderer;
use serde_json::json;

fn sample_data() -> ComboData {
    ComboData {
        labels: vec!["Q1".into(), "Q2".into(), "Q3".into()],
        datasets: vec![
            ComboDataset::new("Revenue", SeriesKind::Bar, vec![1.0, 2.0, 3.0])
                .with_color(Color::rgb(90, 140, 220)),
            ComboDataset::new("Trend", SeriesKind::Line, vec![3.0, 2.0, 1.0])
                .with_color(Color::rgb(220, 150, 60)),
        ],
    }
}

fn engine_for(chart: ComboChart) -> ChartEngine<NullRenderer, ComboChart> {
    ChartEngine::new(NullRenderer::default(), chart, Viewport::new(400, 400)).expect("engine init")
}

#[test]
fn renders_bars_line_segments_baseline_and_axis_labels() {
    let mut engine = engine_for(ComboChart::new(sample_data()));
    engine.render_to_completion().expect("render");

    let renderer = engine.renderer();
    // One bar per slot; dots are off by default.
    assert_eq!(renderer.last_rect_count, 3);
    // Zero baseline plus two straight polyline segments.
    assert_eq!(renderer.last_line_count, 3);
    assert_eq!(renderer.last_text_count, 3);
}

#[test]
fn smoothing_subdivides_the_polyline() {
    let mut data = sample_data();
    data.datasets[1] = ComboDataset::new("Trend", SeriesKind::Line, vec![3.0, 2.0, 1.0]).smoothed();

    let mut engine = engine_for(ComboChart::new(data));
    engine.render_to_completion().expect("render");

    // Chaikin pass turns 3 vertices into a 6-point path of 5 segments.
    assert_eq!(engine.renderer().last_line_count, 1 + 5);
}

#[test]
fn dots_add_one_marker_square_per_line_vertex() {
    let chart = ComboChart::new(sample_data())
        .with_settings(&json!({ "line": { "dots": { "enabled": true } } }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");

    assert_eq!(engine.renderer().last_rect_count, 3 + 3);
}

#[test]
fn hovering_a_bar_reports_its_slot_in_the_tooltip() {
    let mut engine = engine_for(ComboChart::new(sample_data()));
    engine.render_to_completion().expect("render");

    // 400x400, offsets 30: plot x spans 30..370 in three slots of ~113px.
    // The third bar holds the maximum, so it fills the slot vertically.
    engine.pointer_move(300.0, 200.0);
    engine.render_to_completion().expect("render");

    let prepared = engine.variant().prepared();
    assert!(prepared[0].hovered);
    assert_eq!(prepared[0].hovered_slot, Some(2));
    assert!((prepared[0].state - 1.0).abs() < 1e-12);

    let content = engine.variant().tooltip_content().expect("tooltip");
    assert_eq!(content.title, "Revenue");
    assert_eq!(content.panels[0].texts, vec!["Q3: 3".to_owned()]);
}

#[test]
fn cursor_between_series_hovers_nothing() {
    let mut engine = engine_for(ComboChart::new(sample_data()));
    engine.render_to_completion().expect("render");

    // Above every bar top and away from any line vertex.
    engine.pointer_move(50.0, 40.0);
    engine.render_to_completion().expect("render");

    assert!(engine.variant().prepared().iter().all(|series| !series.hovered));
    assert_eq!(engine.renderer().last_rect_count, 3);
}

#[test]
fn disabled_hover_reports_no_slot() {
    let chart = ComboChart::new(sample_data())
        .with_settings(&json!({ "hover": { "enabled": false } }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");

    engine.pointer_move(300.0, 200.0);
    engine.render_to_completion().expect("render");

    let prepared = engine.variant().prepared();
    assert!(prepared.iter().all(|series| !series.hovered));
    assert!(prepared.iter().all(|series| series.hovered_slot.is_none()));
    assert!(engine.variant().tooltip_content().is_none());
}

#[test]
fn empty_label_axis_draws_nothing() {
    let data = ComboData {
        labels: Vec::new(),
        datasets: vec![ComboDataset::new("orphan", SeriesKind::Bar, vec![1.0])],
    };
    let mut engine = engine_for(ComboChart::new(data));
    engine.render_to_completion().expect("render");

    let renderer = engine.renderer();
    assert_eq!(renderer.last_rect_count, 0);
    assert_eq!(renderer.last_line_count, 0);
    assert_eq!(renderer.last_text_count, 0);
}

#[test]
fn axis_labels_can_be_disabled() {
    let chart = ComboChart::new(sample_data())
        .with_settings(&json!({ "labels": { "enabled": false } }))
        .expect("settings");
    let mut engine = engine_for(chart);
    engine.render_to_completion().expect("render");
    assert_eq!(engine.renderer().last_text_count, 0);
}
