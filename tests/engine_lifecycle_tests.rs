use canvas_chart::api::ChartEngine;
use canvas_chart::chart::{RawDataPoint, SliceChart};
use canvas_chart::core::{Color, Viewport};
use canvas_chart::error::ChartError;
use canvas_chart::render::NullRenderer;
use serde_json::json;

fn pie_engine() -> ChartEngine<NullRenderer, SliceChart> {
    let data = vec![
        RawDataPoint::new(1.0, "A").with_color(Color::rgb(200, 40, 40)),
        RawDataPoint::new(3.0, "B").with_color(Color::rgb(40, 200, 40)),
    ];
    ChartEngine::new(
        NullRenderer::default(),
        SliceChart::pie(data),
        Viewport::new(400, 400),
    )
    .expect("engine init")
}

#[test]
fn construction_rejects_zero_sized_viewport() {
    let result = ChartEngine::new(
        NullRenderer::default(),
        SliceChart::pie(vec![RawDataPoint::new(1.0, "A")]),
        Viewport::new(0, 400),
    );
    assert!(matches!(
        result,
        Err(ChartError::InvalidViewport { width: 0, height: 400 })
    ));
}

#[test]
fn construction_schedules_the_initial_frame() {
    let engine = pie_engine();
    assert!(engine.has_pending_frame());
    assert_eq!(engine.renderer().frames_rendered, 0);
}

#[test]
fn entrance_animation_settles_in_sixty_frames() {
    let mut engine = pie_engine();
    let passes = engine.render_to_completion().expect("render");

    assert_eq!(passes, 60);
    assert!((engine.loading() - 1.0).abs() < 1e-12);
    assert!(!engine.has_pending_frame());
    assert_eq!(engine.renderer().frames_rendered, 60);
}

#[test]
fn event_burst_coalesces_into_one_frame() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");
    let settled_frames = engine.renderer().frames_rendered;

    // Resize and pointer-move inside one host tick share the pending slot.
    engine.resize(Viewport::new(500, 500)).expect("resize");
    engine.pointer_move(1.0, 1.0);
    assert!(engine.has_pending_frame());

    assert!(engine.fire_pending().expect("fire"));
    assert_eq!(engine.renderer().frames_rendered, settled_frames + 1);
    // Cursor misses every slice, so no hover transition keeps the loop alive.
    assert!(!engine.has_pending_frame());
}

#[test]
fn set_data_keeps_entrance_progress() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");

    engine.set_data(vec![RawDataPoint::new(5.0, "C")]);
    assert!((engine.loading() - 1.0).abs() < 1e-12);
    assert!(engine.fire_pending().expect("fire"));
    assert!((engine.loading() - 1.0).abs() < 1e-12);
    assert_eq!(engine.variant().prepared().len(), 1);
}

#[test]
fn rejected_settings_leave_state_untouched() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");

    let result = engine.set_settings(&json!({ "data": { "bogus": true } }));
    assert!(matches!(result, Err(ChartError::InvalidSettings(_))));
    // No frame was scheduled and the old tree stays in effect.
    assert!(!engine.has_pending_frame());
    assert!((engine.variant().settings().data.styles.width - 40.0).abs() < 1e-12);
}

#[test]
fn invalid_resize_is_rejected_and_keeps_viewport() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");

    assert!(engine.resize(Viewport::new(0, 0)).is_err());
    assert_eq!(engine.viewport(), Viewport::new(400, 400));
    assert!(!engine.has_pending_frame());
}

#[test]
fn cancel_pending_drops_the_scheduled_frame() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");

    engine.set_data(vec![RawDataPoint::new(1.0, "A")]);
    assert!(engine.has_pending_frame());
    engine.cancel_pending();
    assert!(!engine.has_pending_frame());
    assert!(!engine.fire_pending().expect("fire"));
}

#[test]
fn pointer_leave_clears_hover_and_tooltip() {
    let mut engine = pie_engine();
    engine.render_to_completion().expect("render");

    // Straight below center, halfway out: inside slice B's angular span.
    engine.pointer_move(200.0, 250.0);
    engine.render_to_completion().expect("render");
    assert!(engine.variant().prepared().iter().any(|item| item.hovered));
    assert!(engine.renderer().last_rect_count > 0, "tooltip chrome expected");

    engine.pointer_leave();
    engine.render_to_completion().expect("render");
    assert!(engine.variant().prepared().iter().all(|item| !item.hovered));
    assert!(
        engine
            .variant()
            .prepared()
            .iter()
            .all(|item| item.state.abs() < 1e-12)
    );
    assert_eq!(engine.renderer().last_rect_count, 0);
}
