//! End-to-end containment scenarios: boundary + bomb, sibling isolation,
//! custom fallbacks, and recovery by re-instantiation.

use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use faultline_render::frame::Frame;
use faultline_widgets::report::install_panic_capture_hook;
use faultline_widgets::{
    BombButton, FaultBoundary, Label, MemorySink, Widget, BOMB_PANIC_MESSAGE,
    DEFAULT_FALLBACK_TEXT,
};
use std::sync::Arc;

fn full(frame: &Frame) -> Rect {
    frame.area()
}

#[test]
fn bomb_scenario_mount_press_fallback() {
    install_panic_capture_hook();
    let sink = Arc::new(MemorySink::new());
    let bomb = Arc::new(BombButton::new());
    let boundary = FaultBoundary::new(bomb.clone()).with_sink(sink.clone());

    // Mount: button is visible, nothing reported.
    let mut frame = Frame::new(40, 3);
    boundary.render(full(&frame), &mut frame);
    assert!(frame.buffer.contains_text("\u{1F4A3}"));
    assert!(frame.has_role(Role::Button));
    assert!(sink.is_empty());

    // Press, then the next pass detonates.
    bomb.press();
    let mut frame = Frame::new(40, 3);
    boundary.render(full(&frame), &mut frame);

    // Fallback visible, trigger control gone, alert role exposed.
    assert!(frame.buffer.contains_text(DEFAULT_FALLBACK_TEXT));
    assert!(!frame.buffer.contains_text("\u{1F4A3}"));
    assert!(frame.has_role(Role::Alert));
    assert!(!frame.has_role(Role::Button));

    // Exactly one report, carrying the original payload and metadata.
    let reports = sink.reports();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].message, BOMB_PANIC_MESSAGE);
    assert_eq!(reports[0].static_payload, Some(BOMB_PANIC_MESSAGE));
    assert!(!reports[0].metadata.component_stack.is_empty());
    assert!(reports[0].metadata.component_stack.contains("at BombButton"));
    assert!(reports[0].metadata.timestamp_ms > 0);
}

#[test]
fn custom_fallback_scenario() {
    install_panic_capture_hook();
    let bomb = BombButton::new();
    bomb.press();
    let boundary = FaultBoundary::new(bomb).with_fallback_text("There was a problem");

    let mut frame = Frame::new(40, 3);
    boundary.render(full(&frame), &mut frame);

    assert!(frame.buffer.contains_text("There was a problem"));
    assert!(!frame.buffer.contains_text(DEFAULT_FALLBACK_TEXT));
}

#[test]
fn sibling_boundaries_are_independent() {
    install_panic_capture_hook();
    let first_sink = Arc::new(MemorySink::new());
    let second_sink = Arc::new(MemorySink::new());

    let first_bomb = BombButton::new();
    first_bomb.press();
    let first = FaultBoundary::new(first_bomb).with_sink(first_sink.clone());

    let second = FaultBoundary::new(BombButton::new()).with_sink(second_sink.clone());

    // Side-by-side: first pair in the top row, second pair below.
    let mut frame = Frame::new(40, 4);
    first.render(Rect::new(0, 0, 40, 2), &mut frame);
    second.render(Rect::new(0, 2, 40, 2), &mut frame);

    // First contains its fault and reports once.
    assert!(first.is_faulted());
    assert_eq!(first_sink.len(), 1);
    assert!(frame.buffer.row_text(0).contains(DEFAULT_FALLBACK_TEXT));

    // Second is untouched: trigger still present, no state change, no report.
    assert!(!second.is_faulted());
    assert!(second_sink.is_empty());
    assert!(frame.buffer.row_text(2).contains("\u{1F4A3}"));
    assert_eq!(frame.role_at(0, 2), Some(Role::Button));
}

#[test]
fn shared_sink_receives_one_report_per_boundary() {
    install_panic_capture_hook();
    let sink = Arc::new(MemorySink::new());

    for _ in 0..2 {
        let bomb = BombButton::new();
        bomb.press();
        let boundary = FaultBoundary::new(bomb).with_sink(sink.clone());
        let mut frame = Frame::new(40, 2);
        boundary.render(full(&frame), &mut frame);
        // Re-render while faulted: no additional report.
        let mut frame = Frame::new(40, 2);
        boundary.render(full(&frame), &mut frame);
    }

    assert_eq!(sink.len(), 2);
}

#[test]
fn reinstantiation_restores_children() {
    install_panic_capture_hook();
    let bomb = BombButton::new();
    bomb.press();
    let boundary = FaultBoundary::new(bomb);
    let mut frame = Frame::new(40, 2);
    boundary.render(full(&frame), &mut frame);
    assert!(boundary.is_faulted());

    // The re-keying analogue: drop the instance, build a fresh one.
    drop(boundary);
    let boundary = FaultBoundary::new(BombButton::new());
    let mut frame = Frame::new(40, 2);
    boundary.render(full(&frame), &mut frame);

    assert!(!boundary.is_faulted());
    assert!(frame.buffer.contains_text("\u{1F4A3}"));
}

#[test]
fn nested_boundary_contains_at_first_ancestor() {
    install_panic_capture_hook();
    let inner_sink = Arc::new(MemorySink::new());
    let outer_sink = Arc::new(MemorySink::new());

    let bomb = BombButton::new();
    bomb.press();
    let inner = FaultBoundary::new(bomb).with_sink(inner_sink.clone());
    let outer = FaultBoundary::new(inner).with_sink(outer_sink.clone());

    let mut frame = Frame::new(40, 2);
    outer.render(full(&frame), &mut frame);

    // The innermost boundary handles it; the outer one never notices.
    assert!(!outer.is_faulted());
    assert_eq!(inner_sink.len(), 1);
    assert!(outer_sink.is_empty());
    assert!(frame.buffer.contains_text(DEFAULT_FALLBACK_TEXT));
}

#[test]
fn boundary_renders_plain_children_unchanged() {
    let sink = Arc::new(MemorySink::new());
    let boundary = FaultBoundary::new(Label::new("hello world")).with_sink(sink.clone());

    let mut supervised = Frame::new(40, 2);
    boundary.render(full(&supervised), &mut supervised);

    let mut bare = Frame::new(40, 2);
    Label::new("hello world").render(bare.area(), &mut bare);

    assert_eq!(supervised.buffer, bare.buffer);
    assert!(sink.is_empty());
}
