#![forbid(unsafe_code)]

//! Scripted headless demo.
//!
//! Runs the two-boundary layout through the simulator: render, detonate
//! the left bomb, render again, detonate the right one, render once
//! more. Fault reports go to stdout as JSON lines; frames are printed
//! between them. Set `RUST_LOG=debug` for the tracing feed on stderr.

mod app;

use app::DemoApp;
use faultline_core::event::{Event, KeyCode, KeyEvent};
use faultline_render::frame::Frame;
use faultline_runtime::ProgramSimulator;
use faultline_widgets::report::install_panic_capture_hook;
use faultline_widgets::JsonlFaultSink;
use std::sync::Arc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
    install_panic_capture_hook();

    let sink = Arc::new(JsonlFaultSink::stdout());
    let mut sim = ProgramSimulator::new(DemoApp::new(sink));
    sim.init();
    for line in sim.logs() {
        println!("{line}");
    }

    print_frame("initial", sim.capture_frame(60, 4));

    sim.inject_events(&[key('1')]);
    print_frame("after detonating left", sim.capture_frame(60, 4));

    sim.inject_events(&[key('2')]);
    print_frame("after detonating right", sim.capture_frame(60, 4));

    sim.inject_events(&[key('q')]);
    tracing::info!(running = sim.is_running(), "demo finished");
}

fn key(c: char) -> Event {
    Event::Key(KeyEvent::press(KeyCode::Char(c)))
}

fn print_frame(label: &str, frame: &Frame) {
    println!("--- {label} ---");
    for y in 0..frame.height() {
        println!("{}", frame.buffer.row_text(y));
    }
}
