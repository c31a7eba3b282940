#![forbid(unsafe_code)]

//! Demo model: two bomb/boundary pairs side by side.
//!
//! Pressing `1` or `2` arms the corresponding bomb; the next render
//! detonates it and its boundary substitutes the fallback while the
//! sibling keeps rendering normally. `q` quits.

use faultline_core::event::Event;
use faultline_core::geometry::Rect;
use faultline_core::role::Role;
use faultline_render::frame::Frame;
use faultline_render::style::Style;
use faultline_runtime::{Cmd, Model};
use faultline_widgets::{BombButton, FaultBoundary, FaultSink, Label, Widget};
use std::sync::Arc;

#[derive(Debug)]
pub enum DemoMsg {
    PressFirst,
    PressSecond,
    Quit,
    Noop,
}

impl From<Event> for DemoMsg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) if k.is_char('1') => DemoMsg::PressFirst,
            Event::Key(k) if k.is_char('2') => DemoMsg::PressSecond,
            Event::Key(k) if k.is_char('q') => DemoMsg::Quit,
            _ => DemoMsg::Noop,
        }
    }
}

struct Pair {
    bomb: Arc<BombButton>,
    boundary: FaultBoundary,
}

impl Pair {
    fn new(name: &'static str, sink: Arc<dyn FaultSink>) -> Self {
        let bomb = Arc::new(BombButton::new());
        let boundary = FaultBoundary::new(bomb.clone())
            .with_sink(sink)
            .with_fallback_text(format!("{name}: something went wrong"));
        Self { bomb, boundary }
    }
}

pub struct DemoApp {
    first: Pair,
    second: Pair,
}

impl DemoApp {
    pub fn new(sink: Arc<dyn FaultSink>) -> Self {
        Self {
            first: Pair::new("left", sink.clone()),
            second: Pair::new("right", sink),
        }
    }

    pub fn first_faulted(&self) -> bool {
        self.first.boundary.is_faulted()
    }

    pub fn second_faulted(&self) -> bool {
        self.second.boundary.is_faulted()
    }
}

impl Model for DemoApp {
    type Message = DemoMsg;

    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::log("demo ready: 1/2 detonate, q quits".to_string())
    }

    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message> {
        match msg {
            DemoMsg::PressFirst => {
                self.first.bomb.press();
                Cmd::none()
            }
            DemoMsg::PressSecond => {
                self.second.bomb.press();
                Cmd::none()
            }
            DemoMsg::Quit => Cmd::quit(),
            DemoMsg::Noop => Cmd::none(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        frame.push_component("DemoApp");

        Label::new("faultline demo")
            .style(Style::new().bold())
            .role(Role::Status)
            .render(Rect::new(0, 0, frame.width(), 1), frame);

        let half = frame.width() / 2;
        let body = Rect::new(0, 1, frame.width(), frame.height().saturating_sub(1));
        self.first
            .boundary
            .render(Rect::new(0, body.y, half, body.height), frame);
        self.second
            .boundary
            .render(Rect::new(half, body.y, half, body.height), frame);

        frame.pop_component();
    }
}
