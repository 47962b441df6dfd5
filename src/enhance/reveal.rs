// src/enhance/reveal.rs
//! Scroll reveal: animated elements start hidden and shifted down, then
//! slide in when the host reports them sufficiently visible.

use crate::page::{NodeId, Page};
use crate::runtime::{Binding, Event, EventKind, Runtime, Target};

/// Classes whose elements take part in the reveal animation.
pub const ANIMATED_CLASSES: [&str; 4] = ["section", "timeline-item", "skill-tag", "project-item"];

/// Visibility ratio at which an element is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// How much the host's observer should shrink the viewport's bottom edge.
pub const BOTTOM_MARGIN_PX: f64 = 50.0;

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    let nodes = rt.page.elements_with_any_class(&ANIMATED_CLASSES);
    let mut bindings = Vec::with_capacity(nodes.len());
    for node in nodes {
        hide(&mut rt.page, node);
        bindings.push(rt.on(
            Target::Node(node),
            EventKind::Intersection,
            move |page, event, _| {
                if let Event::Intersection { ratio } = event {
                    if *ratio >= REVEAL_THRESHOLD {
                        page.set_style(node, "opacity", "1");
                        page.set_style(node, "transform", "translateY(0)");
                    }
                }
            },
        ));
    }
    bindings
}

fn hide(page: &mut Page, node: NodeId) {
    page.set_style(node, "opacity", "0");
    page.set_style(node, "transform", "translateY(30px)");
    page.set_style(node, "transition", "opacity 0.6s ease, transform 0.6s ease");
}
