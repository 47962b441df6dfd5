// src/enhance/anchors.rs
//! In-page anchor navigation: clicks on `#fragment` links ask the host to
//! smooth-scroll instead of jumping.

use crate::runtime::{Binding, EventKind, HostCommand, Runtime, Target};

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    let mut bindings = Vec::new();
    for anchor in rt.page.elements_by_tag("a") {
        let destination = match rt.page.attr(anchor, "href") {
            Some(href) if href.starts_with('#') => rt.page.element_by_id(&href[1..]),
            _ => continue,
        };
        bindings.push(rt.on(Target::Node(anchor), EventKind::Click, move |_, _, dispatch| {
            // The default jump is always suppressed, even when the named
            // element does not exist.
            dispatch.prevent_default();
            if let Some(node) = destination {
                dispatch.emit(HostCommand::ScrollTo(node));
            }
        }));
    }
    bindings
}
