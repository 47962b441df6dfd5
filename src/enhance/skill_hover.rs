// src/enhance/skill_hover.rs
//! Hover lift for skill tags: raise and glow on pointer enter, settle back
//! on leave.

use crate::runtime::{Binding, EventKind, Runtime, Target};

pub const RAISED_TRANSFORM: &str = "translateY(-3px) scale(1.05)";
pub const RAISED_SHADOW: &str = "0 8px 25px rgba(102, 126, 234, 0.4)";
pub const RESTED_TRANSFORM: &str = "translateY(0) scale(1)";

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    let tags = rt.page.elements_with_class("skill-tag");
    let mut bindings = Vec::with_capacity(tags.len() * 2);
    for tag in tags {
        bindings.push(rt.on(Target::Node(tag), EventKind::PointerEnter, move |page, _, _| {
            page.set_style(tag, "transform", RAISED_TRANSFORM);
            page.set_style(tag, "box-shadow", RAISED_SHADOW);
        }));
        bindings.push(rt.on(Target::Node(tag), EventKind::PointerLeave, move |page, _, _| {
            page.set_style(tag, "transform", RESTED_TRANSFORM);
            page.set_style(tag, "box-shadow", "none");
        }));
    }
    bindings
}
