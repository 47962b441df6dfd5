// src/enhance/print_button.rs
//! Injected fixed-position print button.
//!
//! The button is created here rather than rendered from configuration; it
//! asks the host to print, lifts on hover, and hides itself on narrow
//! viewports.

use crate::runtime::{Binding, Event, EventKind, HostCommand, Runtime, Target};

pub const BUTTON_CLASS: &str = "print-button";
pub const LABEL_HTML: &str = r#"<i class="fas fa-print"></i> Print Resume"#;

/// Viewport width at or below which the button is hidden.
pub const HIDE_BELOW_PX: f64 = 768.0;

const HOVER_SHADOW: &str = "0 6px 20px rgba(102, 126, 234, 0.4)";
const RESTED_SHADOW: &str = "0 4px 15px rgba(102, 126, 234, 0.3)";

const BASE_STYLES: [(&str, &str); 14] = [
    ("position", "fixed"),
    ("top", "20px"),
    ("right", "20px"),
    ("background", "linear-gradient(135deg, #667eea, #764ba2)"),
    ("color", "white"),
    ("border", "none"),
    ("padding", "12px 20px"),
    ("border-radius", "25px"),
    ("cursor", "pointer"),
    ("font-family", "'Noto Sans SC', sans-serif"),
    ("font-size", "14px"),
    ("box-shadow", RESTED_SHADOW),
    ("transition", "all 0.3s ease"),
    ("z-index", "1000"),
];

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    let Some(body) = rt.page.body() else {
        return Vec::new();
    };
    let button = rt.page.create_element("button");
    rt.page.add_class(button, BUTTON_CLASS);
    rt.page.set_inner_html(button, LABEL_HTML);
    for (prop, value) in BASE_STYLES {
        rt.page.set_style(button, prop, value);
    }
    rt.page.append_child(body, button);
    if rt.page.viewport_width() <= HIDE_BELOW_PX {
        rt.page.set_style(button, "display", "none");
    }

    vec![
        rt.on(Target::Node(button), EventKind::Click, |_, _, dispatch| {
            dispatch.emit(HostCommand::Print);
        }),
        rt.on(Target::Node(button), EventKind::PointerEnter, move |page, _, _| {
            page.set_style(button, "transform", "translateY(-2px)");
            page.set_style(button, "box-shadow", HOVER_SHADOW);
        }),
        rt.on(Target::Node(button), EventKind::PointerLeave, move |page, _, _| {
            page.set_style(button, "transform", "translateY(0)");
            page.set_style(button, "box-shadow", RESTED_SHADOW);
        }),
        rt.on(Target::Window, EventKind::Resize, move |page, event, _| {
            if let Event::Resize { width } = event {
                let display = if *width <= HIDE_BELOW_PX { "none" } else { "block" };
                page.set_style(button, "display", display);
            }
        }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{NodeId, Page};

    fn runtime() -> Runtime {
        Runtime::new(Page::parse("<html><body><main>cv</main></body></html>"))
    }

    fn find_button(rt: &Runtime) -> NodeId {
        rt.page.elements_with_class(BUTTON_CLASS)[0]
    }

    #[test]
    fn test_button_is_appended_to_the_body_with_its_label() {
        let mut rt = runtime();
        let bindings = attach(&mut rt);
        assert_eq!(bindings.len(), 4);
        let button = find_button(&rt);
        assert_eq!(rt.page.tag(button), Some("button"));
        assert_eq!(rt.page.text_content(button), " Print Resume");
        assert_eq!(rt.page.elements_with_class("fa-print").len(), 1);
        assert_eq!(rt.page.style(button, "position"), Some("fixed"));
        assert_eq!(rt.page.style(button, "z-index"), Some("1000"));
    }

    #[test]
    fn test_click_asks_the_host_to_print() {
        let mut rt = runtime();
        attach(&mut rt);
        let button = find_button(&rt);
        let outcome = rt.dispatch(Target::Node(button), Event::Click);
        assert_eq!(outcome.commands(), &[HostCommand::Print]);
    }

    #[test]
    fn test_hover_lifts_and_leave_settles() {
        let mut rt = runtime();
        attach(&mut rt);
        let button = find_button(&rt);

        rt.dispatch(Target::Node(button), Event::PointerEnter);
        assert_eq!(rt.page.style(button, "transform"), Some("translateY(-2px)"));
        assert_eq!(rt.page.style(button, "box-shadow"), Some(HOVER_SHADOW));

        rt.dispatch(Target::Node(button), Event::PointerLeave);
        assert_eq!(rt.page.style(button, "transform"), Some("translateY(0)"));
        assert_eq!(rt.page.style(button, "box-shadow"), Some(RESTED_SHADOW));
    }

    #[test]
    fn test_narrow_viewports_hide_the_button() {
        let mut rt = runtime();
        attach(&mut rt);
        let button = find_button(&rt);
        assert_eq!(rt.page.style(button, "display"), None);

        rt.dispatch(Target::Window, Event::Resize { width: 500.0 });
        assert_eq!(rt.page.style(button, "display"), Some("none"));

        rt.dispatch(Target::Window, Event::Resize { width: 1024.0 });
        assert_eq!(rt.page.style(button, "display"), Some("block"));
    }

    #[test]
    fn test_button_starts_hidden_when_the_page_loads_narrow() {
        let mut page = Page::parse("<html><body></body></html>");
        page.set_viewport_width(600.0);
        let mut rt = Runtime::new(page);
        attach(&mut rt);
        let button = find_button(&rt);
        assert_eq!(rt.page.style(button, "display"), Some("none"));
    }
}
