// src/enhance/load_fade.rs
//! Page entrance: the body fades in shortly after the load event.

use crate::runtime::{Binding, EventKind, Runtime, Target};

pub const FADE_TRANSITION: &str = "opacity 0.5s ease";
pub const FADE_DELAY_MS: u64 = 100;

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    let Some(body) = rt.page.body() else {
        return Vec::new();
    };
    vec![rt.on(Target::Window, EventKind::Load, move |page, _, dispatch| {
        page.set_style(body, "opacity", "0");
        page.set_style(body, "transition", FADE_TRANSITION);
        dispatch.schedule(FADE_DELAY_MS, move |page, _| {
            page.set_style(body, "opacity", "1");
        });
    })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::runtime::Event;

    #[test]
    fn test_body_fades_in_after_the_delay() {
        let mut rt = Runtime::new(Page::parse("<html><body>cv</body></html>"));
        attach(&mut rt);
        let body = rt.page.body().unwrap();
        assert_eq!(rt.page.style(body, "opacity"), None);

        rt.dispatch(Target::Window, Event::Load);
        assert_eq!(rt.page.style(body, "opacity"), Some("0"));
        assert_eq!(rt.page.style(body, "transition"), Some(FADE_TRANSITION));

        rt.advance(FADE_DELAY_MS - 1);
        assert_eq!(rt.page.style(body, "opacity"), Some("0"));

        rt.advance(1);
        assert_eq!(rt.page.style(body, "opacity"), Some("1"));
    }

    #[test]
    fn test_nothing_happens_before_the_load_event() {
        let mut rt = Runtime::new(Page::parse("<html><body>cv</body></html>"));
        attach(&mut rt);
        let body = rt.page.body().unwrap();
        rt.advance(1000);
        assert_eq!(rt.page.style(body, "opacity"), None);
    }
}
