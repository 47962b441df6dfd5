// src/enhance/keyboard.rs
//! Document-level shortcuts: Ctrl/Cmd+P prints, Ctrl/Cmd+S explains how to
//! save instead of letting the browser save the raw page.

use crate::runtime::{Binding, Event, EventKind, HostCommand, Runtime, Target};

pub const SAVE_HINT: &str =
    "Use your browser's print dialog and choose 'Save as PDF' to keep a copy of this resume.";

pub fn attach(rt: &mut Runtime) -> Vec<Binding> {
    vec![rt.on(Target::Document, EventKind::KeyDown, |_, event, dispatch| {
        let Event::KeyDown { key, ctrl, meta } = event else {
            return;
        };
        if !(*ctrl || *meta) {
            return;
        }
        match key {
            'p' => {
                dispatch.prevent_default();
                dispatch.emit(HostCommand::Print);
            }
            's' => {
                dispatch.prevent_default();
                dispatch.emit(HostCommand::Alert(SAVE_HINT.to_string()));
            }
            _ => {}
        }
    })]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;

    fn runtime() -> Runtime {
        Runtime::new(Page::parse("<html><body></body></html>"))
    }

    fn key(key: char, ctrl: bool, meta: bool) -> Event {
        Event::KeyDown { key, ctrl, meta }
    }

    #[test]
    fn test_ctrl_p_prints_and_suppresses_the_default() {
        let mut rt = runtime();
        attach(&mut rt);
        let outcome = rt.dispatch(Target::Document, key('p', true, false));
        assert!(outcome.default_prevented());
        assert_eq!(outcome.commands(), &[HostCommand::Print]);
    }

    #[test]
    fn test_cmd_s_shows_the_save_hint() {
        let mut rt = runtime();
        attach(&mut rt);
        let outcome = rt.dispatch(Target::Document, key('s', false, true));
        assert!(outcome.default_prevented());
        assert_eq!(
            outcome.commands(),
            &[HostCommand::Alert(SAVE_HINT.to_string())]
        );
    }

    #[test]
    fn test_unmodified_keys_pass_through() {
        let mut rt = runtime();
        attach(&mut rt);
        let outcome = rt.dispatch(Target::Document, key('p', false, false));
        assert!(!outcome.default_prevented());
        assert!(outcome.commands().is_empty());
    }

    #[test]
    fn test_other_shortcuts_are_ignored() {
        let mut rt = runtime();
        attach(&mut rt);
        let outcome = rt.dispatch(Target::Document, key('k', true, false));
        assert!(!outcome.default_prevented());
        assert!(outcome.commands().is_empty());
    }
}
