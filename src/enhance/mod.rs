// src/enhance/mod.rs
//! Interaction behaviors attached after the regions are filled.
//!
//! Behaviors are cosmetic: they animate, toggle styles and surface host
//! commands, but render nothing. Each `attach` returns the [`Binding`]s it
//! registered so a caller can detach the whole layer again.

pub mod anchors;
pub mod keyboard;
pub mod load_fade;
pub mod print_button;
pub mod reveal;
pub mod skill_hover;
pub mod stagger;

use tracing::debug;

use crate::runtime::{Binding, Runtime};

/// Disposers for everything the behaviors registered.
#[derive(Default)]
pub struct Attachments {
    pub bindings: Vec<Binding>,
}

impl Attachments {
    pub fn dispose(self, rt: &mut Runtime) {
        for binding in self.bindings {
            rt.off(binding);
        }
    }
}

/// Attaches every behavior. Both stagger passes run here, after the regions
/// are filled, so freshly rendered timeline entries and skill tags are the
/// ones counted.
pub fn attach_all(rt: &mut Runtime) -> Attachments {
    let mut attached = Attachments::default();
    attached.bindings.extend(reveal::attach(rt));
    attached.bindings.extend(skill_hover::attach(rt));
    stagger::stagger_timeline(&mut rt.page);
    stagger::stagger_skills(&mut rt.page);
    attached.bindings.extend(print_button::attach(rt));
    attached.bindings.extend(anchors::attach(rt));
    attached.bindings.extend(keyboard::attach(rt));
    attached.bindings.extend(load_fade::attach(rt));
    debug!("{} interaction bindings attached", attached.bindings.len());
    attached
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::Page;
    use crate::runtime::Runtime;

    #[test]
    fn test_attach_all_registers_and_dispose_removes() {
        let page = Page::parse(
            r##"<html><body>
              <nav><a href="#skills">skills</a></nav>
              <div class="section" id="skills">
                <div class="skill-category"><h4>t</h4>
                  <div class="skill-tags"><span class="skill-tag">Rust</span></div>
                </div>
              </div>
            </body></html>"##,
        );
        let mut rt = Runtime::new(page);
        let attached = attach_all(&mut rt);
        assert!(rt.subscription_count() > 0);
        assert_eq!(rt.subscription_count(), attached.bindings.len());

        attached.dispose(&mut rt);
        assert_eq!(rt.subscription_count(), 0);
    }
}
