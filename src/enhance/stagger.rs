// src/enhance/stagger.rs
//! Animation-delay staggering. Pure style passes, no subscriptions.

use crate::page::Page;

/// Delay step between consecutive timeline entries.
pub const TIMELINE_STEP_S: f64 = 0.2;

/// Delay step between consecutive skill tags within one category.
pub const SKILL_STEP_S: f64 = 0.1;

/// Staggers timeline entries across the whole page.
pub fn stagger_timeline(page: &mut Page) {
    for (index, node) in page.elements_with_class("timeline-item").into_iter().enumerate() {
        page.set_style(node, "animation-delay", &delay(index, TIMELINE_STEP_S));
    }
}

/// Staggers skill tags, restarting the count in every category.
pub fn stagger_skills(page: &mut Page) {
    for category in page.elements_with_class("skill-category") {
        for (index, tag) in page
            .descendants_with_class(category, "skill-tag")
            .into_iter()
            .enumerate()
        {
            page.set_style(tag, "animation-delay", &delay(index, SKILL_STEP_S));
        }
    }
}

fn delay(index: usize, step_s: f64) -> String {
    format!("{:.1}s", index as f64 * step_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_entries_get_increasing_delays() {
        let mut page = Page::parse(
            r#"<html><body>
              <div class="timeline-item" id="t0"></div>
              <div class="timeline-item" id="t1"></div>
              <div class="timeline-item" id="t2"></div>
            </body></html>"#,
        );
        stagger_timeline(&mut page);
        for (id, want) in [("t0", "0.0s"), ("t1", "0.2s"), ("t2", "0.4s")] {
            let node = page.element_by_id(id).unwrap();
            assert_eq!(page.style(node, "animation-delay"), Some(want));
        }
    }

    #[test]
    fn test_skill_delays_restart_per_category() {
        let mut page = Page::parse(
            r#"<html><body>
              <div class="skill-category">
                <span class="skill-tag" id="a0"></span>
                <span class="skill-tag" id="a1"></span>
              </div>
              <div class="skill-category">
                <span class="skill-tag" id="b0"></span>
              </div>
            </body></html>"#,
        );
        stagger_skills(&mut page);
        for (id, want) in [("a0", "0.0s"), ("a1", "0.1s"), ("b0", "0.0s")] {
            let node = page.element_by_id(id).unwrap();
            assert_eq!(page.style(node, "animation-delay"), Some(want));
        }
    }

    #[test]
    fn test_delays_format_without_float_noise() {
        assert_eq!(delay(3, TIMELINE_STEP_S), "0.6s");
        assert_eq!(delay(7, SKILL_STEP_S), "0.7s");
    }

    #[test]
    fn test_tags_outside_categories_are_ignored() {
        let mut page = Page::parse(
            r#"<html><body><span class="skill-tag" id="loose"></span></body></html>"#,
        );
        stagger_skills(&mut page);
        let loose = page.element_by_id("loose").unwrap();
        assert_eq!(page.style(loose, "animation-delay"), None);
    }
}
