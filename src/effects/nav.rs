use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Offset added to the scroll position when probing which section is under
/// the navbar.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;

/// Scroll distance past which the navbar switches to its condensed look.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Vertical extent of one page section, measured in page coordinates.
pub struct SectionExtent {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}

/// Picks the section whose `[top, top + height)` range contains `probe`.
/// The last match in document order wins when ranges overlap; `None` means
/// every nav link goes inactive.
pub fn active_section_id(probe: f64, sections: &[SectionExtent]) -> Option<&str> {
    let mut current = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Reads the live geometry of every `section[id]`. Measured per update
/// rather than cached, since layout shifts with the viewport.
pub fn measure_sections(document: &Document) -> Vec<SectionExtent> {
    let mut sections = Vec::new();
    if let Ok(nodes) = document.query_selector_all("section[id]") {
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<HtmlElement>().ok()) {
                sections.push(SectionExtent {
                    id: element.id(),
                    top: element.offset_top() as f64,
                    height: element.offset_height() as f64,
                });
            }
        }
    }
    sections
}

/// Smooth-scrolls the section with `id` to the top of the viewport.
/// Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    let document = match web_sys::window().and_then(|window| window.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(id) {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        options.block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::debug!("scroll_to_section: no element with id {}", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, top: f64, height: f64) -> SectionExtent {
        SectionExtent { id: id.to_string(), top, height }
    }

    #[test]
    fn no_match_outside_every_range() {
        let sections = vec![section("home", 0.0, 600.0), section("about", 600.0, 400.0)];
        assert_eq!(active_section_id(1500.0, &sections), None);
        assert_eq!(active_section_id(-10.0, &sections), None);
    }

    #[test]
    fn probe_selects_containing_section() {
        let sections = vec![section("home", 0.0, 600.0), section("about", 600.0, 400.0)];
        assert_eq!(active_section_id(100.0, &sections), Some("home"));
        assert_eq!(active_section_id(700.0, &sections), Some("about"));
    }

    #[test]
    fn range_is_half_open() {
        let sections = vec![section("home", 0.0, 600.0), section("about", 600.0, 400.0)];
        // 600 is the exclusive end of "home" and the inclusive start of "about".
        assert_eq!(active_section_id(600.0, &sections), Some("about"));
        assert_eq!(active_section_id(999.9, &sections), Some("about"));
        assert_eq!(active_section_id(1000.0, &sections), None);
    }

    #[test]
    fn last_match_wins_on_overlap() {
        let sections = vec![section("a", 0.0, 500.0), section("b", 300.0, 500.0)];
        assert_eq!(active_section_id(400.0, &sections), Some("b"));
    }

    #[test]
    fn at_most_one_section_for_any_offset() {
        let sections = vec![
            section("home", 0.0, 600.0),
            section("about", 600.0, 400.0),
            section("contact", 1000.0, 300.0),
        ];
        let mut probe = -50.0;
        while probe < 1500.0 {
            // Option<&str> by construction designates zero or one section.
            let current = active_section_id(probe, &sections);
            if let Some(id) = current {
                assert!(sections.iter().any(|s| s.id == id));
            }
            probe += 7.0;
        }
    }

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(0.0));
        assert!(!navbar_scrolled(50.0));
        assert!(navbar_scrolled(50.1));
    }
}
