use super::state::{CarouselState, Slide, SlideSet};

/// Renderer-facing flags for one slide.
///
/// Exactly one slide per cycle is active; the others leave both the tab
/// order (`tab_index` -1) and the accessibility tree (`hidden_from_at`).
/// The two flags always agree today but are separate fields because a
/// presentation layer consumes them through different primitives.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    /// 1-based position, matching the controller's index space.
    pub position: usize,
    pub title: String,
    pub active: bool,
    /// 0 for the active slide, -1 for the rest.
    pub tab_index: i32,
    pub hidden_from_at: bool,
}

impl SlideView {
    fn resolve(position: usize, slide: &Slide, state: &CarouselState) -> Self {
        let active = state.is_active(position);
        Self {
            position,
            title: slide.title.to_string(),
            active,
            tab_index: if active { 0 } else { -1 },
            hidden_from_at: !active,
        }
    }
}

/// Project controller state onto per-slide flags for the whole deck.
pub fn project(state: &CarouselState, slides: &SlideSet) -> Vec<SlideView> {
    slides
        .iter()
        .enumerate()
        .map(|(i, slide)| SlideView::resolve(i + 1, slide, state))
        .collect()
}

/// Live-region text announced on every transition.
pub fn announcement(state: &CarouselState, slides: &SlideSet) -> String {
    let position = state.current_index();
    match slides.get(position) {
        Some(slide) => format!("Slide {} of {}: {}", position, slides.len(), slide.title),
        None => format!("Slide {} of {}", position, slides.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::state::SlideTitle;

    fn deck(titles: &[&str]) -> SlideSet {
        SlideSet::new(
            titles
                .iter()
                .map(|t| Slide::new(SlideTitle::new(*t), None, ""))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn exactly_one_view_is_active_and_focusable() {
        let slides = deck(&["one", "two", "three"]);
        let mut state = CarouselState::new(slides.len()).unwrap();
        state.advance();

        let views = project(&state, &slides);
        assert_eq!(views.len(), 3);
        assert_eq!(views.iter().filter(|v| v.active).count(), 1);
        assert_eq!(views.iter().filter(|v| v.tab_index == 0).count(), 1);
        assert_eq!(views.iter().filter(|v| !v.hidden_from_at).count(), 1);
    }

    #[test]
    fn inactive_views_leave_tab_order_and_at_tree() {
        let slides = deck(&["one", "two"]);
        let state = CarouselState::new(slides.len()).unwrap();

        let views = project(&state, &slides);
        assert!(views[0].active);
        assert_eq!(views[0].tab_index, 0);
        assert!(!views[0].hidden_from_at);
        assert!(!views[1].active);
        assert_eq!(views[1].tab_index, -1);
        assert!(views[1].hidden_from_at);
    }

    #[test]
    fn announcement_names_position_and_title() {
        let slides = deck(&["Spring sale", "New arrivals", "Free shipping"]);
        let mut state = CarouselState::new(slides.len()).unwrap();
        state.advance();

        assert_eq!(
            announcement(&state, &slides),
            "Slide 2 of 3: New arrivals"
        );
    }

    #[test]
    fn projection_follows_the_index_around_the_cycle() {
        let slides = deck(&["a", "b", "c"]);
        let mut state = CarouselState::new(slides.len()).unwrap();

        for expected in [2, 3, 1, 2] {
            state.advance();
            let views = project(&state, &slides);
            let active: Vec<usize> = views.iter().filter(|v| v.active).map(|v| v.position).collect();
            assert_eq!(active, vec![expected]);
        }
    }
}
