use crate::config::{Config, SlideConfig};
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use stepper::CycleIndex;
use thiserror::Error;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct SlideTitle(String);

stepper::impl_string_newtype!(SlideTitle);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct SlideLink(String);

stepper::impl_string_newtype!(SlideLink);

/// One rotating content panel. The payload is opaque to the controller; it
/// is carried so the projection layer has something to announce.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: SlideTitle,
    pub link: Option<SlideLink>,
    pub body: String,
}

impl Slide {
    pub fn new(title: SlideTitle, link: Option<SlideLink>, body: impl Into<String>) -> Self {
        Self {
            title,
            link,
            body: body.into(),
        }
    }

    pub fn from_config(cfg: &SlideConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            link: cfg.link.clone(),
            body: cfg.body.clone(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("slide deck is empty")]
    EmptyDeck,
}

/// Ordered, fixed, non-empty sequence of slides. Positions are 1-based to
/// match the controller's index space.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideSet {
    slides: Vec<Slide>,
}

impl SlideSet {
    pub fn new(slides: Vec<Slide>) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self { slides })
    }

    pub fn from_config(config: &Config) -> Result<Self, CarouselError> {
        Self::new(config.slides.iter().map(Slide::from_config).collect())
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A slide set is never empty; kept for clippy's `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 1-based access, matching [`CarouselState::current_index`].
    pub fn get(&self, position: usize) -> Option<&Slide> {
        position.checked_sub(1).and_then(|i| self.slides.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Slide> {
        self.slides.iter()
    }
}

/// The `{ currentIndex, offsetPercent }` pair reported on every transition,
/// for the presentation layer to project into a track transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSnapshot {
    pub current_index: usize,
    pub offset_percent: f64,
}

/// Cyclic slide navigation state.
///
/// Owns only the current index; the track offset is re-derived from it on
/// every transition and is never writable on its own. Index arithmetic wraps
/// in both directions via [`CycleIndex`].
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    index: CycleIndex,
    offset_percent: f64,
}

impl CarouselState {
    /// Create a controller positioned on slide 1 of `slide_count`.
    pub fn new(slide_count: usize) -> Result<Self, CarouselError> {
        let index = CycleIndex::new(slide_count).map_err(|_| CarouselError::EmptyDeck)?;
        let mut state = Self {
            index,
            offset_percent: 0.0,
        };
        state.refresh_offset();
        Ok(state)
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    pub fn slide_count(&self) -> usize {
        self.index.len()
    }

    pub fn offset_percent(&self) -> f64 {
        self.offset_percent
    }

    /// Step to the next slide, wrapping from the last back to the first.
    pub fn advance(&mut self) -> CarouselSnapshot {
        self.index.advance();
        self.refresh_offset();
        self.snapshot()
    }

    /// Step to the previous slide, wrapping from the first to the last.
    pub fn retreat(&mut self) -> CarouselSnapshot {
        self.index.retreat();
        self.refresh_offset();
        self.snapshot()
    }

    /// Whether `position` is the single active slide this cycle.
    pub fn is_active(&self, position: usize) -> bool {
        self.index.is_at(position)
    }

    pub fn snapshot(&self) -> CarouselSnapshot {
        CarouselSnapshot {
            current_index: self.current_index(),
            offset_percent: self.offset_percent,
        }
    }

    // Offset over the full track: 100 * (index - 1) / count. The divisor is
    // the slide count, whatever it is.
    fn refresh_offset(&mut self) {
        let count = self.index.len() as f64;
        self.offset_percent = 100.0 * (self.index.current() - 1) as f64 / count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 0.01, "{a} != {b}");
    }

    #[test]
    fn starts_on_first_slide() {
        let state = CarouselState::new(4).unwrap();
        assert_eq!(state.current_index(), 1);
        assert_close(state.offset_percent(), 0.0);
    }

    #[test]
    fn empty_deck_rejected() {
        assert_eq!(CarouselState::new(0), Err(CarouselError::EmptyDeck));
        assert_eq!(SlideSet::new(vec![]), Err(CarouselError::EmptyDeck));
    }

    #[test]
    fn full_cycle_returns_to_first() {
        for count in 1..=6 {
            let mut state = CarouselState::new(count).unwrap();
            for _ in 0..count {
                state.advance();
            }
            assert_eq!(state.current_index(), 1, "count {count}");
            assert_close(state.offset_percent(), 0.0);
        }
    }

    #[test]
    fn offset_matches_formula_for_every_reachable_index() {
        for count in 1..=5 {
            let mut state = CarouselState::new(count).unwrap();
            for _ in 0..count {
                let snap = state.advance();
                let expected = 100.0 * (snap.current_index - 1) as f64 / count as f64;
                assert_close(snap.offset_percent, expected);
            }
        }
    }

    #[test]
    fn three_slide_walkthrough() {
        let mut state = CarouselState::new(3).unwrap();

        let snap = state.retreat();
        assert_eq!(snap.current_index, 3);
        assert_close(snap.offset_percent, 66.67);

        let snap = state.advance();
        assert_eq!(snap.current_index, 1);
        assert_close(snap.offset_percent, 0.0);

        let snap = state.advance();
        assert_eq!(snap.current_index, 2);
        assert_close(snap.offset_percent, 33.33);

        let snap = state.advance();
        assert_eq!(snap.current_index, 3);
        assert_close(snap.offset_percent, 66.67);

        let snap = state.advance();
        assert_eq!(snap.current_index, 1);
        assert_close(snap.offset_percent, 0.0);
    }

    #[test]
    fn retreat_then_advance_restores_index_at_boundary() {
        let mut state = CarouselState::new(5).unwrap();
        state.retreat();
        assert_eq!(state.current_index(), 5);
        state.advance();
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn exactly_one_active_position() {
        let mut state = CarouselState::new(4).unwrap();
        for _ in 0..=4 {
            let active: Vec<usize> = (1..=4).filter(|&p| state.is_active(p)).collect();
            assert_eq!(active, vec![state.current_index()]);
            state.advance();
        }
    }

    #[test]
    fn slide_set_positions_are_one_based() {
        let slides = SlideSet::new(vec![
            Slide::new(SlideTitle::new("a"), None, ""),
            Slide::new(SlideTitle::new("b"), None, ""),
        ])
        .unwrap();
        assert_eq!(slides.get(1).unwrap().title, SlideTitle::new("a"));
        assert_eq!(slides.get(2).unwrap().title, SlideTitle::new("b"));
        assert!(slides.get(0).is_none());
        assert!(slides.get(3).is_none());
    }
}
