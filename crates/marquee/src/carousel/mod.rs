pub mod auto;
pub mod state;
pub mod view;

pub use auto::AutoAdvance;
pub use state::{
    CarouselError, CarouselSnapshot, CarouselState, Slide, SlideLink, SlideSet, SlideTitle,
};
pub use view::{SlideView, announcement, project};

/// Floor for auto-advance intervals; anything shorter would flood the event
/// channel faster than any renderer could follow.
pub const MIN_INTERVAL_MS: u64 = 250;
