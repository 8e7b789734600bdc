use serde_with::{DeserializeFromStr, SerializeDisplay};
use strum::{Display as StrumDisplay, EnumString};

/// Host-environment animation preference, the "prefers reduced motion"
/// signal. The controller never owns this; it arrives from configuration
/// and is re-read whenever the environment reports a change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    SerializeDisplay,
    DeserializeFromStr,
    EnumString,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
pub enum MotionPreference {
    #[default]
    #[strum(to_string = "no-preference", serialize = "full", serialize = "animate")]
    NoPreference,
    #[strum(to_string = "reduce", serialize = "reduced")]
    Reduce,
}

impl MotionPreference {
    /// Whether non-essential animation (auto-advance) may run.
    pub fn allows_animation(self) -> bool {
        matches!(self, Self::NoPreference)
    }
}
