use crate::carousel::state::{CarouselError, CarouselSnapshot, CarouselState, SlideSet};
use crate::carousel::{view, AutoAdvance};
use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::motion::MotionPreference;
use async_channel::Sender;
use std::time::Duration;

/// The single-threaded event loop state: one carousel, one deck, one timer.
///
/// Every event runs to completion before the next is applied; the timer task
/// only ever feeds `Advance` events back through the same channel, so there
/// is no parallel mutation anywhere.
pub struct App {
    state: CarouselState,
    slides: SlideSet,
    auto: AutoAdvance,
    auto_desired: bool,
    interval: Duration,
    motion: MotionPreference,
    tx: Sender<AppEvent>,
}

impl App {
    pub fn new(config: &Config, tx: Sender<AppEvent>) -> Result<Self, CarouselError> {
        let slides = SlideSet::from_config(config)?;
        let state = CarouselState::new(slides.len())?;
        let mut app = Self {
            state,
            slides,
            auto: AutoAdvance::new(),
            auto_desired: config.auto_advance.enabled,
            interval: Duration::from_millis(config.auto_advance.interval_ms),
            motion: config.motion,
            tx,
        };
        app.sync_auto();
        let snap = app.state.snapshot();
        app.render(snap);
        Ok(app)
    }

    /// Apply one event. Returns `false` once the loop should end.
    pub fn update(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Advance => {
                let snap = self.state.advance();
                self.render(snap);
            }
            AppEvent::Retreat => {
                let snap = self.state.retreat();
                self.render(snap);
            }
            AppEvent::StartAuto => {
                self.auto_desired = true;
                self.sync_auto();
            }
            AppEvent::StopAuto => {
                self.auto_desired = false;
                self.sync_auto();
            }
            AppEvent::ConfigReload => match config::load_config() {
                Ok(new_config) => self.apply_config(&new_config),
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppEvent::Shutdown => {
                self.auto.stop();
                return false;
            }
        }
        true
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn is_auto_running(&self) -> bool {
        self.auto.is_running()
    }

    fn apply_config(&mut self, config: &Config) {
        match SlideSet::from_config(config) {
            Ok(slides) if slides != self.slides => {
                // a new deck is a new carousel: back to slide 1
                match CarouselState::new(slides.len()) {
                    Ok(state) => {
                        self.slides = slides;
                        self.state = state;
                        let snap = self.state.snapshot();
                        self.render(snap);
                    }
                    Err(e) => log::error!("Rejected reloaded deck: {}", e),
                }
            }
            Ok(_) => {}
            Err(e) => log::warn!("Keeping previous deck: {}", e),
        }

        self.auto_desired = config.auto_advance.enabled;
        self.interval = Duration::from_millis(config.auto_advance.interval_ms);
        self.motion = config.motion;
        self.sync_auto();
        log::info!("Configuration reloaded");
    }

    // Reconcile the timer with what is currently wanted and allowed. Start
    // replaces any live timer, so calling this repeatedly never stacks one.
    fn sync_auto(&mut self) {
        if self.auto_desired && self.motion.allows_animation() {
            self.auto.start(self.interval, self.motion, self.tx.clone());
        } else {
            self.auto.stop();
        }
    }

    fn render(&self, snap: CarouselSnapshot) {
        log::info!(
            "slide {}/{} (track offset {:.2}%): {}",
            snap.current_index,
            self.state.slide_count(),
            snap.offset_percent,
            view::announcement(&self.state, &self.slides)
        );
        for slide_view in view::project(&self.state, &self.slides) {
            log::debug!(
                "slide {} '{}': active={} tab_index={} hidden_from_at={}",
                slide_view.position,
                slide_view.title,
                slide_view.active,
                slide_view.tab_index,
                slide_view.hidden_from_at
            );
        }
    }
}
