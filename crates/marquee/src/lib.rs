pub mod app;
pub mod carousel;
pub mod config;
pub mod events;
pub mod motion;
pub mod sys;
