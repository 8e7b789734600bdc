#[derive(Debug, Clone)]
pub enum AppEvent {
    Advance,
    Retreat,
    StartAuto,
    StopAuto,
    ConfigReload,
    Shutdown,
}
