#[derive(Debug, Clone)]
pub enum AppEvent {
    Show,
    Hide,
    Next,
    Reset,
    ConfigReload,
}
