use crate::config::AppConfig;
use crate::services::store::StoreProvider;

pub struct AppState {
    pub config: AppConfig,
    /// `None` when the configuration gate is closed; built once at startup and
    /// passed down, so handlers never reach for the environment themselves.
    pub store: Option<Box<dyn StoreProvider>>,
}
