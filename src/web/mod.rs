pub mod error;
pub mod handlers;
pub mod intent;
pub mod models;
pub mod routes;

use std::sync::Arc;

use tera::Tera;

use crate::locale::Locale;
use crate::model::ChatCompletion;
use crate::video::VideoSearch;

/// Shared by every worker. Holds no per-request state.
pub struct AppState {
    pub tera: Tera,
    pub locale: Locale,
    pub completion: Arc<dyn ChatCompletion>,
    pub videos: Arc<dyn VideoSearch>,
}
