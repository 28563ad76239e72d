//! Application state

use proeventos_core::{EventoService, EventoStore};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub evento_service: Arc<EventoService>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventoStore>) -> Self {
        Self {
            evento_service: Arc::new(EventoService::new(store)),
        }
    }
}
