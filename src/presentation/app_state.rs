// Application state for HTTP handlers
use crate::application::refresh_service::RefreshService;
use crate::application::state::DashboardState;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub refresh_service: RefreshService,
    pub dashboard: Arc<Mutex<DashboardState>>,
}
