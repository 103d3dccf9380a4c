use std::sync::Arc;

use service::{BuildingRepository, BuildingService, CancellationToken};

/// Shared handler state. Cloned per request; clones share the service.
#[derive(Clone)]
pub struct ServerState {
    pub buildings: BuildingService<dyn BuildingRepository>,
    /// Cancelled on shutdown; each request works under a child token.
    pub shutdown: CancellationToken,
}

impl ServerState {
    pub fn new(repo: Arc<dyn BuildingRepository>, shutdown: CancellationToken) -> Self {
        Self { buildings: BuildingService::new(repo), shutdown }
    }

    pub fn request_context(&self) -> CancellationToken {
        self.shutdown.child_token()
    }
}
