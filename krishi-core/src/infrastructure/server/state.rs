use crate::application::AgriGateway;
use std::sync::Arc;

pub(crate) struct ServerState {
    gateway: Arc<AgriGateway>,
}

impl ServerState {
    pub(crate) fn new(gateway: Arc<AgriGateway>) -> Self {
        Self { gateway }
    }

    pub(crate) fn gateway(&self) -> Arc<AgriGateway> {
        Arc::clone(&self.gateway)
    }
}
