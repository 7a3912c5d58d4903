use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info};

use crate::actor_framework::ResourceActor;
use crate::clients::SessionClient;
use crate::session::CheckoutSession;

/// The application system: starts the session actor and hands out its client.
///
/// Responsible for startup wiring and graceful shutdown.
pub struct CheckoutSystem {
    pub session_client: SessionClient,
    handle: tokio::task::JoinHandle<()>,
}

impl CheckoutSystem {
    pub fn new() -> Self {
        let session_counter = Arc::new(AtomicU64::new(1));
        let next_session_id = move || {
            let id = session_counter.fetch_add(1, Ordering::SeqCst);
            format!("session_{}", id)
        };

        let (actor, client) = ResourceActor::<CheckoutSession>::new(32, next_session_id);
        let handle = tokio::spawn(actor.run());

        Self {
            session_client: SessionClient::new(client),
            handle,
        }
    }

    /// Drops the client (closing the channel) and waits for the actor task.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.session_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
