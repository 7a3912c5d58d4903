use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument};

// =============================================================================
// 1. THE ABSTRACTION (Entity trait)
// =============================================================================

/// Errors raised by the actor plumbing itself, as opposed to the entity's
/// own domain errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Actor closed")]
    Closed,
    #[error("Actor dropped")]
    Dropped,
}

/// Trait any domain entity must implement to be managed by [`ResourceActor`].
///
/// Entities are created from an opaque payload, looked up by id, and mutated
/// exclusively through typed actions. The entity's error type absorbs
/// framework errors so clients surface a single error per domain.
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreatePayload: Send + Sync + Debug;
    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;
    type Error: Send + Sync + Debug + Display + From<FrameworkError>;

    /// Construct the full entity from a generated id and the payload.
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, Self::Error>;

    /// Handle a domain-specific action, possibly mutating the entity.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T, E> = oneshot::Sender<Result<T, E>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T::Id, T::Error>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>, T::Error>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult, T::Error>,
    },
    Remove {
        id: T::Id,
        respond_to: Response<(), T::Error>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient { sender };
        (actor, client)
    }

    /// Runs until every client is dropped and the channel closes.
    #[instrument(name = "resource_actor", skip(self))]
    pub async fn run(mut self) {
        info!("Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let id = (self.next_id_fn)();
                    debug!(id = %id, "Processing create request");
                    match T::from_create(id.clone(), payload) {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    debug!(id = %id, "Processing get request");
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    debug!(id = %id, ?action, "Processing action request");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item.handle_action(action);
                        let _ = respond_to.send(result);
                    } else {
                        let _ = respond_to
                            .send(Err(FrameworkError::NotFound(id.to_string()).into()));
                    }
                }
                ResourceRequest::Remove { id, respond_to } => {
                    debug!(id = %id, "Processing remove request");
                    if self.store.remove(&id).is_some() {
                        let _ = respond_to.send(Ok(()));
                    } else {
                        let _ = respond_to
                            .send(Err(FrameworkError::NotFound(id.to_string()).into()));
                    }
                }
            }
        }
        info!("Actor stopped");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    #[cfg(test)]
    pub fn from_sender(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T::Id, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| T::Error::from(FrameworkError::Closed))?;
        response
            .await
            .map_err(|_| T::Error::from(FrameworkError::Dropped))?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| T::Error::from(FrameworkError::Closed))?;
        response
            .await
            .map_err(|_| T::Error::from(FrameworkError::Dropped))?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action { id, action, respond_to })
            .await
            .map_err(|_| T::Error::from(FrameworkError::Closed))?;
        response
            .await
            .map_err(|_| T::Error::from(FrameworkError::Dropped))?
    }

    pub async fn remove(&self, id: T::Id) -> Result<(), T::Error> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Remove { id, respond_to })
            .await
            .map_err(|_| T::Error::from(FrameworkError::Closed))?;
        response
            .await
            .map_err(|_| T::Error::from(FrameworkError::Dropped))?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
