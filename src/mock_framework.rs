//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_action`] to assert behavior.

use tokio::sync::{mpsc, oneshot};

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest};

/// Creates a mock client and a receiver for asserting requests.
///
/// # Testing Strategy
/// In unit tests we don't want to spin up a full `ResourceActor` if we are
/// just testing the *client* logic (e.g., `SessionClient`).
///
/// Instead, we create a "mock client". This client sends messages to a channel
/// we control (`receiver`). We can then inspect the messages arriving on that
/// channel and assert they are correct. This allows us to simulate the actor's
/// behavior (success, failure, delays) deterministically.
pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::from_sender(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T::Id, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, oneshot::Sender<Result<Option<T>, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, oneshot::Sender<Result<T::ActionResult, T::Error>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::clients::SessionClient;
    use crate::domain::Selection;
    use crate::session::{CheckoutSession, OrderView, SessionAction, SessionActionResult};

    #[tokio::test]
    async fn choose_product_sends_a_seeded_create() {
        let (inner, mut receiver) = create_mock_client::<CheckoutSession>(10);
        let client = SessionClient::new(inner);

        let create_task = tokio::spawn(async move { client.choose_product(2).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.product.as_ref().map(|p| p.name.as_str()), Some("Latte"));
        assert_eq!(payload.size, None);
        responder.send(Ok("session_1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok("session_1".to_string()));
    }

    #[tokio::test]
    async fn unknown_product_seeds_the_fallback() {
        let (inner, mut receiver) = create_mock_client::<CheckoutSession>(10);
        let client = SessionClient::new(inner);

        let create_task = tokio::spawn(async move { client.choose_product(999).await });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(
            payload.product.as_ref().map(|p| p.name.as_str()),
            Some("Cappuccino")
        );
        responder.send(Ok("session_1".to_string())).unwrap();

        create_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn toggle_extra_dispatches_the_action() {
        let (inner, mut receiver) = create_mock_client::<CheckoutSession>(10);
        let client = SessionClient::new(inner);

        let task = tokio::spawn(async move {
            client.toggle_extra(&"session_1".to_string(), "crema").await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, "session_1");
        match action {
            SessionAction::ToggleExtra(key) => assert_eq!(key, "crema"),
            other => panic!("Unexpected action: {:?}", other),
        }

        let mut selection = Selection::for_product(catalog::fallback_product());
        selection.toggle_extra("crema");
        responder
            .send(Ok(SessionActionResult::View(OrderView::from_selection(
                &selection,
            ))))
            .unwrap();

        let view = task.await.unwrap().unwrap();
        assert_eq!(view.extras, vec!["Crema batida".to_string()]);
    }

    #[tokio::test]
    async fn handoff_from_a_vanished_session_degrades_to_empty() {
        let (inner, mut receiver) = create_mock_client::<CheckoutSession>(10);
        let client = SessionClient::new(inner);

        let task =
            tokio::spawn(async move { client.handoff_payload(&"session_9".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "session_9");
        responder.send(Ok(None)).unwrap();

        let payload = task.await.unwrap().unwrap();
        assert_eq!(payload, crate::handoff::StagePayload::default());
    }
}
