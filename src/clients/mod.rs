//! Typed client for the session actor. Screens talk to the checkout core
//! exclusively through these intent methods.

use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog;
use crate::domain::{PaymentMethod, PricedOrder};
use crate::handoff::StagePayload;
use crate::session::{
    CheckoutSession, ConfirmationView, OrderView, SessionAction, SessionActionResult,
    SessionError, SessionId,
};

#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<CheckoutSession>,
}

impl SessionClient {
    pub fn new(inner: ResourceClient<CheckoutSession>) -> Self {
        Self { inner }
    }

    /// Starts a new session for a catalog product. An unknown product id
    /// silently seeds the fallback product instead of failing.
    #[instrument(skip(self))]
    pub async fn choose_product(&self, product_id: u32) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        let product = match catalog::find_by_id(product_id) {
            Some(product) => product,
            None => {
                info!(product_id, "Unknown product, seeding fallback");
                catalog::fallback_product()
            }
        };
        self.inner.create(StagePayload::for_product(product)).await
    }

    /// Starts a session from an arbitrary handoff payload, e.g. on direct
    /// navigation into a later stage. Missing fields default independently.
    #[instrument(skip(self, payload))]
    pub async fn enter_stage(&self, payload: StagePayload) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner.create(payload).await
    }

    #[instrument(skip(self))]
    pub async fn set_size(&self, id: &SessionId, key: &str) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::SetSize(key.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn set_milk(&self, id: &SessionId, key: &str) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::SetMilk(key.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn toggle_extra(&self, id: &SessionId, key: &str) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::ToggleExtra(key.to_string())).await
    }

    #[instrument(skip(self))]
    pub async fn set_delivery_option(
        &self,
        id: &SessionId,
        key: &str,
    ) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::SetDeliveryOption(key.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_payment_method(
        &self,
        id: &SessionId,
        label: &str,
        detail: &str,
    ) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::SetPaymentMethod(PaymentMethod::new(label, detail)))
            .await
    }

    /// The read model for the customization and summary stages.
    #[instrument(skip(self))]
    pub async fn order_view(&self, id: &SessionId) -> Result<OrderView, SessionError> {
        self.view_action(id, SessionAction::View).await
    }

    /// Freezes the priced snapshot for handoff to the confirmation stage.
    #[instrument(skip(self))]
    pub async fn checkout(&self, id: &SessionId) -> Result<PricedOrder, SessionError> {
        debug!("Sending request");
        match self.inner.perform_action(id.clone(), SessionAction::Checkout).await {
            Ok(SessionActionResult::Checkout(order)) => Ok(order),
            Ok(other) => Err(SessionError::ActorCommunication(format!(
                "Unexpected result: {:?}",
                other
            ))),
            Err(e) => Err(e),
        }
    }

    /// Confirms the purchase; terminal for the session.
    #[instrument(skip(self))]
    pub async fn confirm_order(&self, id: &SessionId) -> Result<ConfirmationView, SessionError> {
        debug!("Sending request");
        match self.inner.perform_action(id.clone(), SessionAction::Confirm).await {
            Ok(SessionActionResult::Confirm(view)) => Ok(view),
            Ok(other) => Err(SessionError::ActorCommunication(format!(
                "Unexpected result: {:?}",
                other
            ))),
            Err(e) => Err(e),
        }
    }

    /// The payload a screen hands forward on navigation: the selection plus
    /// its current totals. A vanished session degrades to the empty payload,
    /// which the next stage resolves to defaults.
    #[instrument(skip(self))]
    pub async fn handoff_payload(&self, id: &SessionId) -> Result<StagePayload, SessionError> {
        debug!("Sending request");
        match self.inner.get(id.clone()).await? {
            Some(session) => Ok(StagePayload::snapshot(&session.selection)),
            None => Ok(StagePayload::default()),
        }
    }

    /// Discards a session, e.g. when the customer returns to product
    /// selection and starts over.
    #[instrument(skip(self))]
    pub async fn discard(&self, id: &SessionId) -> Result<(), SessionError> {
        debug!("Sending request");
        self.inner.remove(id.clone()).await
    }

    async fn view_action(
        &self,
        id: &SessionId,
        action: SessionAction,
    ) -> Result<OrderView, SessionError> {
        debug!("Sending request");
        match self.inner.perform_action(id.clone(), action).await {
            Ok(SessionActionResult::View(view)) => Ok(view),
            Ok(other) => Err(SessionError::ActorCommunication(format!(
                "Unexpected result: {:?}",
                other
            ))),
            Err(e) => Err(e),
        }
    }
}
