use std::sync::atomic::{AtomicU64, Ordering};

use tracing::info;

use crate::actor_framework::Entity;
use crate::domain::{PricedOrder, Selection};
use crate::handoff::StagePayload;
use crate::pricing;

use super::actions::{SessionAction, SessionActionResult};
use super::error::SessionError;
use super::views::{ConfirmationView, OrderView};

/// Order numbers only need to be unique per confirmed order. The sequence
/// starts at the reference app's placeholder number.
static ORDER_COUNTER: AtomicU64 = AtomicU64::new(2847);

fn next_order_number() -> String {
    format!("#A-{}", ORDER_COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Where a session stands in the checkout flow.
///
/// There is no `Empty` variant: "no session yet" is the absence of a session
/// in the store, and creation always lands in `ProductChosen`.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    ProductChosen,
    Customizing,
    /// The summary stage was advanced past; the priced snapshot is frozen.
    ReadyToConfirm(PricedOrder),
    /// Terminal. The snapshot is historical record and is never mutated.
    Confirmed(PricedOrder),
}

/// One customer's checkout session.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutSession {
    #[allow(dead_code)]
    pub id: String,
    pub stage: Stage,
    pub selection: Selection,
}

impl CheckoutSession {
    fn freeze(&self) -> PricedOrder {
        let quote = pricing::quote(&self.selection);
        PricedOrder {
            order_number: next_order_number(),
            selection: self.selection.clone(),
            subtotal: quote.subtotal,
            shipping_cost: quote.shipping_cost,
            total: quote.total,
        }
    }

    /// Applies a selection edit and answers with recomputed totals.
    ///
    /// Editing in `ReadyToConfirm` discards the frozen snapshot and drops
    /// back to `Customizing`; a confirmed order rejects the edit.
    fn mutate(
        &mut self,
        edit: impl FnOnce(&mut Selection),
    ) -> Result<SessionActionResult, SessionError> {
        match &self.stage {
            Stage::Confirmed(order) => {
                return Err(SessionError::AlreadyConfirmed(order.order_number.clone()));
            }
            Stage::ReadyToConfirm(order) => {
                info!(order_number = %order.order_number, "Discarding frozen snapshot for edit");
            }
            Stage::ProductChosen | Stage::Customizing => {}
        }
        edit(&mut self.selection);
        self.stage = Stage::Customizing;
        Ok(SessionActionResult::View(OrderView::from_selection(
            &self.selection,
        )))
    }

    fn view(&self) -> OrderView {
        match &self.stage {
            Stage::ReadyToConfirm(order) | Stage::Confirmed(order) => OrderView::from_order(order),
            _ => OrderView::from_selection(&self.selection),
        }
    }
}

impl Entity for CheckoutSession {
    type Id = String;
    type CreatePayload = StagePayload;
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Error = SessionError;

    /// Creates a session by resolving the handoff payload.
    ///
    /// Every payload field defaults independently, so entering a stage with
    /// no prior state silently seeds the fallback product. Creation cannot
    /// fail.
    fn from_create(id: String, payload: StagePayload) -> Result<Self, SessionError> {
        let selection = payload.resolve();
        info!(
            session_id = %id,
            product = %selection.product.name,
            "Session seeded"
        );
        Ok(Self {
            id,
            stage: Stage::ProductChosen,
            selection,
        })
    }

    fn handle_action(&mut self, action: SessionAction) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::SetSize(key) => self.mutate(|s| s.size = key),
            SessionAction::SetMilk(key) => self.mutate(|s| s.milk = key),
            SessionAction::ToggleExtra(key) => self.mutate(|s| s.toggle_extra(&key)),
            SessionAction::SetDeliveryOption(key) => self.mutate(|s| s.delivery_option = key),
            SessionAction::SetPaymentMethod(payment) => {
                self.mutate(|s| s.payment_method = payment)
            }
            SessionAction::View => Ok(SessionActionResult::View(self.view())),
            SessionAction::Checkout => match &self.stage {
                Stage::Confirmed(order) => {
                    Err(SessionError::AlreadyConfirmed(order.order_number.clone()))
                }
                Stage::ReadyToConfirm(order) => {
                    Ok(SessionActionResult::Checkout(order.clone()))
                }
                Stage::ProductChosen | Stage::Customizing => {
                    let order = self.freeze();
                    info!(
                        order_number = %order.order_number,
                        total = %order.total,
                        "Snapshot frozen"
                    );
                    self.stage = Stage::ReadyToConfirm(order.clone());
                    Ok(SessionActionResult::Checkout(order))
                }
            },
            SessionAction::Confirm => {
                let order = match &self.stage {
                    Stage::Confirmed(order) => order.clone(),
                    Stage::ReadyToConfirm(order) => order.clone(),
                    // Direct navigation to the confirmation stage freezes on
                    // the spot rather than failing.
                    Stage::ProductChosen | Stage::Customizing => self.freeze(),
                };
                if !matches!(self.stage, Stage::Confirmed(_)) {
                    info!(order_number = %order.order_number, "Order confirmed");
                    self.stage = Stage::Confirmed(order.clone());
                }
                Ok(SessionActionResult::Confirm(ConfirmationView::from_order(
                    &order,
                )))
            }
        }
    }
}
