mod actor_framework;
mod app_system;
mod catalog;
mod celebration;
mod clients;
mod domain;
mod handoff;
mod pricing;
mod screens;
mod session;

#[cfg(test)]
mod mock_framework;

use tracing::{debug, info, Instrument};

use crate::app_system::{setup_tracing, CheckoutSystem};
use crate::celebration::{CelebrationTimer, CELEBRATION_DELAY};
use crate::domain::money;
use crate::screens::{BrowseScreen, CategoryTab, SummaryScreen};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting checkout demo");

    let system = CheckoutSystem::new();
    let client = system.session_client.clone();

    // Browse the catalog the way the product selection screen does.
    let span = tracing::info_span!("product_browsing");
    let product = async {
        let mut browse = BrowseScreen::default();
        info!(
            recommended = browse.visible_products().len(),
            "Showing recommended products"
        );

        browse.select_tab(CategoryTab::Todos);
        for (title, products) in browse.sections() {
            debug!(section = title, count = products.len(), "Section rendered");
        }

        browse.focus_search();
        browse.set_search("capp");
        let hits = browse.visible_products();
        info!(query = %browse.search_value, hits = hits.len(), "Search results");
        browse.blur_search();

        hits.into_iter().next().ok_or("No product matched the search")
    }
    .instrument(span)
    .await?;

    info!(
        product = %product.name,
        category = product.category.tag(),
        price = %money::display(&product.price),
        "Product picked"
    );

    // Customization screen.
    let span = tracing::info_span!("customization");
    let session_id = async {
        let id = client
            .choose_product(product.id)
            .await
            .map_err(|e| e.to_string())?;

        let view = client.order_view(&id).await.map_err(|e| e.to_string())?;
        info!(
            product = %view.product_name,
            base_price = %money::display(&view.base_price),
            "Customizing"
        );

        client.set_size(&id, "grande").await.map_err(|e| e.to_string())?;
        client.set_milk(&id, "soya").await.map_err(|e| e.to_string())?;
        client.toggle_extra(&id, "crema").await.map_err(|e| e.to_string())?;
        let view = client
            .toggle_extra(&id, "caramelo")
            .await
            .map_err(|e| e.to_string())?;

        info!(
            size = %view.size,
            milk = %view.milk,
            extras = view.extras.join(", "),
            subtotal = %money::display(&view.subtotal),
            "Customization complete"
        );
        Ok::<_, String>(id)
    }
    .instrument(span)
    .await?;

    // Navigate to the summary screen, carrying the selection forward.
    let span = tracing::info_span!("order_summary");
    let summary_id = async {
        let payload = client
            .handoff_payload(&session_id)
            .await
            .map_err(|e| e.to_string())?;
        debug!(
            subtotal = ?payload.subtotal,
            shipping = ?payload.shipping_cost,
            total = ?payload.total,
            "Handing off to summary"
        );
        client.discard(&session_id).await.map_err(|e| e.to_string())?;

        let id = client.enter_stage(payload).await.map_err(|e| e.to_string())?;

        let mut screen = SummaryScreen::default();
        screen.open_payment_sheet();
        client
            .set_payment_method(&id, "Efectivo", "Pago contra entrega")
            .await
            .map_err(|e| e.to_string())?;
        screen.close_payment_sheet();

        screen.open_edit_sheet();
        screen.close_edit_sheet();

        let view = client
            .set_delivery_option(&id, "rapida")
            .await
            .map_err(|e| e.to_string())?;
        info!(
            subtotal = %money::display(&view.subtotal),
            shipping = %money::display(&view.shipping_cost),
            total = %view.total_display(),
            "Summary ready"
        );

        // Advancing past the summary freezes the priced snapshot.
        let order = client.checkout(&id).await.map_err(|e| e.to_string())?;
        info!(
            order_number = %order.order_number,
            total = %money::display(&order.total),
            "Snapshot frozen"
        );
        Ok::<_, String>(id)
    }
    .instrument(span)
    .await?;

    // Confirmation screen.
    let span = tracing::info_span!("confirmation");
    async {
        let confirmation = client
            .confirm_order(&summary_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(
            order_number = %confirmation.order_number,
            product = %confirmation.product_name,
            payment = %confirmation.payment_summary,
            total_paid = %confirmation.total_paid_display(),
            "Purchase confirmed"
        );

        // The celebratory prompt surfaces a moment after confirmation and
        // would be canceled by leaving the screen earlier.
        let timer = CelebrationTimer::start(CELEBRATION_DELAY, || {
            info!("Celebration prompt shown");
        });
        tokio::time::sleep(CELEBRATION_DELAY + std::time::Duration::from_millis(200)).await;
        timer.cancel();

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    drop(client);
    system.shutdown().await?;

    info!("Checkout demo completed successfully");
    Ok(())
}
