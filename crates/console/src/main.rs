//! Text front-end for the tracking core: seeds a store with the sample
//! dataset and renders every derived view once. Owns no domain logic.

use anyhow::Result;

use claimboard_claims::{ClaimDraft, ClaimId};
use claimboard_orders::{OrderDraft, OrderId};
use claimboard_reports::{
    average_contract_value, claim_listing, completion_percentage, global_metrics, order_progress,
    per_client_summary, per_month_summary,
};
use claimboard_store::{EntityStore, Tab};

fn seeded_store() -> Result<EntityStore> {
    let mut store = EntityStore::new();

    store.seed_order(
        OrderDraft::new("Apex Retail", 12, 120_000, "2026-01-12")
            .into_order(OrderId::from("PO-2026-001"))?,
    )?;
    store.seed_order(
        OrderDraft::new("Northstar Labs", 8, 84_000, "2026-01-24")
            .into_order(OrderId::from("PO-2026-002"))?,
    )?;

    store.seed_claim(
        ClaimDraft::new("PO-2026-001", 23_000, "2026-02-01").into_claim(ClaimId::from("INV-001"))?,
    )?;
    store.seed_claim(
        ClaimDraft::new("PO-2026-001", 18_000, "2026-02-15").into_claim(ClaimId::from("INV-002"))?,
    )?;
    store.seed_claim(
        ClaimDraft::new("PO-2026-002", 20_000, "2026-02-09").into_claim(ClaimId::from("INV-003"))?,
    )?;

    Ok(store)
}

fn render_dashboard(store: &EntityStore) {
    let orders = store.orders();
    let claims = store.claims();

    let metrics = global_metrics(orders, claims);
    println!("== Dashboard ==");
    println!(
        "contracts: {}   total value: {}   invoiced: {}   remaining: {}",
        metrics.contract_count,
        metrics.total_contract_value,
        metrics.total_invoiced,
        metrics.remaining
    );
    println!(
        "average contract value: {}   completion: {}%",
        average_contract_value(orders),
        completion_percentage(orders, claims)
    );

    println!("\n-- Clients --");
    for entry in per_client_summary(orders, claims) {
        println!(
            "{}: {} contract(s), value {}, invoiced {}, remaining {}",
            entry.client_name,
            entry.contract_count,
            entry.contract_value,
            entry.invoiced,
            entry.remaining
        );
    }

    println!("\n-- Monthly claims --");
    for entry in per_month_summary(claims) {
        println!("{}: {}", entry.month, entry.total);
    }
}

fn render_orders(store: &EntityStore) {
    println!("\n== Orders ==");
    if store.orders().is_empty() {
        println!("No purchase orders yet.");
        return;
    }
    for order in store.orders() {
        let progress = order_progress(order, store.claims());
        println!(
            "{} | {} | {} months | value {} | invoiced {} | remaining {} | {:.0}%",
            order.id,
            order.client_name,
            order.contract_length_months,
            order.contract_value,
            progress.invoiced,
            progress.remaining,
            progress.fraction
        );
    }
}

fn render_invoices(store: &EntityStore) {
    println!("\n== Invoices ==");
    if store.claims().is_empty() {
        println!("No invoice claims yet.");
        return;
    }
    for row in claim_listing(store.orders(), store.claims()) {
        println!(
            "{} | {} | {} | {}",
            row.claim.id, row.counterparty, row.claim.amount, row.claim.claim_date
        );
    }
}

fn main() -> Result<()> {
    claimboard_observability::init();
    tracing::info!("claimboard console starting");

    let mut store = seeded_store()?;

    // A live submit on top of the seeds, the way the forms would drive it.
    store.add_purchase_order(OrderDraft::new(
        "Horizon Foods",
        6,
        45_000,
        claimboard_core::today().to_string(),
    ))?;

    for tab in Tab::ALL {
        match tab {
            Tab::Dashboard => render_dashboard(&store),
            Tab::Orders => render_orders(&store),
            Tab::CreateOrder => {
                println!("\n== Create order ==");
                println!("clients on file: {}", store.client_names().join(", "));
            }
            Tab::Invoices => render_invoices(&store),
        }
    }

    Ok(())
}
