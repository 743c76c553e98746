//! Black-box flow: drive a store the way the forms would, then check every
//! derived view the dashboard renders.

use claimboard_claims::{ClaimDraft, ClaimId};
use claimboard_orders::{OrderDraft, OrderId};
use claimboard_reports::{
    claim_listing, completion_percentage, filter_orders, global_metrics, order_progress,
    per_client_summary, per_month_summary,
};
use claimboard_store::EntityStore;

fn seeded_store() -> EntityStore {
    let mut store = EntityStore::new();

    store
        .seed_order(
            OrderDraft::new("Apex Retail", 12, 120_000, "2026-01-12")
                .into_order(OrderId::from("PO-2026-001"))
                .unwrap(),
        )
        .unwrap();
    store
        .seed_order(
            OrderDraft::new("Northstar Labs", 8, 84_000, "2026-01-24")
                .into_order(OrderId::from("PO-2026-002"))
                .unwrap(),
        )
        .unwrap();

    for (id, order_id, amount, date) in [
        ("INV-001", "PO-2026-001", 23_000u64, "2026-02-01"),
        ("INV-002", "PO-2026-001", 18_000, "2026-02-15"),
        ("INV-003", "PO-2026-002", 20_000, "2026-02-09"),
    ] {
        store
            .seed_claim(
                ClaimDraft::new(order_id, amount, date)
                    .into_claim(ClaimId::from(id))
                    .unwrap(),
            )
            .unwrap();
    }

    store
}

#[test]
fn dashboard_metrics_reflect_the_seeded_dataset() {
    let store = seeded_store();
    let metrics = global_metrics(store.orders(), store.claims());

    assert_eq!(metrics.contract_count, 2);
    assert_eq!(metrics.total_contract_value, 204_000);
    assert_eq!(metrics.total_invoiced, 61_000);
    assert_eq!(metrics.remaining, 143_000);
    assert_eq!(completion_percentage(store.orders(), store.claims()), 30);
}

#[test]
fn submit_then_rerender_stays_consistent() {
    let mut store = seeded_store();

    let order = store
        .add_purchase_order(OrderDraft::new("Horizon Foods", 6, 45_000, "2026-03-02"))
        .unwrap();
    assert_eq!(store.orders()[0].id, order.id);

    store
        .add_invoice_claim(ClaimDraft::new(order.id.as_str(), 9_000, "2026-03-05"))
        .unwrap();

    let metrics = global_metrics(store.orders(), store.claims());
    assert_eq!(metrics.contract_count, 3);
    assert_eq!(metrics.total_contract_value, 249_000);
    assert_eq!(metrics.total_invoiced, 70_000);

    let progress = order_progress(&store.orders()[0], store.claims());
    assert_eq!(progress.invoiced, 9_000);
    assert_eq!(progress.remaining, 36_000);
    assert_eq!(progress.fraction, 20.0);
}

#[test]
fn rejected_submissions_change_nothing_anywhere() {
    let mut store = seeded_store();
    let before = global_metrics(store.orders(), store.claims());

    assert!(store
        .add_purchase_order(OrderDraft::new("", 12, 1_000, "2026-01-01"))
        .is_err());
    assert!(store
        .add_invoice_claim(ClaimDraft::new("PO-2026-001", 0, "2026-03-01"))
        .is_err());

    assert_eq!(global_metrics(store.orders(), store.claims()), before);
    assert_eq!(store.orders().len(), 2);
    assert_eq!(store.claims().len(), 3);
}

#[test]
fn client_rollup_and_search_agree_with_the_store() {
    let store = seeded_store();

    let summaries = per_client_summary(store.orders(), store.claims());
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].client_name, "Apex Retail");
    assert_eq!(summaries[0].invoiced, 41_000);
    assert_eq!(summaries[0].remaining, 79_000);
    assert_eq!(summaries[1].client_name, "Northstar Labs");
    assert_eq!(summaries[1].remaining, 64_000);

    let hits = filter_orders(store.orders(), "northstar");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id.as_str(), "PO-2026-002");
}

#[test]
fn monthly_rollup_orders_recent_months_first() {
    let store = seeded_store();
    let months = per_month_summary(store.claims());

    assert_eq!(months.len(), 1);
    assert_eq!(months[0].month, "2026-02");
    assert_eq!(months[0].total, 61_000);

    let mut store = store;
    store
        .add_invoice_claim(ClaimDraft::new("PO-2026-001", 5_000, "2026-01-20"))
        .unwrap();
    let months = per_month_summary(store.claims());
    assert_eq!(months[0].month, "2026-02");
    assert_eq!(months[1].month, "2026-01");
    assert_eq!(months[1].total, 5_000);
}

#[test]
fn dangling_claim_renders_with_the_raw_order_id() {
    let mut store = seeded_store();
    store
        .add_invoice_claim(ClaimDraft::new("PO-NONEXISTENT", 50, "2026-03-01"))
        .unwrap();

    let listing = claim_listing(store.orders(), store.claims());
    let dangling = listing
        .iter()
        .find(|row| row.claim.purchase_order_id.as_str() == "PO-NONEXISTENT")
        .unwrap();
    assert_eq!(dangling.counterparty, "PO-NONEXISTENT");

    // Resolved claims still get the client label.
    let resolved = listing
        .iter()
        .find(|row| row.claim.id.as_str() == "INV-003")
        .unwrap();
    assert_eq!(resolved.counterparty, "Northstar Labs (PO-2026-002)");
}
