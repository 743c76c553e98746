//! Derived views over the order and claim collections.
//!
//! Everything here is a pure function of the snapshots it is handed:
//! deterministic, side-effect-free, and recomputed in full on every call.
//! The presentation layer renders the returned records; nothing in this
//! crate formats currency or dates.

pub mod aggregate;
pub mod rollup;
pub mod view;

pub use aggregate::{
    GlobalMetrics, OrderProgress, average_contract_value, completion_percentage, global_metrics,
    invoiced_fraction, order_progress, remaining, total_invoiced,
};
pub use rollup::{ClientSummary, MonthSummary, per_client_summary, per_month_summary};
pub use view::{
    ClaimView, SortOption, claim_listing, filter_orders, filter_orders_by_client, sort_claims,
    sort_orders,
};
