//! Per-order and portfolio-wide invoicing arithmetic.

use serde::{Deserialize, Serialize};

use claimboard_claims::InvoiceClaim;
use claimboard_orders::{OrderId, PurchaseOrder};

/// Sum of claim amounts recorded against an order. 0 when none match.
pub fn total_invoiced(claims: &[InvoiceClaim], order_id: &OrderId) -> u64 {
    claims
        .iter()
        .filter(|claim| &claim.purchase_order_id == order_id)
        .map(|claim| claim.amount)
        .sum()
}

/// Contract value still to be invoiced, floored at zero.
///
/// Over-invoiced orders report 0, never a negative balance.
pub fn remaining(order: &PurchaseOrder, claims: &[InvoiceClaim]) -> u64 {
    order
        .contract_value
        .saturating_sub(total_invoiced(claims, &order.id))
}

/// Invoiced share of the contract as a percentage in `[0, 100]`.
///
/// Clamped high so an over-invoiced order cannot drive a progress bar past
/// full width. Zero denominators yield 0.
pub fn invoiced_fraction(order: &PurchaseOrder, claims: &[InvoiceClaim]) -> f64 {
    if order.contract_value == 0 {
        return 0.0;
    }
    let invoiced = total_invoiced(claims, &order.id) as f64;
    (invoiced / order.contract_value as f64 * 100.0).min(100.0)
}

/// Per-order card payload: invoiced, remaining, and progress fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderProgress {
    pub invoiced: u64,
    pub remaining: u64,
    pub fraction: f64,
}

pub fn order_progress(order: &PurchaseOrder, claims: &[InvoiceClaim]) -> OrderProgress {
    OrderProgress {
        invoiced: total_invoiced(claims, &order.id),
        remaining: remaining(order, claims),
        fraction: invoiced_fraction(order, claims),
    }
}

/// Header metrics across the whole portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalMetrics {
    pub contract_count: usize,
    pub total_contract_value: u64,
    pub total_invoiced: u64,
    pub remaining: u64,
}

/// Portfolio totals. `total_invoiced` counts every claim, including ones
/// whose order reference does not resolve; `remaining` is floored at zero.
pub fn global_metrics(orders: &[PurchaseOrder], claims: &[InvoiceClaim]) -> GlobalMetrics {
    let total_contract_value = orders.iter().map(|order| order.contract_value).sum::<u64>();
    let total_invoiced = claims.iter().map(|claim| claim.amount).sum::<u64>();
    GlobalMetrics {
        contract_count: orders.len(),
        total_contract_value,
        total_invoiced,
        remaining: total_contract_value.saturating_sub(total_invoiced),
    }
}

/// Rounded mean contract value, 0 for an empty portfolio.
pub fn average_contract_value(orders: &[PurchaseOrder]) -> u64 {
    if orders.is_empty() {
        return 0;
    }
    let total = orders.iter().map(|order| order.contract_value).sum::<u64>();
    (total as f64 / orders.len() as f64).round() as u64
}

/// Rounded percentage of the portfolio already invoiced, 0 when there is
/// no contract value. Not clamped: over-invoicing can read above 100.
pub fn completion_percentage(orders: &[PurchaseOrder], claims: &[InvoiceClaim]) -> u64 {
    let metrics = global_metrics(orders, claims);
    if metrics.total_contract_value == 0 {
        return 0;
    }
    (metrics.total_invoiced as f64 / metrics.total_contract_value as f64 * 100.0).round() as u64
}
