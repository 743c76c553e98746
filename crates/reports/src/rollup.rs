//! Group-by rollups: per-client and per-month summaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use claimboard_claims::InvoiceClaim;
use claimboard_core::month_key;
use claimboard_orders::PurchaseOrder;

/// Rollup entry for one distinct client name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSummary {
    pub client_name: String,
    pub contract_count: usize,
    pub contract_value: u64,
    pub invoiced: u64,
    pub remaining: u64,
}

/// One entry per distinct client name (case-sensitive, untrimmed exact
/// match), ascending lexicographic by name.
///
/// Claim amounts are attributed through the order list; a claim whose order
/// reference does not resolve belongs to no client and is skipped here.
pub fn per_client_summary(
    orders: &[PurchaseOrder],
    claims: &[InvoiceClaim],
) -> Vec<ClientSummary> {
    let mut by_client: BTreeMap<&str, ClientSummary> = BTreeMap::new();

    for order in orders {
        let entry = by_client
            .entry(order.client_name.as_str())
            .or_insert_with(|| ClientSummary {
                client_name: order.client_name.clone(),
                contract_count: 0,
                contract_value: 0,
                invoiced: 0,
                remaining: 0,
            });
        entry.contract_count += 1;
        entry.contract_value += order.contract_value;
    }

    for claim in claims {
        let Some(order) = orders.iter().find(|o| o.id == claim.purchase_order_id) else {
            continue;
        };
        if let Some(entry) = by_client.get_mut(order.client_name.as_str()) {
            entry.invoiced += claim.amount;
        }
    }

    let mut summaries: Vec<ClientSummary> = by_client.into_values().collect();
    for entry in &mut summaries {
        entry.remaining = entry.contract_value.saturating_sub(entry.invoiced);
    }
    summaries
}

/// Rollup entry for one calendar month of claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: String,
    pub total: u64,
}

/// Claim totals bucketed by `YYYY-MM` month key, most recent month first.
///
/// Every claim lands in exactly one bucket.
pub fn per_month_summary(claims: &[InvoiceClaim]) -> Vec<MonthSummary> {
    let mut by_month: BTreeMap<String, u64> = BTreeMap::new();
    for claim in claims {
        *by_month.entry(month_key(claim.claim_date)).or_default() += claim.amount;
    }

    by_month
        .into_iter()
        .rev()
        .map(|(month, total)| MonthSummary { month, total })
        .collect()
}
