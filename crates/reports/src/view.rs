//! Query filtering, ordering, and claim-listing views.

use serde::{Deserialize, Serialize};

use claimboard_claims::InvoiceClaim;
use claimboard_orders::PurchaseOrder;

/// Order-list sort selection, as the view layer names it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    #[default]
    CompanyAsc,
    CompanyDesc,
    DateDesc,
    DateAsc,
}

impl SortOption {
    /// Parse a wire name (`company-asc`, `date-desc`, ...). Anything
    /// unrecognized behaves as the default ascending company sort.
    pub fn from_param(param: &str) -> Self {
        match param {
            "company-asc" => SortOption::CompanyAsc,
            "company-desc" => SortOption::CompanyDesc,
            "date-desc" => SortOption::DateDesc,
            "date-asc" => SortOption::DateAsc,
            _ => SortOption::default(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::CompanyAsc => "company-asc",
            SortOption::CompanyDesc => "company-desc",
            SortOption::DateDesc => "date-desc",
            SortOption::DateAsc => "date-asc",
        }
    }
}

/// Case-insensitive substring search over client name and order id.
///
/// The query is trimmed and lowercased; an empty query passes every order
/// through unchanged and in order. The input is never mutated.
pub fn filter_orders(orders: &[PurchaseOrder], query: &str) -> Vec<PurchaseOrder> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return orders.to_vec();
    }

    orders
        .iter()
        .filter(|order| {
            order.client_name.to_lowercase().contains(&q)
                || order.id.as_str().to_lowercase().contains(&q)
        })
        .cloned()
        .collect()
}

/// Exact-client dropdown filter; `None` selects every client.
pub fn filter_orders_by_client(
    orders: &[PurchaseOrder],
    client: Option<&str>,
) -> Vec<PurchaseOrder> {
    match client {
        None => orders.to_vec(),
        Some(name) => orders
            .iter()
            .filter(|order| order.client_name == name)
            .cloned()
            .collect(),
    }
}

/// Stable sort of a copy of the order list.
///
/// Company keys compare case-insensitively; date keys compare by
/// `sent_date`, which orders identically to the ISO date strings.
pub fn sort_orders(orders: &[PurchaseOrder], option: SortOption) -> Vec<PurchaseOrder> {
    let mut sorted = orders.to_vec();
    match option {
        SortOption::CompanyAsc => {
            sorted.sort_by(|a, b| fold(&a.client_name).cmp(&fold(&b.client_name)));
        }
        SortOption::CompanyDesc => {
            sorted.sort_by(|a, b| fold(&b.client_name).cmp(&fold(&a.client_name)));
        }
        SortOption::DateDesc => sorted.sort_by(|a, b| b.sent_date.cmp(&a.sent_date)),
        SortOption::DateAsc => sorted.sort_by(|a, b| a.sent_date.cmp(&b.sent_date)),
    }
    sorted
}

fn fold(name: &str) -> String {
    name.to_lowercase()
}

/// Claims ordered most recent first; ties keep their relative order.
pub fn sort_claims(claims: &[InvoiceClaim]) -> Vec<InvoiceClaim> {
    let mut sorted = claims.to_vec();
    sorted.sort_by(|a, b| b.claim_date.cmp(&a.claim_date));
    sorted
}

/// Claim listing row: the claim plus a resolved counterparty label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimView {
    pub claim: InvoiceClaim,
    pub counterparty: String,
}

/// Claims most recent first, each labeled `"<client> (<order id>)"`, or the
/// raw order id when the reference does not resolve.
pub fn claim_listing(orders: &[PurchaseOrder], claims: &[InvoiceClaim]) -> Vec<ClaimView> {
    sort_claims(claims)
        .into_iter()
        .map(|claim| {
            let counterparty = match orders.iter().find(|o| o.id == claim.purchase_order_id) {
                Some(order) => format!("{} ({})", order.client_name, order.id),
                None => claim.purchase_order_id.to_string(),
            };
            ClaimView { claim, counterparty }
        })
        .collect()
}
