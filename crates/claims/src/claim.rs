use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use claimboard_core::{DomainError, DomainResult, Entity, parse_iso_date};
use claimboard_orders::OrderId;

/// Invoice claim identifier (generated ids look like `INV-000007`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(pub String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A partial billing event against a purchase order.
///
/// `purchase_order_id` is a weak reference: it is never verified against the
/// order list, and consumers resolving it must tolerate a miss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceClaim {
    pub id: ClaimId,
    pub purchase_order_id: OrderId,
    pub amount: u64,
    pub claim_date: NaiveDate,
}

impl Entity for InvoiceClaim {
    type Id = ClaimId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Raw, un-trusted invoice-claim submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimDraft {
    pub purchase_order_id: String,
    pub amount: u64,
    pub claim_date: String,
}

impl ClaimDraft {
    pub fn new(
        purchase_order_id: impl Into<String>,
        amount: u64,
        claim_date: impl Into<String>,
    ) -> Self {
        Self {
            purchase_order_id: purchase_order_id.into(),
            amount,
            claim_date: claim_date.into(),
        }
    }

    /// Validate the draft and build the record under the given id.
    ///
    /// The order reference only has to be non-empty; whether it resolves is
    /// a rendering-time concern. On `Err` nothing was created.
    pub fn into_claim(self, id: ClaimId) -> DomainResult<InvoiceClaim> {
        let order_ref = self.purchase_order_id.trim();
        if order_ref.is_empty() {
            return Err(DomainError::validation(
                "claim must reference a purchase order",
            ));
        }
        if self.amount == 0 {
            return Err(DomainError::validation("claim amount must be positive"));
        }
        let claim_date = parse_iso_date(&self.claim_date)?;

        Ok(InvoiceClaim {
            id,
            purchase_order_id: OrderId::new(order_ref),
            amount: self.amount,
            claim_date,
        })
    }
}
