use std::collections::BTreeSet;

use claimboard_claims::{ClaimDraft, ClaimId, InvoiceClaim};
use claimboard_core::{DomainError, DomainResult, IdGenerator, IdPrefix, SequenceIdGenerator};
use claimboard_orders::{OrderDraft, OrderId, PurchaseOrder};

/// In-memory store holding both entity collections, most recent first.
///
/// Creation is the only mutation: records are validated, assigned a fresh
/// id, and prepended. A failed submit leaves the store untouched.
pub struct EntityStore {
    orders: Vec<PurchaseOrder>,
    claims: Vec<InvoiceClaim>,
    ids: Box<dyn IdGenerator>,
}

impl EntityStore {
    /// Empty store with the deterministic sequence id strategy.
    pub fn new() -> Self {
        Self::with_id_generator(Box::new(SequenceIdGenerator::new()))
    }

    /// Empty store with an injected id strategy.
    pub fn with_id_generator(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            orders: Vec::new(),
            claims: Vec::new(),
            ids,
        }
    }

    /// Validate and record a purchase order submission.
    ///
    /// Returns the stored record; on `Err` no record was created.
    pub fn add_purchase_order(&mut self, draft: OrderDraft) -> DomainResult<PurchaseOrder> {
        let id = OrderId::new(self.ids.next_id(IdPrefix::Po));
        if self.find_order(&id).is_some() {
            return Err(DomainError::conflict(format!("order id {id} already taken")));
        }

        let order = match draft.into_order(id) {
            Ok(order) => order,
            Err(err) => {
                tracing::warn!(%err, "purchase order submission rejected");
                return Err(err);
            }
        };

        tracing::info!(order_id = %order.id, client = %order.client_name, "purchase order recorded");
        self.orders.insert(0, order.clone());
        Ok(order)
    }

    /// Validate and record an invoice claim submission.
    ///
    /// The referenced order id is deliberately not resolved here: a claim
    /// against an unknown order is accepted and rendered with a fallback
    /// label downstream.
    pub fn add_invoice_claim(&mut self, draft: ClaimDraft) -> DomainResult<InvoiceClaim> {
        let id = ClaimId::new(self.ids.next_id(IdPrefix::Inv));
        if self.claims.iter().any(|c| c.id == id) {
            return Err(DomainError::conflict(format!("claim id {id} already taken")));
        }

        let claim = match draft.into_claim(id) {
            Ok(claim) => claim,
            Err(err) => {
                tracing::warn!(%err, "invoice claim submission rejected");
                return Err(err);
            }
        };

        tracing::info!(claim_id = %claim.id, order_id = %claim.purchase_order_id, "invoice claim recorded");
        self.claims.insert(0, claim.clone());
        Ok(claim)
    }

    /// Insert an already-built order record, preserving submission order.
    ///
    /// Used to seed a store with an existing dataset. The record must still
    /// satisfy the store invariants.
    pub fn seed_order(&mut self, order: PurchaseOrder) -> DomainResult<()> {
        if order.contract_value == 0 || order.contract_length_months == 0 {
            return Err(DomainError::validation("seeded order violates invariants"));
        }
        if self.find_order(&order.id).is_some() {
            return Err(DomainError::conflict(format!(
                "order id {} already taken",
                order.id
            )));
        }
        self.orders.push(order);
        Ok(())
    }

    /// Insert an already-built claim record, preserving submission order.
    pub fn seed_claim(&mut self, claim: InvoiceClaim) -> DomainResult<()> {
        if claim.amount == 0 {
            return Err(DomainError::validation("seeded claim violates invariants"));
        }
        if self.claims.iter().any(|c| c.id == claim.id) {
            return Err(DomainError::conflict(format!(
                "claim id {} already taken",
                claim.id
            )));
        }
        self.claims.push(claim);
        Ok(())
    }

    /// Read-only snapshot of the orders, most recent first.
    pub fn orders(&self) -> &[PurchaseOrder] {
        &self.orders
    }

    /// Read-only snapshot of the claims, most recent first.
    pub fn claims(&self) -> &[InvoiceClaim] {
        &self.claims
    }

    /// Resolve an order by id.
    pub fn find_order(&self, id: &OrderId) -> Option<&PurchaseOrder> {
        self.orders.iter().find(|order| &order.id == id)
    }

    /// Distinct client names, sorted ascending (filter dropdown contents).
    pub fn client_names(&self) -> Vec<String> {
        self.orders
            .iter()
            .map(|order| order.client_name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityStore")
            .field("orders", &self.orders.len())
            .field("claims", &self.claims.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_draft(client: &str) -> OrderDraft {
        OrderDraft::new(client, 12, 120_000, "2026-01-12")
    }

    #[test]
    fn submissions_are_prepended_most_recent_first() {
        let mut store = EntityStore::new();
        store.add_purchase_order(order_draft("Apex Retail")).unwrap();
        store.add_purchase_order(order_draft("Northstar Labs")).unwrap();

        let clients: Vec<_> = store.orders().iter().map(|o| o.client_name.as_str()).collect();
        assert_eq!(clients, ["Northstar Labs", "Apex Retail"]);
    }

    #[test]
    fn rejected_submission_leaves_the_store_unchanged() {
        let mut store = EntityStore::new();
        store.add_purchase_order(order_draft("Apex Retail")).unwrap();

        let err = store
            .add_purchase_order(OrderDraft::new("", 12, 1_000, "2026-01-01"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(store.orders().len(), 1);
    }

    #[test]
    fn generated_order_ids_are_unique_and_sequence_shaped() {
        let mut store = EntityStore::new();
        let a = store.add_purchase_order(order_draft("Apex Retail")).unwrap();
        let b = store.add_purchase_order(order_draft("Apex Retail")).unwrap();
        assert_ne!(a.id, b.id);
        assert!(a.id.as_str().starts_with("PO-"));
    }

    #[test]
    fn claims_may_reference_unknown_orders() {
        let mut store = EntityStore::new();
        let claim = store
            .add_invoice_claim(ClaimDraft::new("PO-NONEXISTENT", 50, "2026-03-01"))
            .unwrap();
        assert_eq!(claim.purchase_order_id.as_str(), "PO-NONEXISTENT");
        assert_eq!(store.claims().len(), 1);
        assert!(store.find_order(&claim.purchase_order_id).is_none());
    }

    #[test]
    fn client_names_are_distinct_and_sorted() {
        let mut store = EntityStore::new();
        store.add_purchase_order(order_draft("Northstar Labs")).unwrap();
        store.add_purchase_order(order_draft("Apex Retail")).unwrap();
        store.add_purchase_order(order_draft("Northstar Labs")).unwrap();

        assert_eq!(store.client_names(), ["Apex Retail", "Northstar Labs"]);
    }

    #[test]
    fn seeding_rejects_duplicate_ids() {
        let mut store = EntityStore::new();
        let order = order_draft("Apex Retail")
            .into_order(OrderId::from("PO-2026-001"))
            .unwrap();
        store.seed_order(order.clone()).unwrap();
        assert!(matches!(store.seed_order(order), Err(DomainError::Conflict(_))));
    }
}
