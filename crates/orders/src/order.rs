use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use claimboard_core::{DomainError, DomainResult, Entity, parse_iso_date};

/// Purchase order identifier.
///
/// Generated ids look like `PO-000042`, but the type accepts any non-empty
/// text: claims hold these as weak references and imported datasets carry
/// their own numbering schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for OrderId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// A client contract to be invoiced over time.
///
/// Immutable once created; monetary values are minor units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: OrderId,
    pub client_name: String,
    pub contract_length_months: u32,
    pub contract_value: u64,
    pub sent_date: NaiveDate,
}

impl Entity for PurchaseOrder {
    type Id = OrderId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Raw, un-trusted purchase-order submission.
///
/// Field values arrive as the presentation layer captured them; validation
/// and date parsing happen here, at the store boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub client_name: String,
    pub contract_length_months: u32,
    pub contract_value: u64,
    pub sent_date: String,
}

impl OrderDraft {
    pub fn new(
        client_name: impl Into<String>,
        contract_length_months: u32,
        contract_value: u64,
        sent_date: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            contract_length_months,
            contract_value,
            sent_date: sent_date.into(),
        }
    }

    /// Validate the draft and build the record under the given id.
    ///
    /// The client name is stored trimmed. On `Err` nothing was created.
    pub fn into_order(self, id: OrderId) -> DomainResult<PurchaseOrder> {
        let client_name = self.client_name.trim();
        if client_name.is_empty() {
            return Err(DomainError::validation("client name must not be blank"));
        }
        if self.contract_length_months == 0 {
            return Err(DomainError::validation(
                "contract length must be a positive number of months",
            ));
        }
        if self.contract_value == 0 {
            return Err(DomainError::validation("contract value must be positive"));
        }
        let sent_date = parse_iso_date(&self.sent_date)?;

        Ok(PurchaseOrder {
            id,
            client_name: client_name.to_owned(),
            contract_length_months: self.contract_length_months,
            contract_value: self.contract_value,
            sent_date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> OrderDraft {
        OrderDraft::new("Apex Retail", 12, 120_000, "2026-01-12")
    }

    #[test]
    fn valid_draft_becomes_an_order() {
        let order = draft().into_order(OrderId::from("PO-000001")).unwrap();
        assert_eq!(order.id.as_str(), "PO-000001");
        assert_eq!(order.client_name, "Apex Retail");
        assert_eq!(order.contract_length_months, 12);
        assert_eq!(order.contract_value, 120_000);
        assert_eq!(order.sent_date.to_string(), "2026-01-12");
    }

    #[test]
    fn client_name_is_trimmed() {
        let mut d = draft();
        d.client_name = "  Northstar Labs ".to_owned();
        let order = d.into_order(OrderId::from("PO-000002")).unwrap();
        assert_eq!(order.client_name, "Northstar Labs");
    }

    #[test]
    fn blank_client_name_is_rejected() {
        let mut d = draft();
        d.client_name = "   ".to_owned();
        let err = d.into_order(OrderId::from("PO-000003")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn zero_length_and_zero_value_are_rejected() {
        let mut d = draft();
        d.contract_length_months = 0;
        assert!(matches!(
            d.into_order(OrderId::from("PO-000004")),
            Err(DomainError::Validation(_))
        ));

        let mut d = draft();
        d.contract_value = 0;
        assert!(matches!(
            d.into_order(OrderId::from("PO-000005")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn malformed_sent_date_is_rejected() {
        let mut d = draft();
        d.sent_date = "Jan 12, 2026".to_owned();
        assert!(matches!(
            d.into_order(OrderId::from("PO-000006")),
            Err(DomainError::InvalidDate(_))
        ));
    }
}
