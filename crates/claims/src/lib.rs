//! Invoice-claim domain module.
//!
//! A claim is a partial billing event against a purchase order's contract
//! value. Claims reference orders weakly: the reference is held for lookup,
//! never ownership, and may dangle.

pub mod claim;

pub use claim::{ClaimDraft, ClaimId, InvoiceClaim};
