use serde::{Deserialize, Serialize};

/// Active dashboard tab.
///
/// Transitions are direct user-triggered switches with no guards and no
/// history; the view stays alive until the session ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    #[default]
    Dashboard,
    Orders,
    CreateOrder,
    Invoices,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 4] = [Tab::Dashboard, Tab::Orders, Tab::CreateOrder, Tab::Invoices];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Orders => "orders",
            Tab::CreateOrder => "create-order",
            Tab::Invoices => "invoices",
        }
    }
}

impl core::fmt::Display for Tab {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
