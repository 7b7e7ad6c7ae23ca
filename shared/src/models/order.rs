//! Order Model
//!
//! An order is created once by an attendant submission (items, shared
//! selections and total frozen together) and after that mutates only
//! through status transitions and the printed flag. Orders are never
//! deleted; they are the audit trail.

use serde::{Deserialize, Serialize};

/// Marmita size
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum MarmitaSize {
    P,
    #[default]
    M,
    G,
}

/// Counter pickup vs. delivery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum OrderType {
    Balcao,
    Entrega,
}

/// Order lifecycle status
///
/// Linear: pending → preparing → ready → delivered. No backward
/// transitions, no skipping. `delivered` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
    Delivered,
}

impl OrderStatus {
    /// The next status in the lifecycle
    ///
    /// `delivered` maps to itself: reaching the terminal state again
    /// is a safe no-op, not an error.
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::Preparing,
            Self::Preparing => Self::Ready,
            Self::Ready => Self::Delivered,
            Self::Delivered => Self::Delivered,
        }
    }

    /// Whether a requested transition is legal
    ///
    /// Exactly the adjacent forward step is accepted, plus the
    /// idempotent terminal no-op. Backward and skipping transitions
    /// are rejected by the server.
    pub fn can_transition_to(self, target: Self) -> bool {
        target == self.next()
    }

    /// Statuses that make up the kitchen's live queue
    pub fn is_active(self) -> bool {
        !matches!(self, Self::Delivered)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Delivered => "delivered",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "preparing" => Ok(Self::Preparing),
            "ready" => Ok(Self::Ready),
            "delivered" => Ok(Self::Delivered),
            other => Err(format!("unknown order status: {other}")),
        }
    }
}

/// A single marmita in an order
///
/// `employee_name` is set exactly when the enclosing order is a
/// company order (each marmita attributed for internal billing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub size: MarmitaSize,
    /// Protein name (resolved against the catalog at pricing time)
    pub protein: String,
    /// Accompaniment names, never empty
    pub accompaniments: Vec<String>,
    pub employee_name: Option<String>,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    /// Monotonically increasing, unique across all orders ever created
    pub order_number: i64,
    pub customer_name: String,
    pub is_company_order: bool,
    pub order_type: OrderType,
    /// Required iff order_type is ENTREGA
    pub delivery_address: Option<String>,
    pub items: Vec<CartItem>,
    /// Shared salad selections (names)
    pub salads: Vec<String>,
    /// Shared beverage selections (names)
    pub beverages: Vec<String>,
    pub observations: Option<String>,
    /// Frozen at creation; later catalog changes never touch it
    pub total_price: f64,
    pub status: OrderStatus,
    pub attendant_code: String,
    pub attendant_name: String,
    pub printed: bool,
    pub created_at: i64,
}

/// Create order payload (attendant submission)
///
/// Any client-computed total is ignored; the server recomputes and
/// freezes `total_price` against the current catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub customer_name: String,
    #[serde(default)]
    pub is_company_order: bool,
    pub order_type: OrderType,
    pub delivery_address: Option<String>,
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub salads: Vec<String>,
    #[serde(default)]
    pub beverages: Vec<String>,
    pub observations: Option<String>,
    pub attendant_code: String,
    pub attendant_name: String,
}

/// Update status payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_is_linear() {
        assert_eq!(OrderStatus::Pending.next(), OrderStatus::Preparing);
        assert_eq!(OrderStatus::Preparing.next(), OrderStatus::Ready);
        assert_eq!(OrderStatus::Ready.next(), OrderStatus::Delivered);
    }

    #[test]
    fn three_steps_from_pending_is_ready() {
        let status = OrderStatus::Pending.next().next().next();
        assert_eq!(status, OrderStatus::Delivered);
        assert_eq!(OrderStatus::Pending.next().next(), OrderStatus::Ready);
    }

    #[test]
    fn delivered_is_idempotent_terminal() {
        assert_eq!(OrderStatus::Delivered.next(), OrderStatus::Delivered);
        assert!(OrderStatus::Delivered.can_transition_to(OrderStatus::Delivered));
    }

    #[test]
    fn backward_and_skipping_transitions_are_illegal() {
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Preparing));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Delivered));
        assert!(!OrderStatus::Delivered.can_transition_to(OrderStatus::Ready));
        assert!(!OrderStatus::Pending.can_transition_to(OrderStatus::Pending));
    }

    #[test]
    fn only_delivered_leaves_the_kitchen_queue() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Preparing.is_active());
        assert!(OrderStatus::Ready.is_active());
        assert!(!OrderStatus::Delivered.is_active());
    }

    #[test]
    fn status_serde_round_trip() {
        let json = serde_json::to_string(&OrderStatus::Preparing).unwrap();
        assert_eq!(json, "\"preparing\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::Preparing);
    }

    #[test]
    fn order_type_uses_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderType::Balcao).unwrap(),
            "\"BALCAO\""
        );
        assert_eq!(
            serde_json::to_string(&OrderType::Entrega).unwrap(),
            "\"ENTREGA\""
        );
    }
}
