//! Cart building and submission validation
//!
//! [`CartBuilder`] accumulates marmitas before submission, validating
//! completeness item by item. [`validate_draft`] re-runs the same
//! rules server-side on the submitted payload, plus the order-level
//! ones (customer name, delivery address, non-empty cart), so a
//! hand-crafted request cannot bypass the builder.

use shared::models::{CartItem, MarmitaSize, OrderDraft, OrderType};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("marmita needs a protein")]
    MissingProtein,
    #[error("marmita needs at least one accompaniment")]
    NoAccompaniments,
    #[error("company orders need an employee name per marmita")]
    MissingEmployeeName,
    #[error("employee names only apply to company orders")]
    UnexpectedEmployeeName,
    #[error("customer name is required")]
    MissingCustomerName,
    #[error("order needs at least one marmita")]
    EmptyCart,
    #[error("delivery orders need a delivery address")]
    MissingDeliveryAddress,
}

/// In-progress marmita
///
/// Defaults match the screen the attendant starts from: size M,
/// nothing selected.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub size: MarmitaSize,
    pub protein: Option<String>,
    pub accompaniments: Vec<String>,
    pub employee_name: Option<String>,
}

/// Attendant-side cart state
///
/// Has no server identity until submission; the server only ever sees
/// the finished [`OrderDraft`].
#[derive(Debug, Clone)]
pub struct CartBuilder {
    is_company_order: bool,
    draft: ItemDraft,
    items: Vec<CartItem>,
}

impl CartBuilder {
    pub fn new(is_company_order: bool) -> Self {
        Self {
            is_company_order,
            draft: ItemDraft::default(),
            items: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: MarmitaSize) {
        self.draft.size = size;
    }

    pub fn set_protein(&mut self, protein: impl Into<String>) {
        self.draft.protein = Some(protein.into());
    }

    /// Toggle an accompaniment on the active draft
    pub fn toggle_accompaniment(&mut self, name: &str) {
        if let Some(pos) = self.draft.accompaniments.iter().position(|a| a == name) {
            self.draft.accompaniments.remove(pos);
        } else {
            self.draft.accompaniments.push(name.to_string());
        }
    }

    pub fn set_employee_name(&mut self, name: impl Into<String>) {
        self.draft.employee_name = Some(name.into());
    }

    pub fn draft(&self) -> &ItemDraft {
        &self.draft
    }

    /// Commit the active draft as the next marmita
    ///
    /// On rejection the cart and the draft are left untouched so the
    /// attendant can fix the marmita and retry. On success the item is
    /// appended at the end (the kitchen ticket keeps this order) and
    /// the draft resets to defaults.
    pub fn add_item(&mut self) -> Result<(), CartError> {
        let protein = match self.draft.protein.as_deref() {
            Some(p) if !p.trim().is_empty() => p.to_string(),
            _ => return Err(CartError::MissingProtein),
        };
        if self.draft.accompaniments.is_empty() {
            return Err(CartError::NoAccompaniments);
        }
        let employee_name = if self.is_company_order {
            match self.draft.employee_name.as_deref() {
                Some(n) if !n.trim().is_empty() => Some(n.trim().to_string()),
                _ => return Err(CartError::MissingEmployeeName),
            }
        } else {
            None
        };

        let draft = std::mem::take(&mut self.draft);
        self.items.push(CartItem {
            size: draft.size,
            protein,
            accompaniments: draft.accompaniments,
            employee_name,
        });
        Ok(())
    }

    /// Remove a committed marmita by position
    ///
    /// Remaining items keep their relative order.
    pub fn remove_item(&mut self, index: usize) -> Option<CartItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn into_items(self) -> Vec<CartItem> {
        self.items
    }
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Server-side validation of a submitted order draft
///
/// Runs before any state mutation; a rejected draft leaves nothing
/// behind.
pub fn validate_draft(draft: &OrderDraft) -> Result<(), CartError> {
    if is_blank(&draft.customer_name) {
        return Err(CartError::MissingCustomerName);
    }
    if draft.items.is_empty() {
        return Err(CartError::EmptyCart);
    }
    for item in &draft.items {
        if is_blank(&item.protein) {
            return Err(CartError::MissingProtein);
        }
        if item.accompaniments.is_empty() {
            return Err(CartError::NoAccompaniments);
        }
        let has_employee_name = item.employee_name.as_deref().is_some_and(|n| !is_blank(n));
        if draft.is_company_order && !has_employee_name {
            return Err(CartError::MissingEmployeeName);
        }
        if !draft.is_company_order && item.employee_name.is_some() {
            return Err(CartError::UnexpectedEmployeeName);
        }
    }
    if draft.order_type == OrderType::Entrega
        && !draft
            .delivery_address
            .as_deref()
            .is_some_and(|a| !is_blank(a))
    {
        return Err(CartError::MissingDeliveryAddress);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_builder() -> CartBuilder {
        let mut cart = CartBuilder::new(false);
        cart.set_protein("Frango");
        cart.toggle_accompaniment("Arroz");
        cart
    }

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Maria".into(),
            is_company_order: false,
            order_type: OrderType::Balcao,
            delivery_address: None,
            items: vec![CartItem {
                size: MarmitaSize::M,
                protein: "Frango".into(),
                accompaniments: vec!["Arroz".into()],
                employee_name: None,
            }],
            salads: vec![],
            beverages: vec![],
            observations: None,
            attendant_code: "01".into(),
            attendant_name: "Ana".into(),
        }
    }

    #[test]
    fn rejects_marmita_without_protein() {
        let mut cart = CartBuilder::new(false);
        cart.toggle_accompaniment("Arroz");
        assert_eq!(cart.add_item().unwrap_err(), CartError::MissingProtein);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn rejects_marmita_without_accompaniments_then_accepts_with_one() {
        let mut cart = CartBuilder::new(false);
        cart.set_protein("Frango");
        assert_eq!(cart.add_item().unwrap_err(), CartError::NoAccompaniments);
        cart.toggle_accompaniment("Feijão");
        assert!(cart.add_item().is_ok());
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn company_order_requires_employee_name() {
        let mut cart = CartBuilder::new(true);
        cart.set_protein("Carne");
        cart.toggle_accompaniment("Arroz");
        assert_eq!(cart.add_item().unwrap_err(), CartError::MissingEmployeeName);
        cart.set_employee_name("João");
        cart.add_item().unwrap();
        let item = cart.items().last().unwrap();
        assert_eq!(item.employee_name.as_deref(), Some("João"));
    }

    #[test]
    fn rejection_leaves_draft_untouched() {
        let mut cart = CartBuilder::new(false);
        cart.set_size(MarmitaSize::G);
        cart.set_protein("Frango");
        assert!(cart.add_item().is_err());
        assert_eq!(cart.draft().size, MarmitaSize::G);
        assert_eq!(cart.draft().protein.as_deref(), Some("Frango"));
    }

    #[test]
    fn successful_add_resets_draft_to_defaults() {
        let mut cart = filled_builder();
        cart.set_size(MarmitaSize::G);
        cart.add_item().unwrap();
        assert_eq!(cart.draft().size, MarmitaSize::M);
        assert!(cart.draft().protein.is_none());
        assert!(cart.draft().accompaniments.is_empty());
    }

    #[test]
    fn toggle_accompaniment_adds_and_removes() {
        let mut cart = CartBuilder::new(false);
        cart.toggle_accompaniment("Farofa");
        assert_eq!(cart.draft().accompaniments, vec!["Farofa".to_string()]);
        cart.toggle_accompaniment("Farofa");
        assert!(cart.draft().accompaniments.is_empty());
    }

    #[test]
    fn remove_item_keeps_relative_order() {
        let mut cart = CartBuilder::new(false);
        for protein in ["Frango", "Carne", "Peixe"] {
            cart.set_protein(protein);
            cart.toggle_accompaniment("Arroz");
            cart.add_item().unwrap();
        }
        let removed = cart.remove_item(1).unwrap();
        assert_eq!(removed.protein, "Carne");
        let remaining: Vec<_> = cart.items().iter().map(|i| i.protein.as_str()).collect();
        assert_eq!(remaining, vec!["Frango", "Peixe"]);
        assert!(cart.remove_item(5).is_none());
    }

    #[test]
    fn draft_without_customer_name_is_rejected() {
        let mut d = draft();
        d.customer_name = "  ".into();
        assert_eq!(validate_draft(&d).unwrap_err(), CartError::MissingCustomerName);
    }

    #[test]
    fn draft_without_items_is_rejected() {
        let mut d = draft();
        d.items.clear();
        assert_eq!(validate_draft(&d).unwrap_err(), CartError::EmptyCart);
    }

    #[test]
    fn entrega_requires_address_balcao_does_not() {
        let mut d = draft();
        d.order_type = OrderType::Entrega;
        assert_eq!(
            validate_draft(&d).unwrap_err(),
            CartError::MissingDeliveryAddress
        );
        d.delivery_address = Some("Rua das Flores, 12".into());
        assert!(validate_draft(&d).is_ok());

        let balcao = draft();
        assert!(validate_draft(&balcao).is_ok());
    }

    #[test]
    fn company_draft_rejects_blank_employee_names() {
        let mut d = draft();
        d.is_company_order = true;
        assert_eq!(
            validate_draft(&d).unwrap_err(),
            CartError::MissingEmployeeName
        );
        d.items[0].employee_name = Some("João".into());
        assert!(validate_draft(&d).is_ok());
    }

    #[test]
    fn non_company_draft_rejects_employee_names() {
        let mut d = draft();
        d.items[0].employee_name = Some("João".into());
        assert_eq!(
            validate_draft(&d).unwrap_err(),
            CartError::UnexpectedEmployeeName
        );
        d.items[0].employee_name = None;
        assert!(validate_draft(&d).is_ok());
    }
}
