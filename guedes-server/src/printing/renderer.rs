//! Order ticket renderer
//!
//! Renders an order into ESC/POS bytes for 80mm thermal printers.
//! Marmitas print in the order the attendant added them.

use guedes_printer::EscPosBuilder;
use shared::models::{MarmitaSize, Order, OrderType, StoreSettings};

/// Order ticket renderer
pub struct TicketRenderer {
    width: usize,
}

impl TicketRenderer {
    /// Create a renderer with the given paper width
    ///
    /// Common widths:
    /// - 58mm paper: 32 characters
    /// - 80mm paper: 48 characters
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    /// Render an order to ESC/POS bytes
    pub fn render(&self, order: &Order, settings: &StoreSettings) -> Vec<u8> {
        let mut b = EscPosBuilder::new(self.width);

        self.render_header(&mut b, settings);
        self.render_order_info(&mut b, order);
        self.render_items(&mut b, order);
        self.render_selections(&mut b, order);
        self.render_footer(&mut b, order);

        b.build()
    }

    fn render_header(&self, b: &mut EscPosBuilder, settings: &StoreSettings) {
        b.center();
        b.double_size();
        b.bold();
        b.line(&settings.store_name);
        b.bold_off();
        b.reset_size();
        if !settings.store_address.is_empty() {
            b.line(&settings.store_address);
        }
        b.left();
        b.sep_double();
    }

    fn render_order_info(&self, b: &mut EscPosBuilder, order: &Order) {
        b.double_size();
        b.line(&format!("Pedido: {}", order.order_number));
        b.reset_size();
        b.line(&format!("Data: {}", format_timestamp(order.created_at)));
        b.line(&format!("Cliente: {}", order.customer_name));
        if order.is_company_order {
            b.line("Pedido de empresa");
        }
        let tipo = match order.order_type {
            OrderType::Balcao => "BALCAO",
            OrderType::Entrega => "ENTREGA",
        };
        b.line(&format!("Tipo: {tipo}"));
        if order.order_type == OrderType::Entrega
            && let Some(ref address) = order.delivery_address
        {
            b.line(&format!("End: {address}"));
        }
        b.sep_single();
    }

    fn render_items(&self, b: &mut EscPosBuilder, order: &Order) {
        for (i, item) in order.items.iter().enumerate() {
            b.bold();
            b.line(&format!("Marmita {} ({})", i + 1, size_label(item.size)));
            b.bold_off();
            b.line(&format!("  Mistura: {}", item.protein));
            b.line(&format!(
                "  Acompanhamentos: {}",
                item.accompaniments.join(", ")
            ));
            if let Some(ref employee) = item.employee_name {
                b.line(&format!("  Funcionario: {employee}"));
            }
        }
    }

    fn render_selections(&self, b: &mut EscPosBuilder, order: &Order) {
        if !order.salads.is_empty() {
            b.line(&format!("Saladas: {}", order.salads.join(", ")));
        }
        if !order.beverages.is_empty() {
            b.line(&format!("Bebidas: {}", order.beverages.join(", ")));
        }
        if let Some(ref obs) = order.observations
            && !obs.is_empty()
        {
            b.line(&format!("Obs: {obs}"));
        }
    }

    fn render_footer(&self, b: &mut EscPosBuilder, order: &Order) {
        b.sep_single();
        b.bold();
        b.line(&format!("Valor: R$ {:.2}", order.total_price));
        b.bold_off();
        b.line(&format!("Atendente: {}", order.attendant_name));
        b.feed(3);
        b.cut();
    }
}

impl Default for TicketRenderer {
    fn default() -> Self {
        Self::new(48)
    }
}

/// Format unix millis as local wall-clock time (dd/mm/yyyy HH:MM)
fn format_timestamp(ts: i64) -> String {
    match chrono::DateTime::from_timestamp_millis(ts) {
        Some(dt) => dt
            .with_timezone(&chrono::Local)
            .format("%d/%m/%Y %H:%M")
            .to_string(),
        None => "--".to_string(),
    }
}

fn size_label(size: MarmitaSize) -> &'static str {
    match size {
        MarmitaSize::P => "P",
        MarmitaSize::M => "M",
        MarmitaSize::G => "G",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{CartItem, OrderStatus};

    fn test_order() -> Order {
        Order {
            id: 1,
            order_number: 42,
            customer_name: "Maria Silva".into(),
            is_company_order: false,
            order_type: OrderType::Entrega,
            delivery_address: Some("Rua das Flores, 12".into()),
            items: vec![
                CartItem {
                    size: MarmitaSize::M,
                    protein: "Frango".into(),
                    accompaniments: vec!["Arroz".into(), "Feijão".into()],
                    employee_name: None,
                },
                CartItem {
                    size: MarmitaSize::G,
                    protein: "Carne".into(),
                    accompaniments: vec!["Farofa".into()],
                    employee_name: None,
                },
            ],
            salads: vec!["Salada Mista".into()],
            beverages: vec!["Suco".into()],
            observations: Some("Sem pimenta".into()),
            total_price: 38.5,
            status: OrderStatus::Pending,
            attendant_code: "01".into(),
            attendant_name: "Ana".into(),
            printed: false,
            created_at: 0,
        }
    }

    fn settings() -> StoreSettings {
        StoreSettings::default()
    }

    #[test]
    fn renders_non_empty_ticket() {
        let data = TicketRenderer::default().render(&test_order(), &settings());
        assert!(data.len() > 100);
        // ends with a cut command (GS V 0)
        assert_eq!(&data[data.len() - 3..], &[0x1D, 0x56, 0x00]);
    }

    #[test]
    fn ticket_contains_the_ascii_fields() {
        let data = TicketRenderer::default().render(&test_order(), &settings());
        let haystack = String::from_utf8_lossy(&data);
        assert!(haystack.contains("Pedido: 42"));
        assert!(haystack.contains("Cliente: Maria Silva"));
        assert!(haystack.contains("Tipo: ENTREGA"));
        assert!(haystack.contains("Valor: R$ 38.50"));
    }

    #[test]
    fn address_only_prints_for_delivery() {
        let mut order = test_order();
        order.order_type = OrderType::Balcao;
        let data = TicketRenderer::default().render(&order, &settings());
        let haystack = String::from_utf8_lossy(&data);
        assert!(!haystack.contains("End:"));
    }

    #[test]
    fn marmitas_print_in_cart_order() {
        let data = TicketRenderer::default().render(&test_order(), &settings());
        let haystack = String::from_utf8_lossy(&data);
        let frango = haystack.find("Frango").unwrap();
        let carne = haystack.find("Carne").unwrap();
        assert!(frango < carne);
    }
}
