//! Panel view-model
//!
//! All form fields live here as plain strings, owned by [`PanelState`].
//! Building a request payload from them goes through the validation in
//! `shared`, and the render pass only reads this state.

use shared::{
    MenuDish, OrderDraft, OrderField, OrderHit, OrderType, SearchType, ValidationError,
};

use crate::status::StatusLine;

/// One menu entry plus the customer's quantity input for it.
#[derive(Debug, Clone)]
pub struct QuantityRow {
    pub dish: MenuDish,
    /// Raw field content; only positive numbers end up in the payload.
    pub quantity: String,
}

/// The customer order form.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub order_type: OrderType,
    pub table_num: String,
    pub has_room_fee: bool,
    pub takeout_time: String,
    pub takeout_address: String,
    pub phone: String,
    pub rows: Vec<QuantityRow>,
}

impl OrderForm {
    /// Select the active order type. Idempotent.
    pub fn switch(&mut self, order_type: OrderType) {
        self.order_type = order_type;
    }

    /// Replace the menu, dropping any entered quantities.
    pub fn set_menu(&mut self, menu: Vec<MenuDish>) {
        self.rows = menu
            .into_iter()
            .map(|dish| QuantityRow {
                dish,
                quantity: String::new(),
            })
            .collect();
    }

    /// Return every input to its default. The menu and the selected order
    /// type survive a reset.
    pub fn reset(&mut self) {
        self.table_num.clear();
        self.has_room_fee = false;
        self.takeout_time.clear();
        self.takeout_address.clear();
        self.phone.clear();
        for row in &mut self.rows {
            row.quantity.clear();
        }
    }

    /// Validate the current fields into a submittable draft.
    pub fn to_draft(&self) -> Result<OrderDraft, ValidationError> {
        let rows: Vec<(i64, &str)> = self
            .rows
            .iter()
            .map(|row| (row.dish.dish_id, row.quantity.as_str()))
            .collect();
        OrderDraft::from_form(
            self.order_type,
            &self.table_num,
            self.has_room_fee,
            &self.takeout_time,
            &self.takeout_address,
            &self.phone,
            &rows,
        )
    }
}

/// The dish administration forms.
#[derive(Debug, Clone)]
pub struct DishAdminForm {
    pub add_name: String,
    pub add_price: String,
    pub add_discount: String,
    pub update_id: String,
    pub update_name: String,
    pub update_price: String,
    pub update_discount: String,
    pub delete_id: String,
}

impl DishAdminForm {
    pub fn clear_add(&mut self) {
        self.add_name.clear();
        self.add_price.clear();
        self.add_discount = default_discount();
    }

    pub fn clear_update(&mut self) {
        self.update_id.clear();
        self.update_name.clear();
        self.update_price.clear();
        self.update_discount.clear();
    }
}

impl Default for DishAdminForm {
    fn default() -> Self {
        Self {
            add_name: String::new(),
            add_price: String::new(),
            add_discount: default_discount(),
            update_id: String::new(),
            update_name: String::new(),
            update_price: String::new(),
            update_discount: String::new(),
            delete_id: String::new(),
        }
    }
}

fn default_discount() -> String {
    "1.0".to_string()
}

/// The order administration forms.
#[derive(Debug, Clone, Default)]
pub struct OrderAdminForm {
    pub search_type: SearchType,
    pub keyword: String,
    pub edit_order_no: String,
    pub edit_field: OrderField,
    pub edit_value: String,
    pub delete_order_no: String,
}

/// A display area whose content is overwritten by each action.
#[derive(Debug, Clone, Default)]
pub struct ResultPane {
    pub text: String,
    pub visible: bool,
}

impl ResultPane {
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }
}

/// A destructive action awaiting the user's yes/no.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteDish { dish_id: String },
    DeleteOrder { order_no: String },
}

impl PendingAction {
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::DeleteDish { .. } => "确定要删除该菜品吗？",
            Self::DeleteOrder { .. } => "确定要删除该订单吗？",
        }
    }
}

/// Everything the render pass needs.
#[derive(Debug, Default)]
pub struct PanelState {
    pub order: OrderForm,
    pub dishes: DishAdminForm,
    pub orders: OrderAdminForm,
    /// Where the order submission outcome is shown.
    pub order_result: ResultPane,
    /// Where search results (or the search failure reason) are shown.
    pub search_result: ResultPane,
    pub status: StatusLine,
    /// Blocking message; the UI must not accept other input while set.
    pub alert: Option<String>,
    /// Confirmation in progress, rendered as a modal.
    pub pending: Option<PendingAction>,
}

/// Render search hits as numbered blocks, in response order.
pub fn format_search_hits(hits: &[OrderHit]) -> String {
    let mut out = String::new();
    for (idx, hit) in hits.iter().enumerate() {
        if idx > 0 {
            out.push_str("\n\n");
        }
        out.push_str(&format!("【订单 {}】\n{}", idx + 1, hit.info));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> Vec<MenuDish> {
        vec![
            MenuDish {
                dish_id: 1,
                name: "汤".to_string(),
                final_price: 7.65,
            },
            MenuDish {
                dish_id: 2,
                name: "米饭".to_string(),
                final_price: 2.0,
            },
        ]
    }

    #[test]
    fn reset_keeps_menu_and_order_type() {
        let mut form = OrderForm::default();
        form.set_menu(menu());
        form.switch(OrderType::Takeout);
        form.takeout_time = "18:30".to_string();
        form.rows[0].quantity = "2".to_string();

        form.reset();
        assert_eq!(form.order_type, OrderType::Takeout);
        assert_eq!(form.rows.len(), 2);
        assert!(form.takeout_time.is_empty());
        assert!(form.rows[0].quantity.is_empty());
    }

    #[test]
    fn set_menu_drops_entered_quantities() {
        let mut form = OrderForm::default();
        form.set_menu(menu());
        form.rows[1].quantity = "3".to_string();

        form.set_menu(menu());
        assert!(form.rows[1].quantity.is_empty());
    }

    #[test]
    fn search_hits_render_numbered_in_order() {
        let hits = vec![
            OrderHit {
                info: "第一条".to_string(),
                order_no: None,
                order_type: None,
            },
            OrderHit {
                info: "第二条".to_string(),
                order_no: None,
                order_type: None,
            },
        ];
        assert_eq!(
            format_search_hits(&hits),
            "【订单 1】\n第一条\n\n【订单 2】\n第二条"
        );
    }
}
