//! TUI application shell
//!
//! Owns the [`Panel`] controller plus the purely visual state: active
//! screen, focus position, and the field currently being edited. Key
//! handling translates terminal events into controller calls; rendering
//! lives in [`crate::ui`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;
use tui_logger::TuiWidgetState;

use shared::{OrderField, OrderType, SearchType};

use crate::controller::Panel;

/// Top-level screens, one per tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Order,
    Dishes,
    Orders,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Order, Screen::Dishes, Screen::Orders];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Order => "点餐",
            Self::Dishes => "菜品管理",
            Self::Orders => "订单管理",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }
}

/// Every focusable element across the three screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    // Order screen
    TableNum,
    RoomFee,
    TakeoutTime,
    TakeoutAddress,
    Phone,
    Quantity(usize),
    SubmitOrder,
    // Dish administration
    AddName,
    AddPrice,
    AddDiscount,
    AddButton,
    UpdateId,
    UpdateName,
    UpdatePrice,
    UpdateDiscount,
    UpdateButton,
    DeleteId,
    DeleteButton,
    // Order administration
    SearchKeyword,
    SearchButton,
    EditOrderNo,
    EditValue,
    EditButton,
    DeleteOrderNo,
    DeleteOrderButton,
}

impl FieldId {
    /// Buttons fire an action on Enter instead of opening an editor.
    fn is_button(&self) -> bool {
        matches!(
            self,
            Self::SubmitOrder
                | Self::AddButton
                | Self::UpdateButton
                | Self::DeleteButton
                | Self::SearchButton
                | Self::EditButton
                | Self::DeleteOrderButton
        )
    }
}

pub struct App {
    pub panel: Panel,
    pub screen: Screen,
    pub focus: usize,
    /// Editor over the focused field, when one is open.
    pub editing: Option<Input>,
    pub logger_state: TuiWidgetState,
    pub should_quit: bool,
}

impl App {
    pub fn new(panel: Panel) -> Self {
        Self {
            panel,
            screen: Screen::Order,
            focus: 0,
            editing: None,
            logger_state: TuiWidgetState::new(),
            should_quit: false,
        }
    }

    /// Focus order of the current screen, top to bottom.
    pub fn focusables(&self) -> Vec<FieldId> {
        match self.screen {
            Screen::Order => {
                let mut fields = match self.panel.state.order.order_type {
                    OrderType::DineIn => vec![FieldId::TableNum, FieldId::RoomFee],
                    OrderType::Takeout => vec![FieldId::TakeoutTime, FieldId::TakeoutAddress],
                };
                fields.push(FieldId::Phone);
                for idx in 0..self.panel.state.order.rows.len() {
                    fields.push(FieldId::Quantity(idx));
                }
                fields.push(FieldId::SubmitOrder);
                fields
            }
            Screen::Dishes => vec![
                FieldId::AddName,
                FieldId::AddPrice,
                FieldId::AddDiscount,
                FieldId::AddButton,
                FieldId::UpdateId,
                FieldId::UpdateName,
                FieldId::UpdatePrice,
                FieldId::UpdateDiscount,
                FieldId::UpdateButton,
                FieldId::DeleteId,
                FieldId::DeleteButton,
            ],
            Screen::Orders => vec![
                FieldId::SearchKeyword,
                FieldId::SearchButton,
                FieldId::EditOrderNo,
                FieldId::EditValue,
                FieldId::EditButton,
                FieldId::DeleteOrderNo,
                FieldId::DeleteOrderButton,
            ],
        }
    }

    pub fn focused(&self) -> FieldId {
        let fields = self.focusables();
        fields[self.focus.min(fields.len().saturating_sub(1))]
    }

    /// Current content of an editable field.
    pub fn field_value(&self, field: FieldId) -> Option<&str> {
        let state = &self.panel.state;
        let value = match field {
            FieldId::TableNum => &state.order.table_num,
            FieldId::TakeoutTime => &state.order.takeout_time,
            FieldId::TakeoutAddress => &state.order.takeout_address,
            FieldId::Phone => &state.order.phone,
            FieldId::Quantity(idx) => &state.order.rows.get(idx)?.quantity,
            FieldId::AddName => &state.dishes.add_name,
            FieldId::AddPrice => &state.dishes.add_price,
            FieldId::AddDiscount => &state.dishes.add_discount,
            FieldId::UpdateId => &state.dishes.update_id,
            FieldId::UpdateName => &state.dishes.update_name,
            FieldId::UpdatePrice => &state.dishes.update_price,
            FieldId::UpdateDiscount => &state.dishes.update_discount,
            FieldId::DeleteId => &state.dishes.delete_id,
            FieldId::SearchKeyword => &state.orders.keyword,
            FieldId::EditOrderNo => &state.orders.edit_order_no,
            FieldId::EditValue => &state.orders.edit_value,
            FieldId::DeleteOrderNo => &state.orders.delete_order_no,
            _ => return None,
        };
        Some(value.as_str())
    }

    fn set_field(&mut self, field: FieldId, value: String) {
        let state = &mut self.panel.state;
        match field {
            FieldId::TableNum => state.order.table_num = value,
            FieldId::TakeoutTime => state.order.takeout_time = value,
            FieldId::TakeoutAddress => state.order.takeout_address = value,
            FieldId::Phone => state.order.phone = value,
            FieldId::Quantity(idx) => {
                if let Some(row) = state.order.rows.get_mut(idx) {
                    row.quantity = value;
                }
            }
            FieldId::AddName => state.dishes.add_name = value,
            FieldId::AddPrice => state.dishes.add_price = value,
            FieldId::AddDiscount => state.dishes.add_discount = value,
            FieldId::UpdateId => state.dishes.update_id = value,
            FieldId::UpdateName => state.dishes.update_name = value,
            FieldId::UpdatePrice => state.dishes.update_price = value,
            FieldId::UpdateDiscount => state.dishes.update_discount = value,
            FieldId::DeleteId => state.dishes.delete_id = value,
            FieldId::SearchKeyword => state.orders.keyword = value,
            FieldId::EditOrderNo => state.orders.edit_order_no = value,
            FieldId::EditValue => state.orders.edit_value = value,
            FieldId::DeleteOrderNo => state.orders.delete_order_no = value,
            _ => {}
        }
    }

    pub async fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // A blocking alert swallows everything until dismissed.
        if self.panel.state.alert.is_some() {
            self.panel.dismiss_alert();
            return;
        }

        // Confirmation modal: only yes/no.
        if self.panel.state.pending.is_some() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.panel.resolve_pending(true).await;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.panel.resolve_pending(false).await;
                }
                _ => {}
            }
            return;
        }

        if self.editing.is_some() {
            match key.code {
                KeyCode::Enter => {
                    let field = self.focused();
                    if let Some(input) = self.editing.take() {
                        self.set_field(field, input.value().to_string());
                    }
                }
                KeyCode::Esc => {
                    self.editing = None;
                }
                _ => {
                    if let Some(input) = self.editing.as_mut() {
                        input.handle_event(&crossterm::event::Event::Key(key));
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.switch_screen(Screen::Order),
            KeyCode::Char('2') => self.switch_screen(Screen::Dishes),
            KeyCode::Char('3') => self.switch_screen(Screen::Orders),
            KeyCode::Tab | KeyCode::Down => self.move_focus(1),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(-1),
            KeyCode::Char('d') if self.screen == Screen::Order => {
                self.panel.switch_order_type(OrderType::DineIn);
                self.clamp_focus();
            }
            KeyCode::Char('t') if self.screen == Screen::Order => {
                self.panel.switch_order_type(OrderType::Takeout);
                self.clamp_focus();
            }
            KeyCode::Char('s') if self.screen == Screen::Orders => {
                let form = &mut self.panel.state.orders;
                form.search_type = match form.search_type {
                    SearchType::OrderNo => SearchType::Phone,
                    SearchType::Phone => SearchType::OrderNo,
                };
            }
            KeyCode::Char('f') if self.screen == Screen::Orders => {
                let form = &mut self.panel.state.orders;
                form.edit_field = next_order_field(form.edit_field);
            }
            KeyCode::Char(' ') if self.focused() == FieldId::RoomFee => {
                self.panel.state.order.has_room_fee = !self.panel.state.order.has_room_fee;
            }
            KeyCode::Enter => self.activate().await,
            _ => {}
        }
    }

    async fn activate(&mut self) {
        let field = self.focused();
        if field == FieldId::RoomFee {
            self.panel.state.order.has_room_fee = !self.panel.state.order.has_room_fee;
            return;
        }
        if !field.is_button() {
            let seed = self.field_value(field).unwrap_or_default().to_string();
            self.editing = Some(Input::new(seed));
            return;
        }
        match field {
            FieldId::SubmitOrder => self.panel.submit_order().await,
            FieldId::AddButton => self.panel.add_dish().await,
            FieldId::UpdateButton => self.panel.update_dish().await,
            FieldId::DeleteButton => self.panel.request_delete_dish(),
            FieldId::SearchButton => self.panel.search_orders().await,
            FieldId::EditButton => self.panel.update_order().await,
            FieldId::DeleteOrderButton => self.panel.request_delete_order(),
            _ => {}
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        self.screen = screen;
        self.focus = 0;
        self.editing = None;
    }

    fn move_focus(&mut self, delta: isize) {
        let len = self.focusables().len() as isize;
        if len == 0 {
            return;
        }
        self.focus = ((self.focus as isize + delta).rem_euclid(len)) as usize;
    }

    /// Focus can dangle after the order type (and thus the field list) changes.
    fn clamp_focus(&mut self) {
        let len = self.focusables().len();
        if self.focus >= len {
            self.focus = len.saturating_sub(1);
        }
    }

    pub fn screen_index(&self) -> usize {
        self.screen.index()
    }
}

fn next_order_field(field: OrderField) -> OrderField {
    match field {
        OrderField::Status => OrderField::Phone,
        OrderField::Phone => OrderField::TableNum,
        OrderField::TableNum => OrderField::TakeoutAddress,
        OrderField::TakeoutAddress => OrderField::TakeoutTime,
        OrderField::TakeoutTime => OrderField::Status,
    }
}
