//! Interaction flows
//!
//! One method per panel operation: validate the form, send the request,
//! map the outcome onto the view-model. Validation failures stop before
//! the wire; a false success flag shows the server's reason and preserves
//! the input for correction.

use std::time::Instant;

use reef_client::{ClientError, PanelClient};
use shared::{DishCreate, DishUpdate, OrderFieldUpdate, OrderSearch, OrderType};

use crate::state::{format_search_hits, PanelState, PendingAction};

/// Fixed labels prefixed to server-reported failures.
const SUBMIT_FAILED: &str = "下单失败：";
const ADD_FAILED: &str = "添加失败：";
const UPDATE_FAILED: &str = "修改失败：";
const DELETE_FAILED: &str = "删除失败：";

/// Literal shown for an empty search result.
const NO_RESULTS: &str = "未找到相关订单";

fn network_error(err: &ClientError) -> String {
    format!("网络错误：{err}")
}

/// The panel controller: owns the client and the view-model.
#[derive(Debug)]
pub struct Panel {
    client: PanelClient,
    pub state: PanelState,
}

impl Panel {
    pub fn new(client: PanelClient) -> Self {
        Self {
            client,
            state: PanelState::default(),
        }
    }

    /// Forward the clock to time-based state (status auto-hide).
    pub fn tick(&mut self, now: Instant) {
        self.state.status.tick(now);
    }

    // ========== Ordering ==========

    /// Select the active order type. Idempotent.
    pub fn switch_order_type(&mut self, order_type: OrderType) {
        self.state.order.switch(order_type);
    }

    /// Submit the order form.
    pub async fn submit_order(&mut self) {
        let draft = match self.state.order.to_draft() {
            Ok(draft) => draft,
            Err(err) => {
                self.state.alert = Some(err.to_string());
                return;
            }
        };

        match self.client.submit_order(&draft).await {
            Ok(accepted) => {
                self.state.order_result.show(accepted.order_info);
                self.state.order.reset();
            }
            Err(ClientError::Api { message }) => {
                // Input is kept so the customer can correct and resubmit.
                self.state
                    .order_result
                    .show(format!("{SUBMIT_FAILED}{message}"));
            }
            Err(err) => {
                self.state.alert = Some(network_error(&err));
            }
        }
    }

    /// Re-fetch the menu and rebuild the quantity rows.
    pub async fn refresh_dishes(&mut self) {
        match self.client.fetch_dishes().await {
            Ok(menu) => {
                tracing::info!(dishes = menu.len(), "menu refreshed");
                self.state.order.set_menu(menu);
            }
            Err(err) => {
                tracing::warn!(error = %err, "menu refresh failed");
                self.state.status.error(network_error(&err), Instant::now());
            }
        }
    }

    // ========== Dish administration ==========

    /// Create a dish.
    pub async fn add_dish(&mut self) {
        let now = Instant::now();
        let form = &self.state.dishes;
        let dish = match DishCreate::from_fields(&form.add_name, &form.add_price, &form.add_discount)
        {
            Ok(dish) => dish,
            Err(err) => {
                self.state.status.error(err.to_string(), now);
                return;
            }
        };

        match self.client.add_dish(&dish).await {
            Ok(()) => {
                self.state.status.success("添加成功", now);
                self.state.dishes.clear_add();
                self.refresh_dishes().await;
            }
            Err(ClientError::Api { message }) => {
                self.state.status.error(format!("{ADD_FAILED}{message}"), now);
            }
            Err(err) => {
                self.state.status.error(network_error(&err), now);
            }
        }
    }

    /// Edit a dish.
    pub async fn update_dish(&mut self) {
        let now = Instant::now();
        let form = &self.state.dishes;
        let update = match DishUpdate::from_fields(
            &form.update_id,
            &form.update_name,
            &form.update_price,
            &form.update_discount,
        ) {
            Ok(update) => update,
            Err(err) => {
                self.state.status.error(err.to_string(), now);
                return;
            }
        };

        match self.client.update_dish(&update).await {
            Ok(()) => {
                self.state.status.success("修改成功", now);
                self.state.dishes.clear_update();
                self.refresh_dishes().await;
            }
            Err(ClientError::Api { message }) => {
                self.state
                    .status
                    .error(format!("{UPDATE_FAILED}{message}"), now);
            }
            Err(err) => {
                self.state.status.error(network_error(&err), now);
            }
        }
    }

    /// Ask to delete a dish. The request is only sent after the
    /// confirmation is accepted via [`Panel::resolve_pending`].
    pub fn request_delete_dish(&mut self) {
        let dish_id = self.state.dishes.delete_id.trim();
        if dish_id.is_empty() {
            self.state
                .status
                .error(shared::ValidationError::MissingDishId.to_string(), Instant::now());
            return;
        }
        self.state.pending = Some(PendingAction::DeleteDish {
            dish_id: dish_id.to_string(),
        });
    }

    // ========== Order administration ==========

    /// Query orders.
    pub async fn search_orders(&mut self) {
        let form = &self.state.orders;
        let query = match OrderSearch::from_fields(form.search_type, &form.keyword) {
            Ok(query) => query,
            Err(err) => {
                self.state.status.error(err.to_string(), Instant::now());
                return;
            }
        };

        match self.client.search_orders(&query).await {
            Ok(hits) if hits.is_empty() => {
                self.state.search_result.show(NO_RESULTS);
            }
            Ok(hits) => {
                self.state.search_result.show(format_search_hits(&hits));
            }
            Err(ClientError::Api { message }) => {
                // The failure reason goes to the result area, not the status line.
                self.state.search_result.show(message);
            }
            Err(err) => {
                self.state.status.error(network_error(&err), Instant::now());
            }
        }
    }

    /// Ask to delete an order; same confirmation step as dishes.
    pub fn request_delete_order(&mut self) {
        let order_no = self.state.orders.delete_order_no.trim();
        if order_no.is_empty() {
            self.state
                .status
                .error(shared::ValidationError::MissingOrderNo.to_string(), Instant::now());
            return;
        }
        self.state.pending = Some(PendingAction::DeleteOrder {
            order_no: order_no.to_string(),
        });
    }

    /// Edit one field of an order.
    pub async fn update_order(&mut self) {
        let now = Instant::now();
        let form = &self.state.orders;
        let update = match OrderFieldUpdate::from_fields(
            &form.edit_order_no,
            form.edit_field,
            &form.edit_value,
        ) {
            Ok(update) => update,
            Err(err) => {
                self.state.status.error(err.to_string(), now);
                return;
            }
        };

        match self.client.update_order(&update).await {
            Ok(()) => {
                self.state.status.success("修改成功", now);
                // Order number and field stay for follow-up edits.
                self.state.orders.edit_value.clear();
            }
            Err(ClientError::Api { message }) => {
                self.state
                    .status
                    .error(format!("{UPDATE_FAILED}{message}"), now);
            }
            Err(err) => {
                self.state.status.error(network_error(&err), now);
            }
        }
    }

    // ========== Confirmation and alerts ==========

    /// Settle the pending confirmation. Declining aborts silently.
    pub async fn resolve_pending(&mut self, accepted: bool) {
        let Some(action) = self.state.pending.take() else {
            return;
        };
        if !accepted {
            return;
        }

        let now = Instant::now();
        match action {
            PendingAction::DeleteDish { dish_id } => match self.client.delete_dish(&dish_id).await {
                Ok(()) => {
                    self.state.status.success("删除成功", now);
                    self.state.dishes.delete_id.clear();
                    self.refresh_dishes().await;
                }
                Err(ClientError::Api { message }) => {
                    self.state
                        .status
                        .error(format!("{DELETE_FAILED}{message}"), now);
                }
                Err(err) => {
                    self.state.status.error(network_error(&err), now);
                }
            },
            PendingAction::DeleteOrder { order_no } => {
                match self.client.delete_order(&order_no).await {
                    Ok(()) => {
                        // The search result pane is not refreshed here.
                        self.state.status.success("删除成功", now);
                        self.state.orders.delete_order_no.clear();
                    }
                    Err(ClientError::Api { message }) => {
                        self.state
                            .status
                            .error(format!("{DELETE_FAILED}{message}"), now);
                    }
                    Err(err) => {
                        self.state.status.error(network_error(&err), now);
                    }
                }
            }
        }
    }

    /// Close the blocking alert.
    pub fn dismiss_alert(&mut self) {
        self.state.alert = None;
    }
}
