//! HTTP client for the restaurant backend
//!
//! One method per endpoint. Mutations POST form-encoded bodies and decode a
//! `{success, error, ...}` envelope; a false flag becomes
//! [`ClientError::Api`] so callers can tell it from a transport failure.

use reqwest::Client;
use serde::de::DeserializeOwned;

use shared::models::FormPairs;
use shared::{
    Ack, DishCreate, DishUpdate, MenuDish, OrderDraft, OrderFieldUpdate, OrderHit, OrderReceipt,
    OrderSearch, SearchResults,
};

use crate::{ClientConfig, ClientError, ClientResult};

/// An accepted order, as confirmed by the backend.
#[derive(Debug, Clone)]
pub struct OrderAccepted {
    /// Human-readable summary for the result pane.
    pub order_info: String,
    pub order_no: Option<String>,
}

/// HTTP client for the restaurant backend
#[derive(Debug, Clone)]
pub struct PanelClient {
    client: Client,
    base_url: String,
}

impl PanelClient {
    /// Create a new client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// POST a form-encoded body and decode the JSON response
    async fn post_form<T: DeserializeOwned>(&self, path: &str, pairs: &FormPairs) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).form(pairs).send().await?;
        response.json().await.map_err(Into::into)
    }

    /// GET a JSON resource (no envelope)
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        response.json().await.map_err(Into::into)
    }

    // ========== Ordering API ==========

    /// Submit an order to `/submit_order`
    pub async fn submit_order(&self, draft: &OrderDraft) -> ClientResult<OrderAccepted> {
        tracing::debug!(order_type = draft.order_type().as_str(), items = draft.items.len(), "submitting order");
        let receipt: OrderReceipt = self.post_form("/submit_order", &draft.form_pairs()).await?;
        if !receipt.success {
            return Err(ClientError::api(receipt.error.unwrap_or_default()));
        }
        let order_info = receipt
            .order_info
            .ok_or_else(|| ClientError::InvalidResponse("missing order_info".to_string()))?;
        tracing::info!(order_no = ?receipt.order_no, "order accepted");
        Ok(OrderAccepted {
            order_info,
            order_no: receipt.order_no,
        })
    }

    /// Fetch the menu from `/get_all_dishes`
    pub async fn fetch_dishes(&self) -> ClientResult<Vec<MenuDish>> {
        self.get_json("/get_all_dishes").await
    }

    // ========== Dish admin API ==========

    /// Create a dish via `/admin/dish/add`
    pub async fn add_dish(&self, dish: &DishCreate) -> ClientResult<()> {
        tracing::debug!(name = %dish.name, "adding dish");
        self.post_ack("/admin/dish/add", &dish.form_pairs()).await
    }

    /// Edit a dish via `/admin/dish/update`
    pub async fn update_dish(&self, update: &DishUpdate) -> ClientResult<()> {
        tracing::debug!(dish_id = %update.dish_id, "updating dish");
        self.post_ack("/admin/dish/update", &update.form_pairs()).await
    }

    /// Remove a dish via `/admin/dish/delete`
    pub async fn delete_dish(&self, dish_id: &str) -> ClientResult<()> {
        tracing::debug!(dish_id = %dish_id, "deleting dish");
        let pairs: FormPairs = vec![("dish_id", dish_id.to_string())];
        self.post_ack("/admin/dish/delete", &pairs).await
    }

    // ========== Order admin API ==========

    /// Query orders via `/admin/order/search`
    pub async fn search_orders(&self, query: &OrderSearch) -> ClientResult<Vec<OrderHit>> {
        tracing::debug!(search_type = query.search_type.as_str(), keyword = %query.keyword, "searching orders");
        let results: SearchResults = self
            .post_form("/admin/order/search", &query.form_pairs())
            .await?;
        if !results.success {
            return Err(ClientError::api(results.error.unwrap_or_default()));
        }
        Ok(results.orders)
    }

    /// Remove an order via `/admin/order/delete`
    pub async fn delete_order(&self, order_no: &str) -> ClientResult<()> {
        tracing::debug!(order_no = %order_no, "deleting order");
        let pairs: FormPairs = vec![("order_no", order_no.to_string())];
        self.post_ack("/admin/order/delete", &pairs).await
    }

    /// Edit one field of an order via `/admin/order/update`
    pub async fn update_order(&self, update: &OrderFieldUpdate) -> ClientResult<()> {
        tracing::debug!(order_no = %update.order_no, field = update.field.as_str(), "updating order");
        self.post_ack("/admin/order/update", &update.form_pairs()).await
    }

    /// POST and reduce a plain acknowledgement to `Ok(())` or an API error
    async fn post_ack(&self, path: &str, pairs: &FormPairs) -> ClientResult<()> {
        let ack: Ack = self.post_form(path, pairs).await?;
        ack.into_result().map_err(ClientError::api)
    }
}
