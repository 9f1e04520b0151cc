// reef-client/tests/client_integration.rs
// Integration tests against an in-process mock backend

use std::sync::{Arc, Mutex};

use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::{json, Value};

use reef_client::{ClientConfig, ClientError, PanelClient};
use shared::{DishCreate, DishUpdate, OrderDraft, OrderField, OrderFieldUpdate, OrderSearch, OrderType, SearchType};

/// Requests the mock backend saw, as (path, decoded form pairs).
type Recorded = Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>;

fn record(recorded: &Recorded, path: &str, body: &str) {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(body).unwrap();
    recorded.lock().unwrap().push((path.to_string(), pairs));
}

/// Bind a mock backend and return a client pointed at it plus the request log.
async fn mock_backend(responses: Value) -> (PanelClient, Recorded) {
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));

    let make_route = |path: &'static str| {
        let recorded = recorded.clone();
        let reply = responses
            .get(path)
            .cloned()
            .unwrap_or_else(|| json!({"success": true}));
        post(move |body: String| async move {
            record(&recorded, path, &body);
            Json(reply)
        })
    };

    let dishes = responses
        .get("/get_all_dishes")
        .cloned()
        .unwrap_or_else(|| json!([]));
    let app = Router::new()
        .route("/submit_order", make_route("/submit_order"))
        .route("/admin/dish/add", make_route("/admin/dish/add"))
        .route("/admin/dish/update", make_route("/admin/dish/update"))
        .route("/admin/dish/delete", make_route("/admin/dish/delete"))
        .route("/admin/order/search", make_route("/admin/order/search"))
        .route("/admin/order/delete", make_route("/admin/order/delete"))
        .route("/admin/order/update", make_route("/admin/order/update"))
        .route("/get_all_dishes", get(move || async move { Json(dishes) }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ClientConfig::new(format!("http://{addr}")).build_client();
    (client, recorded)
}

fn dine_in_draft() -> OrderDraft {
    OrderDraft::from_form(OrderType::DineIn, "5", true, "", "", "", &[(7, "2")]).unwrap()
}

#[tokio::test]
async fn submit_order_success_decodes_receipt() {
    let (client, recorded) = mock_backend(json!({
        "/submit_order": {"success": true, "order_info": "Order #12", "order_no": "ORD1"},
    }))
    .await;

    let accepted = client.submit_order(&dine_in_draft()).await.unwrap();
    assert_eq!(accepted.order_info, "Order #12");
    assert_eq!(accepted.order_no.as_deref(), Some("ORD1"));

    let recorded = recorded.lock().unwrap();
    let (path, pairs) = &recorded[0];
    assert_eq!(path, "/submit_order");
    let expected: Vec<(String, String)> = [
        ("order_type", "dinein"),
        ("table_num", "5"),
        ("has_room_fee", "1"),
        ("dish_id[]", "7"),
        ("quantity[]", "2"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();
    assert_eq!(pairs, &expected);
}

#[tokio::test]
async fn submit_order_failure_flag_is_an_api_error() {
    let (client, _) = mock_backend(json!({
        "/submit_order": {"success": false, "error": "保存订单失败，请重试"},
    }))
    .await;

    let err = client.submit_order(&dine_in_draft()).await.unwrap_err();
    assert_eq!(err.api_reason(), Some("保存订单失败，请重试"));
}

#[tokio::test]
async fn transport_failure_is_not_an_api_error() {
    // Nothing listens here; the request never completes.
    let client = ClientConfig::new("http://127.0.0.1:9")
        .with_timeout(2)
        .build_client();

    let err = client.submit_order(&dine_in_draft()).await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(err.api_reason().is_none());
}

#[tokio::test]
async fn add_dish_posts_all_three_fields() {
    let (client, recorded) = mock_backend(json!({})).await;

    let dish = DishCreate::from_fields("Soup", "8.5", "0.9").unwrap();
    client.add_dish(&dish).await.unwrap();

    let recorded = recorded.lock().unwrap();
    let (path, pairs) = &recorded[0];
    assert_eq!(path, "/admin/dish/add");
    assert!(pairs.contains(&("name".to_string(), "Soup".to_string())));
    assert!(pairs.contains(&("price".to_string(), "8.5".to_string())));
    assert!(pairs.contains(&("discount".to_string(), "0.9".to_string())));
}

#[tokio::test]
async fn update_dish_omits_empty_fields() {
    let (client, recorded) = mock_backend(json!({})).await;

    let update = DishUpdate::from_fields("3", "", "12", "").unwrap();
    client.update_dish(&update).await.unwrap();

    let recorded = recorded.lock().unwrap();
    let (_, pairs) = &recorded[0];
    assert_eq!(
        pairs,
        &vec![
            ("dish_id".to_string(), "3".to_string()),
            ("new_price".to_string(), "12".to_string()),
        ]
    );
}

#[tokio::test]
async fn dish_delete_failure_carries_server_reason() {
    let (client, _) = mock_backend(json!({
        "/admin/dish/delete": {"success": false, "error": "菜品不存在"},
    }))
    .await;

    let err = client.delete_dish("99").await.unwrap_err();
    assert_eq!(err.api_reason(), Some("菜品不存在"));
}

#[tokio::test]
async fn search_orders_preserves_response_order() {
    let (client, recorded) = mock_backend(json!({
        "/admin/order/search": {"success": true, "orders": [
            {"order_no": "B2", "info": "second placed first", "type": "takeout"},
            {"order_no": "A1", "info": "first placed second", "type": "dinein"},
        ]},
    }))
    .await;

    let query = OrderSearch::from_fields(SearchType::Phone, "13800000000").unwrap();
    let hits = client.search_orders(&query).await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].info, "second placed first");
    assert_eq!(hits[1].order_no.as_deref(), Some("A1"));

    let recorded = recorded.lock().unwrap();
    let (_, pairs) = &recorded[0];
    assert!(pairs.contains(&("search_type".to_string(), "phone".to_string())));
    assert!(pairs.contains(&("keyword".to_string(), "13800000000".to_string())));
}

#[tokio::test]
async fn order_update_uses_backend_field_names() {
    let (client, recorded) = mock_backend(json!({})).await;

    let update = OrderFieldUpdate::from_fields("ORD1", OrderField::Status, "cancelled").unwrap();
    client.update_order(&update).await.unwrap();
    client.delete_order("ORD1").await.unwrap();

    let recorded = recorded.lock().unwrap();
    assert_eq!(
        recorded[0].1,
        vec![
            ("order_no".to_string(), "ORD1".to_string()),
            ("update_type".to_string(), "status".to_string()),
            ("new_value".to_string(), "cancelled".to_string()),
        ]
    );
    assert_eq!(recorded[1].0, "/admin/order/delete");
}

#[tokio::test]
async fn fetch_dishes_decodes_bare_list() {
    let (client, _) = mock_backend(json!({
        "/get_all_dishes": [
            {"dish_id": 1, "name": "汤", "final_price": 7.65},
            {"dish_id": 2, "name": "米饭", "final_price": 2.0},
        ],
    }))
    .await;

    let menu = client.fetch_dishes().await.unwrap();
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0].name, "汤");
    assert_eq!(menu[1].dish_id, 2);
}
