//! Response envelopes
//!
//! Every mutating endpoint answers with a JSON object carrying a boolean
//! `success` flag, an `error` string when the flag is false, and any payload
//! fields beside the flag. The dish list endpoint returns a bare array and
//! has no envelope.

use serde::{Deserialize, Serialize};

/// Plain acknowledgement, returned by the dish and order admin endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Ack {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn error(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(reason.into()),
        }
    }

    /// Split the envelope into its two outcomes.
    pub fn into_result(self) -> Result<(), String> {
        if self.success {
            Ok(())
        } else {
            Err(self.error.unwrap_or_default())
        }
    }
}

/// Response of `/submit_order`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable order summary, present on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_info: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
}

/// Response of `/admin/order/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default)]
    pub orders: Vec<OrderHit>,
}

/// One order returned by a search.
///
/// Only `info` is rendered; the other fields are provisional until the
/// backend contract is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHit {
    /// Descriptive text of the order, displayed verbatim.
    pub info: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_no: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ack_decodes_both_outcomes() {
        let ok: Ack = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(ok.into_result().is_ok());

        let err: Ack =
            serde_json::from_str(r#"{"success": false, "error": "菜品不存在"}"#).unwrap();
        assert_eq!(err.into_result().unwrap_err(), "菜品不存在");
    }

    #[test]
    fn receipt_carries_order_info_on_success() {
        let receipt: OrderReceipt = serde_json::from_str(
            r#"{"success": true, "order_info": "Order #12", "order_no": "ORD20260805120000123"}"#,
        )
        .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.order_info.as_deref(), Some("Order #12"));
        assert_eq!(receipt.order_no.as_deref(), Some("ORD20260805120000123"));
    }

    #[test]
    fn receipt_failure_has_no_payload() {
        let receipt: OrderReceipt =
            serde_json::from_str(r#"{"success": false, "error": "保存订单失败，请重试"}"#)
                .unwrap();
        assert!(!receipt.success);
        assert!(receipt.order_info.is_none());
    }

    #[test]
    fn search_results_tolerate_missing_list() {
        let res: SearchResults =
            serde_json::from_str(r#"{"success": false, "error": "无效的搜索类型"}"#).unwrap();
        assert!(res.orders.is_empty());

        let res: SearchResults = serde_json::from_str(
            r#"{"success": true, "orders": [{"order_no": "A1", "info": "===== 到店订单 =====", "type": "dinein"}]}"#,
        )
        .unwrap();
        assert_eq!(res.orders.len(), 1);
        assert_eq!(res.orders[0].order_type.as_deref(), Some("dinein"));
    }
}
