//! Order models

use serde::{Deserialize, Serialize};

use super::FormPairs;
use crate::validate::ValidationError;

/// The two kinds of order the panel can place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    #[default]
    DineIn,
    Takeout,
}

impl OrderType {
    /// Wire value of the `order_type` field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DineIn => "dinein",
            Self::Takeout => "takeout",
        }
    }
}

/// One ordered dish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub dish_id: i64,
    pub quantity: u32,
}

/// Type-specific half of an order draft.
///
/// The variant fields are guaranteed non-empty; [`OrderDraft::from_form`] is
/// the only constructor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderDetails {
    DineIn {
        table_num: String,
        has_room_fee: bool,
    },
    Takeout {
        takeout_time: String,
        takeout_address: String,
    },
}

/// A validated order, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub details: OrderDetails,
    /// Contact phone; mandatory for takeout, carried when present otherwise.
    pub phone: Option<String>,
    pub items: Vec<OrderItem>,
}

impl OrderDraft {
    /// Build a draft from raw form fields.
    ///
    /// Dine-in requires a table number; takeout requires delivery time,
    /// address and phone. Quantity rows are `(dish_id, raw input)`: every row
    /// whose input parses to a positive number contributes one item, all
    /// other rows are skipped. At least one item is mandatory regardless of
    /// the other fields.
    pub fn from_form(
        order_type: OrderType,
        table_num: &str,
        has_room_fee: bool,
        takeout_time: &str,
        takeout_address: &str,
        phone: &str,
        rows: &[(i64, &str)],
    ) -> Result<Self, ValidationError> {
        let details = match order_type {
            OrderType::DineIn => {
                let table_num = table_num.trim();
                if table_num.is_empty() {
                    return Err(ValidationError::MissingTableNum);
                }
                OrderDetails::DineIn {
                    table_num: table_num.to_string(),
                    has_room_fee,
                }
            }
            OrderType::Takeout => {
                let takeout_time = takeout_time.trim();
                let takeout_address = takeout_address.trim();
                if takeout_time.is_empty() {
                    return Err(ValidationError::MissingTakeoutTime);
                }
                if takeout_address.is_empty() {
                    return Err(ValidationError::MissingTakeoutAddress);
                }
                if phone.trim().is_empty() {
                    return Err(ValidationError::MissingPhone);
                }
                OrderDetails::Takeout {
                    takeout_time: takeout_time.to_string(),
                    takeout_address: takeout_address.to_string(),
                }
            }
        };

        let items: Vec<OrderItem> = rows
            .iter()
            .filter_map(|&(dish_id, raw)| {
                let quantity = raw.trim().parse::<u32>().ok()?;
                (quantity > 0).then_some(OrderItem { dish_id, quantity })
            })
            .collect();
        if items.is_empty() {
            return Err(ValidationError::NoItems);
        }

        let phone = phone.trim();
        Ok(Self {
            details,
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            items,
        })
    }

    pub fn order_type(&self) -> OrderType {
        match self.details {
            OrderDetails::DineIn { .. } => OrderType::DineIn,
            OrderDetails::Takeout { .. } => OrderType::Takeout,
        }
    }

    /// Serialize into the form body `/submit_order` reads.
    ///
    /// The room-fee flag is sent as `has_room_fee=1` only when set, matching
    /// a checkbox's absent-when-unchecked submission. Item pairs use the
    /// repeated `dish_id[]`/`quantity[]` spelling.
    pub fn form_pairs(&self) -> FormPairs {
        let mut pairs: FormPairs = vec![("order_type", self.order_type().as_str().to_string())];
        match &self.details {
            OrderDetails::DineIn {
                table_num,
                has_room_fee,
            } => {
                pairs.push(("table_num", table_num.clone()));
                if *has_room_fee {
                    pairs.push(("has_room_fee", "1".to_string()));
                }
            }
            OrderDetails::Takeout {
                takeout_time,
                takeout_address,
            } => {
                pairs.push(("takeout_time", takeout_time.clone()));
                pairs.push(("takeout_address", takeout_address.clone()));
            }
        }
        if let Some(phone) = &self.phone {
            pairs.push(("phone", phone.clone()));
        }
        for item in &self.items {
            pairs.push(("dish_id[]", item.dish_id.to_string()));
            pairs.push(("quantity[]", item.quantity.to_string()));
        }
        pairs
    }
}

/// What a search keyword is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    #[default]
    OrderNo,
    Phone,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderNo => "order_no",
            Self::Phone => "phone",
        }
    }
}

/// Order search query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSearch {
    pub search_type: SearchType,
    pub keyword: String,
}

impl OrderSearch {
    pub fn from_fields(search_type: SearchType, keyword: &str) -> Result<Self, ValidationError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(ValidationError::MissingKeyword);
        }
        Ok(Self {
            search_type,
            keyword: keyword.to_string(),
        })
    }

    pub fn form_pairs(&self) -> FormPairs {
        vec![
            ("search_type", self.search_type.as_str().to_string()),
            ("keyword", self.keyword.clone()),
        ]
    }
}

/// Editable order fields accepted by `/admin/order/update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderField {
    #[default]
    Status,
    Phone,
    TableNum,
    TakeoutAddress,
    TakeoutTime,
}

impl OrderField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Phone => "phone",
            Self::TableNum => "table_num",
            Self::TakeoutAddress => "takeout_address",
            Self::TakeoutTime => "takeout_time",
        }
    }
}

/// Single-field order edit payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFieldUpdate {
    pub order_no: String,
    pub field: OrderField,
    pub new_value: String,
}

impl OrderFieldUpdate {
    pub fn from_fields(
        order_no: &str,
        field: OrderField,
        new_value: &str,
    ) -> Result<Self, ValidationError> {
        let order_no = order_no.trim();
        let new_value = new_value.trim();
        if order_no.is_empty() {
            return Err(ValidationError::MissingOrderNo);
        }
        if new_value.is_empty() {
            return Err(ValidationError::MissingField);
        }
        Ok(Self {
            order_no: order_no.to_string(),
            field,
            new_value: new_value.to_string(),
        })
    }

    pub fn form_pairs(&self) -> FormPairs {
        vec![
            ("order_no", self.order_no.clone()),
            ("update_type", self.field.as_str().to_string()),
            ("new_value", self.new_value.clone()),
        ]
    }
}
