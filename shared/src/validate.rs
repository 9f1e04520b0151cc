//! Client-side guard conditions
//!
//! Presence and range checks applied before a request is built. The backend
//! re-validates everything; a failure here only saves a round trip.

use thiserror::Error;

/// A form field that failed its guard condition.
///
/// The display strings are the user-facing messages, in the backend's own
/// vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("请输入餐桌号")]
    MissingTableNum,

    #[error("请输入送餐时间")]
    MissingTakeoutTime,

    #[error("请输入送餐地址")]
    MissingTakeoutAddress,

    #[error("请输入手机号")]
    MissingPhone,

    #[error("请选择至少一道菜品")]
    NoItems,

    #[error("请输入菜品名称")]
    MissingDishName,

    #[error("价格必须大于0")]
    InvalidPrice,

    #[error("折扣必须在0-1之间")]
    InvalidDiscount,

    #[error("请输入菜品ID")]
    MissingDishId,

    #[error("请输入搜索关键词")]
    MissingKeyword,

    #[error("请输入订单编号")]
    MissingOrderNo,

    #[error("参数不完整")]
    MissingField,
}

/// Parse a price field: must be a number strictly greater than zero.
pub fn parse_price(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or(ValidationError::InvalidPrice)
}

/// Parse a discount field: must be a number in (0, 1].
pub fn parse_discount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|d| *d > 0.0 && *d <= 1.0)
        .ok_or(ValidationError::InvalidDiscount)
}
