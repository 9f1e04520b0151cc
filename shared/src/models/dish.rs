//! Dish models

use serde::{Deserialize, Serialize};

use super::FormPairs;
use crate::validate::{self, ValidationError};

/// Menu entry as served by the dish list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuDish {
    pub dish_id: i64,
    pub name: String,
    /// Discounted unit price in currency units.
    pub final_price: f64,
}

/// Create dish payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishCreate {
    pub name: String,
    pub price: f64,
    /// Fraction of the price kept, in (0, 1].
    pub discount: f64,
}

impl DishCreate {
    /// Build the payload from raw form fields.
    ///
    /// Guard conditions: name non-empty, price a positive number, discount a
    /// number in (0, 1]. The server re-validates; these checks only keep
    /// obviously bad input off the wire.
    pub fn from_fields(name: &str, price: &str, discount: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingDishName);
        }
        let price = validate::parse_price(price)?;
        let discount = validate::parse_discount(discount)?;
        Ok(Self {
            name: name.to_string(),
            price,
            discount,
        })
    }

    pub fn form_pairs(&self) -> FormPairs {
        vec![
            ("name", self.name.clone()),
            ("price", self.price.to_string()),
            ("discount", self.discount.to_string()),
        ]
    }
}

/// Update dish payload
///
/// The id is mandatory; the new values are free-form and sent only when
/// present, exactly as typed. The server is the authority on their shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishUpdate {
    pub dish_id: String,
    pub new_name: Option<String>,
    pub new_price: Option<String>,
    pub new_discount: Option<String>,
}

impl DishUpdate {
    pub fn from_fields(
        dish_id: &str,
        new_name: &str,
        new_price: &str,
        new_discount: &str,
    ) -> Result<Self, ValidationError> {
        let dish_id = dish_id.trim();
        if dish_id.is_empty() {
            return Err(ValidationError::MissingDishId);
        }
        let optional = |raw: &str| {
            let raw = raw.trim();
            (!raw.is_empty()).then(|| raw.to_string())
        };
        Ok(Self {
            dish_id: dish_id.to_string(),
            new_name: optional(new_name),
            new_price: optional(new_price),
            new_discount: optional(new_discount),
        })
    }

    pub fn form_pairs(&self) -> FormPairs {
        let mut pairs: FormPairs = vec![("dish_id", self.dish_id.clone())];
        if let Some(name) = &self.new_name {
            pairs.push(("new_name", name.clone()));
        }
        if let Some(price) = &self.new_price {
            pairs.push(("new_price", price.clone()));
        }
        if let Some(discount) = &self.new_discount {
            pairs.push(("new_discount", discount.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_name() {
        assert_eq!(
            DishCreate::from_fields("  ", "8.5", "0.9").unwrap_err(),
            ValidationError::MissingDishName
        );
    }

    #[test]
    fn create_rejects_bad_price() {
        for raw in ["0", "-1", "abc", ""] {
            assert_eq!(
                DishCreate::from_fields("汤", raw, "0.9").unwrap_err(),
                ValidationError::InvalidPrice,
                "price {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn create_rejects_discount_outside_unit_interval() {
        for raw in ["0", "1.5", "-0.2", "x", ""] {
            assert_eq!(
                DishCreate::from_fields("汤", "8.5", raw).unwrap_err(),
                ValidationError::InvalidDiscount,
                "discount {raw:?} should be rejected"
            );
        }
        // Boundary: exactly 1 is allowed.
        assert!(DishCreate::from_fields("汤", "8.5", "1").is_ok());
    }

    #[test]
    fn create_form_pairs() {
        let dish = DishCreate::from_fields("Soup", "8.5", "0.9").unwrap();
        assert_eq!(
            dish.form_pairs(),
            vec![
                ("name", "Soup".to_string()),
                ("price", "8.5".to_string()),
                ("discount", "0.9".to_string()),
            ]
        );
    }

    #[test]
    fn update_requires_id_only() {
        assert_eq!(
            DishUpdate::from_fields("", "新名", "", "").unwrap_err(),
            ValidationError::MissingDishId
        );

        let update = DishUpdate::from_fields("3", "", "12", "").unwrap();
        assert_eq!(
            update.form_pairs(),
            vec![
                ("dish_id", "3".to_string()),
                ("new_price", "12".to_string()),
            ]
        );
    }
}
