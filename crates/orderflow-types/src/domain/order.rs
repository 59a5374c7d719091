use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct OrderId(pub i64);

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(OrderId)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Draft,
    Approved,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Draft => "draft",
            Mode::Approved => "approved",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(Mode::Draft),
            "approved" => Ok(Mode::Approved),
            other => Err(ValidationError::InvalidMode(other.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{0} must be an integer")]
    NotInteger(&'static str),

    #[error("mode must be one of draft, approved (got {0})")]
    InvalidMode(String),
}

/// Raw create-order payload as received from a caller.
///
/// Fields stay loosely typed so that shape problems surface as a
/// [`ValidationError`] instead of a deserialization failure. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Value>,
}

impl OrderInput {
    pub fn new(user_id: i64, product_id: i64, mode: Mode) -> Self {
        Self {
            user_id: Some(Value::from(user_id)),
            product_id: Some(Value::from(product_id)),
            mode: Some(Value::from(mode.as_str())),
        }
    }

    pub fn validate(&self) -> Result<NewOrder, ValidationError> {
        let user_id = integer_field(self.user_id.as_ref(), "userId")?;
        let product_id = integer_field(self.product_id.as_ref(), "productId")?;
        let mode = match &self.mode {
            None => Mode::default(),
            Some(Value::String(s)) => s.parse()?,
            Some(other) => return Err(ValidationError::InvalidMode(other.to_string())),
        };
        Ok(NewOrder {
            user_id,
            product_id,
            mode,
        })
    }
}

fn integer_field(value: Option<&Value>, field: &'static str) -> Result<i64, ValidationError> {
    let value = value.ok_or(ValidationError::Missing(field))?;
    value.as_i64().ok_or(ValidationError::NotInteger(field))
}

/// A validated order that has not been assigned an id yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub user_id: i64,
    pub product_id: i64,
    pub mode: Mode,
}

impl NewOrder {
    pub fn with_id(self, id: OrderId) -> Order {
        Order {
            id,
            user_id: self.user_id,
            product_id: self.product_id,
            mode: self.mode,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub user_id: i64,
    pub product_id: i64,
    pub mode: Mode,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(value: Value) -> OrderInput {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_input_produces_new_order() {
        let order = input(json!({ "userId": 1, "productId": 2, "mode": "approved" }))
            .validate()
            .unwrap();
        assert_eq!(
            order,
            NewOrder {
                user_id: 1,
                product_id: 2,
                mode: Mode::Approved,
            }
        );
    }

    #[test]
    fn mode_defaults_to_draft_and_extra_fields_are_ignored() {
        let order = input(json!({ "userId": 3, "productId": 4, "coupon": "X" }))
            .validate()
            .unwrap();
        assert_eq!(order.mode, Mode::Draft);
    }

    #[test]
    fn validation_errors() {
        let missing_product = input(json!({ "userId": 1, "mode": "draft" })).validate();
        assert_eq!(missing_product, Err(ValidationError::Missing("productId")));

        let null_user = input(json!({ "userId": null, "productId": 2 })).validate();
        assert_eq!(null_user, Err(ValidationError::Missing("userId")));

        let string_user = input(json!({ "userId": "1", "productId": 2 })).validate();
        assert_eq!(string_user, Err(ValidationError::NotInteger("userId")));

        let fractional = input(json!({ "userId": 1, "productId": 2.5 })).validate();
        assert_eq!(fractional, Err(ValidationError::NotInteger("productId")));

        let bad_mode = input(json!({ "userId": 1, "productId": 2, "mode": "shipped" })).validate();
        assert!(matches!(bad_mode, Err(ValidationError::InvalidMode(_))));

        let numeric_mode = input(json!({ "userId": 1, "productId": 2, "mode": 1 })).validate();
        assert!(matches!(numeric_mode, Err(ValidationError::InvalidMode(_))));
    }

    #[test]
    fn order_serializes_camel_case() {
        let order = NewOrder {
            user_id: 1,
            product_id: 2,
            mode: Mode::Approved,
        }
        .with_id(OrderId(9));
        assert_eq!(
            serde_json::to_value(&order).unwrap(),
            json!({ "id": 9, "userId": 1, "productId": 2, "mode": "approved" })
        );
    }

    #[test]
    fn order_id_parses_negative_values() {
        assert_eq!("-1".parse::<OrderId>().unwrap(), OrderId(-1));
        assert!("abc".parse::<OrderId>().is_err());
    }
}
