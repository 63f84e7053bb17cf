use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

const MIN_USERNAME_LEN: usize = 3;
const MIN_PRODUCT_NAME_LEN: usize = 2;

/// Shared surface of the record types held by a [`crate::storage::RecordStore`].
pub trait Record {
    /// Human-readable kind, used in lookup errors ("User not found").
    const KIND: &'static str;

    fn id(&self) -> &str;

    fn validate(&self) -> Result<(), ValidationError>;
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "new_id")]
    id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl User {
    /// Builds a user with a fresh id and timestamp. No validation happens here.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            username: username.into(),
            email: email.into(),
            first_name,
            last_name,
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl Record for User {
    const KIND: &'static str = "User";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_username(Some(&self.username))?;
        check_email(Some(&self.email))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default = "new_id")]
    id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default = "Utc::now")]
    created_at: DateTime<Utc>,
}

impl Product {
    /// Builds a product with a fresh id and timestamp. No validation happens here.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: Option<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            price,
            description,
            category,
            created_at: Utc::now(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the price reduced by `percentage` percent, without rounding.
    ///
    /// The percentage must lie in `[0, 100]`; NaN is rejected as well.
    pub fn apply_discount(&self, percentage: f64) -> Result<f64, ValidationError> {
        if !(0.0..=100.0).contains(&percentage) {
            return Err(ValidationError::InvalidDiscount);
        }

        let discount_factor = 1.0 - percentage / 100.0;
        Ok(self.price * discount_factor)
    }
}

impl Record for Product {
    const KIND: &'static str = "Product";

    fn id(&self) -> &str {
        &self.id
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_product_name(Some(&self.name))?;
        check_price(Some(self.price)).map(|_| ())
    }
}

fn check_username(username: Option<&str>) -> Result<(), ValidationError> {
    match username {
        Some(name) if name.chars().count() >= MIN_USERNAME_LEN => Ok(()),
        _ => Err(ValidationError::InvalidUsername),
    }
}

fn check_email(email: Option<&str>) -> Result<(), ValidationError> {
    match email {
        Some(email) if email.contains('@') => Ok(()),
        _ => Err(ValidationError::InvalidEmail),
    }
}

fn check_product_name(name: Option<&str>) -> Result<(), ValidationError> {
    match name {
        Some(name) if name.chars().count() >= MIN_PRODUCT_NAME_LEN => Ok(()),
        _ => Err(ValidationError::InvalidName),
    }
}

fn check_price(price: Option<f64>) -> Result<f64, ValidationError> {
    match price {
        Some(price) if price >= 0.0 => Ok(price),
        _ => Err(ValidationError::InvalidPrice),
    }
}

/// Loosely-shaped user input, as received over HTTP.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl CreateUserRequest {
    /// Parses and validates the payload into a [`User`].
    pub fn into_user(self) -> Result<User, ValidationError> {
        check_username(self.username.as_deref())?;
        check_email(self.email.as_deref())?;

        Ok(User::new(
            self.username.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.first_name,
            self.last_name,
        ))
    }
}

/// Loosely-shaped product input, as received over HTTP.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl CreateProductRequest {
    /// Parses and validates the payload into a [`Product`].
    pub fn into_product(self) -> Result<Product, ValidationError> {
        check_product_name(self.name.as_deref())?;
        let price = check_price(self.price)?;

        Ok(Product::new(
            self.name.unwrap_or_default(),
            price,
            self.description,
            self.category,
        ))
    }
}
