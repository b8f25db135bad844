use chrono::NaiveDate;

pub const CUSTOMER_NAME_MAX_LEN: usize = 225;
pub const CUSTOMER_EMAIL_MAX_LEN: usize = 225;
pub const CUSTOMER_ADDRESS_MAX_LEN: usize = 225;
pub const PRODUCT_NAME_MAX_LEN: usize = 255;

/// A customer together with the ids of the orders they placed.
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub order_ids: Vec<i32>,
}

/// Mutable customer fields. Create and update both carry the full set.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerFields {
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub product_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductFields {
    pub product_name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_date: NaiveDate,
    pub customer_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderFields {
    pub order_date: NaiveDate,
    pub customer_id: i32,
}
