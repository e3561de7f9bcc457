use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::beer::Beer;
use super::errors::DomainError;

pub const DEFAULT_PAGE_NUMBER: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    New,
    Ready,
    PickedUp,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "NEW",
            OrderStatus::Ready => "READY",
            OrderStatus::PickedUp => "PICKED_UP",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(OrderStatus::New),
            "READY" => Ok(OrderStatus::Ready),
            "PICKED_UP" => Ok(OrderStatus::PickedUp),
            other => Err(DomainError::Internal(format!("unknown order status '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BeerOrderLine {
    pub id: Uuid,
    pub version: i32,
    pub beer: Beer,
    pub order_quantity: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct BeerOrder {
    pub id: Uuid,
    pub version: i32,
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub status: OrderStatus,
    pub status_callback_url: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub lines: Vec<BeerOrderLine>,
}

/// Zero-based page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
}

impl PageRequest {
    pub fn of(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Builds a request from raw query values.
    ///
    /// A missing or negative page number falls back to the first page; a
    /// missing or non-positive size falls back to the default, and sizes
    /// above the maximum are clamped.
    pub fn normalized(page_number: Option<i32>, page_size: Option<i32>) -> Self {
        let page_number = match page_number {
            Some(n) if n >= 0 => n.unsigned_abs(),
            _ => DEFAULT_PAGE_NUMBER,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => s.unsigned_abs().min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };
        Self::of(page_number, page_size)
    }

    pub fn offset(&self) -> i64 {
        i64::from(self.page_number) * i64::from(self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::of(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone)]
pub struct OrderPage {
    pub items: Vec<BeerOrder>,
    pub total: i64,
}
