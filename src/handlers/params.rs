//! Path and query parameter types for the order endpoints.
//!
//! Path identifiers accept UUIDs whose hex groups are shorter than the
//! canonical width (e.g. `85d4506-e7dd-446e-a092-5f30b98e7b26`); each group is
//! masked to its width and the five groups are combined into a 128-bit value.

use serde::{de, Deserialize, Deserializer};
use thiserror::Error;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::domain::order::PageRequest;

const MAX_UUID_LEN: usize = 36;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidUuid {
    #[error("UUID string too large: {0} characters")]
    TooLong(usize),
    #[error("invalid UUID string: '{0}'")]
    Malformed(String),
}

pub fn parse_lenient_uuid(input: &str) -> Result<Uuid, InvalidUuid> {
    if input.len() > MAX_UUID_LEN {
        return Err(InvalidUuid::TooLong(input.len()));
    }

    let groups: Vec<&str> = input.split('-').collect();
    let [g0, g1, g2, g3, g4] = groups.as_slice() else {
        return Err(InvalidUuid::Malformed(input.to_string()));
    };

    let malformed = || InvalidUuid::Malformed(input.to_string());
    let high = (hex_group(g0).ok_or_else(malformed)? & 0xffff_ffff) << 32
        | (hex_group(g1).ok_or_else(malformed)? & 0xffff) << 16
        | (hex_group(g2).ok_or_else(malformed)? & 0xffff);
    let low = (hex_group(g3).ok_or_else(malformed)? & 0xffff) << 48
        | (hex_group(g4).ok_or_else(malformed)? & 0xffff_ffff_ffff);

    Ok(Uuid::from_u64_pair(high, low))
}

fn hex_group(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(s, 16).ok()
}

fn lenient_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_lenient_uuid(&raw).map_err(de::Error::custom)
}

/// An empty query value (`?pageSize=`) counts as unspecified.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            de::Error::custom(format!("'{}' is not a valid 32-bit integer", value))
        }),
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct CustomerPath {
    /// Customer UUID
    #[serde(deserialize_with = "lenient_uuid")]
    pub customer_id: Uuid,
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Path)]
pub struct CustomerOrderPath {
    /// Customer UUID
    #[serde(deserialize_with = "lenient_uuid")]
    pub customer_id: Uuid,
    /// Order UUID
    #[serde(deserialize_with = "lenient_uuid")]
    pub order_id: Uuid,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListOrdersParams {
    /// Zero-based page number. Defaults to 0.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page_number: Option<i32>,
    /// Items per page. Defaults to 25, maximum 100.
    #[serde(default, deserialize_with = "blank_as_none")]
    pub page_size: Option<i32>,
}

impl ListOrdersParams {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::normalized(self.page_number, self.page_size)
    }
}
