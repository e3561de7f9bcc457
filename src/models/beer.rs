use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::beer::{Beer, BeerStyle};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Uuid,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    /// Decimal price serialized as a string, e.g. "12.99"
    #[schema(value_type = String, example = "12.99")]
    pub price: BigDecimal,
    pub quantity_on_hand: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl From<&Beer> for BeerDto {
    fn from(beer: &Beer) -> Self {
        Self {
            id: beer.id,
            version: beer.version,
            beer_name: beer.name.clone(),
            beer_style: beer.style,
            upc: beer.upc,
            price: beer.price.clone(),
            quantity_on_hand: beer.quantity_on_hand,
            created_date: beer.created_date,
            last_modified_date: beer.last_modified_date,
        }
    }
}
