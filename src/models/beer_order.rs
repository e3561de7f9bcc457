use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::beer::BeerStyle;
use crate::domain::order::{BeerOrder, BeerOrderLine, OrderStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderLineDto {
    pub id: Uuid,
    pub version: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub beer_id: Uuid,
    pub beer_name: String,
    pub beer_style: BeerStyle,
    pub upc: i64,
    pub order_quantity: i32,
}

impl From<&BeerOrderLine> for BeerOrderLineDto {
    fn from(line: &BeerOrderLine) -> Self {
        Self {
            id: line.id,
            version: line.version,
            created_date: line.created_date,
            last_modified_date: line.last_modified_date,
            beer_id: line.beer.id,
            beer_name: line.beer.name.clone(),
            beer_style: line.beer.style,
            upc: line.beer.upc,
            order_quantity: line.order_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerOrderDto {
    pub id: Uuid,
    pub version: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub beer_order_lines: Vec<BeerOrderLineDto>,
    pub order_status: OrderStatus,
    pub order_status_callback_url: Option<String>,
}

impl From<&BeerOrder> for BeerOrderDto {
    fn from(order: &BeerOrder) -> Self {
        Self {
            id: order.id,
            version: order.version,
            created_date: order.created_date,
            last_modified_date: order.last_modified_date,
            customer_id: order.customer_id,
            customer_ref: order.customer_ref.clone(),
            beer_order_lines: order.lines.iter().map(BeerOrderLineDto::from).collect(),
            order_status: order.status,
            order_status_callback_url: order.status_callback_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::Utc;
    use serde_json::Value;

    use super::*;
    use crate::domain::beer::Beer;

    fn sample_order() -> BeerOrder {
        let now = Utc::now();
        let beer = Beer {
            id: Uuid::new_v4(),
            version: 1,
            name: "Beer1".to_string(),
            style: BeerStyle::PaleAle,
            upc: 123456789012,
            price: BigDecimal::from_str("12.99").unwrap(),
            quantity_on_hand: 4,
            created_date: now,
            last_modified_date: now,
        };
        BeerOrder {
            id: Uuid::new_v4(),
            version: 0,
            customer_id: Uuid::new_v4(),
            customer_ref: Some("1234".to_string()),
            status: OrderStatus::New,
            status_callback_url: None,
            created_date: now,
            last_modified_date: now,
            lines: vec![BeerOrderLine {
                id: Uuid::new_v4(),
                version: 0,
                beer,
                order_quantity: 6,
                created_date: now,
                last_modified_date: now,
            }],
        }
    }

    #[test]
    fn line_copies_beer_reference() {
        let order = sample_order();
        let dto = BeerOrderDto::from(&order);

        let line = &dto.beer_order_lines[0];
        assert_eq!(line.beer_id, order.lines[0].beer.id);
        assert_eq!(line.beer_name, "Beer1");
        assert_eq!(line.beer_style, BeerStyle::PaleAle);
        assert_eq!(line.upc, 123456789012);
        assert_eq!(line.order_quantity, 6);
    }

    #[test]
    fn order_serializes_with_camel_case_fields() {
        let dto = BeerOrderDto::from(&sample_order());
        let json: Value = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["customerRef"], "1234");
        assert_eq!(json["orderStatus"], "NEW");
        assert_eq!(json["beerOrderLines"][0]["beerStyle"], "PALE_ALE");
        assert_eq!(json["beerOrderLines"][0]["orderQuantity"], 6);
        assert!(json["orderStatusCallbackUrl"].is_null());
    }
}
