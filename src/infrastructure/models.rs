use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::beer::Beer;
use crate::domain::errors::DomainError;
use crate::domain::order::{BeerOrder, BeerOrderLine};
use crate::schema::{beer_order_lines, beer_orders, beers};

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = beers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BeerRow {
    pub id: Uuid,
    pub version: i32,
    pub beer_name: String,
    pub beer_style: String,
    pub upc: i64,
    pub price: BigDecimal,
    pub quantity_on_hand: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl TryFrom<BeerRow> for Beer {
    type Error = DomainError;

    fn try_from(row: BeerRow) -> Result<Self, Self::Error> {
        Ok(Beer {
            id: row.id,
            version: row.version,
            name: row.beer_name,
            style: row.beer_style.parse()?,
            upc: row.upc,
            price: row.price,
            quantity_on_hand: row.quantity_on_hand,
            created_date: row.created_date,
            last_modified_date: row.last_modified_date,
        })
    }
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = beer_orders)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BeerOrderRow {
    pub id: Uuid,
    pub version: i32,
    pub customer_id: Uuid,
    pub customer_ref: Option<String>,
    pub order_status: String,
    pub order_status_callback_url: Option<String>,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

impl BeerOrderRow {
    /// Assembles the domain order from this row and its lines joined to
    /// their beers.
    pub fn into_domain(
        self,
        lines: Vec<(BeerOrderLineRow, BeerRow)>,
    ) -> Result<BeerOrder, DomainError> {
        let lines = lines
            .into_iter()
            .map(|(line, beer)| {
                Ok(BeerOrderLine {
                    id: line.id,
                    version: line.version,
                    beer: Beer::try_from(beer)?,
                    order_quantity: line.order_quantity,
                    created_date: line.created_date,
                    last_modified_date: line.last_modified_date,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        Ok(BeerOrder {
            id: self.id,
            version: self.version,
            customer_id: self.customer_id,
            customer_ref: self.customer_ref,
            status: self.order_status.parse()?,
            status_callback_url: self.order_status_callback_url,
            created_date: self.created_date,
            last_modified_date: self.last_modified_date,
            lines,
        })
    }
}

#[derive(
    Debug, Clone, Queryable, Selectable, Identifiable, Associations,
)]
#[diesel(table_name = beer_order_lines)]
#[diesel(belongs_to(BeerOrderRow, foreign_key = beer_order_id))]
#[diesel(belongs_to(BeerRow, foreign_key = beer_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BeerOrderLineRow {
    pub id: Uuid,
    pub version: i32,
    pub beer_order_id: Uuid,
    pub beer_id: Uuid,
    pub order_quantity: i32,
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}
