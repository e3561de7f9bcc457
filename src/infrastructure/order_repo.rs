use diesel::pg::PgConnection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::order::{BeerOrder, OrderPage, PageRequest};
use crate::domain::ports::BeerOrderRepository;
use crate::schema::{beer_order_lines, beer_orders, beers, customers};

use super::models::{BeerOrderLineRow, BeerOrderRow, BeerRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselBeerOrderRepository {
    pool: DbPool,
}

impl DieselBeerOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Loads the lines (joined to their beers) of every order in one query and
/// attaches them, preserving the order of `orders`.
fn with_lines(
    conn: &mut PgConnection,
    orders: Vec<BeerOrderRow>,
) -> Result<Vec<BeerOrder>, DomainError> {
    let lines: Vec<(BeerOrderLineRow, BeerRow)> = BeerOrderLineRow::belonging_to(&orders)
        .inner_join(beers::table)
        .select((BeerOrderLineRow::as_select(), BeerRow::as_select()))
        .order((beer_order_lines::created_date.asc(), beer_order_lines::id.asc()))
        .load(conn)?;

    lines
        .grouped_by(&orders)
        .into_iter()
        .zip(orders)
        .map(|(lines, order)| order.into_domain(lines))
        .collect()
}

impl BeerOrderRepository for DieselBeerOrderRepository {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let exists = diesel::select(diesel::dsl::exists(
            customers::table.filter(customers::id.eq(customer_id)),
        ))
        .get_result(&mut conn)?;

        Ok(exists)
    }

    fn list_by_customer(
        &self,
        customer_id: Uuid,
        page: PageRequest,
    ) -> Result<OrderPage, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            let total: i64 = beer_orders::table
                .filter(beer_orders::customer_id.eq(customer_id))
                .count()
                .get_result(conn)?;

            let rows = beer_orders::table
                .filter(beer_orders::customer_id.eq(customer_id))
                .select(BeerOrderRow::as_select())
                .order((beer_orders::created_date.asc(), beer_orders::id.asc()))
                .limit(i64::from(page.page_size))
                .offset(page.offset())
                .load(conn)?;

            Ok(OrderPage {
                items: with_lines(conn, rows)?,
                total,
            })
        })
    }

    fn find_by_id(&self, order_id: Uuid) -> Result<Option<BeerOrder>, DomainError> {
        let mut conn = self.pool.get()?;

        let order = beer_orders::table
            .filter(beer_orders::id.eq(order_id))
            .select(BeerOrderRow::as_select())
            .first(&mut conn)
            .optional()?;

        let Some(order) = order else {
            return Ok(None);
        };

        Ok(with_lines(&mut conn, vec![order])?.pop())
    }
}
