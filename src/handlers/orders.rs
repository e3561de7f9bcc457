use actix_web::{web, HttpResponse};

use crate::application::BeerOrderService;
use crate::errors::AppError;
use crate::models::{BeerOrderDto, BeerOrderPagedList};

use super::params::{CustomerOrderPath, CustomerPath, ListOrdersParams};

/// GET /api/v1/customers/{customerId}/orders
///
/// Returns one page of the customer's orders. `pageNumber` is zero-based and
/// defaults to 0; `pageSize` defaults to 25 and is capped at 100.
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customerId}/orders",
    params(CustomerPath, ListOrdersParams),
    responses(
        (status = 200, description = "Page of the customer's orders", body = BeerOrderPagedList),
        (status = 400, description = "Malformed customer id or paging parameter"),
        (status = 404, description = "Customer not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn list_orders(
    service: web::Data<dyn BeerOrderService>,
    path: web::Path<CustomerPath>,
    query: web::Query<ListOrdersParams>,
) -> Result<HttpResponse, AppError> {
    let customer_id = path.into_inner().customer_id;
    let page = query.page_request();
    log::debug!(
        "listing orders for customer {} (page {}, size {})",
        customer_id,
        page.page_number,
        page.page_size
    );

    let service = service.into_inner();
    let paged = web::block(move || service.list_orders(customer_id, page)).await??;

    Ok(HttpResponse::Ok().json(paged))
}

/// GET /api/v1/customers/{customerId}/orders/{orderId}
#[utoipa::path(
    get,
    path = "/api/v1/customers/{customerId}/orders/{orderId}",
    params(CustomerOrderPath),
    responses(
        (status = 200, description = "Order found", body = BeerOrderDto),
        (status = 400, description = "Malformed customer or order id"),
        (status = 404, description = "Customer or order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    service: web::Data<dyn BeerOrderService>,
    path: web::Path<CustomerOrderPath>,
) -> Result<HttpResponse, AppError> {
    let CustomerOrderPath {
        customer_id,
        order_id,
    } = path.into_inner();
    log::debug!("fetching order {} for customer {}", order_id, customer_id);

    let service = service.into_inner();
    let order = web::block(move || service.get_order_by_id(customer_id, order_id)).await??;

    Ok(HttpResponse::Ok().json(order))
}
