use utoipa::OpenApi;

use crate::domain::beer::BeerStyle;
use crate::domain::order::OrderStatus;
use crate::handlers;
use crate::models::{BeerDto, BeerOrderDto, BeerOrderLineDto, BeerOrderPagedList};

#[derive(OpenApi)]
#[openapi(
    info(title = "Brewery order service"),
    paths(handlers::orders::list_orders, handlers::orders::get_order),
    components(schemas(
        BeerDto,
        BeerStyle,
        BeerOrderDto,
        BeerOrderLineDto,
        BeerOrderPagedList,
        OrderStatus
    )),
    tags((name = "orders", description = "Customer beer order queries"))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_both_order_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/api/v1/customers/{customerId}/orders"));
        assert!(paths.contains_key("/api/v1/customers/{customerId}/orders/{orderId}"));
    }

    #[test]
    fn registers_paged_list_schema() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.expect("components").schemas;

        assert!(schemas.contains_key("BeerOrderPagedList"));
        assert!(schemas.contains_key("BeerStyle"));
    }
}
