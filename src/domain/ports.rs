use uuid::Uuid;

use super::errors::DomainError;
use super::order::{BeerOrder, OrderPage, PageRequest};

pub trait BeerOrderRepository: Send + Sync + 'static {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, DomainError>;
    /// One page of the customer's orders, oldest first, each with its lines.
    fn list_by_customer(
        &self,
        customer_id: Uuid,
        page: PageRequest,
    ) -> Result<OrderPage, DomainError>;
    fn find_by_id(&self, order_id: Uuid) -> Result<Option<BeerOrder>, DomainError>;
}
