//! In-memory order store for tests and local runs without a database.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{BeerOrder, OrderPage, PageRequest};
use crate::domain::ports::BeerOrderRepository;

#[derive(Default)]
pub struct InMemoryBeerOrderRepository {
    customers: RwLock<HashSet<Uuid>>,
    orders: RwLock<HashMap<Uuid, BeerOrder>>,
}

impl InMemoryBeerOrderRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_customer(&self, customer_id: Uuid) -> Result<(), DomainError> {
        self.customers
            .write()
            .map_err(|e| DomainError::Internal(format!("Failed to acquire write lock: {}", e)))?
            .insert(customer_id);
        Ok(())
    }

    /// Stores the order, registering its customer if needed.
    pub fn add_order(&self, order: BeerOrder) -> Result<(), DomainError> {
        self.add_customer(order.customer_id)?;
        self.orders
            .write()
            .map_err(|e| DomainError::Internal(format!("Failed to acquire write lock: {}", e)))?
            .insert(order.id, order);
        Ok(())
    }
}

impl BeerOrderRepository for InMemoryBeerOrderRepository {
    fn customer_exists(&self, customer_id: Uuid) -> Result<bool, DomainError> {
        let customers = self
            .customers
            .read()
            .map_err(|e| DomainError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(customers.contains(&customer_id))
    }

    fn list_by_customer(
        &self,
        customer_id: Uuid,
        page: PageRequest,
    ) -> Result<OrderPage, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|e| DomainError::Internal(format!("Failed to acquire read lock: {}", e)))?;

        let mut matching: Vec<&BeerOrder> = orders
            .values()
            .filter(|o| o.customer_id == customer_id)
            .collect();
        matching.sort_by_key(|o| (o.created_date, o.id));

        let total = matching.len() as i64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(page.page_size as usize)
            .cloned()
            .collect();

        Ok(OrderPage { items, total })
    }

    fn find_by_id(&self, order_id: Uuid) -> Result<Option<BeerOrder>, DomainError> {
        let orders = self
            .orders
            .read()
            .map_err(|e| DomainError::Internal(format!("Failed to acquire read lock: {}", e)))?;
        Ok(orders.get(&order_id).cloned())
    }
}
