use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::PageRequest;
use crate::domain::ports::BeerOrderRepository;
use crate::models::{BeerOrderDto, BeerOrderPagedList};

/// Read operations over a customer's orders, as consumed by the HTTP layer.
pub trait BeerOrderService: Send + Sync + 'static {
    fn list_orders(
        &self,
        customer_id: Uuid,
        page: PageRequest,
    ) -> Result<BeerOrderPagedList, DomainError>;

    fn get_order_by_id(&self, customer_id: Uuid, order_id: Uuid)
        -> Result<BeerOrderDto, DomainError>;
}

pub struct BeerOrderServiceImpl<R> {
    repo: R,
}

impl<R: BeerOrderRepository> BeerOrderServiceImpl<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    fn ensure_customer(&self, customer_id: Uuid) -> Result<(), DomainError> {
        if self.repo.customer_exists(customer_id)? {
            Ok(())
        } else {
            log::debug!("customer {} not found", customer_id);
            Err(DomainError::CustomerNotFound)
        }
    }
}

impl<R: BeerOrderRepository> BeerOrderService for BeerOrderServiceImpl<R> {
    fn list_orders(
        &self,
        customer_id: Uuid,
        page: PageRequest,
    ) -> Result<BeerOrderPagedList, DomainError> {
        self.ensure_customer(customer_id)?;

        let result = self.repo.list_by_customer(customer_id, page)?;
        let content = result.items.iter().map(BeerOrderDto::from).collect();
        Ok(BeerOrderPagedList::new(content, page, result.total))
    }

    fn get_order_by_id(
        &self,
        customer_id: Uuid,
        order_id: Uuid,
    ) -> Result<BeerOrderDto, DomainError> {
        self.ensure_customer(customer_id)?;

        match self.repo.find_by_id(order_id)? {
            Some(order) if order.customer_id == customer_id => Ok(BeerOrderDto::from(&order)),
            Some(_) => {
                log::debug!(
                    "order {} does not belong to customer {}",
                    order_id,
                    customer_id
                );
                Err(DomainError::OrderNotFound)
            }
            None => Err(DomainError::OrderNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::{Duration, Utc};

    use super::*;
    use crate::domain::beer::{Beer, BeerStyle};
    use crate::domain::order::{BeerOrder, BeerOrderLine, OrderStatus};
    use crate::infrastructure::in_memory::InMemoryBeerOrderRepository;

    fn beer() -> Beer {
        let now = Utc::now();
        Beer {
            id: Uuid::new_v4(),
            version: 1,
            name: "Mango Bobs".to_string(),
            style: BeerStyle::Ipa,
            upc: 337010000001,
            price: BigDecimal::from_str("12.95").unwrap(),
            quantity_on_hand: 100,
            created_date: now,
            last_modified_date: now,
        }
    }

    fn order_for(customer_id: Uuid, minutes_ago: i64) -> BeerOrder {
        let created = Utc::now() - Duration::minutes(minutes_ago);
        BeerOrder {
            id: Uuid::new_v4(),
            version: 0,
            customer_id,
            customer_ref: Some(format!("ref-{}", minutes_ago)),
            status: OrderStatus::New,
            status_callback_url: None,
            created_date: created,
            last_modified_date: created,
            lines: vec![BeerOrderLine {
                id: Uuid::new_v4(),
                version: 0,
                beer: beer(),
                order_quantity: 12,
                created_date: created,
                last_modified_date: created,
            }],
        }
    }

    fn service_with_customer() -> (
        BeerOrderServiceImpl<InMemoryBeerOrderRepository>,
        Uuid,
    ) {
        let repo = InMemoryBeerOrderRepository::new();
        let customer_id = Uuid::new_v4();
        repo.add_customer(customer_id).unwrap();
        (BeerOrderServiceImpl::new(repo), customer_id)
    }

    #[test]
    fn list_orders_for_unknown_customer_is_not_found() {
        let (service, _) = service_with_customer();

        let err = service
            .list_orders(Uuid::new_v4(), PageRequest::default())
            .unwrap_err();

        assert!(matches!(err, DomainError::CustomerNotFound));
    }

    #[test]
    fn list_orders_returns_requested_page_oldest_first() {
        let repo = InMemoryBeerOrderRepository::new();
        let customer_id = Uuid::new_v4();
        repo.add_customer(customer_id).unwrap();
        for minutes_ago in [30, 20, 10] {
            repo.add_order(order_for(customer_id, minutes_ago)).unwrap();
        }
        repo.add_order(order_for(Uuid::new_v4(), 5)).unwrap();
        let service = BeerOrderServiceImpl::new(repo);

        let page = service
            .list_orders(customer_id, PageRequest::of(0, 2))
            .unwrap();

        assert_eq!(page.total_elements, 3);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].customer_ref.as_deref(), Some("ref-30"));
        assert_eq!(page.content[1].customer_ref.as_deref(), Some("ref-20"));

        let second = service
            .list_orders(customer_id, PageRequest::of(1, 2))
            .unwrap();
        assert_eq!(second.content.len(), 1);
        assert!(second.last);
    }

    #[test]
    fn list_orders_for_customer_without_orders_is_empty() {
        let (service, customer_id) = service_with_customer();

        let page = service
            .list_orders(customer_id, PageRequest::default())
            .unwrap();

        assert!(page.empty);
        assert_eq!(page.total_elements, 0);
    }

    #[test]
    fn get_order_returns_order_with_lines() {
        let (service, customer_id) = service_with_customer();
        let order = order_for(customer_id, 1);
        let order_id = order.id;
        service.repo.add_order(order).unwrap();

        let dto = service.get_order_by_id(customer_id, order_id).unwrap();

        assert_eq!(dto.id, order_id);
        assert_eq!(dto.beer_order_lines.len(), 1);
        assert_eq!(dto.beer_order_lines[0].order_quantity, 12);
    }

    #[test]
    fn get_order_of_another_customer_is_not_found() {
        let (service, customer_id) = service_with_customer();
        let other = Uuid::new_v4();
        service.repo.add_customer(other).unwrap();
        let order = order_for(other, 1);
        let order_id = order.id;
        service.repo.add_order(order).unwrap();

        let err = service.get_order_by_id(customer_id, order_id).unwrap_err();

        assert!(matches!(err, DomainError::OrderNotFound));
    }

    #[test]
    fn get_unknown_order_is_not_found() {
        let (service, customer_id) = service_with_customer();

        let err = service
            .get_order_by_id(customer_id, Uuid::new_v4())
            .unwrap_err();

        assert!(matches!(err, DomainError::OrderNotFound));
    }

    #[test]
    fn get_order_for_unknown_customer_is_customer_not_found() {
        let (service, _) = service_with_customer();

        let err = service
            .get_order_by_id(Uuid::new_v4(), Uuid::new_v4())
            .unwrap_err();

        assert!(matches!(err, DomainError::CustomerNotFound));
    }
}
