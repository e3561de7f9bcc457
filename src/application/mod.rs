pub mod beer_order_service;

pub use beer_order_service::{BeerOrderService, BeerOrderServiceImpl};
