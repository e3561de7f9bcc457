//! JSON-facing views of beers and orders.

pub mod beer;
pub mod beer_order;
pub mod paged_list;

pub use beer::BeerDto;
pub use beer_order::{BeerOrderDto, BeerOrderLineDto};
pub use paged_list::BeerOrderPagedList;
