pub mod in_memory;
pub mod models;
pub mod order_repo;

pub use in_memory::InMemoryBeerOrderRepository;
pub use order_repo::DieselBeerOrderRepository;
