use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Customer not found")]
    CustomerNotFound,
    #[error("Order not found")]
    OrderNotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}
