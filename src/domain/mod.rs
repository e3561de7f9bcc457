pub mod beer;
pub mod errors;
pub mod order;
pub mod ports;
