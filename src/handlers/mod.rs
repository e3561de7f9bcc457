pub mod orders;
pub mod params;
