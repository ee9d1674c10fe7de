pub mod cart;
pub mod category;
pub mod currency;
pub mod filter;
pub mod food;
pub mod tenant;
pub mod wire;

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
