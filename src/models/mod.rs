pub mod customer;
pub mod driver;
pub mod ride;
