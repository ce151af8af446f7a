//! Components of the Customer application

pub mod admin;
pub mod customer;
pub mod layout;
