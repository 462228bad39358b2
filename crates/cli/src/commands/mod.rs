pub mod account;
pub mod demo;
pub mod pricing;
