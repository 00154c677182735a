pub mod configuration;
pub mod controller;
pub mod employee_management;
pub mod error_handling;
pub mod item_management;
pub mod storage;
pub mod web_interface;

pub use controller::Controller;
