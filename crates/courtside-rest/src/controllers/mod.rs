//! REST API controllers.

pub mod availability_controller;
pub mod health_controller;
