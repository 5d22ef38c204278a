//! Infrastructure layer - Services, logging

pub mod logging;
pub mod services;
