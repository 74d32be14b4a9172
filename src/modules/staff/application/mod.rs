pub mod domain;
pub mod ports;
pub mod services;
pub mod staff_use_cases;
