pub mod domain;
pub mod patient_use_cases;
pub mod ports;
pub mod services;
