//! Business services layered over the domain models.

pub mod services;
