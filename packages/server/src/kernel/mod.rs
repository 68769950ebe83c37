//! Kernel module - server infrastructure and dependencies.

pub mod extraction_service;

pub use extraction_service::{
    create_extraction_service, create_generator, extraction_service_from, DynGenerator,
    SharedExtractor,
};
