//! Resource definitions: models, handlers and route descriptors per entity

pub mod company;
pub mod invoice;
