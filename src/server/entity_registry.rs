//! Entity registry: the static route table built from entity descriptors

use axum::Router;

/// Trait that describes how to build routes for an entity
///
/// Each resource (Company, Invoice) implements this trait to contribute its
/// `(method, path, handler)` routes.
pub trait EntityDescriptor: Send + Sync {
    /// The entity type name (singular, e.g., "company")
    fn entity_type(&self) -> &str;

    /// The plural form, which is also the collection path (e.g., "companies")
    fn plural(&self) -> &str;

    /// Build the CRUD routes for this entity
    ///
    /// Should return a Router with routes like:
    /// - GET/POST /{plural}
    /// - GET/PUT/DELETE /{plural}/{key}
    fn build_routes(&self) -> Router;
}

/// Registry for all entities served by the application
///
/// Descriptors are kept in registration order. Registering an entity type a
/// second time replaces the earlier descriptor in place.
#[derive(Default)]
pub struct EntityRegistry {
    descriptors: Vec<Box<dyn EntityDescriptor>>,
}

impl EntityRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Register an entity descriptor
    pub fn register(&mut self, descriptor: Box<dyn EntityDescriptor>) {
        match self
            .descriptors
            .iter_mut()
            .find(|existing| existing.entity_type() == descriptor.entity_type())
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
    }

    /// Build a router with all registered entity routes
    pub fn build_routes(&self) -> Router {
        self.descriptors
            .iter()
            .fold(Router::new(), |router, descriptor| {
                router.merge(descriptor.build_routes())
            })
    }

    /// Get all registered entity types, in registration order
    pub fn entity_types(&self) -> Vec<&str> {
        self.descriptors.iter().map(|d| d.entity_type()).collect()
    }
}
