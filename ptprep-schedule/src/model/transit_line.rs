use super::{Attributes, EntityKind, LineId, ModelError, RouteId, TransitRoute};
use indexmap::{map::Entry, IndexMap};

#[derive(Debug, Clone, PartialEq)]
pub struct TransitLine {
    pub id: LineId,
    pub name: Option<String>,
    pub attributes: Attributes,
    routes: IndexMap<RouteId, TransitRoute>,
}

impl TransitLine {
    pub fn new(id: LineId) -> TransitLine {
        TransitLine {
            id,
            name: None,
            attributes: Attributes::default(),
            routes: IndexMap::new(),
        }
    }

    /// adds a route to this line, returning a handle to the stored route so
    /// departures can be attached to it.
    pub fn add_route(&mut self, route: TransitRoute) -> Result<&mut TransitRoute, ModelError> {
        match self.routes.entry(route.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::TransitRoute, e.key())),
            Entry::Vacant(e) => Ok(e.insert(route)),
        }
    }

    pub fn route(&self, id: &RouteId) -> Option<&TransitRoute> {
        self.routes.get(id)
    }

    pub fn routes(&self) -> impl Iterator<Item = &TransitRoute> {
        self.routes.values()
    }

    pub fn route_count(&self) -> usize {
        self.routes.len()
    }
}
