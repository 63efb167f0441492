use super::{
    Attributes, DepartureId, EntityKind, LinkId, ModelError, RouteId, ScheduleTime, StopId,
    VehicleId,
};
use indexmap::{map::Entry, IndexMap};

/// one element of a route profile.
///
/// arrival and departure offsets are relative to the departure time of the
/// trip. `None` means "not specified", which is distinct from an offset of
/// zero: the first stop of a route commonly has no arrival offset and the
/// last stop no departure offset.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStop {
    pub stop: StopId,
    pub arrival_offset: Option<ScheduleTime>,
    pub departure_offset: Option<ScheduleTime>,
    pub allow_boarding: bool,
    pub allow_alighting: bool,
    pub await_departure: bool,
}

impl RouteStop {
    pub fn new(
        stop: StopId,
        arrival_offset: Option<ScheduleTime>,
        departure_offset: Option<ScheduleTime>,
    ) -> RouteStop {
        RouteStop {
            stop,
            arrival_offset,
            departure_offset,
            allow_boarding: true,
            allow_alighting: true,
            await_departure: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub id: DepartureId,
    pub departure_time: ScheduleTime,
    pub vehicle: Option<VehicleId>,
    pub attributes: Attributes,
}

impl Departure {
    pub fn new(id: DepartureId, departure_time: ScheduleTime) -> Departure {
        Departure {
            id,
            departure_time,
            vehicle: None,
            attributes: Attributes::default(),
        }
    }
}

/// a stop pattern of a line together with all trips (departures) that
/// follow it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitRoute {
    pub id: RouteId,
    pub description: Option<String>,
    pub transport_mode: String,
    pub stops: Vec<RouteStop>,
    /// the sequence of network links travelled, when the route has been
    /// mapped onto a network
    pub network_route: Option<Vec<LinkId>>,
    pub attributes: Attributes,
    departures: IndexMap<DepartureId, Departure>,
}

impl TransitRoute {
    pub fn new(id: RouteId, transport_mode: String, stops: Vec<RouteStop>) -> TransitRoute {
        TransitRoute {
            id,
            description: None,
            transport_mode,
            stops,
            network_route: None,
            attributes: Attributes::default(),
            departures: IndexMap::new(),
        }
    }

    pub fn add_departure(&mut self, departure: Departure) -> Result<(), ModelError> {
        match self.departures.entry(departure.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::Departure, e.key())),
            Entry::Vacant(e) => {
                e.insert(departure);
                Ok(())
            }
        }
    }

    pub fn departure(&self, id: &DepartureId) -> Option<&Departure> {
        self.departures.get(id)
    }

    pub fn departures(&self) -> impl Iterator<Item = &Departure> {
        self.departures.values()
    }

    pub fn departure_count(&self) -> usize {
        self.departures.len()
    }
}
