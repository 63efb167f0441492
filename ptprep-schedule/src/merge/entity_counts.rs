use crate::model::{TransitSchedule, VehicleFleet};
use serde::Serialize;
use std::ops::AddAssign;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityCounts {
    pub stops: usize,
    pub minimal_transfer_times: usize,
    pub lines: usize,
    pub routes: usize,
    pub departures: usize,
    pub vehicle_types: usize,
    pub vehicles: usize,
}

impl EntityCounts {
    pub fn of(schedule: &TransitSchedule, fleet: &VehicleFleet) -> EntityCounts {
        EntityCounts {
            stops: schedule.stop_count(),
            minimal_transfer_times: schedule.minimal_transfer_times().len(),
            lines: schedule.line_count(),
            routes: schedule.route_count(),
            departures: schedule.departure_count(),
            vehicle_types: fleet.vehicle_type_count(),
            vehicles: fleet.vehicle_count(),
        }
    }
}

impl AddAssign for EntityCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.stops += rhs.stops;
        self.minimal_transfer_times += rhs.minimal_transfer_times;
        self.lines += rhs.lines;
        self.routes += rhs.routes;
        self.departures += rhs.departures;
        self.vehicle_types += rhs.vehicle_types;
        self.vehicles += rhs.vehicles;
    }
}
