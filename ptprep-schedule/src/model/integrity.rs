use super::{
    DepartureId, LineId, RouteId, StopId, TransitSchedule, VehicleFleet, VehicleId, VehicleTypeId,
};
use std::fmt::Display;

/// a reference inside a schedule/fleet pair that does not resolve
#[derive(Debug, Clone, PartialEq)]
pub enum IntegrityViolation {
    UnknownRouteStop {
        line: LineId,
        route: RouteId,
        stop: StopId,
    },
    UnknownTransferStop {
        stop: StopId,
    },
    UnknownVehicleType {
        vehicle: VehicleId,
        vehicle_type: VehicleTypeId,
    },
    UnknownDepartureVehicle {
        line: LineId,
        route: RouteId,
        departure: DepartureId,
        vehicle: VehicleId,
    },
}

impl Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrityViolation::UnknownRouteStop { line, route, stop } => {
                write!(f, "route '{route}' of line '{line}' references unknown stop '{stop}'")
            }
            IntegrityViolation::UnknownTransferStop { stop } => {
                write!(f, "minimal transfer time references unknown stop '{stop}'")
            }
            IntegrityViolation::UnknownVehicleType {
                vehicle,
                vehicle_type,
            } => write!(
                f,
                "vehicle '{vehicle}' references unknown vehicle type '{vehicle_type}'"
            ),
            IntegrityViolation::UnknownDepartureVehicle {
                line,
                route,
                departure,
                vehicle,
            } => write!(
                f,
                "departure '{departure}' of route '{route}' (line '{line}') references unknown vehicle '{vehicle}'"
            ),
        }
    }
}

/// checks that every route stop, transfer time, vehicle and departure
/// reference resolves within the given schedule and fleet. returns all
/// violations in document order; an empty result means the pair is closed
/// under its references.
pub fn check_integrity(schedule: &TransitSchedule, fleet: &VehicleFleet) -> Vec<IntegrityViolation> {
    let mut violations = vec![];
    for transfer in schedule.minimal_transfer_times() {
        for stop in [&transfer.from_stop, &transfer.to_stop] {
            if schedule.stop(stop).is_none() {
                violations.push(IntegrityViolation::UnknownTransferStop { stop: stop.clone() });
            }
        }
    }
    for vehicle in fleet.vehicles() {
        if fleet.vehicle_type(&vehicle.vehicle_type).is_none() {
            violations.push(IntegrityViolation::UnknownVehicleType {
                vehicle: vehicle.id.clone(),
                vehicle_type: vehicle.vehicle_type.clone(),
            });
        }
    }
    for line in schedule.lines() {
        for route in line.routes() {
            for route_stop in route.stops.iter() {
                if schedule.stop(&route_stop.stop).is_none() {
                    violations.push(IntegrityViolation::UnknownRouteStop {
                        line: line.id.clone(),
                        route: route.id.clone(),
                        stop: route_stop.stop.clone(),
                    });
                }
            }
            for departure in route.departures() {
                let Some(vehicle) = &departure.vehicle else {
                    continue;
                };
                if fleet.vehicle(vehicle).is_none() {
                    violations.push(IntegrityViolation::UnknownDepartureVehicle {
                        line: line.id.clone(),
                        route: route.id.clone(),
                        departure: departure.id.clone(),
                        vehicle: vehicle.clone(),
                    });
                }
            }
        }
    }
    violations
}
