use super::{feed_id_mapping::FeedIdMapping, EntityCounts, MergeError};
use crate::model::{
    Departure, MinimalTransferTime, ModelError, RouteStop, StopFacility, TransitLine, TransitRoute,
    TransitSchedule, Vehicle, VehicleFleet, VehicleType,
};

/// accumulates feeds into one schedule and fleet. every id of a feed is moved
/// into that feed's namespace (`{prefix}_{id}`) and every reference between
/// the feed's entities is rewritten to match.
#[derive(Debug, Default)]
pub struct ScheduleMerger {
    schedule: TransitSchedule,
    fleet: VehicleFleet,
}

/// what happened while merging one feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedMergeOutcome {
    /// entities added to the merged dataset
    pub merged: EntityCounts,
    /// departures whose vehicle is not part of the feed's fleet
    pub dropped_vehicle_references: usize,
    /// transfer times naming a stop the feed does not define
    pub skipped_transfer_times: usize,
}

impl ScheduleMerger {
    pub fn new() -> ScheduleMerger {
        ScheduleMerger::default()
    }

    pub fn schedule(&self) -> &TransitSchedule {
        &self.schedule
    }

    pub fn fleet(&self) -> &VehicleFleet {
        &self.fleet
    }

    /// merges one feed. entities are inserted as they are remapped, in the
    /// order stops, transfer times, vehicle types, vehicles, then lines with
    /// their routes and departures, since each step resolves references
    /// through the mappings of the steps before it.
    ///
    /// a route stop naming an unknown stop, or a vehicle naming an unknown
    /// type, means the feed is internally inconsistent and fails the merge.
    /// a departure naming an unknown vehicle loses its vehicle reference.
    pub fn merge_feed(
        &mut self,
        prefix: &str,
        schedule: &TransitSchedule,
        fleet: &VehicleFleet,
    ) -> Result<FeedMergeOutcome, MergeError> {
        let mut mapping = FeedIdMapping::default();
        let mut outcome = FeedMergeOutcome::default();
        let collision = |source: ModelError| MergeError::Collision {
            prefix: prefix.to_string(),
            source,
        };

        for stop in schedule.stops() {
            let id = stop.id.with_prefix(prefix);
            let mut merged = StopFacility::new(id.clone(), stop.coord);
            merged.name = stop.name.clone();
            merged.link = stop.link.clone();
            merged.stop_area = stop.stop_area.as_ref().map(|area| area.with_prefix(prefix));
            merged.is_blocking = stop.is_blocking;
            merged.attributes = stop.attributes.clone();
            self.schedule.add_stop(merged).map_err(collision)?;
            mapping.stops.insert(stop.id.clone(), id);
            outcome.merged.stops += 1;
        }

        for transfer in schedule.minimal_transfer_times() {
            let from = mapping.stops.get(&transfer.from_stop);
            let to = mapping.stops.get(&transfer.to_stop);
            match (from, to) {
                (Some(from_stop), Some(to_stop)) => {
                    self.schedule
                        .add_minimal_transfer_time(MinimalTransferTime {
                            from_stop: from_stop.clone(),
                            to_stop: to_stop.clone(),
                            seconds: transfer.seconds,
                        });
                    outcome.merged.minimal_transfer_times += 1;
                }
                _ => {
                    log::warn!(
                        "feed '{prefix}': skipping transfer time {} -> {} with unknown stop",
                        transfer.from_stop,
                        transfer.to_stop
                    );
                    outcome.skipped_transfer_times += 1;
                }
            }
        }

        for vehicle_type in fleet.vehicle_types() {
            let id = vehicle_type.id.with_prefix(prefix);
            let merged = VehicleType {
                id: id.clone(),
                ..vehicle_type.clone()
            };
            self.fleet.add_vehicle_type(merged).map_err(collision)?;
            mapping.vehicle_types.insert(vehicle_type.id.clone(), id);
            outcome.merged.vehicle_types += 1;
        }

        for vehicle in fleet.vehicles() {
            let vehicle_type = mapping
                .vehicle_types
                .get(&vehicle.vehicle_type)
                .ok_or_else(|| MergeError::UnknownVehicleType {
                    prefix: prefix.to_string(),
                    vehicle: vehicle.id.clone(),
                    vehicle_type: vehicle.vehicle_type.clone(),
                })?;
            let id = vehicle.id.with_prefix(prefix);
            let mut merged = Vehicle::new(id.clone(), vehicle_type.clone());
            merged.attributes = vehicle.attributes.clone();
            self.fleet.add_vehicle(merged).map_err(collision)?;
            mapping.vehicles.insert(vehicle.id.clone(), id);
            outcome.merged.vehicles += 1;
        }

        for line in schedule.lines() {
            let mut merged_line = TransitLine::new(line.id.with_prefix(prefix));
            merged_line.name = line.name.clone();
            merged_line.attributes = line.attributes.clone();
            let merged_line = self.schedule.add_line(merged_line).map_err(collision)?;
            outcome.merged.lines += 1;

            for route in line.routes() {
                let merged_route = remap_route(prefix, route, &mapping)?;
                let merged_route = merged_line.add_route(merged_route).map_err(collision)?;
                outcome.merged.routes += 1;

                for departure in route.departures() {
                    let mut merged = Departure::new(
                        departure.id.with_prefix(prefix),
                        departure.departure_time,
                    );
                    merged.attributes = departure.attributes.clone();
                    if let Some(vehicle) = &departure.vehicle {
                        merged.vehicle = mapping.vehicles.get(vehicle).cloned();
                        if merged.vehicle.is_none() {
                            log::debug!(
                                "feed '{prefix}': departure '{}' of route '{}' drops unknown vehicle '{vehicle}'",
                                departure.id,
                                route.id
                            );
                            outcome.dropped_vehicle_references += 1;
                        }
                    }
                    merged_route.add_departure(merged).map_err(collision)?;
                    outcome.merged.departures += 1;
                }
            }
        }

        if outcome.dropped_vehicle_references > 0 {
            log::warn!(
                "feed '{prefix}': {} departure(s) referenced vehicles missing from the feed's fleet and were left without a vehicle",
                outcome.dropped_vehicle_references
            );
        }
        Ok(outcome)
    }

    pub fn into_parts(self) -> (TransitSchedule, VehicleFleet) {
        (self.schedule, self.fleet)
    }
}

/// copies a route without its departures, pointing its stops at the merged stop ids
fn remap_route(
    prefix: &str,
    route: &TransitRoute,
    mapping: &FeedIdMapping,
) -> Result<TransitRoute, MergeError> {
    let stops = route
        .stops
        .iter()
        .map(|stop| {
            let merged_stop = mapping.stops.get(&stop.stop).ok_or_else(|| {
                MergeError::UnknownRouteStop {
                    prefix: prefix.to_string(),
                    route: route.id.clone(),
                    stop: stop.stop.clone(),
                }
            })?;
            Ok(RouteStop {
                stop: merged_stop.clone(),
                ..stop.clone()
            })
        })
        .collect::<Result<Vec<_>, MergeError>>()?;

    let mut merged = TransitRoute::new(
        route.id.with_prefix(prefix),
        route.transport_mode.clone(),
        stops,
    );
    merged.description = route.description.clone();
    merged.network_route = route.network_route.clone();
    merged.attributes = route.attributes.clone();
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        io::{parse_schedule, parse_vehicles},
        model::{
            check_integrity, DepartureId, LineId, RouteId, StopAreaId, StopId, VehicleId,
            VehicleTypeId,
        },
        test_fixtures,
    };
    use itertools::Itertools;

    fn metro() -> (TransitSchedule, VehicleFleet) {
        (
            parse_schedule(test_fixtures::METRO_SCHEDULE, "metro/schedule.xml").unwrap(),
            parse_vehicles(test_fixtures::METRO_VEHICLES, "metro/vehicles.xml").unwrap(),
        )
    }

    fn bus() -> (TransitSchedule, VehicleFleet) {
        (
            parse_schedule(test_fixtures::BUS_SCHEDULE, "bus/schedule.xml").unwrap(),
            parse_vehicles(test_fixtures::BUS_VEHICLES, "bus/vehicles.xml").unwrap(),
        )
    }

    #[test]
    fn test_identical_feeds_produce_unique_ids() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        merger.merge_feed("a", &schedule, &fleet).unwrap();
        merger.merge_feed("b", &schedule, &fleet).unwrap();
        let (merged, merged_fleet) = merger.into_parts();

        assert_eq!(merged.stop_count(), 2 * schedule.stop_count());
        assert!(merged.stops().map(|s| &s.id).all_unique());
        assert!(merged.lines().map(|l| &l.id).all_unique());
        assert_eq!(merged_fleet.vehicle_count(), 2 * fleet.vehicle_count());
        assert!(merged.stop(&StopId::from("a_BL01")).is_some());
        assert!(merged.stop(&StopId::from("b_BL01")).is_some());
    }

    #[test]
    fn test_references_resolve_after_merge() {
        let (metro_schedule, metro_fleet) = metro();
        let (bus_schedule, bus_fleet) = bus();
        let mut merger = ScheduleMerger::new();
        merger
            .merge_feed("metro", &metro_schedule, &metro_fleet)
            .unwrap();
        merger.merge_feed("bus", &bus_schedule, &bus_fleet).unwrap();
        let (schedule, fleet) = merger.into_parts();

        assert!(check_integrity(&schedule, &fleet).is_empty());
        let vehicle = fleet.vehicle(&VehicleId::from("bus_bus_1")).unwrap();
        assert_eq!(vehicle.vehicle_type, VehicleTypeId::from("bus_default"));
        let route = schedule
            .line(&LineId::from("bus_BL"))
            .and_then(|l| l.route(&RouteId::from("bus_r1")))
            .unwrap();
        let stops = route.stops.iter().map(|s| s.stop.as_str()).collect_vec();
        assert_eq!(stops, vec!["bus_BL01", "bus_S2"]);
        let departure = route.departure(&DepartureId::from("bus_dep_1")).unwrap();
        assert_eq!(departure.vehicle, Some(VehicleId::from("bus_bus_1")));
    }

    #[test]
    fn test_counts_are_summed() {
        let (metro_schedule, metro_fleet) = metro();
        let (bus_schedule, bus_fleet) = bus();
        let mut merger = ScheduleMerger::new();
        merger
            .merge_feed("metro", &metro_schedule, &metro_fleet)
            .unwrap();
        merger.merge_feed("bus", &bus_schedule, &bus_fleet).unwrap();

        let mut expected = EntityCounts::of(&metro_schedule, &metro_fleet);
        expected += EntityCounts::of(&bus_schedule, &bus_fleet);
        // the bus feed has one transfer time to a stop it does not define
        expected.minimal_transfer_times -= 1;
        assert_eq!(EntityCounts::of(merger.schedule(), merger.fleet()), expected);
    }

    #[test]
    fn test_unspecified_offsets_stay_unspecified() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        merger.merge_feed("m", &schedule, &fleet).unwrap();
        let route = merger
            .schedule()
            .line(&LineId::from("m_BL"))
            .and_then(|l| l.route(&RouteId::from("m_BL_east")))
            .unwrap();
        assert!(route.stops[0].arrival_offset.is_none());
        assert_eq!(route.stops[0].departure_offset.map(|t| t.seconds()), Some(0.0));
        assert!(route.stops[2].departure_offset.is_none());
        assert!(route.stops[1].await_departure);
        assert!(!route.stops[2].allow_boarding);
        assert_eq!(route.network_route.as_ref().map(|r| r.len()), Some(3));
    }

    #[test]
    fn test_unknown_vehicle_reference_is_dropped() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        let outcome = merger.merge_feed("m", &schedule, &fleet).unwrap();
        assert_eq!(outcome.dropped_vehicle_references, 1);
        assert_eq!(outcome.merged.departures, 3);

        let route = merger
            .schedule()
            .line(&LineId::from("m_BL"))
            .and_then(|l| l.route(&RouteId::from("m_BL_east")))
            .unwrap();
        let kept = route.departure(&DepartureId::from("m_dep_1")).unwrap();
        assert_eq!(kept.vehicle, Some(VehicleId::from("m_train_1")));
        let dropped = route.departure(&DepartureId::from("m_dep_2")).unwrap();
        assert!(dropped.vehicle.is_none());
        let never_assigned = route.departure(&DepartureId::from("m_dep_3")).unwrap();
        assert!(never_assigned.vehicle.is_none());
        assert_eq!(never_assigned.attributes.len(), 1);
    }

    #[test]
    fn test_stop_details_are_carried_over() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        merger.merge_feed("m", &schedule, &fleet).unwrap();
        let source = schedule.stop(&StopId::from("BL01")).unwrap();
        let stop = merger.schedule().stop(&StopId::from("m_BL01")).unwrap();
        assert_eq!(stop.coord, source.coord);
        assert_eq!(stop.name, source.name);
        assert_eq!(stop.link, source.link);
        assert!(stop.is_blocking);
        assert_eq!(stop.attributes, source.attributes);

        let area = merger.schedule().stop(&StopId::from("m_BL02")).unwrap();
        assert_eq!(area.stop_area, Some(StopAreaId::from("m_yongning")));

        let transfer = &merger.schedule().minimal_transfer_times()[0];
        assert_eq!(transfer.from_stop, StopId::from("m_BL01"));
        assert_eq!(transfer.to_stop, StopId::from("m_BL02"));
    }

    #[test]
    fn test_vehicle_type_is_copied_verbatim() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        merger.merge_feed("m", &schedule, &fleet).unwrap();
        let source = fleet.vehicle_type(&VehicleTypeId::from("metro_6car")).unwrap();
        let merged = merger
            .fleet()
            .vehicle_type(&VehicleTypeId::from("m_metro_6car"))
            .unwrap();
        assert_eq!(merged.capacity, source.capacity);
        assert_eq!(merged.other_elements, source.other_elements);
        assert_eq!(merged.attributes, source.attributes);
    }

    #[test]
    fn test_ids_carry_their_feed_prefix() {
        let (metro_schedule, metro_fleet) = metro();
        let (bus_schedule, bus_fleet) = bus();
        let mut merger = ScheduleMerger::new();
        merger
            .merge_feed("metro", &metro_schedule, &metro_fleet)
            .unwrap();
        merger.merge_feed("bus", &bus_schedule, &bus_fleet).unwrap();
        let stops = merger.schedule().stops().map(|s| s.id.as_str()).collect_vec();
        assert_eq!(
            stops,
            vec!["metro_BL01", "metro_BL02", "metro_BL03", "bus_BL01", "bus_S2"]
        );
        let lines = merger.schedule().lines().map(|l| l.id.as_str()).collect_vec();
        assert_eq!(lines, vec!["metro_BL", "bus_BL"]);
    }

    #[test]
    fn test_same_prefix_twice_is_a_collision() {
        let (schedule, fleet) = metro();
        let mut merger = ScheduleMerger::new();
        merger.merge_feed("metro", &schedule, &fleet).unwrap();
        let result = merger.merge_feed("metro", &schedule, &fleet);
        assert!(matches!(result, Err(MergeError::Collision { .. })));
    }

    #[test]
    fn test_route_stop_without_stop_fails() {
        let text = r#"<transitSchedule>
            <transitLine id="l"><transitRoute id="r"><transportMode>bus</transportMode>
                <routeProfile><stop refId="missing"/></routeProfile>
                <departures/>
            </transitRoute></transitLine>
        </transitSchedule>"#;
        let schedule = parse_schedule(text, "broken.xml").unwrap();
        let mut merger = ScheduleMerger::new();
        let result = merger.merge_feed("x", &schedule, &VehicleFleet::default());
        assert!(matches!(result, Err(MergeError::UnknownRouteStop { .. })));
    }
}
