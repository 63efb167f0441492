use super::{
    xml_ops::{
        child_text, element_children, expect_root, find_child, parse_bool, parse_document,
        parse_optional, parse_required, read_attributes, required_attr,
    },
    ScheduleIoError,
};
use crate::model::{
    Coord, Departure, LinkId, MinimalTransferTime, ModelError, RouteStop, StopFacility, TransitLine,
    TransitRoute, TransitSchedule,
};
use ptprep_core::fs_ops;
use roxmltree::Node;
use std::path::Path;

/// reads a MATSim transit schedule (v2) from an XML or XML.gz file
pub fn read_schedule<P>(filepath: P) -> Result<TransitSchedule, ScheduleIoError>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    let name = path.display().to_string();
    let text = fs_ops::read_to_string(path).map_err(|source| ScheduleIoError::ReadError {
        filepath: name.clone(),
        source,
    })?;
    parse_schedule(&text, &name)
}

/// parses transit schedule XML. `filepath` is only used in error messages.
pub fn parse_schedule(text: &str, filepath: &str) -> Result<TransitSchedule, ScheduleIoError> {
    let document = parse_document(filepath, text)?;
    let root = expect_root(filepath, &document, "transitSchedule")?;
    let invalid = |source: ModelError| ScheduleIoError::InvalidContent {
        filepath: filepath.to_string(),
        source,
    };

    let mut schedule = TransitSchedule::default();
    schedule.attributes = read_attributes(filepath, root)?;
    for child in element_children(root) {
        match child.tag_name().name() {
            "attributes" => {}
            "transitStops" => {
                for node in element_children(child).filter(|n| n.has_tag_name("stopFacility")) {
                    let stop = read_stop(filepath, node)?;
                    schedule.add_stop(stop).map_err(invalid)?;
                }
            }
            "minimalTransferTimes" => {
                for node in element_children(child).filter(|n| n.has_tag_name("relation")) {
                    schedule.add_minimal_transfer_time(MinimalTransferTime {
                        from_stop: required_attr(filepath, node, "fromStop")?.into(),
                        to_stop: required_attr(filepath, node, "toStop")?.into(),
                        seconds: parse_required(filepath, node, "transferTime")?,
                    });
                }
            }
            "transitLine" => read_line(filepath, child, &mut schedule)?,
            other => log::warn!("{filepath}: ignoring unsupported element <{other}>"),
        }
    }
    Ok(schedule)
}

fn read_stop(filepath: &str, node: Node) -> Result<StopFacility, ScheduleIoError> {
    let coord = Coord {
        x: parse_required(filepath, node, "x")?,
        y: parse_required(filepath, node, "y")?,
        z: parse_optional(filepath, node, "z")?,
    };
    let mut stop = StopFacility::new(required_attr(filepath, node, "id")?.into(), coord);
    stop.name = node.attribute("name").map(String::from);
    stop.link = node.attribute("linkRefId").map(LinkId::from);
    stop.stop_area = node.attribute("stopAreaId").map(Into::into);
    stop.is_blocking = parse_bool(filepath, node, "isBlocking", false)?;
    stop.attributes = read_attributes(filepath, node)?;
    Ok(stop)
}

fn read_line(
    filepath: &str,
    node: Node,
    schedule: &mut TransitSchedule,
) -> Result<(), ScheduleIoError> {
    let invalid = |source: ModelError| ScheduleIoError::InvalidContent {
        filepath: filepath.to_string(),
        source,
    };
    let mut line = TransitLine::new(required_attr(filepath, node, "id")?.into());
    line.name = node.attribute("name").map(String::from);
    line.attributes = read_attributes(filepath, node)?;
    let line = schedule.add_line(line).map_err(invalid)?;

    for route_node in element_children(node).filter(|n| n.has_tag_name("transitRoute")) {
        let route = read_route(filepath, route_node)?;
        let route = line.add_route(route).map_err(invalid)?;
        let Some(departures) = find_child(route_node, "departures") else {
            continue;
        };
        for departure_node in element_children(departures).filter(|n| n.has_tag_name("departure"))
        {
            let mut departure = Departure::new(
                required_attr(filepath, departure_node, "id")?.into(),
                parse_required(filepath, departure_node, "departureTime")?,
            );
            departure.vehicle = departure_node.attribute("vehicleRefId").map(Into::into);
            departure.attributes = read_attributes(filepath, departure_node)?;
            route.add_departure(departure).map_err(invalid)?;
        }
    }
    Ok(())
}

/// reads a route without its departures
fn read_route(filepath: &str, node: Node) -> Result<TransitRoute, ScheduleIoError> {
    let transport_mode =
        child_text(node, "transportMode").ok_or_else(|| ScheduleIoError::MissingElement {
            filepath: filepath.to_string(),
            parent: String::from("transitRoute"),
            element: "transportMode",
        })?;

    let mut stops = vec![];
    if let Some(profile) = find_child(node, "routeProfile") {
        for stop_node in element_children(profile).filter(|n| n.has_tag_name("stop")) {
            let mut stop = RouteStop::new(
                required_attr(filepath, stop_node, "refId")?.into(),
                parse_optional(filepath, stop_node, "arrivalOffset")?,
                parse_optional(filepath, stop_node, "departureOffset")?,
            );
            stop.allow_boarding = parse_bool(filepath, stop_node, "allowBoarding", true)?;
            stop.allow_alighting = parse_bool(filepath, stop_node, "allowAlighting", true)?;
            stop.await_departure = parse_bool(filepath, stop_node, "awaitDeparture", false)?;
            stops.push(stop);
        }
    }

    let mut route = TransitRoute::new(
        required_attr(filepath, node, "id")?.into(),
        transport_mode.trim().to_string(),
        stops,
    );
    route.description = child_text(node, "description");
    route.attributes = read_attributes(filepath, node)?;
    route.network_route = find_child(node, "route")
        .map(|links| {
            element_children(links)
                .filter(|n| n.has_tag_name("link"))
                .map(|n| required_attr(filepath, n, "refId").map(LinkId::from))
                .collect::<Result<Vec<_>, _>>()
        })
        .transpose()?;
    Ok(route)
}
