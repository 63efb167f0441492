use super::{
    xml_ops::{
        child_text, element_children, expect_root, parse_document, parse_optional,
        read_attributes, required_attr, xml_element,
    },
    ScheduleIoError,
};
use crate::model::{ModelError, Vehicle, VehicleCapacity, VehicleFleet, VehicleType};
use ptprep_core::fs_ops;
use roxmltree::Node;
use std::path::Path;

/// reads MATSim vehicle definitions (v2.0) from an XML or XML.gz file
pub fn read_vehicles<P>(filepath: P) -> Result<VehicleFleet, ScheduleIoError>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    let name = path.display().to_string();
    let text = fs_ops::read_to_string(path).map_err(|source| ScheduleIoError::ReadError {
        filepath: name.clone(),
        source,
    })?;
    parse_vehicles(&text, &name)
}

/// parses vehicle definitions XML. all vehicle types are read before any
/// vehicle, so a vehicle may precede its type in the document.
pub fn parse_vehicles(text: &str, filepath: &str) -> Result<VehicleFleet, ScheduleIoError> {
    let document = parse_document(filepath, text)?;
    let root = expect_root(filepath, &document, "vehicleDefinitions")?;
    let invalid = |source: ModelError| ScheduleIoError::InvalidContent {
        filepath: filepath.to_string(),
        source,
    };

    let mut fleet = VehicleFleet::default();
    for node in element_children(root).filter(|n| n.has_tag_name("vehicleType")) {
        let vehicle_type = read_vehicle_type(filepath, node)?;
        fleet.add_vehicle_type(vehicle_type).map_err(invalid)?;
    }
    for node in element_children(root).filter(|n| n.has_tag_name("vehicle")) {
        let mut vehicle = Vehicle::new(
            required_attr(filepath, node, "id")?.into(),
            required_attr(filepath, node, "type")?.into(),
        );
        vehicle.attributes = read_attributes(filepath, node)?;
        fleet.add_vehicle(vehicle).map_err(invalid)?;
    }
    Ok(fleet)
}

fn read_vehicle_type(filepath: &str, node: Node) -> Result<VehicleType, ScheduleIoError> {
    let mut vehicle_type = VehicleType::new(required_attr(filepath, node, "id")?.into());
    vehicle_type.attributes = read_attributes(filepath, node)?;
    for child in element_children(node) {
        match child.tag_name().name() {
            "attributes" => {}
            "description" => vehicle_type.description = child_text(node, "description"),
            "capacity" => {
                vehicle_type.capacity = Some(VehicleCapacity {
                    seats: parse_optional(filepath, child, "seats")?,
                    standing_room: parse_optional(filepath, child, "standingRoomInPersons")?,
                    attributes: read_attributes(filepath, child)?,
                })
            }
            "length" => vehicle_type.length = parse_optional(filepath, child, "meter")?,
            "width" => vehicle_type.width = parse_optional(filepath, child, "meter")?,
            "maximumVelocity" => {
                vehicle_type.maximum_velocity = parse_optional(filepath, child, "meterPerSecond")?
            }
            "passengerCarEquivalents" => {
                vehicle_type.passenger_car_equivalents = parse_optional(filepath, child, "pce")?
            }
            "networkMode" => {
                vehicle_type.network_mode = child.attribute("networkMode").map(String::from)
            }
            "flowEfficiencyFactor" => {
                vehicle_type.flow_efficiency_factor = parse_optional(filepath, child, "factor")?
            }
            _ => vehicle_type.other_elements.push(xml_element(child)),
        }
    }
    Ok(vehicle_type)
}
