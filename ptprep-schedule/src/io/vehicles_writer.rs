use super::{
    xml_ops::{write_attributes, write_element},
    ScheduleIoError,
};
use crate::model::{VehicleFleet, VehicleType};
use ptprep_core::{write_atomic, XmlTag, XmlWriter};
use std::{io::Write, path::Path};

const NAMESPACE: &str = "http://www.matsim.org/files/dtd";
const SCHEMA_LOCATION: &str =
    "http://www.matsim.org/files/dtd http://www.matsim.org/files/dtd/vehicleDefinitions_v2.0.xsd";

/// writes vehicle definitions (v2.0) to an XML or XML.gz file, replacing
/// the target atomically.
pub fn write_vehicles<P>(fleet: &VehicleFleet, filepath: P) -> Result<(), ScheduleIoError>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    write_atomic(path, |sink| write_vehicles_to(fleet, sink)).map_err(|source| {
        ScheduleIoError::WriteError {
            filepath: path.display().to_string(),
            source,
        }
    })
}

pub fn write_vehicles_to<W: Write>(fleet: &VehicleFleet, out: W) -> std::io::Result<()> {
    let mut writer = XmlWriter::new(out);
    writer.declaration()?;
    writer.blank_line()?;
    let root = XmlTag::new("vehicleDefinitions")
        .attr("xmlns", NAMESPACE)
        .attr("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .attr("xsi:schemaLocation", SCHEMA_LOCATION);
    writer.start(&root)?;
    for vehicle_type in fleet.vehicle_types() {
        write_vehicle_type(&mut writer, vehicle_type)?;
    }
    for vehicle in fleet.vehicles() {
        let tag = XmlTag::new("vehicle")
            .attr("id", &vehicle.id)
            .attr("type", &vehicle.vehicle_type);
        if vehicle.attributes.is_empty() {
            writer.empty(&tag)?;
        } else {
            writer.start(&tag)?;
            write_attributes(&mut writer, &vehicle.attributes)?;
            writer.end("vehicle")?;
        }
    }
    writer.end("vehicleDefinitions")?;
    writer.into_inner().flush()
}

/// child order follows the vehicleDefinitions v2.0 schema sequence
fn write_vehicle_type<W: Write>(
    writer: &mut XmlWriter<W>,
    vehicle_type: &VehicleType,
) -> std::io::Result<()> {
    writer.start(&XmlTag::new("vehicleType").attr("id", &vehicle_type.id))?;
    write_attributes(writer, &vehicle_type.attributes)?;
    if let Some(description) = &vehicle_type.description {
        writer.text(&XmlTag::new("description"), description)?;
    }
    if let Some(capacity) = &vehicle_type.capacity {
        let tag = XmlTag::new("capacity")
            .attr_opt("seats", capacity.seats)
            .attr_opt("standingRoomInPersons", capacity.standing_room);
        if capacity.attributes.is_empty() {
            writer.empty(&tag)?;
        } else {
            writer.start(&tag)?;
            write_attributes(writer, &capacity.attributes)?;
            writer.end("capacity")?;
        }
    }
    if let Some(length) = vehicle_type.length {
        writer.empty(&XmlTag::new("length").attr("meter", length))?;
    }
    if let Some(width) = vehicle_type.width {
        writer.empty(&XmlTag::new("width").attr("meter", width))?;
    }
    if let Some(velocity) = vehicle_type.maximum_velocity {
        writer.empty(&XmlTag::new("maximumVelocity").attr("meterPerSecond", velocity))?;
    }
    for element in vehicle_type.other_elements.iter() {
        write_element(writer, element)?;
    }
    if let Some(pce) = vehicle_type.passenger_car_equivalents {
        writer.empty(&XmlTag::new("passengerCarEquivalents").attr("pce", pce))?;
    }
    if let Some(mode) = &vehicle_type.network_mode {
        writer.empty(&XmlTag::new("networkMode").attr("networkMode", mode))?;
    }
    if let Some(factor) = vehicle_type.flow_efficiency_factor {
        writer.empty(&XmlTag::new("flowEfficiencyFactor").attr("factor", factor))?;
    }
    writer.end("vehicleType")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{io::parse_vehicles, test_fixtures};

    #[test]
    fn test_written_vehicles_read_back_identically() {
        let fleet = parse_vehicles(test_fixtures::METRO_VEHICLES, "vehicles.xml").unwrap();
        let mut buffer = Vec::new();
        write_vehicles_to(&fleet, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let reread = parse_vehicles(&text, "written.xml").unwrap();
        assert_eq!(reread, fleet);
    }
}
