use super::{
    xml_ops::write_attributes,
    ScheduleIoError,
};
use crate::model::{StopFacility, TransitLine, TransitRoute, TransitSchedule};
use ptprep_core::{write_atomic, XmlTag, XmlWriter};
use std::{io::Write, path::Path};

const DOCTYPE_SYSTEM_ID: &str = "http://www.matsim.org/files/dtd/transitSchedule_v2.dtd";

/// writes a transit schedule (v2) to an XML or XML.gz file. the file is
/// replaced atomically, so a failed write leaves no partial output.
pub fn write_schedule<P>(schedule: &TransitSchedule, filepath: P) -> Result<(), ScheduleIoError>
where
    P: AsRef<Path>,
{
    let path = filepath.as_ref();
    write_atomic(path, |sink| write_schedule_to(schedule, sink)).map_err(|source| {
        ScheduleIoError::WriteError {
            filepath: path.display().to_string(),
            source,
        }
    })
}

pub fn write_schedule_to<W: Write>(schedule: &TransitSchedule, out: W) -> std::io::Result<()> {
    let mut writer = XmlWriter::new(out);
    writer.declaration()?;
    writer.doctype("transitSchedule", DOCTYPE_SYSTEM_ID)?;
    writer.blank_line()?;
    writer.start(&XmlTag::new("transitSchedule"))?;
    write_attributes(&mut writer, &schedule.attributes)?;

    writer.start(&XmlTag::new("transitStops"))?;
    for stop in schedule.stops() {
        write_stop(&mut writer, stop)?;
    }
    writer.end("transitStops")?;

    if !schedule.minimal_transfer_times().is_empty() {
        writer.start(&XmlTag::new("minimalTransferTimes"))?;
        for transfer in schedule.minimal_transfer_times() {
            let tag = XmlTag::new("relation")
                .attr("fromStop", &transfer.from_stop)
                .attr("toStop", &transfer.to_stop)
                .attr("transferTime", transfer.seconds);
            writer.empty(&tag)?;
        }
        writer.end("minimalTransferTimes")?;
    }

    for line in schedule.lines() {
        write_line(&mut writer, line)?;
    }
    writer.end("transitSchedule")?;
    writer.into_inner().flush()
}

fn write_stop<W: Write>(writer: &mut XmlWriter<W>, stop: &StopFacility) -> std::io::Result<()> {
    let tag = XmlTag::new("stopFacility")
        .attr("id", &stop.id)
        .attr("x", stop.coord.x)
        .attr("y", stop.coord.y)
        .attr_opt("z", stop.coord.z)
        .attr_opt("linkRefId", stop.link.as_ref())
        .attr_opt("name", stop.name.as_ref())
        .attr_opt("stopAreaId", stop.stop_area.as_ref())
        .attr("isBlocking", stop.is_blocking);
    if stop.attributes.is_empty() {
        writer.empty(&tag)
    } else {
        writer.start(&tag)?;
        write_attributes(writer, &stop.attributes)?;
        writer.end("stopFacility")
    }
}

fn write_line<W: Write>(writer: &mut XmlWriter<W>, line: &TransitLine) -> std::io::Result<()> {
    let tag = XmlTag::new("transitLine")
        .attr("id", &line.id)
        .attr_opt("name", line.name.as_ref());
    writer.start(&tag)?;
    write_attributes(writer, &line.attributes)?;
    for route in line.routes() {
        write_route(writer, route)?;
    }
    writer.end("transitLine")
}

fn write_route<W: Write>(writer: &mut XmlWriter<W>, route: &TransitRoute) -> std::io::Result<()> {
    writer.start(&XmlTag::new("transitRoute").attr("id", &route.id))?;
    write_attributes(writer, &route.attributes)?;
    if let Some(description) = &route.description {
        writer.text(&XmlTag::new("description"), description)?;
    }
    writer.text(&XmlTag::new("transportMode"), &route.transport_mode)?;

    writer.start(&XmlTag::new("routeProfile"))?;
    for stop in route.stops.iter() {
        // unspecified offsets are left out rather than written as zero
        let tag = XmlTag::new("stop")
            .attr("refId", &stop.stop)
            .attr_opt("arrivalOffset", stop.arrival_offset)
            .attr_opt("departureOffset", stop.departure_offset)
            .attr("allowBoarding", stop.allow_boarding)
            .attr("allowAlighting", stop.allow_alighting)
            .attr("awaitDeparture", stop.await_departure);
        writer.empty(&tag)?;
    }
    writer.end("routeProfile")?;

    if let Some(links) = &route.network_route {
        writer.start(&XmlTag::new("route"))?;
        for link in links.iter() {
            writer.empty(&XmlTag::new("link").attr("refId", link))?;
        }
        writer.end("route")?;
    }

    writer.start(&XmlTag::new("departures"))?;
    for departure in route.departures() {
        let tag = XmlTag::new("departure")
            .attr("id", &departure.id)
            .attr("departureTime", departure.departure_time)
            .attr_opt("vehicleRefId", departure.vehicle.as_ref());
        if departure.attributes.is_empty() {
            writer.empty(&tag)?;
        } else {
            writer.start(&tag)?;
            write_attributes(writer, &departure.attributes)?;
            writer.end("departure")?;
        }
    }
    writer.end("departures")?;
    writer.end("transitRoute")
}
