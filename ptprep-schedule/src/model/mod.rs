mod attributes;
mod ids;
mod integrity;
mod model_error;
mod schedule_time;
mod stop_facility;
mod transit_line;
mod transit_route;
mod transit_schedule;
mod vehicle_fleet;
mod vehicle_type;
mod xml_element;

pub use attributes::{AttributeValue, Attributes};
pub use ids::{DepartureId, LineId, LinkId, RouteId, StopAreaId, StopId, VehicleId, VehicleTypeId};
pub use integrity::{check_integrity, IntegrityViolation};
pub use model_error::{EntityKind, ModelError};
pub use schedule_time::ScheduleTime;
pub use stop_facility::{Coord, StopFacility};
pub use transit_line::TransitLine;
pub use transit_route::{Departure, RouteStop, TransitRoute};
pub use transit_schedule::{MinimalTransferTime, TransitSchedule};
pub use vehicle_fleet::{Vehicle, VehicleFleet};
pub use vehicle_type::{VehicleCapacity, VehicleType};
pub use xml_element::{XmlContent, XmlElement};
