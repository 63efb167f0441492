//! MATSim `transitSchedule_v2` and `vehicleDefinitions_v2.0` XML codecs.
//! files ending in `.gz` are read and written gzip compressed.
mod schedule_io_error;
mod schedule_reader;
mod schedule_writer;
mod vehicles_reader;
mod vehicles_writer;
mod xml_ops;

pub use schedule_io_error::ScheduleIoError;
pub use schedule_reader::{parse_schedule, read_schedule};
pub use schedule_writer::{write_schedule, write_schedule_to};
pub use vehicles_reader::{parse_vehicles, read_vehicles};
pub use vehicles_writer::{write_vehicles, write_vehicles_to};
