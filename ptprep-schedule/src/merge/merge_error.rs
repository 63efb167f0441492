use crate::{
    io::ScheduleIoError,
    model::{IntegrityViolation, ModelError, RouteId, StopId, VehicleId, VehicleTypeId},
};

#[derive(thiserror::Error, Debug)]
pub enum MergeError {
    #[error("failed to read feed {ordinal}: {source}")]
    ReadError {
        ordinal: usize,
        source: ScheduleIoError,
    },
    #[error("feed '{prefix}': route '{route}' references stop '{stop}' that the feed does not define")]
    UnknownRouteStop {
        prefix: String,
        route: RouteId,
        stop: StopId,
    },
    #[error("feed '{prefix}': vehicle '{vehicle}' references vehicle type '{vehicle_type}' that the feed does not define")]
    UnknownVehicleType {
        prefix: String,
        vehicle: VehicleId,
        vehicle_type: VehicleTypeId,
    },
    #[error("feed '{prefix}' collides with already merged data: {source}")]
    Collision { prefix: String, source: ModelError },
    #[error("merged dataset failed integrity check with {} violation(s)", .0.len())]
    IntegrityError(Vec<IntegrityViolation>),
}
