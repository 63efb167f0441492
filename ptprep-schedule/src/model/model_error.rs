use super::{VehicleId, VehicleTypeId};
use std::fmt::Display;
use thiserror::Error;

/// the kinds of id-bearing entities of a schedule or fleet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    StopFacility,
    TransitLine,
    TransitRoute,
    Departure,
    VehicleType,
    Vehicle,
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::StopFacility => write!(f, "stop facility"),
            EntityKind::TransitLine => write!(f, "transit line"),
            EntityKind::TransitRoute => write!(f, "transit route"),
            EntityKind::Departure => write!(f, "departure"),
            EntityKind::VehicleType => write!(f, "vehicle type"),
            EntityKind::Vehicle => write!(f, "vehicle"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("{kind} with id '{id}' already exists")]
    DuplicateId { kind: EntityKind, id: String },
    #[error("vehicle '{vehicle}' references unknown vehicle type '{vehicle_type}'")]
    UnknownVehicleType {
        vehicle: VehicleId,
        vehicle_type: VehicleTypeId,
    },
}

impl ModelError {
    pub fn duplicate<T: Display>(kind: EntityKind, id: &T) -> ModelError {
        ModelError::DuplicateId {
            kind,
            id: id.to_string(),
        }
    }
}
