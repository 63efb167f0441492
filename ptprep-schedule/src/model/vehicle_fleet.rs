use super::{Attributes, EntityKind, ModelError, VehicleId, VehicleType, VehicleTypeId};
use indexmap::{map::Entry, IndexMap};

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub vehicle_type: VehicleTypeId,
    pub attributes: Attributes,
}

impl Vehicle {
    pub fn new(id: VehicleId, vehicle_type: VehicleTypeId) -> Vehicle {
        Vehicle {
            id,
            vehicle_type,
            attributes: Attributes::default(),
        }
    }
}

/// vehicle types and the vehicles instantiating them. a vehicle can only be
/// added once its type is present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFleet {
    vehicle_types: IndexMap<VehicleTypeId, VehicleType>,
    vehicles: IndexMap<VehicleId, Vehicle>,
}

impl VehicleFleet {
    pub fn add_vehicle_type(&mut self, vehicle_type: VehicleType) -> Result<(), ModelError> {
        match self.vehicle_types.entry(vehicle_type.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::VehicleType, e.key())),
            Entry::Vacant(e) => {
                e.insert(vehicle_type);
                Ok(())
            }
        }
    }

    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), ModelError> {
        if !self.vehicle_types.contains_key(&vehicle.vehicle_type) {
            return Err(ModelError::UnknownVehicleType {
                vehicle: vehicle.id,
                vehicle_type: vehicle.vehicle_type,
            });
        }
        match self.vehicles.entry(vehicle.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::Vehicle, e.key())),
            Entry::Vacant(e) => {
                e.insert(vehicle);
                Ok(())
            }
        }
    }

    pub fn vehicle_type(&self, id: &VehicleTypeId) -> Option<&VehicleType> {
        self.vehicle_types.get(id)
    }

    pub fn vehicle_types(&self) -> impl Iterator<Item = &VehicleType> {
        self.vehicle_types.values()
    }

    pub fn vehicle_type_count(&self) -> usize {
        self.vehicle_types.len()
    }

    pub fn vehicle(&self, id: &VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    pub fn vehicles(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}
