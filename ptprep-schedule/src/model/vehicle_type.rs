use super::{Attributes, VehicleTypeId, XmlElement};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleCapacity {
    pub seats: Option<u32>,
    pub standing_room: Option<u32>,
    pub attributes: Attributes,
}

/// physical and operational description shared by a group of vehicles.
/// every property is optional so that a type is written back with exactly
/// the elements it was read with.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleType {
    pub id: VehicleTypeId,
    pub description: Option<String>,
    pub capacity: Option<VehicleCapacity>,
    /// meters
    pub length: Option<f64>,
    /// meters
    pub width: Option<f64>,
    /// meters per second
    pub maximum_velocity: Option<f64>,
    pub passenger_car_equivalents: Option<f64>,
    pub network_mode: Option<String>,
    pub flow_efficiency_factor: Option<f64>,
    pub attributes: Attributes,
    /// further child elements (engine information, cost information, ...)
    /// in document order
    pub other_elements: Vec<XmlElement>,
}

impl VehicleType {
    pub fn new(id: VehicleTypeId) -> VehicleType {
        VehicleType {
            id,
            description: None,
            capacity: None,
            length: None,
            width: None,
            maximum_velocity: None,
            passenger_car_equivalents: None,
            network_mode: None,
            flow_efficiency_factor: None,
            attributes: Attributes::default(),
            other_elements: vec![],
        }
    }
}
