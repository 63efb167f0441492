use super::{Attributes, LinkId, StopAreaId, StopId};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Coord {
        Coord { x, y, z: None }
    }
}

/// a physical stop where transit vehicles board and alight passengers.
#[derive(Debug, Clone, PartialEq)]
pub struct StopFacility {
    pub id: StopId,
    pub coord: Coord,
    pub name: Option<String>,
    /// network link the stop is attached to, if it has been mapped
    pub link: Option<LinkId>,
    pub stop_area: Option<StopAreaId>,
    /// whether a vehicle serving this stop blocks the lane for other traffic
    pub is_blocking: bool,
    pub attributes: Attributes,
}

impl StopFacility {
    pub fn new(id: StopId, coord: Coord) -> StopFacility {
        StopFacility {
            id,
            coord,
            name: None,
            link: None,
            stop_area: None,
            is_blocking: false,
            attributes: Attributes::default(),
        }
    }
}
