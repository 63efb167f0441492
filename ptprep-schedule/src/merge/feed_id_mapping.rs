use crate::model::{StopId, VehicleId, VehicleTypeId};
use std::collections::HashMap;

/// original id -> merged id tables of a single feed. created when a feed's
/// merge starts and dropped when it ends.
#[derive(Debug, Default)]
pub struct FeedIdMapping {
    pub stops: HashMap<StopId, StopId>,
    pub vehicle_types: HashMap<VehicleTypeId, VehicleTypeId>,
    pub vehicles: HashMap<VehicleId, VehicleId>,
}
