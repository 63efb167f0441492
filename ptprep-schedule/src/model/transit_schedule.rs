use super::{
    Attributes, EntityKind, LineId, ModelError, StopFacility, StopId, TransitLine,
};
use indexmap::{map::Entry, IndexMap};

/// minimum time needed to transfer between two stops
#[derive(Debug, Clone, PartialEq)]
pub struct MinimalTransferTime {
    pub from_stop: StopId,
    pub to_stop: StopId,
    pub seconds: f64,
}

/// stops, transfer times and lines of one transit service. stops and lines
/// keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransitSchedule {
    pub attributes: Attributes,
    stops: IndexMap<StopId, StopFacility>,
    minimal_transfer_times: Vec<MinimalTransferTime>,
    lines: IndexMap<LineId, TransitLine>,
}

impl TransitSchedule {
    pub fn add_stop(&mut self, stop: StopFacility) -> Result<(), ModelError> {
        match self.stops.entry(stop.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::StopFacility, e.key())),
            Entry::Vacant(e) => {
                e.insert(stop);
                Ok(())
            }
        }
    }

    /// adds a line, returning a handle to the stored line so routes can be
    /// attached to it.
    pub fn add_line(&mut self, line: TransitLine) -> Result<&mut TransitLine, ModelError> {
        match self.lines.entry(line.id.clone()) {
            Entry::Occupied(e) => Err(ModelError::duplicate(EntityKind::TransitLine, e.key())),
            Entry::Vacant(e) => Ok(e.insert(line)),
        }
    }

    pub fn add_minimal_transfer_time(&mut self, transfer: MinimalTransferTime) {
        self.minimal_transfer_times.push(transfer);
    }

    pub fn stop(&self, id: &StopId) -> Option<&StopFacility> {
        self.stops.get(id)
    }

    pub fn stops(&self) -> impl Iterator<Item = &StopFacility> {
        self.stops.values()
    }

    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    pub fn minimal_transfer_times(&self) -> &[MinimalTransferTime] {
        &self.minimal_transfer_times
    }

    pub fn line(&self, id: &LineId) -> Option<&TransitLine> {
        self.lines.get(id)
    }

    pub fn lines(&self) -> impl Iterator<Item = &TransitLine> {
        self.lines.values()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn route_count(&self) -> usize {
        self.lines().map(|l| l.route_count()).sum()
    }

    pub fn departure_count(&self) -> usize {
        self.lines()
            .flat_map(|l| l.routes())
            .map(|r| r.departure_count())
            .sum()
    }
}
