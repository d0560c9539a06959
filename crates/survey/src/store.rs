use crate::point::{MarkerHandle, PointRecord};

/// Stable index of a captured point within a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PointId(pub u32);

impl PointId {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Ordered, index-stable container of captured points.
///
/// Deleting a point tombstones its slot in place; the store never
/// compacts, so a `PointId` baked into a popup affordance at capture time
/// stays valid for the rest of the session.
#[derive(Debug, Default)]
pub struct PointStore {
    slots: Vec<Option<PointRecord>>,
}

impl PointStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next inserted record will receive.
    pub fn next_id(&self) -> PointId {
        PointId(self.slots.len() as u32)
    }

    /// Appends a live record, returning its stable id.
    pub fn insert(&mut self, record: PointRecord) -> PointId {
        let id = PointId(self.slots.len() as u32);
        self.slots.push(Some(record));
        id
    }

    /// Tombstones the slot, returning the marker to detach.
    ///
    /// Out-of-range and already-deleted ids are a no-op.
    pub fn remove(&mut self, id: PointId) -> Option<MarkerHandle> {
        let slot = self.slots.get_mut(id.index())?;
        let record = slot.take()?;
        Some(record.marker)
    }

    pub fn get(&self, id: PointId) -> Option<&PointRecord> {
        self.slots.get(id.index()).and_then(|slot| slot.as_ref())
    }

    /// Total slot count, tombstones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of non-tombstoned slots.
    pub fn live_len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterates live records with their stable ids, in capture order.
    pub fn iter_live(&self) -> impl Iterator<Item = (PointId, &PointRecord)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| slot.as_ref().map(|record| (PointId(idx as u32), record)))
    }

    /// Empties the store, yielding the markers that were still attached.
    pub fn drain_markers(&mut self) -> Vec<MarkerHandle> {
        let markers = self.slots.iter().flatten().map(|r| r.marker).collect();
        self.slots.clear();
        markers
    }
}
