use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Stacking depth of closed (and never-raised) windows. `next_z_index` is
/// seeded one above this and only ever increases afterwards.
pub const DEFAULT_BASE_Z: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct WindowId(&'static str);

impl WindowId {
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for WindowId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowRecord {
    pub is_open: bool,
    pub is_maximized: bool,
    pub is_minimized: bool,
    pub z_index: u32,
    pub data: Option<Value>,
}

impl WindowRecord {
    fn closed(base_z: u32) -> Self {
        Self {
            is_open: false,
            is_maximized: false,
            is_minimized: false,
            z_index: base_z,
            data: None,
        }
    }
}

/// Static window configuration supplied by the application shell at boot.
/// The id set is fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSetConfig {
    pub windows: Vec<WindowId>,
    pub base_z: u32,
}

impl WindowSetConfig {
    pub fn new(windows: impl IntoIterator<Item = WindowId>) -> Self {
        Self {
            windows: windows.into_iter().collect(),
            base_z: DEFAULT_BASE_Z,
        }
    }

    pub fn with_base_z(mut self, base_z: u32) -> Self {
        self.base_z = base_z;
        self
    }
}

/// All window records plus the monotonically increasing stacking counter.
///
/// Records are seeded once from [`WindowSetConfig`]; no record is ever added
/// or removed afterwards, only mutated through the reducer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowSet {
    base_z: u32,
    next_z_index: u32,
    windows: BTreeMap<WindowId, WindowRecord>,
}

impl WindowSet {
    pub fn from_config(config: &WindowSetConfig) -> Self {
        Self {
            base_z: config.base_z,
            next_z_index: config.base_z + 1,
            windows: config
                .windows
                .iter()
                .map(|id| (*id, WindowRecord::closed(config.base_z)))
                .collect(),
        }
    }

    pub fn base_z(&self) -> u32 {
        self.base_z
    }

    pub fn next_z_index(&self) -> u32 {
        self.next_z_index
    }

    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    pub fn window(&self, id: WindowId) -> Option<&WindowRecord> {
        self.windows.get(&id)
    }

    pub fn windows(&self) -> impl Iterator<Item = (WindowId, &WindowRecord)> {
        self.windows.iter().map(|(id, record)| (*id, record))
    }

    /// The open window currently painted on top, if any window is open.
    pub fn front_window(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|(_, record)| record.is_open)
            .max_by_key(|(_, record)| record.z_index)
            .map(|(id, _)| *id)
    }

    /// Open windows in back-to-front stacking order.
    pub fn open_windows(&self) -> Vec<WindowId> {
        let mut open: Vec<(WindowId, u32)> = self
            .windows
            .iter()
            .filter(|(_, record)| record.is_open)
            .map(|(id, record)| (*id, record.z_index))
            .collect();
        open.sort_by_key(|(_, z_index)| *z_index);
        open.into_iter().map(|(id, _)| id).collect()
    }

    pub(crate) fn record_mut(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.get_mut(&id)
    }

    /// Assigns the next stacking depth to `id` and advances the counter.
    /// Unknown ids allocate nothing; the counter never moves for them.
    pub(crate) fn raise(&mut self, id: WindowId) -> Option<&mut WindowRecord> {
        if !self.windows.contains_key(&id) {
            return None;
        }
        let z_index = self.next_z_index;
        self.next_z_index += 1;
        let record = self.windows.get_mut(&id)?;
        record.z_index = z_index;
        Some(record)
    }
}
