//! Expansion state for nested menus
//!
//! Two models are supported and they are NOT equivalent:
//!
//! - [`ExpansionModel::IdSet`]: a set of expanded ids. Nesting is encoded in
//!   the ids themselves (`products`, `products-hardware`, ...). Several
//!   branches may be open below the primary level at once.
//! - [`ExpansionModel::LevelMap`]: one expanded id per nesting level, so at
//!   most one path through the tree is open.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Separator between a parent id and a child suffix in the `IdSet` model.
pub const ID_SEPARATOR: char = '-';

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionModel {
    #[default]
    IdSet,
    LevelMap,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExpansionState {
    IdSet(BTreeSet<String>),
    LevelMap(BTreeMap<usize, String>),
}

impl Default for ExpansionState {
    fn default() -> Self {
        ExpansionState::new(ExpansionModel::default())
    }
}

/// True when `candidate` is `id` itself or nested under it by prefix.
fn is_self_or_descendant(candidate: &str, id: &str) -> bool {
    candidate == id
        || candidate
            .strip_prefix(id)
            .is_some_and(|rest| rest.starts_with(ID_SEPARATOR))
}

impl ExpansionState {
    pub fn new(model: ExpansionModel) -> Self {
        match model {
            ExpansionModel::IdSet => ExpansionState::IdSet(BTreeSet::new()),
            ExpansionModel::LevelMap => ExpansionState::LevelMap(BTreeMap::new()),
        }
    }

    pub fn model(&self) -> ExpansionModel {
        match self {
            ExpansionState::IdSet(_) => ExpansionModel::IdSet,
            ExpansionState::LevelMap(_) => ExpansionModel::LevelMap,
        }
    }

    pub fn is_expanded(&self, id: &str, level: usize) -> bool {
        match self {
            ExpansionState::IdSet(ids) => ids.contains(id),
            ExpansionState::LevelMap(levels) => levels.get(&level).is_some_and(|open| open == id),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ExpansionState::IdSet(ids) => ids.is_empty(),
            ExpansionState::LevelMap(levels) => levels.is_empty(),
        }
    }

    /// Currently expanded ids, shallowest level first for `LevelMap`.
    pub fn expanded_ids(&self) -> Vec<&str> {
        match self {
            ExpansionState::IdSet(ids) => ids.iter().map(String::as_str).collect(),
            ExpansionState::LevelMap(levels) => levels.values().map(String::as_str).collect(),
        }
    }

    pub fn clear(&mut self) {
        match self {
            ExpansionState::IdSet(ids) => ids.clear(),
            ExpansionState::LevelMap(levels) => levels.clear(),
        }
    }

    /// Toggle `id` at `level`.
    ///
    /// Collapsing always takes everything nested below with it. On desktop
    /// the primary level behaves like a dropdown bar: opening one primary
    /// entry closes the others.
    pub fn toggle(&mut self, id: &str, level: usize, is_mobile: bool) {
        match self {
            ExpansionState::IdSet(ids) => {
                if ids.contains(id) {
                    ids.retain(|open| !is_self_or_descendant(open, id));
                } else {
                    if !is_mobile && level == 0 {
                        ids.retain(|open| open.contains(ID_SEPARATOR));
                    }
                    ids.insert(id.to_string());
                }
            }
            ExpansionState::LevelMap(levels) => {
                let collapsing = levels.get(&level).is_some_and(|open| open == id);
                // Anything deeper belonged to the previous path at this level.
                levels.retain(|&open_level, _| open_level < level);
                if !collapsing {
                    levels.insert(level, id.to_string());
                }
            }
        }
        tracing::debug!(id, level, is_mobile, expanded = ?self.expanded_ids(), "toggled menu entry");
    }
}
