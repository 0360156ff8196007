// File: crates/chartkit-core/src/store.rs
// Summary: Ordered, name-keyed series collection owned by one chart.
// Notes:
// - Insertion order is the legend and render order; removal keeps the remaining order.
// - Admission goes through the chart so that payloads are always validated first.

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ChartError, Result};
use crate::series::{Series, SeriesData};

#[derive(Clone, Debug, Default)]
pub struct SeriesStore {
    series: IndexMap<String, Series>,
}

impl SeriesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Series> {
        self.series.get_mut(name)
    }

    /// Position in insertion order.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.series.get_index_of(name)
    }

    pub fn first(&self) -> Option<&Series> {
        self.series.first().map(|(_, s)| s)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Series> {
        self.series.values_mut()
    }

    /// Enabled series only, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &Series> {
        self.series.values().filter(|s| s.is_enabled())
    }

    /// Append a new series. The name must be non-empty and not yet present.
    pub(crate) fn add(&mut self, series: Series) -> Result<&mut Series> {
        if series.name().is_empty() {
            return Err(ChartError::InvalidName);
        }
        if self.series.contains_key(series.name()) {
            return Err(ChartError::DuplicateName(series.name().to_string()));
        }
        debug!(name = series.name(), kind = series.data().kind_name(), "series added");
        let entry = self.series.entry(series.name().to_string());
        Ok(entry.or_insert(series))
    }

    /// Swap the payload of an existing series; label, colors, marker, enabled flag and
    /// axis group stay as they were.
    pub(crate) fn update(&mut self, name: &str, data: SeriesData) -> Result<&mut Series> {
        let series = self
            .series
            .get_mut(name)
            .ok_or_else(|| ChartError::NotFound(name.to_string()))?;
        series.replace_data(data)?;
        debug!(name, "series updated");
        Ok(series)
    }

    pub fn remove(&mut self, name: &str) -> Option<Series> {
        let removed = self.series.shift_remove(name);
        if removed.is_some() {
            debug!(name, "series removed");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!(count = self.series.len(), "series cleared");
        self.series.clear();
    }
}

impl<'a> IntoIterator for &'a SeriesStore {
    type Item = (&'a String, &'a Series);
    type IntoIter = indexmap::map::Iter<'a, String, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}
