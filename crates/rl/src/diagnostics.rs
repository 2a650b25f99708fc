//! Aggregate statistics over collected paths.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::pointmass::StepInfo;

/// Ordered `name -> value` statistics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<(String, f32)>);

impl Diagnostics {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f32> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mean, standard deviation, max and min of `values` under `name`.
    fn push_stats(&mut self, name: &str, values: &[f32]) {
        if values.is_empty() {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        let n = values.len() as f32;
        let mean = values.iter().sum::<f32>() / n;
        let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
        let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        let min = values.iter().copied().fold(f32::INFINITY, f32::min);

        self.0.push((format!("{name} Mean"), mean));
        self.0.push((format!("{name} Std"), var.sqrt()));
        self.0.push((format!("{name} Max"), max));
        self.0.push((format!("{name} Min"), min));
    }
}

impl Serialize for Diagnostics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

fn euclidean(info: &StepInfo) -> f32 {
    info.euclidean_distance
}

fn shaped(info: &StepInfo) -> f32 {
    info.shaped_distance
}

const DISTANCE_STATS: [(&str, fn(&StepInfo) -> f32); 2] =
    [("euclidean_distance", euclidean), ("shaped_distance", shaped)];

/// Distance statistics over every step of every path, and over the final
/// step of each path.
#[must_use]
pub fn diagnostics(paths: &[Vec<StepInfo>], prefix: &str) -> Diagnostics {
    let mut stats = Diagnostics::default();
    for (name, field) in DISTANCE_STATS {
        let all: Vec<f32> = paths.iter().flatten().map(field).collect();
        let last: Vec<f32> = paths.iter().filter_map(|p| p.last()).map(field).collect();
        stats.push_stats(&format!("{prefix}{name}"), &all);
        stats.push_stats(&format!("Final {prefix}{name}"), &last);
    }
    stats
}

/// Fraction of paths whose final step succeeded.
#[must_use]
pub fn final_success_rate(paths: &[Vec<StepInfo>]) -> f32 {
    let finished: Vec<bool> = paths.iter().filter_map(|p| p.last()).map(|i| i.is_success).collect();
    if finished.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let rate = finished.iter().filter(|s| **s).count() as f32 / finished.len() as f32;
    rate
}
