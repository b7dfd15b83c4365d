//! Pin grouping for marker rendering.
//!
//! Pins whose coordinates round to the same 4-decimal position collapse
//! into one cluster, drawn as a single marker with a count badge. Cluster
//! order and representative selection are stable in input order so the
//! view never reshuffles markers between renders.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::coords::round_coord;
use crate::models::{MarkerScale, Pin};

/// Grouping key for a coordinate pair: both axes rounded, joined with an
/// underscore. Equal rounded pairs always produce equal keys.
pub fn cluster_key(latitude: f64, longitude: f64) -> String {
    format!("{}_{}", round_coord(latitude), round_coord(longitude))
}

/// A group of pins sharing one rounded coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct PinCluster {
    /// Deterministic function of the rounded coordinate.
    pub key: String,
    /// Members in input order; never empty.
    pub members: Vec<Pin>,
    /// Visual bucket for `members.len()`.
    pub scale: MarkerScale,
}

impl PinCluster {
    /// The first-seen member, used for the marker's icon, color and
    /// tooltip. Stable in input order by design.
    pub fn representative(&self) -> &Pin {
        &self.members[0]
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Group pins by rounded coordinate.
///
/// Output order follows the first appearance of each key in the input.
/// Duplicate pin ids are kept as-is; data quality is the caller's concern.
pub fn cluster_pins(pins: &[Pin]) -> Vec<PinCluster> {
    let mut order: Vec<String> = Vec::new();
    let mut groups: HashMap<String, Vec<Pin>> = HashMap::new();

    for pin in pins {
        let key = cluster_key(pin.latitude, pin.longitude);
        match groups.entry(key) {
            Entry::Occupied(mut entry) => entry.get_mut().push(pin.clone()),
            Entry::Vacant(entry) => {
                order.push(entry.key().clone());
                entry.insert(vec![pin.clone()]);
            }
        }
    }

    order
        .into_iter()
        .map(|key| {
            let members = groups.remove(&key).unwrap_or_default();
            let scale = MarkerScale::for_count(members.len());
            PinCluster {
                key,
                members,
                scale,
            }
        })
        .collect()
}
