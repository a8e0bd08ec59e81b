//! Silhouette extraction for element clusters
//!
//! Curves drawn by two elements of a cluster lie inside the merged shape and
//! cancel out. The remaining curves are stitched into closed loops and runs
//! of collinear lines are merged.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::ops::Bound;

use crate::geometry::{DecimalPoint, Fixed};

use super::cluster::ElementCluster;
use super::curve::{Curve, CurveKey};
use super::error::BoundaryError;
use super::path::Path;

/// The closed outlines of a cluster's combined shape
///
/// A single element is returned as drawn. Multi-element clusters are
/// reduced to their silhouette, which is meant to be filled with the
/// even-odd rule.
pub fn extract_boundary(cluster: &ElementCluster) -> Result<Vec<Path>, BoundaryError> {
    if let [single] = cluster.elements() {
        return Ok(vec![single.path.clone()]);
    }

    let curves = cluster
        .elements()
        .iter()
        .flat_map(|element| element.path.curves().iter().copied());
    let loops = stitch_loops(curves)?;
    tracing::trace!(
        elements = cluster.len(),
        loops = loops.len(),
        "extracted cluster boundary"
    );
    Ok(loops.into_iter().map(Path::merge_collinear).collect())
}

/// Cancel shared curves and stitch the rest into closed loops
///
/// Loops are returned before collinear merging, each starting with the
/// smallest remaining curve (in [`CurveKey`] order) not used by an earlier
/// loop.
pub fn stitch_loops(curves: impl IntoIterator<Item = Curve>) -> Result<Vec<Path>, BoundaryError> {
    let curves = split_at_junctions(curves.into_iter().collect());
    let survivors = cancel_shared(curves)?;
    check_even_degree(&survivors)?;
    walk_loops(&survivors)
}

/// Split axis-aligned lines at every curve endpoint lying inside them
///
/// Neighbors whose shared side is subdivided differently (e.g. a plain
/// square next to a cell with split sides) then produce identical pieces.
fn split_at_junctions(curves: Vec<Curve>) -> Vec<Curve> {
    let mut columns: BTreeMap<Fixed, BTreeSet<Fixed>> = BTreeMap::new();
    let mut rows: BTreeMap<Fixed, BTreeSet<Fixed>> = BTreeMap::new();
    for curve in &curves {
        for point in [curve.start(), curve.end()] {
            columns.entry(point.x).or_default().insert(point.y);
            rows.entry(point.y).or_default().insert(point.x);
        }
    }

    let mut result = Vec::with_capacity(curves.len());
    for curve in curves {
        match curve {
            Curve::Line { start, end } if start.x == end.x && start.y != end.y => {
                let cuts = interior(columns.get(&start.x), start.y, end.y);
                push_split(&mut result, start, end, cuts.map(|y| DecimalPoint::new(start.x, y)));
            }
            Curve::Line { start, end } if start.y == end.y && start.x != end.x => {
                let cuts = interior(rows.get(&start.y), start.x, end.x);
                push_split(&mut result, start, end, cuts.map(|x| DecimalPoint::new(x, start.y)));
            }
            _ => result.push(curve),
        }
    }
    result
}

/// Values strictly between `from` and `to`, ordered from `from` towards `to`
fn interior(
    values: Option<&BTreeSet<Fixed>>,
    from: Fixed,
    to: Fixed,
) -> impl Iterator<Item = Fixed> {
    let (low, high) = if from < to { (from, to) } else { (to, from) };
    let mut cuts: Vec<Fixed> = values
        .map(|values| {
            values
                .range((Bound::Excluded(low), Bound::Excluded(high)))
                .copied()
                .collect()
        })
        .unwrap_or_default();
    if from > to {
        cuts.reverse();
    }
    cuts.into_iter()
}

fn push_split(
    out: &mut Vec<Curve>,
    start: DecimalPoint,
    end: DecimalPoint,
    cuts: impl Iterator<Item = DecimalPoint>,
) {
    let mut cursor = start;
    for cut in cuts {
        out.push(Curve::line(cursor, cut));
        cursor = cut;
    }
    out.push(Curve::line(cursor, end));
}

/// Drop every curve drawn exactly twice, keep curves drawn once
///
/// Survivors are returned in key order.
fn cancel_shared(curves: Vec<Curve>) -> Result<Vec<Curve>, BoundaryError> {
    let mut seen: BTreeMap<CurveKey, (Curve, usize)> = BTreeMap::new();
    for curve in curves {
        match seen.entry(curve.key()) {
            Entry::Vacant(entry) => {
                entry.insert((curve, 1));
            }
            Entry::Occupied(mut entry) => entry.get_mut().1 += 1,
        }
    }

    let mut survivors = Vec::new();
    for (key, (curve, count)) in seen {
        match count {
            1 => survivors.push(curve),
            2 => {}
            _ => return Err(BoundaryError::overlapping(key.from, key.to, count)),
        }
    }
    Ok(survivors)
}

fn check_even_degree(curves: &[Curve]) -> Result<(), BoundaryError> {
    let mut degrees: BTreeMap<DecimalPoint, usize> = BTreeMap::new();
    for curve in curves {
        *degrees.entry(curve.start()).or_default() += 1;
        *degrees.entry(curve.end()).or_default() += 1;
    }
    match degrees.into_iter().find(|(_, degree)| degree % 2 == 1) {
        Some((point, degree)) => Err(BoundaryError::odd_degree(point, degree)),
        None => Ok(()),
    }
}

/// Walk the surviving curves into closed loops
///
/// From each point the walk continues with an unused curve touching it,
/// preferring curves that start there over ones that have to be reversed,
/// then the smallest key.
fn walk_loops(curves: &[Curve]) -> Result<Vec<Path>, BoundaryError> {
    let mut by_point: HashMap<DecimalPoint, Vec<usize>> = HashMap::new();
    for (id, curve) in curves.iter().enumerate() {
        by_point.entry(curve.start()).or_default().push(id);
        by_point.entry(curve.end()).or_default().push(id);
    }

    let mut used = vec![false; curves.len()];
    let mut loops = Vec::new();
    for seed in 0..curves.len() {
        if used[seed] {
            continue;
        }
        used[seed] = true;
        let first = curves[seed];
        let origin = first.start();
        let mut cursor = first.end();
        let mut path = vec![first];

        while cursor != origin {
            let next = by_point.get(&cursor).and_then(|ids| {
                ids.iter()
                    .copied()
                    .filter(|&id| !used[id])
                    .min_by_key(|&id| (curves[id].start() != cursor, id))
            });
            let Some(id) = next else {
                return Err(BoundaryError::open_loop(origin, cursor));
            };
            used[id] = true;
            let curve = if curves[id].start() == cursor {
                curves[id]
            } else {
                curves[id].reverse()
            };
            cursor = curve.end();
            path.push(curve);
        }
        loops.push(Path::new(path));
    }
    Ok(loops)
}
