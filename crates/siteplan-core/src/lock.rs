//! Structure-lock enforcement
//!
//! The generator is told the lock rule in its system directive, but it is
//! never trusted to have honored it. Whatever comes back is reconciled
//! against the previous scene here: with the lock engaged, a candidate may
//! only be accepted as-is if no entity position changed, or if it
//! surfaced an unlock instead of moving things. A candidate that moved
//! entities while keeping the lock engaged violated the contract; its
//! positional delta is discarded and only the non-positional changes
//! survive.
//!
//! Positional fields are the element classes the lock directive names:
//! office x/y (keyed by id), warehouse x/y, courtyard x/y, the road
//! entrance point, and both road polylines pointwise. Entities added or
//! removed by an edit are not positional drift of an existing entity.

use siteplan_scene::{RoadPoint, Scene};

/// How a candidate fared against the lock protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockDecision {
    /// The previous scene was unlocked; positions are free to move
    Unlocked,
    /// Lock engaged and every position matches; accepted as-is
    PositionsPreserved,
    /// Lock engaged, positions moved, and the candidate released the
    /// lock — the generator surfaced an unlock instead of silently moving
    AutoUnlocked,
    /// Lock engaged, positions moved, lock still engaged: contract
    /// violation; the positional delta was discarded
    DriftSuppressed,
}

#[allow(clippy::float_cmp)]
fn same(a: f64, b: f64) -> bool {
    // Positions are compared exactly: an honored lock echoes the previous
    // coordinates bit-for-bit through JSON.
    a == b
}

fn polyline_eq(a: &[RoadPoint], b: &[RoadPoint]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(p, q)| same(p.x, q.x) && same(p.y, q.y))
}

/// Whether every entity position in `candidate` matches `prev`.
///
/// Offices are compared by id, for ids present on both sides.
#[must_use]
pub fn positions_preserved(prev: &Scene, candidate: &Scene) -> bool {
    for prev_office in &prev.offices {
        if let Some(current) = candidate.office(&prev_office.id) {
            if !same(current.x, prev_office.x) || !same(current.y, prev_office.y) {
                return false;
            }
        }
    }

    same(candidate.warehouse.x, prev.warehouse.x)
        && same(candidate.warehouse.y, prev.warehouse.y)
        && same(candidate.courtyard.x, prev.courtyard.x)
        && same(candidate.courtyard.y, prev.courtyard.y)
        && same(
            candidate.roads.north_entrance.x,
            prev.roads.north_entrance.x,
        )
        && same(
            candidate.roads.north_entrance.y,
            prev.roads.north_entrance.y,
        )
        && polyline_eq(&prev.roads.east, &candidate.roads.east)
        && polyline_eq(
            &prev.roads.west_turnaround_path,
            &candidate.roads.west_turnaround_path,
        )
}

/// Overwrite every positional field of `candidate` with the value from
/// `prev`, keeping all non-positional changes.
///
/// Offices only present in the candidate keep their proposed coordinates;
/// offices the edit removed stay removed. The road polylines are restored
/// wholesale — a partial merge of differently-shaped paths has no defined
/// meaning.
#[must_use]
pub fn restore_positions(prev: &Scene, mut candidate: Scene) -> Scene {
    for office in &mut candidate.offices {
        if let Some(previous) = prev.office(&office.id) {
            office.x = previous.x;
            office.y = previous.y;
        }
    }

    candidate.warehouse.x = prev.warehouse.x;
    candidate.warehouse.y = prev.warehouse.y;
    candidate.courtyard.x = prev.courtyard.x;
    candidate.courtyard.y = prev.courtyard.y;
    candidate.roads.north_entrance.x = prev.roads.north_entrance.x;
    candidate.roads.north_entrance.y = prev.roads.north_entrance.y;
    candidate.roads.east = prev.roads.east.clone();
    candidate.roads.west_turnaround_path = prev.roads.west_turnaround_path.clone();
    candidate
}

/// Apply the lock-enforcement policy to a validated candidate.
///
/// Returns the scene to commit and the decision taken. The lock flag is
/// never flipped here: a suppressed candidate keeps the engaged lock it
/// arrived with, and an unlocked previous scene accepts the candidate
/// verbatim.
#[must_use]
pub fn enforce_lock(prev: &Scene, candidate: Scene) -> (Scene, LockDecision) {
    if !prev.structure_lock {
        return (candidate, LockDecision::Unlocked);
    }
    if positions_preserved(prev, &candidate) {
        return (candidate, LockDecision::PositionsPreserved);
    }
    if !candidate.structure_lock {
        return (candidate, LockDecision::AutoUnlocked);
    }
    (restore_positions(prev, candidate), LockDecision::DriftSuppressed)
}
