//! The six policy implementations.
//!
//! Each function is pure: it reads a validated [`RequestSet`] and returns a
//! fresh [`VisitSequence`] starting at the initial head position.
//!
//! # Boundary handling
//!
//! SCAN and C-SCAN travel to the disk boundary only when requests remain on
//! the other side of the start position. The boundary is emitted as a
//! non-servicing visit unless a request already sits there, in which case
//! the request visit covers it. LOOK and C-LOOK never emit boundaries.

use crate::models::{nearest_index, Direction, RequestSet, Track, VisitSequence};

/// Requests split around the start position.
///
/// `ahead` lies in the travel direction (including the start track itself),
/// `behind` on the other side; both are ordered nearest-first.
struct Split {
    ahead: Vec<Track>,
    behind: Vec<Track>,
}

fn split(set: &RequestSet, head: Track, direction: Direction) -> Split {
    match direction {
        Direction::TowardHigh => Split {
            ahead: set.at_or_above(head),
            behind: set.below(head),
        },
        Direction::TowardLow => Split {
            ahead: set.at_or_below(head),
            behind: set.above(head),
        },
    }
}

fn push_unless_at(seq: &mut VisitSequence, track: Track) {
    if seq.last() != Some(track) {
        seq.push(track);
    }
}

// ======================== Direction-agnostic ========================

/// First Come First Served.
///
/// Visits requests in arrival order, ignoring head position.
pub(crate) fn fcfs(head: Track, set: &RequestSet) -> VisitSequence {
    let mut seq = VisitSequence::starting_at(head);
    seq.extend(set.arrival_order().iter().copied());
    seq
}

/// Shortest Seek Time First.
///
/// Repeatedly moves to the nearest unvisited request. Ties go to the request
/// that arrived first. O(n²), which is fine for queue sizes in the low
/// thousands.
pub(crate) fn sstf(head: Track, set: &RequestSet) -> VisitSequence {
    let mut seq = VisitSequence::starting_at(head);
    let mut remaining = set.arrival_order().to_vec();
    let mut position = head;

    while let Some(idx) = nearest_index(position, &remaining) {
        position = remaining.remove(idx);
        seq.push(position);
    }

    seq
}

// ======================== Sweep family ========================

/// SCAN (elevator).
///
/// Services requests in the travel direction, continues to the boundary when
/// anything remains behind, then reverses and services the rest.
pub(crate) fn scan(head: Track, set: &RequestSet, direction: Direction) -> VisitSequence {
    let Split { ahead, behind } = split(set, head, direction);
    let mut seq = VisitSequence::starting_at(head);
    seq.extend(ahead);

    if !behind.is_empty() {
        push_unless_at(&mut seq, direction.boundary(set.max_track()));
        seq.extend(behind);
    }

    seq
}

/// C-SCAN.
///
/// Like SCAN, but after reaching the boundary the head returns to the
/// opposite boundary and keeps servicing in the same direction. The return
/// trip counts as head movement.
pub(crate) fn c_scan(head: Track, set: &RequestSet, direction: Direction) -> VisitSequence {
    let Split { ahead, behind } = split(set, head, direction);
    let mut seq = VisitSequence::starting_at(head);
    seq.extend(ahead);

    if !behind.is_empty() {
        push_unless_at(&mut seq, direction.boundary(set.max_track()));

        let opposite = direction.reversed().boundary(set.max_track());
        let wrapped: Vec<Track> = behind.into_iter().rev().collect();
        if wrapped.first() != Some(&opposite) {
            seq.push(opposite);
        }
        seq.extend(wrapped);
    }

    seq
}

/// LOOK.
///
/// Like SCAN, but reverses at the last request in the travel direction.
pub(crate) fn look(head: Track, set: &RequestSet, direction: Direction) -> VisitSequence {
    let Split { ahead, behind } = split(set, head, direction);
    let mut seq = VisitSequence::starting_at(head);
    seq.extend(ahead);
    seq.extend(behind);
    seq
}

/// C-LOOK.
///
/// Like C-SCAN, but jumps straight to the farthest request on the other
/// side instead of the boundary.
pub(crate) fn c_look(head: Track, set: &RequestSet, direction: Direction) -> VisitSequence {
    let Split { ahead, behind } = split(set, head, direction);
    let mut seq = VisitSequence::starting_at(head);
    seq.extend(ahead);
    seq.extend(behind.into_iter().rev());
    seq
}
