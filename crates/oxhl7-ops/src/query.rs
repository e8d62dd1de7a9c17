//! Purely functional message-level lookups: positional segment access and
//! the paired-group scan.

use oxhl7_schema::SegmentInstance;

use crate::message::Message;

/// The `(rep+1)`-th segment whose ID equals `id`, or `None` if there aren't
/// that many.
pub fn segment<'a>(message: &'a Message, id: &str, rep: usize) -> Option<&'a SegmentInstance> {
    message.segments.iter().filter(|s| s.id == id).nth(rep)
}

/// How many segments in `message` carry ID `id`.
pub fn segment_count(message: &Message, id: &str) -> usize {
    message.segments.iter().filter(|s| s.id == id).count()
}

/// The index into `message.segments` of the `(rep+1)`-th occurrence of `id`.
fn position_of(message: &Message, id: &str, rep: usize) -> Option<usize> {
    message.segments.iter().enumerate().filter(|(_, s)| s.id == id).nth(rep).map(|(i, _)| i)
}

/// Locate the first occurrence of `ids[0]` at repetition `rep`, then walk
/// forward matching the remaining IDs in order while tolerating gaps: if the
/// segment under the cursor isn't the next expected ID, that expected ID is
/// treated as optional and skipped. Returns
/// the accumulated group in original message order; empty if `ids[0]` isn't
/// found at `rep`.
pub fn paired_segments<'a>(message: &'a Message, ids: &[&str], rep: usize) -> Vec<&'a SegmentInstance> {
    let Some(start) = position_of(message, ids[0], rep) else {
        return Vec::new();
    };
    let mut group = vec![&message.segments[start]];
    let mut expected = &ids[1..];
    let mut cursor = start + 1;
    while !expected.is_empty() && cursor < message.segments.len() {
        let candidate = &message.segments[cursor];
        if candidate.id == expected[0] {
            group.push(candidate);
            expected = &expected[1..];
            cursor += 1;
        } else {
            // Treat expected[0] as optional; retry the same segment against
            // the new head instead of advancing the cursor.
            expected = &expected[1..];
        }
    }
    group
}

/// Repeatedly scans `paired_segments` starting at `start_rep` and advancing
/// by one group each time, folding `fun(group, index, acc)` until no further
/// group headed by `ids[0]` exists.
pub fn reduce_paired_segments<Acc>(
    message: &Message,
    ids: &[&str],
    start_rep: usize,
    mut acc: Acc,
    mut fun: impl FnMut(&[&SegmentInstance], usize, Acc) -> Acc,
) -> Acc {
    let mut rep = start_rep;
    let mut index = 0;
    loop {
        let group = paired_segments(message, ids, rep);
        if group.is_empty() {
            return acc;
        }
        acc = fun(&group, index, acc);
        rep += 1;
        index += 1;
    }
}
