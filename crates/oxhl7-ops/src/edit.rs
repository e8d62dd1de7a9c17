//! Edit primitives: insert before/after, replace, delete, all addressed by
//! `(id, rep)`. None of these fail — a miss just returns the message
//! unchanged.

use oxhl7_schema::SegmentInstance;

use crate::message::Message;

/// One segment or several, the shape `insert_before`/`insert_after`/
/// `replace` all accept.
pub enum Segments {
    One(SegmentInstance),
    Many(Vec<SegmentInstance>),
}

impl Segments {
    fn into_vec(self) -> Vec<SegmentInstance> {
        match self {
            Segments::One(s) => vec![s],
            Segments::Many(v) => v,
        }
    }
}

impl From<SegmentInstance> for Segments {
    fn from(s: SegmentInstance) -> Self {
        Segments::One(s)
    }
}

impl From<Vec<SegmentInstance>> for Segments {
    fn from(v: Vec<SegmentInstance>) -> Self {
        Segments::Many(v)
    }
}

fn position_of(message: &Message, id: &str, rep: usize) -> Option<usize> {
    message.segments.iter().enumerate().filter(|(_, s)| s.id == id).nth(rep).map(|(i, _)| i)
}

pub fn insert_before(message: &Message, id: &str, rep: usize, segments: impl Into<Segments>) -> Message {
    match position_of(message, id, rep) {
        None => message.clone(),
        Some(index) => {
            let mut out = message.segments.clone();
            out.splice(index..index, segments.into().into_vec());
            Message::from_segments(out, message.separators)
        }
    }
}

pub fn insert_after(message: &Message, id: &str, rep: usize, segments: impl Into<Segments>) -> Message {
    match position_of(message, id, rep) {
        None => message.clone(),
        Some(index) => {
            let mut out = message.segments.clone();
            out.splice(index + 1..index + 1, segments.into().into_vec());
            Message::from_segments(out, message.separators)
        }
    }
}

pub fn replace(message: &Message, id: &str, rep: usize, segments: impl Into<Segments>) -> Message {
    match position_of(message, id, rep) {
        None => message.clone(),
        Some(index) => {
            let mut out = message.segments.clone();
            out.splice(index..=index, segments.into().into_vec());
            Message::from_segments(out, message.separators)
        }
    }
}

pub fn delete(message: &Message, id: &str, rep: usize) -> Message {
    match position_of(message, id, rep) {
        None => message.clone(),
        Some(index) => {
            let mut out = message.segments.clone();
            out.remove(index);
            Message::from_segments(out, message.separators)
        }
    }
}
