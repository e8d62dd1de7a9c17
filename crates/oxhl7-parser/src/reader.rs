//! Turns the lexer's token stream into a typed message: tracks the current
//! segment ID and field sequence, drives [`oxhl7_codec::decode_field`] over
//! ordinary field content, and resumes across chunk boundaries the same way
//! the lexer underneath it does.

use oxhl7_core::{Field, PrimitiveKind, ReadError, Separators, Value};
use oxhl7_codec::decode_field;

use crate::dialect::Dialect;
use crate::lexer::{LexOutcome, Lexer, SeparatorKind, Token};

#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    pub id: String,
    pub fields: Vec<Field>,
}

impl RawSegment {
    /// 1-based field lookup, the convention every coordinate in the schema
    /// layer assumes.
    pub fn field(&self, sequence: usize) -> Option<&Field> {
        sequence.checked_sub(1).and_then(|i| self.fields.get(i))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawMessage {
    pub segments: Vec<RawSegment>,
    pub separators: Separators,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    pub dialect: Dialect,
    pub trim: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self { dialect: Dialect::Wire, trim: true }
    }
}

fn latin1_decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Reader continuation. Holds everything needed to pick up exactly where the
/// last `resume` call left off: the lexer, unconsumed carry-over bytes, and
/// the segments/field accumulated so far for the message in progress.
pub struct Reader {
    lexer: Lexer,
    trim: bool,
    carry: Vec<u8>,
    completed: Vec<RawSegment>,
    current: Option<(String, Vec<Field>)>,
    /// Literal tokens seen since the current segment's ID token — used only
    /// to tell MSH.1 apart from MSH.2 (the only segment with more than one).
    literals_since_id: u8,
    sequence: usize,
    /// Bytes consumed out of `carry` across every `resume` call so far —
    /// lets `annotate` point an error at an offset into the whole input
    /// rather than just the chunk currently in hand.
    consumed: usize,
}

pub enum Outcome {
    /// A full message, plus whatever unconsumed bytes trail it (the start of
    /// the next message, or nothing).
    Complete(RawMessage, Vec<u8>),
    Incomplete(Reader),
    Err(ReadError),
}

impl Reader {
    pub fn new(options: ReadOptions) -> Self {
        Self {
            lexer: Lexer::new(options.dialect),
            trim: options.trim,
            carry: Vec::new(),
            completed: Vec::new(),
            current: None,
            literals_since_id: 0,
            sequence: 0,
            consumed: 0,
        }
    }

    pub fn resume(mut self, bytes: &[u8]) -> Outcome {
        self.carry.extend_from_slice(bytes);
        loop {
            let outcome = self.lexer.read(&self.carry);
            match outcome {
                LexOutcome::Token(token, rest) => {
                    let consumed = self.carry.len() - rest.len();
                    self.carry.drain(..consumed);
                    self.consumed += consumed;
                    if let Err(e) = self.apply(token) {
                        return Outcome::Err(e);
                    }
                }
                LexOutcome::Incomplete(rest) => {
                    if rest.is_empty() && self.current.is_none() && self.lexer.separators().is_some() {
                        let message = RawMessage { segments: self.completed, separators: self.lexer.separators().unwrap() };
                        return Outcome::Complete(message, self.carry);
                    }
                    return Outcome::Incomplete(self);
                }
                LexOutcome::Error(e) => return Outcome::Err(self.annotate(e)),
            }
        }
    }

    fn annotate(&self, e: ReadError) -> ReadError {
        let segment_id = self.current.as_ref().map(|(id, _)| id.clone());
        let mut err = e;
        err.context.segment_id = err.context.segment_id.or(segment_id);
        err.context.sequence = err.context.sequence.or(Some(self.sequence));
        err.context.offset = err.context.offset.or(Some(self.consumed));
        err
    }

    fn apply(&mut self, token: Token) -> Result<(), ReadError> {
        match token {
            Token::Literal(bytes) => {
                if self.current.is_none() {
                    let id = latin1_decode(&bytes);
                    self.current = Some((id, Vec::new()));
                    self.literals_since_id = 0;
                    self.sequence = 0;
                } else {
                    // Only MSH produces a second literal (MSH.2); stored
                    // verbatim, never run through the structural decoder —
                    // the encoding-characters literal can itself contain
                    // the repetition byte, which would otherwise be
                    // mis-split as delimiter structure.
                    self.literals_since_id += 1;
                    self.sequence += if self.literals_since_id == 1 { 1 } else { 0 };
                    let field = Field::Single(Value::String(latin1_decode(&bytes)));
                    if let Some((_, fields)) = &mut self.current {
                        fields.push(field);
                    }
                }
                Ok(())
            }
            Token::Separator(SeparatorKind::Field) => {
                self.sequence += 1;
                Ok(())
            }
            Token::Separator(SeparatorKind::Segment) => {
                if let Some((id, fields)) = self.current.take() {
                    self.completed.push(RawSegment { id, fields });
                }
                self.sequence = 0;
                self.literals_since_id = 0;
                Ok(())
            }
            Token::Separator(_) => Ok(()),
            Token::Value(bytes) => {
                let seps = self.lexer.separators().expect("field content implies separators are known");
                let field = decode_field(&bytes, &seps, self.trim, PrimitiveKind::String).map_err(|e| self.annotate(e))?;
                if let Some((_, fields)) = &mut self.current {
                    fields.push(field);
                }
                Ok(())
            }
        }
    }
}

pub fn read(bytes: &[u8], options: ReadOptions) -> Outcome {
    Reader::new(options).resume(bytes)
}
