//! Escape/unescape a primitive string's bytes against the active separators.
//! Escaping is the only place delimiter bytes are allowed to
//! appear inside a value without being mistaken for structure.

use oxhl7_core::Separators;

/// Replace every delimiter byte (and the escape byte itself) in `input` with
/// its three-byte escape sequence. Everything else passes through untouched.
pub fn escape(input: &[u8], seps: &Separators) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    for &b in input {
        if b == seps.escape {
            out.extend_from_slice(&[seps.escape, b'E', seps.escape]);
        } else if b == seps.field {
            out.extend_from_slice(&[seps.escape, b'F', seps.escape]);
        } else if b == seps.component {
            out.extend_from_slice(&[seps.escape, b'S', seps.escape]);
        } else if b == seps.subcomponent {
            out.extend_from_slice(&[seps.escape, b'T', seps.escape]);
        } else if b == seps.repetition {
            out.extend_from_slice(&[seps.escape, b'R', seps.escape]);
        } else {
            out.push(b);
        }
    }
    out
}

/// Dual of [`escape`]. Unknown `<esc>X<esc>` sequences are passed through
/// unchanged (escape byte, body, and closing escape byte all preserved) —
/// this is a deliberate compatibility choice, not a parsing gap: rejecting
/// unrecognized local/vendor sequences would make the codec less permissive
/// than the traffic it needs to round-trip.
pub fn unescape(input: &[u8], seps: &Separators) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        let b = input[i];
        if b != seps.escape {
            out.push(b);
            i += 1;
            continue;
        }
        let Some(close) = input[i + 1..].iter().position(|&c| c == seps.escape) else {
            // No closing escape byte: nothing to interpret, keep it literal.
            out.push(b);
            i += 1;
            continue;
        };
        let body = &input[i + 1..i + 1 + close];
        match body {
            b"F" => out.push(seps.field),
            b"S" => out.push(seps.component),
            b"T" => out.push(seps.subcomponent),
            b"R" => out.push(seps.repetition),
            b"E" => out.push(seps.escape),
            b".br" => out.push(b'\n'),
            b"H" | b"N" => {}
            seq if seq.first() == Some(&b'X') && seq.len() > 1 => {
                match std::str::from_utf8(&seq[1..]).ok().and_then(|hex| u8::from_str_radix(hex, 16).ok()) {
                    Some(byte) => out.push(byte),
                    None => {
                        tracing::debug!(sequence = ?String::from_utf8_lossy(seq), "unrecognized hex escape, passing through");
                        out.push(seps.escape);
                        out.extend_from_slice(seq);
                        out.push(seps.escape);
                    }
                }
            }
            seq => {
                if seq.first() != Some(&b'Z') {
                    tracing::debug!(sequence = ?String::from_utf8_lossy(seq), "unrecognized escape sequence, passing through");
                }
                out.push(seps.escape);
                out.extend_from_slice(seq);
                out.push(seps.escape);
            }
        }
        i += close + 2;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Escape involution. Every byte `escape` emits either
        /// passes straight through or is wrapped in a three-byte sequence
        /// `unescape` is built to reverse, so the round trip holds for any
        /// input, not just ones hand-picked to avoid delimiter bytes.
        #[test]
        fn unescape_undoes_escape_for_any_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
            let seps = Separators::default();
            prop_assert_eq!(unescape(&escape(&bytes, &seps), &seps), bytes);
        }
    }

    #[test]
    fn escapes_every_delimiter() {
        let seps = Separators::default();
        assert_eq!(escape(b"|", &seps), b"\\F\\");
        assert_eq!(escape(b"^", &seps), b"\\S\\");
        assert_eq!(escape(b"&", &seps), b"\\T\\");
        assert_eq!(escape(b"~", &seps), b"\\R\\");
        assert_eq!(escape(b"\\", &seps), b"\\E\\");
    }

    #[test]
    fn unescape_is_involution_for_clean_strings() {
        let seps = Separators::default();
        let original = b"a|b^c&d~e\\f";
        let escaped = escape(original, &seps);
        assert_eq!(unescape(&escaped, &seps), original);
    }

    #[test]
    fn unknown_sequence_passes_through() {
        let seps = Separators::default();
        assert_eq!(unescape(b"\\Q\\", &seps), b"\\Q\\");
    }

    #[test]
    fn local_sequence_preserved_verbatim() {
        let seps = Separators::default();
        assert_eq!(unescape(b"\\Zmine\\", &seps), b"\\Zmine\\");
    }

    #[test]
    fn hex_escape_decodes_the_byte() {
        let seps = Separators::default();
        assert_eq!(unescape(b"\\X0D\\", &seps), b"\r");
    }

    #[test]
    fn highlight_markers_are_dropped() {
        let seps = Separators::default();
        assert_eq!(unescape(b"\\H\\bold\\N\\", &seps), b"bold");
    }
}
