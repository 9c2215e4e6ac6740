//! Diagnostic rendering of ingested bytes, for triaging crashes reproduced
//! from fuzz corpus entries.

use std::io::{self, Write};

/// Write the `CHAR:` and `HEX:` sections for exactly `bytes`.
///
/// The character section emits the bytes as-is, whatever they are; the hex
/// section emits two lowercase hex digits and a space per byte, then a
/// newline. Both sections are empty for empty input.
pub fn write_dump(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(b"CHAR:\n")?;
    out.write_all(bytes)?;
    out.write_all(b"\nHEX:\n")?;
    for b in bytes {
        write!(out, "{b:02x} ")?;
    }
    out.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dump(bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        write_dump(&mut out, bytes).unwrap();
        out
    }

    #[test]
    fn empty_input_renders_empty_sections() {
        assert_eq!(dump(b""), b"CHAR:\n\nHEX:\n\n");
    }

    #[test]
    fn empty_object_bytes() {
        assert_eq!(dump(b"{}"), b"CHAR:\n{}\nHEX:\n7b 7d \n");
    }

    #[test]
    fn hex_is_lowercase_with_a_space_per_byte() {
        let out = dump(&[0x7b, 0x00, 0xff]);
        assert!(out.ends_with(b"\nHEX:\n7b 00 ff \n"));
    }

    #[test]
    fn char_section_is_raw_unescaped() {
        let out = dump(&[0x01, 0xfe]);
        assert_eq!(&out[..8], b"CHAR:\n\x01\xfe");
    }

    proptest! {
        // Layout is fixed: "CHAR:\n" + bytes + "\nHEX:\n" + 3 bytes per
        // input byte + "\n". The hex body is lowercase hex digits and spaces.
        #[test]
        fn hex_section_shape(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
            let out = dump(&bytes);
            prop_assert_eq!(out.len(), 6 + bytes.len() + 6 + bytes.len() * 3 + 1);
            prop_assert_eq!(&out[6..6 + bytes.len()], bytes.as_slice());
            let hex = &out[6 + bytes.len() + 6..];
            prop_assert!(
                hex[..bytes.len() * 3]
                    .iter()
                    .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f' | b' '))
            );
            prop_assert_eq!(hex[bytes.len() * 3], b'\n');
        }
    }
}
