//! Windows-1252 encoding utilities for thermal printers
//!
//! Brazilian receipts need accented Portuguese text (Feijão, Açaí).
//! Most ESC/POS printers ship a Windows-1252 code page (selected with
//! ESC t 16); this module converts UTF-8 content to it while keeping
//! ESC/POS command bytes intact.

/// Windows-1252 code page number for ESC t
const CP1252: u8 = 16;

/// Display width of a string in CP1252 (one byte per character)
///
/// Characters outside CP1252 are replaced with '?' during conversion
/// and therefore still count as one.
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Truncate a string to fit within a column width
pub fn truncate_text(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Pad a string to a specific column width
///
/// If the string is longer than the width, it will be truncated.
pub fn pad_text(s: &str, width: usize, align_right: bool) -> String {
    let current_width = text_width(s);
    if current_width >= width {
        return truncate_text(s, width);
    }
    let spaces = width - current_width;
    if align_right {
        format!("{}{}", " ".repeat(spaces), s)
    } else {
        format!("{}{}", s, " ".repeat(spaces))
    }
}

/// Convert mixed UTF-8 content (with ESC/POS commands) to CP1252
///
/// ASCII bytes (0x00-0x7F) pass through exactly as is, which protects
/// ESC/POS commands from being corrupted. Bytes >= 0x80 are treated as
/// UTF-8 sequences and re-encoded to Windows-1252; characters the code
/// page cannot express become '?'.
///
/// Prepends the code page select (ESC t 16) so the printer interprets
/// the re-encoded bytes correctly.
pub fn convert_to_cp1252(bytes: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(bytes.len() + 3);

    // ESC t n - select character code table (16 = Windows-1252)
    result.extend_from_slice(&[0x1B, 0x74, CP1252]);

    let mut buffer = Vec::new();
    for &b in bytes {
        if b < 0x80 {
            flush_utf8(&mut result, &mut buffer);
            result.push(b);
        } else {
            buffer.push(b);
        }
    }
    flush_utf8(&mut result, &mut buffer);

    result
}

/// Re-encode a pending UTF-8 byte run as Windows-1252
fn flush_utf8(result: &mut Vec<u8>, buffer: &mut Vec<u8>) {
    if buffer.is_empty() {
        return;
    }
    let text = String::from_utf8_lossy(buffer);
    let (encoded, _, _) = encoding_rs::WINDOWS_1252.encode(&text);
    result.extend_from_slice(&encoded);
    buffer.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_passes_through_after_codepage_select() {
        let out = convert_to_cp1252(b"Pedido: 42\n");
        assert_eq!(&out[..3], &[0x1B, 0x74, 16]);
        assert_eq!(&out[3..], b"Pedido: 42\n");
    }

    #[test]
    fn accented_text_is_reencoded_to_single_bytes() {
        // "Feijão" is 7 bytes in UTF-8, 6 in CP1252
        let out = convert_to_cp1252("Feijão".as_bytes());
        assert_eq!(out.len(), 3 + 6);
        assert_eq!(out[3 + 4], 0xE3); // ã in CP1252
    }

    #[test]
    fn escpos_commands_survive_conversion() {
        let mut data = vec![0x1B, 0x40]; // init
        data.extend_from_slice("Açaí".as_bytes());
        data.extend_from_slice(&[0x1D, 0x56, 0x00]); // cut
        let out = convert_to_cp1252(&data);
        assert_eq!(&out[3..5], &[0x1B, 0x40]);
        assert_eq!(&out[out.len() - 3..], &[0x1D, 0x56, 0x00]);
    }

    #[test]
    fn pad_and_truncate_count_characters_not_bytes() {
        assert_eq!(pad_text("Açaí", 6, false), "Açaí  ");
        assert_eq!(pad_text("Açaí", 6, true), "  Açaí");
        assert_eq!(truncate_text("Feijão tropeiro", 6), "Feijão");
        assert_eq!(text_width("Feijão"), 6);
    }
}
