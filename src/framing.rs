//! Wire format: one newline-terminated line per write, then `EOF\n`.

pub const SENTINEL: &str = "EOF";

const SENTINEL_FRAME: &[u8] = b"EOF\n";

/// Strip trailing whitespace (including any `\r\n`) and terminate with a bare `\n`.
/// Leading whitespace is kept.
pub fn normalize_line(line: &str) -> String {
    let mut frame = String::with_capacity(line.len() + 1);
    frame.push_str(line.trim_end());
    frame.push('\n');
    frame
}

pub fn sentinel_frame() -> &'static [u8] {
    SENTINEL_FRAME
}

/// Lines in file order. `\r\n`, a lone `\r` and `\n` all end a line.
/// A trailing line without a terminator still counts, an empty text has no lines.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(end) => {
                lines.push(&rest[..end]);
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }

    lines
}

/// Full byte stream a transfer of `text` puts on the wire
pub fn encode(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(text.len() + SENTINEL_FRAME.len() + 1);
    for line in split_lines(text) {
        bytes.extend_from_slice(normalize_line(line).as_bytes());
    }
    bytes.extend_from_slice(SENTINEL_FRAME);
    bytes
}
