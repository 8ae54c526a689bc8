//! Streaming read/classify/emit loop.
//!
//! Reads bounded lines from any [`BufRead`], runs each through
//! [`StreamState::classify`], and writes whatever the classifier emits.
//! Processing is strictly sequential; the only blocking point is the next
//! read.

use std::io::{self, BufRead, Write};

use crate::classify::StreamState;

/// Maximum bytes delivered to the classifier per read, terminator included.
/// Longer lines arrive as successive independent chunks.
pub const MAX_LINE_LEN: usize = 2048;

/// Read one bounded line into `buf`, replacing its contents.
///
/// Reads until a newline is appended, `max` bytes have been read, or the
/// stream ends, whichever comes first. Returns the number of bytes read;
/// zero means end of stream. A line longer than `max` is returned as a full
/// `max`-byte chunk with the remainder(s) left for subsequent calls.
pub fn read_line_bounded<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max: usize,
) -> io::Result<usize> {
    buf.clear();

    while buf.len() < max {
        let available = match reader.fill_buf() {
            Ok(bytes) => bytes,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }

        let room = max - buf.len();
        let window = &available[..available.len().min(room)];

        match window.iter().position(|&b| b == b'\n') {
            Some(i) => {
                buf.extend_from_slice(&window[..=i]);
                reader.consume(i + 1);
                break;
            }
            None => {
                let len = window.len();
                buf.extend_from_slice(window);
                reader.consume(len);
            }
        }
    }

    Ok(buf.len())
}

/// Pump `reader` through the classifier into `writer` until end of stream.
///
/// The state is caller-owned so several readers can form one logical stream
/// (fence state carries across input boundaries, as if the inputs had been
/// concatenated). The final line is processed like any other, trailing
/// newline or not; there is no flush-of-state step.
///
/// Errors from the reader or writer end the loop immediately; no partial
/// output is retracted.
pub fn copy_filtered<R: BufRead, W: Write>(
    state: &mut StreamState,
    mut reader: R,
    writer: &mut W,
) -> io::Result<()> {
    let mut line = Vec::with_capacity(MAX_LINE_LEN);

    loop {
        let n = read_line_bounded(&mut reader, &mut line, MAX_LINE_LEN)?;
        if n == 0 {
            return Ok(());
        }

        let emitted = state.classify(&line);
        if !emitted.is_empty() {
            writer.write_all(emitted)?;
        }
    }
}

/// Filter an in-memory buffer with a fresh state and collect the output.
///
/// # Examples
///
/// ```
/// use docsift::stream::extract;
///
/// let out = extract(b"/// Doc line\nfn hidden() {}\n");
/// assert_eq!(out, b"Doc line\n");
/// ```
pub fn extract(input: &[u8]) -> Vec<u8> {
    let mut state = StreamState::new();
    let mut output = Vec::new();
    copy_filtered(&mut state, input, &mut output)
        .expect("reading from a slice and writing to a Vec cannot fail");
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_line_bounded_stops_at_newline() {
        let mut reader = &b"one\ntwo\n"[..];
        let mut buf = Vec::new();

        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 4);
        assert_eq!(buf, b"one\n");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 4);
        assert_eq!(buf, b"two\n");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 0);
    }

    #[test]
    fn read_line_bounded_returns_last_line_without_newline() {
        let mut reader = &b"tail"[..];
        let mut buf = Vec::new();

        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 4);
        assert_eq!(buf, b"tail");
    }

    #[test]
    fn read_line_bounded_accumulates_across_small_refills() {
        // A tiny BufReader capacity forces several fill_buf/consume rounds
        // within a single bounded line.
        let input = b"abcdefgh\nrest";
        let mut reader = std::io::BufReader::with_capacity(3, &input[..]);
        let mut buf = Vec::new();

        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 9);
        assert_eq!(buf, b"abcdefgh\n");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 4);
        assert_eq!(buf, b"rest");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 2048).unwrap(), 0);
    }

    #[test]
    fn read_line_bounded_splits_overlong_lines() {
        let mut input = vec![b'x'; 10];
        input.push(b'\n');
        let mut reader = &input[..];
        let mut buf = Vec::new();

        assert_eq!(read_line_bounded(&mut reader, &mut buf, 4).unwrap(), 4);
        assert_eq!(buf, b"xxxx");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 4).unwrap(), 4);
        assert_eq!(buf, b"xxxx");
        assert_eq!(read_line_bounded(&mut reader, &mut buf, 4).unwrap(), 3);
        assert_eq!(buf, b"xx\n");
    }

    #[test]
    fn extract_strips_doc_lines_and_drops_code() {
        let out = extract(b"/// Hello World\nint y = 1;\n");
        assert_eq!(out, b"Hello World\n");
    }

    #[test]
    fn extract_passes_fenced_block_verbatim() {
        let input = b"/// ```c\nint x;\n/// ```\nafter\n";
        assert_eq!(extract(input), b"```c\nint x;\n```\n");
    }

    #[test]
    fn extract_on_marker_free_text_is_empty() {
        assert!(extract(b"plain\nlines\nonly\n").is_empty());
    }

    #[test]
    fn extract_of_empty_input_is_empty() {
        assert!(extract(b"").is_empty());
    }

    #[test]
    fn overlong_doc_line_only_strips_first_chunk() {
        // A doc line longer than the buffer: the first chunk starts with the
        // marker and is stripped; the continuation chunk has no marker and
        // no active fence, so it is dropped.
        let mut input = b"/// ".to_vec();
        input.extend(std::iter::repeat(b'a').take(MAX_LINE_LEN * 2));
        input.push(b'\n');

        let out = extract(&input);
        assert_eq!(out.len(), MAX_LINE_LEN - 4);
        assert!(out.iter().all(|&b| b == b'a'));
    }

    #[test]
    fn fence_state_carries_across_readers() {
        let mut state = StreamState::new();
        let mut out = Vec::new();

        copy_filtered(&mut state, &b"/// ```\n"[..], &mut out).unwrap();
        copy_filtered(&mut state, &b"raw from second input\n"[..], &mut out).unwrap();

        assert_eq!(out, b"```\nraw from second input\n");
    }

    #[test]
    fn binary_input_is_total() {
        let mut input = b"```\n".to_vec();
        input.extend([0xde, 0xad, 0xbe, 0xef, b'\n']);
        let out = extract(&input);
        assert_eq!(out, input);
    }
}
