//! Line classification: the state machine at the heart of docsift.
//!
//! Each input line is classified as a doc-comment line, a raw line inside a
//! code fence, or an ordinary line, and mapped to the bytes to emit for it.
//! The only state carried between lines is the fence flag in [`StreamState`].
//!
//! Classification operates on raw bytes. Input that is not valid UTF-8 is
//! still classified and emitted byte-for-byte.

/// Doc-comment markers recognized at the start of a line, in priority order.
/// Only the first matching marker applies.
pub const DOC_MARKERS: [&[u8; 3]; 3] = [b"///", b"---", b"###"];

/// The code-fence marker. Its presence anywhere in a line toggles fence
/// state.
pub const FENCE_MARKER: &[u8; 3] = b"```";

/// Transducer memory carried between lines.
///
/// One instance exists per run, owned by the caller's loop. The fence flag
/// starts `false` and toggles exactly once per input line that contains
/// [`FENCE_MARKER`]; nothing else mutates it.
#[derive(Debug, Clone, Default)]
pub struct StreamState {
    in_code_fence: bool,
}

impl StreamState {
    /// Create a fresh state with the fence inactive.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the stream is currently inside a code fence.
    pub fn in_code_fence(&self) -> bool {
        self.in_code_fence
    }

    /// Classify one input line and return the bytes to emit for it.
    ///
    /// The line is everything up to and including its terminator (if any);
    /// the returned slice is a subslice of `line`, so terminators survive
    /// untouched. Rules, applied in order:
    ///
    /// 1. If the line starts with a doc marker, its payload is the remainder
    ///    after the marker and at most one following space.
    /// 2. If the line contains a fence marker anywhere, the fence flag
    ///    toggles (once, even for multiple markers in one line).
    /// 3. Doc-comment lines emit their payload regardless of fence state;
    ///    other lines emit verbatim inside a fence and nothing outside one.
    ///
    /// A doc-comment line carrying a fence marker (e.g. `` /// ```c ``) both
    /// emits its payload and toggles the fence, which is how fenced source
    /// blocks are opened from inside comments.
    ///
    /// # Examples
    ///
    /// ```
    /// use docsift::classify::StreamState;
    ///
    /// let mut state = StreamState::new();
    /// assert_eq!(state.classify(b"/// Hello World\n"), b"Hello World\n");
    /// assert_eq!(state.classify(b"int y = 1;\n"), b"");
    /// ```
    pub fn classify<'a>(&mut self, line: &'a [u8]) -> &'a [u8] {
        let payload = doc_payload(line);

        if contains_fence(line) {
            self.in_code_fence = !self.in_code_fence;
        }

        match payload {
            Some(p) => p,
            None if self.in_code_fence => line,
            None => &[],
        }
    }
}

/// If the line starts with a doc marker, return its payload: the bytes after
/// the marker and at most one immediately following space.
fn doc_payload(line: &[u8]) -> Option<&[u8]> {
    for marker in DOC_MARKERS {
        if line.starts_with(marker) {
            let skip = if line.get(3) == Some(&b' ') { 4 } else { 3 };
            return Some(&line[skip..]);
        }
    }
    None
}

/// Whether the line contains the fence marker anywhere.
fn contains_fence(line: &[u8]) -> bool {
    line.windows(FENCE_MARKER.len()).any(|w| w == FENCE_MARKER)
}
