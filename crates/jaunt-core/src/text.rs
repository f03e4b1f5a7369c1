//! Text layout helpers shared by the rendering code.

/// No indentation, used for heading lines.
pub const INDENT_NONE: usize = 0;

/// One level of nesting under a heading line.
pub const INDENT_STEP: usize = 4;

/// Left-pads every line of `text` with `level` spaces.
///
/// The result has the same number of lines as the input; an empty input
/// stays empty.
pub fn indent(text: &str, level: usize) -> String {
    let pad = " ".repeat(level);
    text.lines()
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
