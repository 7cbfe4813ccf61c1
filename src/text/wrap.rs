//! Greedy word wrapping over styled segments.

use crate::text::segment::{Segment, SegmentLine, split_lines};
use crate::unicode::{display_width, graphemes, split_at_width};

/// A run of either spaces or non-space text, possibly spanning styles.
struct Run {
    segments: Vec<Segment>,
    width: usize,
    space: bool,
}

fn runs(line: SegmentLine) -> Vec<Run> {
    let mut out: Vec<Run> = Vec::new();
    for segment in line {
        let Segment::Text { text, style } = segment else {
            // Controls ride along with whatever precedes them
            if let Some(last) = out.last_mut() {
                last.segments.push(segment);
            } else {
                out.push(Run {
                    segments: vec![segment],
                    width: 0,
                    space: false,
                });
            }
            continue;
        };

        let mut rest = text.as_str();
        while let Some(first) = rest.chars().next() {
            let space = first == ' ';
            let end = rest
                .char_indices()
                .find(|(_, c)| (*c == ' ') != space)
                .map_or(rest.len(), |(i, _)| i);
            let (piece, tail) = rest.split_at(end);
            let width = display_width(piece);
            match out.last_mut() {
                Some(last) if last.space == space => {
                    last.segments.push(Segment::styled(piece, style));
                    last.width += width;
                }
                _ => out.push(Run {
                    segments: vec![Segment::styled(piece, style)],
                    width,
                    space,
                }),
            }
            rest = tail;
        }
    }
    out
}

/// Split a run too wide for any line into chunks of at most `width` cells.
fn chop(run: Run, width: usize) -> Vec<(Vec<Segment>, usize)> {
    let mut chunks = Vec::new();
    let mut current = Vec::new();
    let mut used = 0;

    for segment in run.segments {
        let Segment::Text { text, style } = segment else {
            current.push(segment);
            continue;
        };
        let mut rest = text.as_str();
        while !rest.is_empty() {
            let (mut head, mut tail, mut w) = split_at_width(rest, width.saturating_sub(used));
            if head.is_empty() {
                if used > 0 {
                    chunks.push((std::mem::take(&mut current), used));
                    used = 0;
                    continue;
                }
                // Grapheme wider than the whole line: place it alone
                let g = graphemes(rest).next().unwrap_or(rest);
                (head, tail, w) = (g, &rest[g.len()..], display_width(g));
            }
            current.push(Segment::styled(head, style));
            used += w;
            rest = tail;
        }
    }
    if !current.is_empty() {
        chunks.push((current, used));
    }
    chunks
}

/// Wrap segments to `width` cells.
///
/// Breaks happen at spaces; spaces at a break are dropped, spaces at the
/// end of the text are kept. Words wider than
/// the line are split at grapheme boundaries. `\n` and
/// [`Segment::LineBreak`] force a break. A width of 0 disables wrapping.
#[must_use]
pub fn wrap_segments(segments: Vec<Segment>, width: usize) -> Vec<SegmentLine> {
    let logical = split_lines(segments);
    if width == 0 {
        return logical;
    }

    let mut lines = Vec::with_capacity(logical.len());
    for line in logical {
        let first = lines.len();
        let mut current = SegmentLine::new();
        let mut used = 0;
        let mut wrapped = false;

        for run in runs(line) {
            if run.space {
                if used + run.width <= width {
                    if !(wrapped && used == 0) {
                        current.extend(run.segments);
                        used += run.width;
                    }
                } else {
                    if used > 0 {
                        lines.push(finish(&mut current));
                        used = 0;
                    }
                    wrapped = true;
                }
                continue;
            }

            if used + run.width <= width {
                current.extend(run.segments);
                used += run.width;
                continue;
            }

            if used > 0 {
                lines.push(finish(&mut current));
                used = 0;
                wrapped = true;
            }
            if run.width <= width {
                current.extend(run.segments);
                used = run.width;
            } else {
                let mut chunks = chop(run, width);
                let last = chunks.pop();
                for (chunk, _) in chunks {
                    lines.push(chunk);
                }
                if let Some((chunk, w)) = last {
                    current = chunk;
                    used = w;
                }
                wrapped = true;
            }
        }
        if !current.is_empty() || lines.len() == first {
            lines.push(current);
        }
    }
    lines
}

/// Take a line ending at a wrap point, dropping its trailing spaces.
fn finish(line: &mut SegmentLine) -> SegmentLine {
    while line
        .last()
        .is_some_and(|s| matches!(s, Segment::Text { text, .. } if text.trim_start_matches(' ').is_empty()))
    {
        line.pop();
    }
    std::mem::take(line)
}

/// Width of the widest unbreakable word.
#[must_use]
pub fn longest_word(segments: &[Segment]) -> usize {
    split_lines(segments.to_vec())
        .into_iter()
        .flat_map(runs)
        .filter(|r| !r.space)
        .map(|r| r.width)
        .max()
        .unwrap_or(0)
}
