use crate::artifacts::diff::myers::{Edit, MyersDiff};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Added,
    Removed,
    Common,
}

impl PartKind {
    pub fn sigil(&self) -> char {
        match self {
            PartKind::Added => '+',
            PartKind::Removed => '-',
            PartKind::Common => ' ',
        }
    }
}

/// Maximal run of lines sharing one classification.
///
/// Lines are stored as newline-terminated tokens, so `value()` gives back the
/// exact text the run was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPart {
    kind: PartKind,
    tokens: Vec<String>,
}

impl DiffPart {
    fn new(kind: PartKind) -> Self {
        Self {
            kind,
            tokens: Vec::new(),
        }
    }

    pub fn kind(&self) -> PartKind {
        self.kind
    }

    pub fn line_count(&self) -> usize {
        self.tokens.len()
    }

    /// Display text of every line, without the line terminator.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.tokens
            .iter()
            .map(|token| token.strip_suffix('\n').unwrap_or(token.as_str()))
    }

    pub fn value(&self) -> String {
        self.tokens.concat()
    }
}

impl Display for DiffPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}{}", self.kind.sigil(), line)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiffStats {
    pub added: usize,
    pub removed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DiffResult {
    parts: Vec<DiffPart>,
}

impl DiffResult {
    pub fn parts(&self) -> &[DiffPart] {
        &self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn is_identical(&self) -> bool {
        self.parts.iter().all(|part| part.kind == PartKind::Common)
    }

    pub fn old_text(&self) -> String {
        self.side_text(PartKind::Removed)
    }

    pub fn new_text(&self) -> String {
        self.side_text(PartKind::Added)
    }

    pub fn stats(&self) -> DiffStats {
        self.parts
            .iter()
            .fold(DiffStats::default(), |mut stats, part| {
                match part.kind {
                    PartKind::Added => stats.added += part.line_count(),
                    PartKind::Removed => stats.removed += part.line_count(),
                    PartKind::Common => {}
                }
                stats
            })
    }

    fn side_text(&self, own: PartKind) -> String {
        self.parts
            .iter()
            .filter(|part| part.kind == PartKind::Common || part.kind == own)
            .map(DiffPart::value)
            .collect()
    }
}

impl Display for DiffResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.parts.iter().try_for_each(|part| write!(f, "{part}"))
    }
}

/// Splits `text` into newline-terminated tokens.
///
/// A trailing newline closes the last line instead of opening an empty one, while
/// `"a\n\n"` keeps its intentional empty final line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Line-granularity diff of two texts.
///
/// Common prefix and suffix are matched first, so a single insertion or deletion
/// always lands next to the longest run of unchanged lines. Inside each divergent
/// region removed lines are emitted before added lines.
pub fn diff_lines(text1: &str, text2: &str) -> DiffResult {
    let a = split_lines(text1);
    let b = split_lines(text2);

    let prefix = a.iter().zip(&b).take_while(|(x, y)| x == y).count();
    let suffix = a[prefix..]
        .iter()
        .rev()
        .zip(b[prefix..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let mut builder = PartBuilder::default();
    a[..prefix]
        .iter()
        .for_each(|line| builder.push(PartKind::Common, line));

    let middle = MyersDiff::new(&a[prefix..a.len() - suffix], &b[prefix..b.len() - suffix]);
    for edit in middle.edits() {
        match edit {
            Edit::Equal { value } => builder.push(PartKind::Common, value),
            Edit::Delete { value } => builder.push(PartKind::Removed, value),
            Edit::Insert { value } => builder.push(PartKind::Added, value),
        }
    }

    a[a.len() - suffix..]
        .iter()
        .for_each(|line| builder.push(PartKind::Common, line));

    builder.finish()
}

#[derive(Debug, Default)]
struct PartBuilder {
    parts: Vec<DiffPart>,
    removed: Vec<String>,
    added: Vec<String>,
}

impl PartBuilder {
    fn push(&mut self, kind: PartKind, line: &str) {
        match kind {
            PartKind::Removed => self.removed.push(line.to_string()),
            PartKind::Added => self.added.push(line.to_string()),
            PartKind::Common => {
                self.flush_divergence();
                match self.parts.last_mut() {
                    Some(part) if part.kind == PartKind::Common => {
                        part.tokens.push(line.to_string())
                    }
                    _ => {
                        let mut part = DiffPart::new(PartKind::Common);
                        part.tokens.push(line.to_string());
                        self.parts.push(part);
                    }
                }
            }
        }
    }

    fn flush_divergence(&mut self) {
        for (kind, tokens) in [
            (PartKind::Removed, std::mem::take(&mut self.removed)),
            (PartKind::Added, std::mem::take(&mut self.added)),
        ] {
            if !tokens.is_empty() {
                self.parts.push(DiffPart { kind, tokens });
            }
        }
    }

    fn finish(mut self) -> DiffResult {
        self.flush_divergence();
        DiffResult { parts: self.parts }
    }
}
