use crate::artifacts::diff::line_diff::{DiffResult, PartKind};
use crate::artifacts::rows::placeholder::{
    CollapsedPlaceholder, PlaceholderId, RevealAction, RevealError,
};
use derive_new::new;

/// Unchanged runs up to this length are always shown in full.
pub const COLLAPSE_THRESHOLD: usize = 6;
/// Rows kept visible on each side of a collapsed run.
pub const CONTEXT_LINES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LineRow {
    pub kind: PartKind,
    pub text: String,
    pub old_line: Option<usize>,
    pub new_line: Option<usize>,
}

impl LineRow {
    pub fn common(text: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self::new(PartKind::Common, text.into(), Some(old_line), Some(new_line))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    Line(LineRow),
    Collapsed(CollapsedPlaceholder),
}

/// Display projection of one diff result.
///
/// Built once per result; afterwards only [`RowModel::reveal`] mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RowModel {
    rows: Vec<Row>,
}

impl RowModel {
    pub fn build(result: &DiffResult) -> Self {
        let mut rows = Vec::new();
        let (mut old_line, mut new_line) = (1, 1);
        let mut next_id = 0;

        for part in result.parts() {
            let kind = part.kind();
            let mut numbered = part.lines().map(|text| {
                let old = matches!(kind, PartKind::Common | PartKind::Removed).then(|| {
                    old_line += 1;
                    old_line - 1
                });
                let new = matches!(kind, PartKind::Common | PartKind::Added).then(|| {
                    new_line += 1;
                    new_line - 1
                });
                LineRow::new(kind, text.to_string(), old, new)
            });

            if kind != PartKind::Common || part.line_count() <= COLLAPSE_THRESHOLD {
                rows.extend(numbered.map(Row::Line));
                continue;
            }

            let hidden_count = part.line_count() - 2 * CONTEXT_LINES;
            rows.extend(numbered.by_ref().take(CONTEXT_LINES).map(Row::Line));
            let hidden = numbered.by_ref().take(hidden_count).collect();
            rows.push(Row::Collapsed(CollapsedPlaceholder::new(
                PlaceholderId(next_id),
                hidden,
            )));
            next_id += 1;
            rows.extend(numbered.map(Row::Line));
        }

        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &CollapsedPlaceholder> {
        self.rows.iter().filter_map(|row| match row {
            Row::Collapsed(placeholder) => Some(placeholder),
            Row::Line(_) => None,
        })
    }

    /// Rows currently visible, in display order.
    pub fn visible_lines(&self) -> impl Iterator<Item = &LineRow> {
        self.rows.iter().filter_map(|row| match row {
            Row::Line(line) => Some(line),
            Row::Collapsed(_) => None,
        })
    }

    pub fn hidden_count(&self) -> usize {
        self.placeholders()
            .map(CollapsedPlaceholder::reveal_count)
            .sum()
    }

    pub fn placeholder(&self, id: PlaceholderId) -> Option<&CollapsedPlaceholder> {
        self.placeholders().find(|placeholder| placeholder.id() == id)
    }

    pub fn affordances(&self, id: PlaceholderId) -> Result<Vec<RevealAction>, RevealError> {
        self.placeholder(id)
            .map(CollapsedPlaceholder::affordances)
            .ok_or(RevealError::UnknownPlaceholder(id))
    }

    /// Applies one reveal action to the placeholder `id` in place.
    ///
    /// Returns the number of rows made visible. A placeholder left with no hidden
    /// rows is removed from the listing.
    pub fn reveal(&mut self, id: PlaceholderId, action: RevealAction) -> Result<usize, RevealError> {
        let position = self
            .rows
            .iter()
            .position(|row| matches!(row, Row::Collapsed(placeholder) if placeholder.id() == id))
            .ok_or(RevealError::UnknownPlaceholder(id))?;

        let Row::Collapsed(placeholder) = &mut self.rows[position] else {
            return Err(RevealError::UnknownPlaceholder(id));
        };
        let revealed = placeholder.take(action)?;
        let exhausted = placeholder.reveal_count() == 0;
        let count = revealed.len();
        let revealed = revealed.into_iter().map(Row::Line);

        match (action, exhausted) {
            (_, true) => {
                self.rows.splice(position..=position, revealed);
            }
            (RevealAction::FromEnd, false) => {
                self.rows.splice(position + 1..position + 1, revealed);
            }
            (_, false) => {
                self.rows.splice(position..position, revealed);
            }
        }

        Ok(count)
    }

    /// Reveals every collapsed region. Returns the number of rows made visible.
    pub fn reveal_everything(&mut self) -> usize {
        let ids = self
            .placeholders()
            .map(CollapsedPlaceholder::id)
            .collect::<Vec<_>>();

        ids.into_iter()
            .filter_map(|id| self.reveal(id, RevealAction::All).ok())
            .sum()
    }
}
