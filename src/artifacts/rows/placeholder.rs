use crate::artifacts::rows::row_model::LineRow;
use std::collections::VecDeque;
use std::fmt::Display;
use thiserror::Error;

/// Directional reveals are only offered above this many hidden rows, and move
/// at most this many rows at once.
pub const REVEAL_STEP: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaceholderId(pub(crate) usize);

impl Display for PlaceholderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealAction {
    /// Move the first rows out, just above the placeholder.
    FromStart,
    All,
    /// Move the last rows out, just below the placeholder.
    FromEnd,
}

impl Display for RevealAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevealAction::FromStart => write!(f, "▼ +{REVEAL_STEP}"),
            RevealAction::All => write!(f, "Show All"),
            RevealAction::FromEnd => write!(f, "▲ +{REVEAL_STEP}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevealError {
    #[error("no collapsed region {0} in this listing")]
    UnknownPlaceholder(PlaceholderId),
    #[error("'{action}' is not offered for {hidden} hidden lines")]
    NotOffered { action: RevealAction, hidden: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollapsedPlaceholder {
    id: PlaceholderId,
    hidden: VecDeque<LineRow>,
}

impl CollapsedPlaceholder {
    pub(crate) fn new(id: PlaceholderId, hidden: Vec<LineRow>) -> Self {
        Self {
            id,
            hidden: hidden.into(),
        }
    }

    pub fn id(&self) -> PlaceholderId {
        self.id
    }

    pub fn reveal_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn hidden(&self) -> impl Iterator<Item = &LineRow> {
        self.hidden.iter()
    }

    pub fn offers_partial_reveal(&self) -> bool {
        self.hidden.len() > REVEAL_STEP
    }

    /// Offered actions in display order; empty once nothing is hidden.
    pub fn affordances(&self) -> Vec<RevealAction> {
        match self.hidden.len() {
            0 => vec![],
            _ if self.offers_partial_reveal() => vec![
                RevealAction::FromStart,
                RevealAction::All,
                RevealAction::FromEnd,
            ],
            _ => vec![RevealAction::All],
        }
    }

    /// Detaches the rows `action` reveals, in original order.
    pub(crate) fn take(&mut self, action: RevealAction) -> Result<Vec<LineRow>, RevealError> {
        if !self.affordances().contains(&action) {
            return Err(RevealError::NotOffered {
                action,
                hidden: self.hidden.len(),
            });
        }

        let step = REVEAL_STEP.min(self.hidden.len());
        let rows: Vec<LineRow> = match action {
            RevealAction::FromStart => self.hidden.drain(..step).collect(),
            RevealAction::FromEnd => {
                let from = self.hidden.len() - step;
                self.hidden.drain(from..).collect()
            }
            RevealAction::All => self.hidden.drain(..).collect(),
        };

        Ok(rows)
    }
}
