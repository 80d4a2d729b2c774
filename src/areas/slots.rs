use crate::artifacts::diff::pair::{PairId, Slot};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct Document {
    label: Option<String>,
    content: Arc<str>,
}

impl Document {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

/// The three document positions. Content is shared immutably with in-flight
/// diff requests, so replacing it never touches a captured snapshot.
#[derive(Debug, Clone, Default)]
pub struct DocumentSlots {
    documents: [Document; 3],
}

impl DocumentSlots {
    pub fn get(&self, slot: Slot) -> &Document {
        &self.documents[slot.index()]
    }

    pub fn content(&self, slot: Slot) -> &Arc<str> {
        &self.documents[slot.index()].content
    }

    pub fn set_content(&mut self, slot: Slot, content: Arc<str>) {
        self.documents[slot.index()].content = content;
    }

    pub fn set_label(&mut self, slot: Slot, label: Option<String>) {
        self.documents[slot.index()].label = label;
    }

    pub fn is_populated(&self, slot: Slot) -> bool {
        !self.content(slot).is_empty()
    }

    /// A pair is eligible when both of its documents have content; the third slot
    /// therefore only takes part once it is populated.
    pub fn is_eligible(&self, pair: PairId) -> bool {
        let (old, new) = pair.slots();
        self.is_populated(old) && self.is_populated(new)
    }

    pub fn eligible_pairs(&self) -> Vec<PairId> {
        PairId::ALL
            .into_iter()
            .filter(|pair| self.is_eligible(*pair))
            .collect()
    }

    /// Whether `old`/`new` are still the current contents of `pair`'s slots.
    pub fn matches(&self, pair: PairId, old: &Arc<str>, new: &Arc<str>) -> bool {
        let (old_slot, new_slot) = pair.slots();
        same_text(self.content(old_slot), old) && same_text(self.content(new_slot), new)
    }
}

fn same_text(current: &Arc<str>, captured: &Arc<str>) -> bool {
    Arc::ptr_eq(current, captured) || current == captured
}
