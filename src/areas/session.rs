use crate::areas::loader::DocumentLoader;
use crate::areas::orchestrator::{Orchestrator, PairEvent, PairOutcome};
use crate::artifacts::diff::pair::PairId;
use crate::artifacts::rows::row_model::RowModel;
use std::cell::{RefCell, RefMut};
use std::collections::BTreeMap;

/// What is currently shown for one pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairView {
    Ready(RowModel),
    Failed(String),
}

/// Ties the orchestrator to an output and keeps the row model of every pair.
pub struct Session {
    writer: RefCell<Box<dyn std::io::Write>>,
    loader: DocumentLoader,
    orchestrator: Orchestrator,
    views: BTreeMap<PairId, PairView>,
}

impl Session {
    pub fn new(
        writer: Box<dyn std::io::Write>,
        loader: DocumentLoader,
        orchestrator: Orchestrator,
    ) -> Self {
        Self {
            writer: RefCell::new(writer),
            loader,
            orchestrator,
            views: BTreeMap::new(),
        }
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn loader(&self) -> &DocumentLoader {
        &self.loader
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn orchestrator_mut(&mut self) -> &mut Orchestrator {
        &mut self.orchestrator
    }

    /// Views in display order.
    pub fn views(&self) -> impl Iterator<Item = (&PairId, &PairView)> {
        self.views.iter()
    }

    pub fn view_mut(&mut self, pair: PairId) -> Option<&mut PairView> {
        self.views.get_mut(&pair)
    }

    /// Folds one orchestrator event into the views. A fresh result replaces the
    /// previous row model, reveal state included.
    pub fn apply(&mut self, event: PairEvent) {
        match event.outcome {
            PairOutcome::Ready(result) => {
                self.views
                    .insert(event.pair, PairView::Ready(RowModel::build(&result)));
            }
            PairOutcome::Failed(error) => {
                self.views
                    .insert(event.pair, PairView::Failed(error.to_string()));
            }
            PairOutcome::Cleared => {
                self.views.remove(&event.pair);
            }
        }
    }

    /// Waits for every outstanding pair and applies the results.
    pub async fn settle(&mut self) {
        while let Some(event) = self.orchestrator.next_event().await {
            self.apply(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PairView, Session};
    use crate::areas::loader::DocumentLoader;
    use crate::areas::orchestrator::Orchestrator;
    use crate::artifacts::diff::pair::{PairId, Slot};
    use crate::artifacts::rows::placeholder::RevealAction;
    use pretty_assertions::assert_eq;

    fn hidden_in(session: &Session, pair: PairId) -> Option<usize> {
        session.views().find_map(|(id, view)| match view {
            PairView::Ready(model) if *id == pair => Some(model.hidden_count()),
            _ => None,
        })
    }

    #[tokio::test]
    async fn fresh_result_replaces_revealed_row_model() {
        let text = (1..=40).map(|n| format!("{n}\n")).collect::<String>();
        let mut session = Session::new(
            Box::new(std::io::sink()),
            DocumentLoader::default(),
            Orchestrator::spawn(),
        );
        session
            .orchestrator_mut()
            .set_content(Slot::First, text.clone());
        session.orchestrator_mut().set_content(Slot::Second, text);
        session.settle().await;

        let Some(PairView::Ready(model)) = session.view_mut(PairId::FirstSecond) else {
            panic!("first pair is not ready");
        };
        let id = model.placeholders().next().map(|p| p.id()).unwrap();
        model.reveal(id, RevealAction::All).unwrap();
        assert_eq!(hidden_in(&session, PairId::FirstSecond), Some(0));

        session
            .orchestrator_mut()
            .set_content(Slot::Third, "unrelated\n");
        session.settle().await;

        assert_eq!(hidden_in(&session, PairId::FirstSecond), Some(34));
        assert_eq!(session.views().count(), 3);
    }

    #[tokio::test]
    async fn cleared_pair_loses_its_view() {
        let mut session = Session::new(
            Box::new(std::io::sink()),
            DocumentLoader::default(),
            Orchestrator::spawn(),
        );
        session.orchestrator_mut().set_content(Slot::First, "a\n");
        session.orchestrator_mut().set_content(Slot::Second, "b\n");
        session.settle().await;
        assert_eq!(session.views().count(), 1);

        session.orchestrator_mut().clear(Slot::Second);
        session.settle().await;

        assert_eq!(session.views().count(), 0);
    }
}
