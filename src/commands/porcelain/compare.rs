use crate::areas::session::{PairView, Session};
use crate::artifacts::diff::line_diff::PartKind;
use crate::artifacts::diff::pair::{PairId, Slot};
use crate::artifacts::rows::placeholder::CollapsedPlaceholder;
use crate::artifacts::rows::row_model::{LineRow, Row, RowModel};
use colored::Colorize;

const NUMBER_WIDTH: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct CompareOptions {
    pub expand_all: bool,
}

impl Session {
    pub async fn compare(
        &mut self,
        locations: &[String],
        opts: &CompareOptions,
    ) -> anyhow::Result<()> {
        let documents = self.loader().load_all(locations).await?;

        for (slot, document) in Slot::ALL.into_iter().zip(documents) {
            let orchestrator = self.orchestrator_mut();
            orchestrator.set_label(slot, document.label);
            orchestrator.set_content(slot, document.content);
        }

        self.settle().await;

        if opts.expand_all {
            for pair in PairId::ALL {
                if let Some(PairView::Ready(model)) = self.view_mut(pair) {
                    model.reveal_everything();
                }
            }
        }

        self.print_views()
    }

    pub fn print_views(&self) -> anyhow::Result<()> {
        if self.views().next().is_none() {
            writeln!(self.writer(), "No comparable documents")?;
            return Ok(());
        }

        for (index, (pair, view)) in self.views().enumerate() {
            if index > 0 {
                writeln!(self.writer())?;
            }
            self.print_header(*pair)?;

            match view {
                PairView::Ready(model) => self.print_rows(model)?,
                PairView::Failed(message) => {
                    writeln!(self.writer(), "{}", format!("error: {message}").red())?;
                }
            }
        }

        Ok(())
    }

    fn print_header(&self, pair: PairId) -> anyhow::Result<()> {
        let (old, new) = pair.slots();
        let orchestrator = self.orchestrator();
        let header = match (orchestrator.label(old), orchestrator.label(new)) {
            (Some(old_label), Some(new_label)) => {
                format!("{}: {old_label} -> {new_label}", pair.title())
            }
            _ => pair.title(),
        };

        writeln!(self.writer(), "{}", header.bold())?;
        Ok(())
    }

    fn print_rows(&self, model: &RowModel) -> anyhow::Result<()> {
        for row in model.rows() {
            match row {
                Row::Line(line) => self.print_line(line)?,
                Row::Collapsed(placeholder) => self.print_placeholder(placeholder)?,
            }
        }
        Ok(())
    }

    fn print_line(&self, line: &LineRow) -> anyhow::Result<()> {
        let number = |n: Option<usize>| n.map(|n| n.to_string()).unwrap_or_default();
        let gutter = format!(
            "{:>width$} {:>width$} │",
            number(line.old_line),
            number(line.new_line),
            width = NUMBER_WIDTH
        );
        let content = format!("{}{}", line.kind.sigil(), line.text);
        let content = match line.kind {
            PartKind::Added => content.green(),
            PartKind::Removed => content.red(),
            PartKind::Common => content.normal(),
        };

        writeln!(self.writer(), "{}{}", gutter.dimmed(), content)?;
        Ok(())
    }

    fn print_placeholder(&self, placeholder: &CollapsedPlaceholder) -> anyhow::Result<()> {
        let actions = placeholder
            .affordances()
            .iter()
            .map(|action| format!("[{action}]"))
            .collect::<Vec<_>>()
            .join(" ");
        let text = format!(
            "{:>width$} ⋯ {} hidden lines {}",
            "",
            placeholder.reveal_count(),
            actions,
            width = 2 * NUMBER_WIDTH + 1
        );

        writeln!(self.writer(), "{}", text.cyan())?;
        Ok(())
    }
}
