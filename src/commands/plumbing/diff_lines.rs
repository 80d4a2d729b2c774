use crate::areas::session::Session;
use crate::artifacts::diff::line_diff::diff_lines;

impl Session {
    /// Prints every part of the line diff, one sigil-prefixed line per row.
    pub async fn diff_lines(&self, old: &str, new: &str) -> anyhow::Result<()> {
        let old = self.loader().load(old).await?;
        let new = self.loader().load(new).await?;

        let result = diff_lines(&old.content, &new.content);
        write!(self.writer(), "{result}")?;

        Ok(())
    }
}
