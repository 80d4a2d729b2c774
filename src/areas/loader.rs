use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};

/// Documents compared at most at once.
pub const MAX_DOCUMENTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LoadedDocument {
    pub label: String,
    pub content: String,
}

/// Reads local files into document content.
#[derive(Debug, Clone, Default, new)]
pub struct DocumentLoader {
    base: Option<PathBuf>,
}

impl DocumentLoader {
    /// Strips the double quotes that copied paths often carry.
    pub fn clean_location(location: &str) -> &str {
        let location = location.trim();
        let location = location.strip_prefix('"').unwrap_or(location);
        location.strip_suffix('"').unwrap_or(location)
    }

    fn resolve(&self, location: &str) -> PathBuf {
        let path = Path::new(Self::clean_location(location));
        match &self.base {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }

    pub async fn load(&self, location: &str) -> anyhow::Result<LoadedDocument> {
        let path = self.resolve(location);

        let metadata = tokio::fs::metadata(&path)
            .await
            .with_context(|| format!("cannot access {}", path.display()))?;
        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("cannot read {} as text", path.display()))?;

        Ok(LoadedDocument::new(
            Self::clean_location(location).to_string(),
            content,
        ))
    }

    /// Loads the first [`MAX_DOCUMENTS`] locations, in order.
    pub async fn load_all(&self, locations: &[String]) -> anyhow::Result<Vec<LoadedDocument>> {
        if locations.len() > MAX_DOCUMENTS {
            log::warn!(
                "only the first {MAX_DOCUMENTS} of {} documents are compared",
                locations.len()
            );
        }

        let mut documents = Vec::with_capacity(MAX_DOCUMENTS);
        for location in locations.iter().take(MAX_DOCUMENTS) {
            documents.push(self.load(location).await?);
        }
        Ok(documents)
    }
}
