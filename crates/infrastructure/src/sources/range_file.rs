use async_trait::async_trait;
use blockscope_application::ports::RangeSource;
use blockscope_domain::{parse_range_text, AddressRange, DomainError, OwnerSource};
use std::path::{Path, PathBuf};
use tracing::{debug, instrument, warn};

/// Reads one CIDR-per-line text file per owner.
pub struct FileRangeSource {
    base_dir: Option<PathBuf>,
}

impl FileRangeSource {
    pub fn new() -> Self {
        Self { base_dir: None }
    }

    /// Resolve relative owner paths against `dir` (usually the directory of
    /// the configuration file).
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl Default for FileRangeSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RangeSource for FileRangeSource {
    #[instrument(skip(self), fields(path = %owner.path))]
    async fn load(&self, owner: &OwnerSource) -> Result<Vec<AddressRange>, DomainError> {
        let path = self.resolve(&owner.path);

        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::SourceUnavailable(format!("{}: {}", path.display(), e))
        })?;

        let parsed = parse_range_text(&text);

        for rejected in &parsed.rejected {
            warn!(
                path = %path.display(),
                line = rejected.line_no,
                content = %rejected.content,
                reason = %rejected.reason,
                "Skipping malformed range line"
            );
        }

        debug!(
            ranges = parsed.ranges.len(),
            rejected = parsed.rejected.len(),
            "Range file loaded"
        );

        Ok(parsed.ranges)
    }
}
