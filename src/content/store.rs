//! In-memory document store backing the route table.

use std::collections::HashMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::ContentConfig;
use crate::routing::{ResourceId, RouteTable};

/// Error raised while loading content at startup.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A registered route has no backing document and strict mode is on.
    #[error("missing document for resource {resource} (expected {path})")]
    MissingDocument { resource: ResourceId, path: PathBuf },

    #[error("failed to read document {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable resource id → HTML document mapping.
///
/// Loaded once at startup for every resource the route table names, so a
/// successful route lookup always has a document to serve.
#[derive(Debug)]
pub struct ContentStore {
    documents: HashMap<ResourceId, String>,
}

impl ContentStore {
    /// Load documents for every route in the table.
    ///
    /// Each resource is read from `<dir>/<ResourceId>.html`. A missing
    /// document aborts startup in strict mode; otherwise a stub page is
    /// pre-rendered in its place.
    pub fn load(config: &ContentConfig, table: &RouteTable) -> Result<Self, ContentError> {
        let mut documents = HashMap::with_capacity(table.len());
        let mut stubbed = 0usize;

        for (_, resource) in table.iter() {
            if documents.contains_key(resource) {
                continue;
            }
            let document = match &config.dir {
                Some(dir) => {
                    let path = dir.join(format!("{}.html", resource));
                    match std::fs::read_to_string(&path) {
                        Ok(html) => html,
                        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                            if config.strict {
                                return Err(ContentError::MissingDocument {
                                    resource: resource.clone(),
                                    path,
                                });
                            }
                            tracing::warn!(
                                resource = %resource,
                                path = %path.display(),
                                "Document missing, serving stub page"
                            );
                            stubbed += 1;
                            stub_page(resource)
                        }
                        Err(source) => return Err(ContentError::Io { path, source }),
                    }
                }
                None => {
                    if config.strict {
                        return Err(ContentError::MissingDocument {
                            resource: resource.clone(),
                            path: PathBuf::from(format!("{}.html", resource)),
                        });
                    }
                    stubbed += 1;
                    stub_page(resource)
                }
            };
            documents.insert(resource.clone(), document);
        }

        tracing::info!(
            document_count = documents.len(),
            stub_count = stubbed,
            "Content store loaded"
        );
        Ok(Self { documents })
    }

    /// Build a store from already-rendered documents.
    pub fn from_documents(documents: HashMap<ResourceId, String>) -> Self {
        Self { documents }
    }

    /// Fetch the document for a resource.
    #[must_use]
    pub fn render(&self, resource: &ResourceId) -> Option<&str> {
        self.documents.get(resource).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

/// Minimal placeholder page for a resource with no published document.
fn stub_page(resource: &ResourceId) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><title>{id}</title></head>\n\
         <body>\n<h1>{id}</h1>\n<p>This article has not been published yet.</p>\n</body>\n</html>\n",
        id = resource
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteTableBuilder;

    fn table_with(path: &str, resource: &str) -> RouteTable {
        let mut builder = RouteTableBuilder::new();
        builder.register(path, resource).unwrap();
        builder.build()
    }

    #[test]
    fn test_load_without_dir_pre_renders_stub_pages() {
        let table = table_with("one-line-a-day", "OneLineADay");
        let store = ContentStore::load(&ContentConfig::default(), &table).unwrap();

        let html = store.render(&ResourceId::from("OneLineADay")).unwrap();
        assert!(html.contains("<h1>OneLineADay</h1>"));
    }

    #[test]
    fn test_strict_mode_fails_on_missing_document() {
        let table = table_with("one-line-a-day", "OneLineADay");
        let dir = tempfile::tempdir().unwrap();
        let config = ContentConfig {
            dir: Some(dir.path().to_path_buf()),
            strict: true,
        };

        let err = ContentStore::load(&config, &table).unwrap_err();
        assert!(matches!(err, ContentError::MissingDocument { .. }));
    }

    #[test]
    fn test_documents_are_read_from_dir() {
        let table = table_with("one-line-a-day", "OneLineADay");
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("OneLineADay.html"), "<p>journal</p>").unwrap();
        let config = ContentConfig {
            dir: Some(dir.path().to_path_buf()),
            strict: true,
        };

        let store = ContentStore::load(&config, &table).unwrap();
        assert_eq!(
            store.render(&ResourceId::from("OneLineADay")),
            Some("<p>journal</p>")
        );
    }

    #[test]
    fn test_unknown_resource_renders_nothing() {
        let store = ContentStore::from_documents(HashMap::new());
        assert_eq!(store.render(&ResourceId::from("Ghost")), None);
    }
}
