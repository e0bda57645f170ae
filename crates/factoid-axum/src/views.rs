//! View descriptors and template resolution.
//!
//! A route handler that renders a page produces a [`ViewDescriptor`]: the
//! pairing of a logical view name with a template resource path. The
//! [`TemplateResolver`] turns a descriptor into markup by loading the
//! template from the configured templates directory.

use std::path::PathBuf;

use axum::response::Html;

use crate::error::HttpError;

/// The pairing of a logical view name and a template resource path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDescriptor {
    name: String,
    template: String,
}

impl ViewDescriptor {
    /// Create a descriptor pairing `name` with `template`.
    pub fn create(name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template: template.into(),
        }
    }

    /// The logical view name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The template resource path, relative to the templates directory.
    pub fn template(&self) -> &str {
        &self.template
    }
}

/// Resolves view descriptors against a templates directory.
#[derive(Debug, Clone)]
pub struct TemplateResolver {
    templates_dir: PathBuf,
}

impl TemplateResolver {
    /// Create a resolver rooted at `templates_dir`.
    pub fn new(templates_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
        }
    }

    /// The directory templates are loaded from.
    pub fn templates_dir(&self) -> &std::path::Path {
        &self.templates_dir
    }

    /// Render a descriptor by loading its template file.
    ///
    /// The template is served as markup as-is. A missing or unreadable
    /// template is an internal error; the descriptor contract itself cannot
    /// fail.
    pub async fn render(&self, view: &ViewDescriptor) -> Result<Html<String>, HttpError> {
        let path = self.templates_dir.join(view.template());
        let markup = tokio::fs::read_to_string(&path).await.map_err(|e| {
            HttpError::Internal(format!(
                "template {} for view {}: {e}",
                path.display(),
                view.name()
            ))
        })?;

        tracing::debug!(view = view.name(), template = view.template(), "rendered view");
        Ok(Html(markup))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_pairs_name_with_template() {
        let view = ViewDescriptor::create("/test/abstract", "test-abstract.jsp");
        assert_eq!(view.name(), "/test/abstract");
        assert_eq!(view.template(), "test-abstract.jsp");
    }

    #[test]
    fn descriptor_creation_is_deterministic() {
        let a = ViewDescriptor::create("/test/abstract", "test-abstract.jsp");
        let b = ViewDescriptor::create("/test/abstract", "test-abstract.jsp");
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn render_loads_template_from_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::write(dir.path().join("page.jsp"), "<html>page</html>").unwrap();

        let resolver = TemplateResolver::new(dir.path());
        let Html(markup) = resolver
            .render(&ViewDescriptor::create("/page", "page.jsp"))
            .await
            .unwrap();

        assert_eq!(markup, "<html>page</html>");
    }

    #[tokio::test]
    async fn render_missing_template_is_internal_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let resolver = TemplateResolver::new(dir.path());

        let err = resolver
            .render(&ViewDescriptor::create("/page", "missing.jsp"))
            .await
            .unwrap_err();

        assert!(matches!(err, HttpError::Internal(_)));
    }
}
