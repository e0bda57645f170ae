//! Axum server bootstrap - the composition root.
//!
//! The only place where the web adapter's pieces are wired together: the
//! document store, the template resolver, and the server itself.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;

use factoid_core::DocumentStore;

use crate::views::TemplateResolver;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory view templates are loaded from.
    pub templates_dir: PathBuf,
    /// Optional directory of static assets (scripts, styles).
    pub static_dir: Option<PathBuf>,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config with default paths.
    pub fn with_defaults() -> Self {
        Self {
            port: 8080,
            templates_dir: PathBuf::from("templates"),
            static_dir: None,
            cors: CorsConfig::default(),
        }
    }

    /// Set the templates directory.
    #[must_use]
    pub fn with_templates_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.templates_dir = path.into();
        self
    }

    /// Set the static asset directory.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::AllowOrigins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds the services shared by request handlers.
pub struct AxumContext {
    /// The shared working document.
    pub store: Arc<DocumentStore>,
    /// View template resolution.
    pub views: TemplateResolver,
}

/// Assemble the application context from configuration.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        templates_dir = %config.templates_dir.display(),
        static_dir = ?config.static_dir,
        "factoid bootstrap resolved paths"
    );

    if !config.templates_dir.is_dir() {
        tracing::warn!(
            templates_dir = %config.templates_dir.display(),
            "templates directory does not exist; view routes will fail to render"
        );
    }

    Ok(AxumContext {
        store: Arc::new(DocumentStore::new()),
        views: TemplateResolver::new(&config.templates_dir),
    })
}

/// Run the web server with an already-assembled context.
pub async fn serve(config: ServerConfig, ctx: AxumContext) -> Result<()> {
    use tokio::net::TcpListener;

    let app = if let Some(ref static_dir) = config.static_dir {
        tracing::info!("serving static assets from: {}", static_dir.display());
        crate::routes::create_router_with_assets(ctx, static_dir, &config.cors)
    } else {
        crate::routes::create_router(ctx, &config.cors)
    };

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("factoid web server listening on http://{addr}");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bootstrap and run the web server.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    serve(config, ctx).await
}
