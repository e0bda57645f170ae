//! HTTP route and view contract constants.

/// View-layer contract: logical view names paired with template resources.
pub mod views {
    /// Logical view name for the home (editor) page.
    pub const HOME_VIEW: &str = "/";

    /// Template resource for the home page.
    pub const HOME_TEMPLATE: &str = "index.jsp";

    /// Logical view name for the abstract test page.
    pub const TEST_ABSTRACT_VIEW: &str = "/test/abstract";

    /// Template resource for the abstract test page.
    pub const TEST_ABSTRACT_TEMPLATE: &str = "test-abstract.jsp";
}

/// JSON API routes.
pub mod api {
    /// Cytoscape-ready network for the current document.
    pub const NETWORK_PATH: &str = "/api/network";

    /// Entity collection endpoint.
    /// Append `/{id}` for single-entity operations.
    pub const ENTITIES_PATH: &str = "/api/entities";

    /// Interaction collection endpoint.
    pub const INTERACTIONS_PATH: &str = "/api/interactions";
}
