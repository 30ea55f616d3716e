//! Static route table for the assets UI.

/// Views a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Assets,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub view: View,
}

/// Exact-match router. No dynamic segments, guards or nesting.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<Route>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            routes: vec![Route {
                path: "/",
                name: "assets",
                view: View::Assets,
            }],
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolves a location, ignoring its query string and fragment.
    pub fn resolve(&self, location: &str) -> Option<&Route> {
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = if path.is_empty() { "/" } else { path };
        self.routes.iter().find(|r| r.path == path)
    }

    pub fn by_name(&self, name: &str) -> Option<&Route> {
        self.routes.iter().find(|r| r.name == name)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_renders_assets_view() {
        let router = Router::new();
        let route = router.resolve("/").unwrap();
        assert_eq!(route.name, "assets");
        assert_eq!(route.view, View::Assets);
        assert_eq!(router.routes().len(), 1);
    }

    #[test]
    fn query_and_fragment_are_ignored() {
        let router = Router::new();
        assert_eq!(router.resolve("/?page=2").unwrap().view, View::Assets);
        assert_eq!(router.resolve("/#top").unwrap().view, View::Assets);
        assert_eq!(router.resolve("").unwrap().view, View::Assets);
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        let router = Router::new();
        assert!(router.resolve("/assets").is_none());
        assert!(router.resolve("/1").is_none());
        assert!(router.by_name("settings").is_none());
        assert_eq!(router.by_name("assets").unwrap().path, "/");
    }
}
