//! Navigation collaborator

/// Client route targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Landing page
    Home,
    /// Sign-in surface
    SignIn,
    /// Recipe authoring form
    CreateRecipe,
    /// The signed-in user's recipes
    MyRecipes,
}

impl Route {
    /// Path understood by the host router
    #[inline]
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::SignIn => "/auth",
            Self::CreateRecipe => "/create",
            Self::MyRecipes => "/my-recipes",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// Fire-and-forget navigation
///
/// The core never consumes a return value; whether the transition lands is
/// the host router's concern.
pub trait Navigator: Send + Sync {
    /// Navigate to `route`
    fn go_to(&self, route: Route);
}
