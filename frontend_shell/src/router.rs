// frontend_shell/src/router.rs
use crate::components::nav_link::NavLink;
use crate::pages::about::About;
use crate::pages::home::Home;
use gloo::console::warn;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Eq, Clone, Copy, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
}

/// Ordered list of routes. A path resolves to the first entry whose
/// pattern equals it exactly; later entries never shadow earlier ones.
#[derive(Debug, Clone, Copy)]
pub struct RouteTable {
    entries: &'static [Route],
}

/// "/about" is listed before "/" so it is checked first.
pub const ROUTES: RouteTable = RouteTable::new(&[Route::About, Route::Home]);

impl RouteTable {
    pub const fn new(entries: &'static [Route]) -> Self {
        Self { entries }
    }

    pub fn resolve(&self, path: &str) -> Option<Route> {
        self.entries
            .iter()
            .copied()
            .find(|route| route.to_path() == path)
    }

    pub fn patterns(&self) -> impl Iterator<Item = String> + '_ {
        self.entries.iter().map(Route::to_path)
    }

    pub fn has_distinct_patterns(&self) -> bool {
        let patterns: Vec<String> = self.patterns().collect();
        patterns
            .iter()
            .enumerate()
            .all(|(i, pattern)| !patterns[..i].contains(pattern))
    }
}

/// Navigation bar plus whichever page matches the current location.
/// Must be mounted under a yew-router `Router`; without one nothing matches.
#[function_component(Shell)]
pub fn shell() -> Html {
    let path = use_location()
        .map(|location| location.path().to_owned())
        .unwrap_or_default();

    {
        use_effect_with(path.clone(), move |path| {
            if ROUTES.resolve(path).is_none() {
                warn!(format!("no route matches {path:?}"));
            }
            || ()
        });
    }

    html! {
        <div class="shell">
            <nav class="nav">
                <NavLink to={Route::Home} test_id="link-home">{ "Home" }</NavLink>
                <NavLink to={Route::About}>{ "AboutApp" }</NavLink>
            </nav>
            <main>
                { for ROUTES.resolve(&path).map(switch) }
            </main>
        </div>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_exact_paths() {
        assert_eq!(ROUTES.resolve("/"), Some(Route::Home));
        assert_eq!(ROUTES.resolve("/about"), Some(Route::About));
    }

    #[test]
    fn unknown_paths_resolve_to_nothing() {
        for path in ["/nope", "/about/", "/About", "/about/team", ""] {
            assert_eq!(ROUTES.resolve(path), None, "{path}");
        }
    }

    #[test]
    fn about_is_checked_before_home() {
        let patterns: Vec<String> = ROUTES.patterns().collect();
        assert_eq!(patterns, vec!["/about".to_owned(), "/".to_owned()]);
        assert!(ROUTES.has_distinct_patterns());
    }

    #[test]
    fn first_declared_entry_wins() {
        let table = RouteTable::new(&[Route::Home, Route::About, Route::Home]);
        assert!(!table.has_distinct_patterns());
        assert_eq!(table.resolve("/"), Some(Route::Home));
        assert_eq!(table.resolve("/about"), Some(Route::About));
    }
}
