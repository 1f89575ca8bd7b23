//! Hash Router
//!
//! Minimal hash-based routing so every view (including the public share
//! link) has a real URL without any server-side route configuration.

use leptos::prelude::*;

/// Every addressable view in the app.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Signup,
    Dashboard,
    /// Workspace detail: video grid, members, upload.
    Workspace { wsid: String },
    /// Owner/editor review view, scoped under its workspace.
    VideoEditor { wsid: String, vid: String },
    /// Authenticated member review view (no privacy controls).
    VideoMember { vid: String },
    /// Public share review view. Token-free.
    VideoShared { vid: String },
    NotFound,
}

impl Route {
    /// Parse a `window.location.hash` value (with or without the `#`).
    pub fn parse(hash: &str) -> Route {
        let path = hash.trim_start_matches('#');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["workspace", wsid] => Route::Workspace { wsid: (*wsid).to_string() },
            ["workspace", wsid, "video", vid] => Route::VideoEditor {
                wsid: (*wsid).to_string(),
                vid: (*vid).to_string(),
            },
            ["review", vid] => Route::VideoMember { vid: (*vid).to_string() },
            ["video", vid] => Route::VideoShared { vid: (*vid).to_string() },
            _ => Route::NotFound,
        }
    }

    /// The hash fragment for this route, leading `#` included.
    pub fn to_hash(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Signup => "#/signup".to_string(),
            Route::Dashboard => "#/dashboard".to_string(),
            Route::Workspace { wsid } => format!("#/workspace/{}", wsid),
            Route::VideoEditor { wsid, vid } => format!("#/workspace/{}/video/{}", wsid, vid),
            Route::VideoMember { vid } => format!("#/review/{}", vid),
            Route::VideoShared { vid } => format!("#/video/{}", vid),
            Route::NotFound => "#/".to_string(),
        }
    }
}

/// Navigate by updating the location hash; the `hashchange` listener in
/// `App` keeps the route signal in sync.
pub fn navigate(route: &Route) {
    let _ = window().location().set_hash(&route.to_hash());
}

/// The route currently in the address bar.
pub fn current_route() -> Route {
    let hash = window().location().hash().unwrap_or_default();
    Route::parse(&hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_routes() {
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#/login"), Route::Login);
        assert_eq!(Route::parse("#/dashboard"), Route::Dashboard);
        assert_eq!(
            Route::parse("#/workspace/ws1"),
            Route::Workspace { wsid: "ws1".into() }
        );
        assert_eq!(
            Route::parse("#/workspace/ws1/video/v2"),
            Route::VideoEditor { wsid: "ws1".into(), vid: "v2".into() }
        );
        assert_eq!(Route::parse("#/review/v2"), Route::VideoMember { vid: "v2".into() });
        assert_eq!(Route::parse("#/video/v2"), Route::VideoShared { vid: "v2".into() });
    }

    #[test]
    fn unknown_routes_fall_through() {
        assert_eq!(Route::parse("#/bogus/route"), Route::NotFound);
        assert_eq!(Route::parse("#/workspace"), Route::NotFound);
    }

    #[test]
    fn hash_round_trips() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Signup,
            Route::Dashboard,
            Route::Workspace { wsid: "a".into() },
            Route::VideoEditor { wsid: "a".into(), vid: "b".into() },
            Route::VideoMember { vid: "b".into() },
            Route::VideoShared { vid: "b".into() },
        ] {
            assert_eq!(Route::parse(&route.to_hash()), route);
        }
    }
}
