//! Static route table.
//!
//! The table is a literal built into the binary; the router only reads it.
//! Adding a page means adding a `RouteName` variant and a descriptor here.

use std::fmt;
use std::str::FromStr;

/// Symbolic route identifier. These are the stable names used for navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Inventar,
    Login,
    Reservations,
    Profile,
}

impl RouteName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Inventar => "inventar",
            RouteName::Login => "login",
            RouteName::Reservations => "reservations",
            RouteName::Profile => "profile",
        }
    }

    /// Menu label.
    pub fn title(&self) -> &'static str {
        match self {
            RouteName::Inventar => "Inventar",
            RouteName::Login => "Anmelden",
            RouteName::Reservations => "Reservierungen",
            RouteName::Profile => "Profil",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inventar" => Ok(RouteName::Inventar),
            "login" => Ok(RouteName::Login),
            "reservations" => Ok(RouteName::Reservations),
            "profile" => Ok(RouteName::Profile),
            other => Err(format!("unknown route name: {}", other)),
        }
    }
}

/// Maps a static URL path to a page unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: RouteName,
}

impl RouteDescriptor {
    const fn new(path: &'static str, name: RouteName) -> Self {
        Self { path, name }
    }

    /// Path without the leading slash, as `leptos_router::StaticSegment` expects it.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }

    /// Whether the page is shown to anonymous users.
    pub fn is_public(&self) -> bool {
        self.name == RouteName::Login
    }
}

const BASE_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new("/", RouteName::Inventar),
    RouteDescriptor::new("/login", RouteName::Login),
    RouteDescriptor::new("/reservations", RouteName::Reservations),
];

const EXTENDED_ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor::new("/", RouteName::Inventar),
    RouteDescriptor::new("/login", RouteName::Login),
    RouteDescriptor::new("/reservations", RouteName::Reservations),
    RouteDescriptor::new("/profile", RouteName::Profile),
];

/// Which bootstrap the app is started with.
///
/// `Base` has three routes and no modal dialogs; `Extended` adds the profile
/// page and registers the modal stack after the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootstrapVariant {
    Base,
    #[default]
    Extended,
}

impl BootstrapVariant {
    pub fn routes(&self) -> &'static [RouteDescriptor] {
        match self {
            BootstrapVariant::Base => BASE_ROUTES,
            BootstrapVariant::Extended => EXTENDED_ROUTES,
        }
    }

    pub fn registers_modal(&self) -> bool {
        matches!(self, BootstrapVariant::Extended)
    }

    pub fn find_by_name(&self, name: RouteName) -> Option<&'static RouteDescriptor> {
        self.routes().iter().find(|r| r.name == name)
    }

    /// Exact match; paths are literals so there is no prefix matching.
    pub fn find_by_path(&self, path: &str) -> Option<&'static RouteDescriptor> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        self.routes().iter().find(|r| r.path == path)
    }

    pub fn contains(&self, name: RouteName) -> bool {
        self.find_by_name(name).is_some()
    }
}
