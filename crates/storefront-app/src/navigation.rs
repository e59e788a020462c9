//! Screen routes and a stack navigator.

use std::fmt;

/// Screens inside the main stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainRoute {
    /// Product listing.
    Products,
    /// Shopping cart.
    Cart,
}

/// Top-level routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Splash shown while the catalog loads for the first time.
    Startup,
    /// Main stack.
    Main(MainRoute),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Startup => write!(f, "Startup"),
            Route::Main(MainRoute::Products) => write!(f, "Products"),
            Route::Main(MainRoute::Cart) => write!(f, "Cart"),
        }
    }
}

/// Stack of visited routes. Never empty.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    /// Starts at [`Route::Startup`].
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Startup],
        }
    }

    /// Route currently on screen.
    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Startup)
    }

    /// Number of routes on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Push `route`, unless it is already on screen.
    pub fn navigate(&mut self, route: Route) {
        if self.current() == route {
            return;
        }
        log::debug!("Navigate {} → {route}", self.current());
        self.stack.push(route);
    }

    /// Clear the stack and show `route`.
    pub fn reset(&mut self, route: Route) {
        log::debug!("Reset navigation to {route}");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Pop the current route. Returns `false` at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() <= 1 {
            return false;
        }
        self.stack.pop();
        true
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
