//! The interactive shop: screens, navigation and cart intents together.

use std::sync::Arc;

use storefront_catalog::CatalogQuery;
use storefront_core::{CartStore, NotificationSink, ProductId};

use crate::controller::{CartController, Outcome};
use crate::navigation::{MainRoute, Navigator, Route};
use crate::repl::ShopCommand;
use crate::views::{CartView, ProductsView};

/// Text shown on the startup route.
pub const STARTUP: &str = "Starting up...";

/// Help text for the shop commands.
pub const HELP: &str = "\
Commands:
  products, p      show the product list
  cart, c          show the cart
  add <id>         add a product to the cart
  remove <id>      remove a product from the cart
  inc <id>         raise the quantity of a cart item
  dec <id>         lower the quantity of a cart item
  refresh, r       fetch the product list again
  back, b          return to the previous screen
  help, h          show this help
  quit, q          leave the shop
";

/// Response to one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Text to print.
    pub text: String,
    /// The session should end.
    pub quit: bool,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Shop session state.
#[derive(Debug)]
pub struct App {
    store: CartStore,
    query: CatalogQuery,
    controller: CartController,
    navigator: Navigator,
}

impl App {
    /// Create a session over a shared cart and catalog query.
    pub fn new(store: CartStore, query: CatalogQuery, notifier: Arc<dyn NotificationSink>) -> Self {
        let controller = CartController::new(store.clone(), notifier);
        Self {
            store,
            query,
            controller,
            navigator: Navigator::new(),
        }
    }

    /// The cart store.
    pub fn store(&self) -> &CartStore {
        &self.store
    }

    /// The catalog query.
    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Route currently on screen.
    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    /// Load the catalog and leave the startup route.
    ///
    /// A failed load still lands on the product screen, which shows the
    /// error and offers `refresh`.
    pub async fn start(&mut self) -> String {
        if let Err(e) = self.query.fetch().await {
            log::warn!("Initial catalog load failed: {e}");
        }
        self.navigator.reset(Route::Main(MainRoute::Products));
        self.render()
    }

    /// Render the current screen.
    pub fn render(&self) -> String {
        match self.navigator.current() {
            Route::Startup => format!("{STARTUP}\n"),
            Route::Main(MainRoute::Products) => {
                ProductsView::build(&self.query.state(), &self.store.snapshot()).to_string()
            }
            Route::Main(MainRoute::Cart) => CartView::build(&self.store.snapshot()).to_string(),
        }
    }

    /// Run one command.
    pub async fn execute(&mut self, command: ShopCommand) -> Reply {
        log::debug!("Command: {command}");
        match command {
            ShopCommand::Products => self.show(MainRoute::Products),
            ShopCommand::Cart => self.show(MainRoute::Cart),
            ShopCommand::Add(id) => self.add(id),
            ShopCommand::Remove(id) => {
                let outcome = self.controller.remove(id);
                self.after(outcome)
            }
            ShopCommand::Increment(id) => {
                let outcome = self.controller.increment(id);
                self.after(outcome)
            }
            ShopCommand::Decrement(id) => {
                let outcome = self.controller.decrement(id);
                self.after(outcome)
            }
            ShopCommand::Refresh => {
                if let Err(e) = self.query.refetch().await {
                    return Reply::show(format!("Refresh failed: {e}\n{}", self.render()));
                }
                Reply::show(self.render())
            }
            ShopCommand::Back => {
                if self.navigator.go_back() {
                    Reply::show(self.render())
                } else {
                    Reply::show("Already at the first screen\n")
                }
            }
            ShopCommand::Help => Reply::show(HELP),
            ShopCommand::Quit => Reply {
                text: "Bye!\n".to_string(),
                quit: true,
            },
        }
    }

    fn show(&mut self, route: MainRoute) -> Reply {
        self.navigator.navigate(Route::Main(route));
        Reply::show(self.render())
    }

    fn add(&mut self, id: ProductId) -> Reply {
        let state = self.query.state();
        let Some(product) = state.products().iter().find(|p| p.id == id) else {
            return Reply::show(format!("No product with id {id}\n"));
        };
        let outcome = self.controller.add(product);
        self.after(outcome)
    }

    fn after(&self, outcome: Outcome) -> Reply {
        if outcome.is_changed() {
            Reply::show(self.render())
        } else {
            Reply::show(format!("{outcome}\n"))
        }
    }
}
