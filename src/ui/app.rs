use crate::api::{AuthStrategy, Credentials, Product};
use crate::catalog::{live_filter, CatalogState, FetchOptions};
use crate::notify::ToastQueue;
use crate::session::{Session, SessionSnapshot};
use crate::ui::mvi::Reducer;
use crate::ui::nav::{NavIntent, NavReducer, NavState, Route};
use crate::ui::search::{SearchBoxState, SearchIntent, SearchReducer};
use crate::ui::theme::Theme;
use crate::ui::worker::{UiCommand, UiCommandSender};
use std::sync::Arc;

/// Which screen the navigation stack currently shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Login,
    Products,
    Details,
}

/// Input focus on the product list screen.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    List,
    Search,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginField {
    Identity,
    Password,
}

/// Editable state of the login screen.
#[derive(Clone, Debug, PartialEq)]
pub struct LoginForm {
    pub identity: String,
    pub password: String,
    pub field: LoginField,
}

impl LoginForm {
    fn prefilled(strategy: &AuthStrategy) -> Self {
        let demo = strategy.prefill();
        Self {
            identity: demo.identity,
            password: demo.password,
            field: LoginField::Identity,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    theme: Theme,
    /// Navigation stack (MVI pattern).
    nav: NavState,
    /// Search box text (MVI pattern).
    search_box: SearchBoxState,
    login_form: LoginForm,
    /// Selected row in the displayed (filtered) product list.
    selection: usize,
    session: Session,
    toasts: ToastQueue,
    commands: Option<UiCommandSender>,
    /// Provider closure reading the catalog state the controller owns.
    catalog_provider: Option<Arc<dyn Fn() -> CatalogState + Send + Sync>>,
}

impl App {
    pub fn new(session: Session, toasts: ToastQueue) -> Self {
        let login_form = LoginForm::prefilled(session.strategy());
        Self {
            should_quit: false,
            focus: Focus::List,
            theme: Theme::default(),
            nav: NavState::default(),
            search_box: SearchBoxState::default(),
            login_form,
            selection: 0,
            session,
            toasts,
            commands: None,
            catalog_provider: None,
        }
    }

    /// Wire the command channel to the async worker (called from main).
    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    /// Set the catalog provider closure (called from main).
    pub fn set_catalog_provider(
        &mut self,
        provider: Arc<dyn Fn() -> CatalogState + Send + Sync>,
    ) {
        self.catalog_provider = Some(provider);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    // ========================================================================
    // Snapshots the render pass reads
    // ========================================================================

    /// Clone of the catalog state at this instant.
    pub fn catalog(&self) -> CatalogState {
        self.catalog_provider
            .as_ref()
            .map(|provider| provider())
            .unwrap_or_default()
    }

    pub fn session_view(&self) -> SessionSnapshot {
        self.session.snapshot()
    }

    pub fn strategy(&self) -> &AuthStrategy {
        self.session.strategy()
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn screen(&self) -> Screen {
        match self.nav.current() {
            Route::Login => Screen::Login,
            Route::Products => Screen::Products,
            Route::Details(_) => Screen::Details,
        }
    }

    /// The product on the detail screen, when that is where we are.
    pub fn details_product(&self) -> Option<&Product> {
        match self.nav.current() {
            Route::Details(product) => Some(product),
            _ => None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn search_text(&self) -> &str {
        &self.search_box.text
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login_form
    }

    pub fn toast(&self) -> Option<String> {
        self.toasts.active()
    }

    pub fn has_alert(&self) -> bool {
        self.session_view().alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.session.dismiss_alert();
    }

    // ========================================================================
    // Product list
    // ========================================================================

    /// Move the selection through the displayed rows. Landing on the last
    /// one asks for the next page.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.displayed_len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let max_index = len - 1;
        let current = self.selection.min(max_index);
        let next = if direction.is_negative() {
            current.saturating_sub(direction.unsigned_abs() as usize)
        } else {
            (current + direction as usize).min(max_index)
        };
        self.selection = next;

        if next == max_index {
            self.maybe_load_more();
        }
    }

    pub fn select_first(&mut self) {
        self.selection = 0;
    }

    pub fn select_last(&mut self) {
        let len = self.displayed_len();
        self.selection = len.saturating_sub(1);
        if len > 0 {
            self.maybe_load_more();
        }
    }

    /// Push the detail screen for the selected row.
    pub fn open_selected(&mut self) {
        let catalog = self.catalog();
        let displayed = live_filter(&catalog.items, &self.search_box.text);
        let Some(product) = displayed.get(self.selection) else {
            return;
        };
        let product = (*product).clone();
        self.dispatch_nav(NavIntent::PushDetails { product });
    }

    pub fn pop_details(&mut self) {
        self.dispatch_nav(NavIntent::Pop);
    }

    /// Reload the unfiltered first page. The search box keeps its text,
    /// so the live filter still applies to what comes back.
    pub fn refresh(&mut self) {
        self.selection = 0;
        self.send_command(UiCommand::Fetch(FetchOptions {
            reset: true,
            search: String::new(),
        }));
    }

    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
    }

    pub fn logout(&mut self) {
        self.send_command(UiCommand::Logout);
    }

    fn maybe_load_more(&mut self) {
        let catalog = self.catalog();
        if catalog.loading || !catalog.can_load_more() {
            return;
        }
        // The live text, not the last submitted query: filtering down a
        // stale listing and paging onward flows into a server search.
        let search = self.search_box.text.clone();
        self.send_command(UiCommand::Fetch(FetchOptions {
            reset: false,
            search,
        }));
    }

    fn displayed_len(&self) -> usize {
        let catalog = self.catalog();
        live_filter(&catalog.items, &self.search_box.text).len()
    }

    fn clamp_selection(&mut self) {
        let len = self.displayed_len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }

    // ========================================================================
    // Search box
    // ========================================================================

    pub fn focus_search(&mut self) {
        self.focus = Focus::Search;
    }

    /// Leave the search box without touching its text.
    pub fn leave_search(&mut self) {
        self.focus = Focus::List;
    }

    pub fn search_input(&mut self, ch: char) {
        self.dispatch_search(SearchIntent::Input { ch });
        self.clamp_selection();
    }

    pub fn search_backspace(&mut self) {
        self.dispatch_search(SearchIntent::Backspace);
        self.clamp_selection();
    }

    pub fn clear_search(&mut self) {
        self.dispatch_search(SearchIntent::Clear);
        self.clamp_selection();
    }

    /// Submit the typed term as the server-side query and hand focus back
    /// to the list.
    pub fn submit_search(&mut self) {
        self.focus = Focus::List;
        self.selection = 0;
        let search = self.search_box.text.clone();
        self.send_command(UiCommand::Fetch(FetchOptions {
            reset: true,
            search,
        }));
    }

    // ========================================================================
    // Login form
    // ========================================================================

    pub fn login_input(&mut self, ch: char) {
        match self.login_form.field {
            LoginField::Identity => self.login_form.identity.push(ch),
            LoginField::Password => self.login_form.password.push(ch),
        }
    }

    pub fn login_backspace(&mut self) {
        match self.login_form.field {
            LoginField::Identity => {
                self.login_form.identity.pop();
            }
            LoginField::Password => {
                self.login_form.password.pop();
            }
        }
    }

    pub fn toggle_login_field(&mut self) {
        self.login_form.field = match self.login_form.field {
            LoginField::Identity => LoginField::Password,
            LoginField::Password => LoginField::Identity,
        };
    }

    /// Send the form off. Ignored while a login is already in flight.
    pub fn submit_login(&mut self) {
        if self.session_view().loading {
            return;
        }
        let credentials = Credentials {
            identity: self.login_form.identity.clone(),
            password: self.login_form.password.clone(),
        };
        self.send_command(UiCommand::Login(credentials));
    }

    // ========================================================================
    // Event reactions
    // ========================================================================

    pub fn on_tick(&mut self) {}

    pub fn on_paste(&mut self, text: &str) {
        if self.has_alert() {
            return;
        }
        match self.screen() {
            Screen::Login => {
                for ch in text.chars().filter(|ch| !ch.is_control()) {
                    self.login_input(ch);
                }
            }
            Screen::Products if self.focus == Focus::Search => {
                for ch in text.chars().filter(|ch| !ch.is_control()) {
                    self.search_input(ch);
                }
            }
            _ => {}
        }
    }

    /// A fetch completed; the row count may have changed under the cursor.
    pub fn on_catalog_changed(&mut self) {
        self.clamp_selection();
    }

    /// A login or logout completed; line the stack up with the session.
    pub fn on_session_changed(&mut self) {
        let session = self.session_view();
        match (session.authenticated, self.screen()) {
            (true, Screen::Login) => self.enter_products(),
            (false, screen) if screen != Screen::Login => {
                self.dispatch_nav(NavIntent::ResetToLogin);
                self.login_form = LoginForm::prefilled(self.session.strategy());
                self.focus = Focus::List;
            }
            _ => {}
        }
    }

    /// Fresh entry to the product list: blank search, cursor at the top,
    /// and the opening fetch of the unfiltered first page.
    fn enter_products(&mut self) {
        self.dispatch_nav(NavIntent::ResetToProducts);
        self.clear_search();
        self.focus = Focus::List;
        self.selection = 0;
        self.send_command(UiCommand::Fetch(FetchOptions {
            reset: true,
            search: String::new(),
        }));
    }

    fn dispatch_nav(&mut self, intent: NavIntent) {
        dispatch_mvi!(self, nav, NavReducer, intent);
    }

    fn dispatch_search(&mut self, intent: SearchIntent) {
        dispatch_mvi!(self, search_box, SearchReducer, intent);
    }

    fn send_command(&mut self, command: UiCommand) {
        let Some(sender) = &self.commands else {
            return;
        };
        if let Err(err) = sender.try_send(command) {
            tracing::warn!(error = %err, "dropping ui command");
        }
    }
}
