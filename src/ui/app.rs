use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::data::{DataCommand, DataEvent};
use crate::session::Session;
use crate::ui::books::{BooksIntent, BooksReducer, BooksState, CatalogPhase};
use crate::ui::home::{
    DashboardPhase, HomeIntent, HomeReducer, HomeState, QuickActionKind, QUICK_ACTIONS,
};
use crate::ui::login::{LoginIntent, LoginReducer, LoginFormState};
use crate::ui::mvi::Reducer;
use crate::ui::register::{RegisterIntent, RegisterReducer, RegisterFormState};

/// Top-level navigation target, the moral equivalent of a route stack.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Screen {
    #[default]
    Login,
    Register,
    Tabs,
}

/// Active tab once signed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Tab {
    #[default]
    Home,
    Books,
}

/// A dismissible message box, standing in for the mobile alert dialogs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

pub type DataCommandSender = mpsc::Sender<DataCommand>;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Aggregate of all screen states plus the resources that are not state:
/// the session indicator, the worker channel, and navigation.
///
/// Screens transition exclusively through their reducers; `App` decides
/// which intents to dispatch and which commands to send afterwards.
pub struct App {
    should_quit: bool,
    screen: Screen,
    tab: Tab,
    session: Option<Session>,
    login_form: LoginFormState,
    register_form: RegisterFormState,
    books: BooksState,
    home: HomeState,
    notice: Option<Notice>,
    data_tx: Option<DataCommandSender>,
    next_generation: u64,
    tick_count: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            screen: Screen::Login,
            tab: Tab::Home,
            session: None,
            login_form: LoginFormState::default(),
            register_form: RegisterFormState::default(),
            books: BooksState::default(),
            home: HomeState::default(),
            notice: None,
            data_tx: None,
            next_generation: 0,
            tick_count: 0,
        }
    }

    /// Wire up the channel into the simulated backend worker.
    pub fn attach_worker(&mut self, sender: DataCommandSender) {
        self.data_tx = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn login_form(&self) -> &LoginFormState {
        &self.login_form
    }

    pub fn register_form(&self) -> &RegisterFormState {
        &self.register_form
    }

    pub fn books(&self) -> &BooksState {
        &self.books
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn on_tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Animation frame for "Loading..." style indicators.
    pub fn loading_dots(&self) -> &'static str {
        match self.tick_count % 4 {
            0 => "",
            1 => ".",
            2 => "..",
            _ => "...",
        }
    }

    // -- intent dispatch ---------------------------------------------------

    pub fn dispatch_login(&mut self, intent: LoginIntent) {
        dispatch_mvi!(self, login_form, LoginReducer, intent);
    }

    pub fn dispatch_register(&mut self, intent: RegisterIntent) {
        dispatch_mvi!(self, register_form, RegisterReducer, intent);
    }

    pub fn dispatch_books(&mut self, intent: BooksIntent) {
        dispatch_mvi!(self, books, BooksReducer, intent);
    }

    pub fn dispatch_home(&mut self, intent: HomeIntent) {
        dispatch_mvi!(self, home, HomeReducer, intent);
    }

    // -- navigation --------------------------------------------------------

    pub fn show_register(&mut self) {
        self.screen = Screen::Register;
    }

    pub fn show_login(&mut self) {
        self.screen = Screen::Login;
    }

    /// Switch tabs, kicking off the tab's first load when needed.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        match tab {
            Tab::Home => {
                if self.home.phase == DashboardPhase::Idle {
                    self.request_dashboard();
                }
            }
            Tab::Books => {
                if self.books.phase == CatalogPhase::Idle {
                    self.request_catalog();
                }
            }
        }
    }

    pub fn toggle_tab(&mut self) {
        let next = match self.tab {
            Tab::Home => Tab::Books,
            Tab::Books => Tab::Home,
        };
        self.select_tab(next);
    }

    // -- form submission ---------------------------------------------------

    /// Validate the sign-in form and, if clean, hand it to the backend.
    pub fn submit_login(&mut self) {
        self.dispatch_login(LoginIntent::Submit);
        if self.login_form.submitting {
            let email = self.login_form.fields.email.clone();
            self.send_command(DataCommand::SubmitLogin { email });
        }
    }

    /// Validate the registration form and, if clean, hand it to the backend.
    pub fn submit_registration(&mut self) {
        self.dispatch_register(RegisterIntent::Submit);
        if self.register_form.submitting {
            let email = self.register_form.fields.email.clone();
            self.send_command(DataCommand::SubmitRegistration { email });
        }
    }

    // -- data loads --------------------------------------------------------

    /// Request a fresh catalog snapshot under a new generation.
    pub fn request_catalog(&mut self) {
        self.next_generation += 1;
        let generation = self.next_generation;
        self.dispatch_books(BooksIntent::LoadStarted { generation });
        self.send_command(DataCommand::LoadCatalog { generation });
    }

    /// Manual refresh: same as the first load, the catalog is replaced
    /// wholesale.
    pub fn refresh_catalog(&mut self) {
        if !self.books.is_loading() {
            self.request_catalog();
        }
    }

    pub fn request_dashboard(&mut self) {
        self.dispatch_home(HomeIntent::LoadStarted);
        self.send_command(DataCommand::LoadDashboard);
    }

    // -- backend replies ---------------------------------------------------

    pub fn on_data(&mut self, event: DataEvent) {
        match event {
            DataEvent::Catalog { generation, result } => {
                let result = result.map_err(|err| err.to_string());
                if let Err(message) = &result {
                    self.set_notice("Load failed", message.clone());
                }
                self.dispatch_books(BooksIntent::CatalogLoaded { generation, result });
            }
            DataEvent::Dashboard { featured, stats } => {
                self.dispatch_home(HomeIntent::DashboardLoaded { featured, stats });
            }
            DataEvent::LoginAccepted { email } => {
                let session = Session::for_email(&email);
                info!(user = %session.display_name, "signed in");
                self.session = Some(session);
                self.dispatch_login(LoginIntent::Reset);
                self.screen = Screen::Tabs;
                self.select_tab(Tab::Home);
                self.set_notice("Success", "Login successful!");
            }
            DataEvent::RegistrationAccepted => {
                self.dispatch_register(RegisterIntent::Reset);
                self.screen = Screen::Login;
                self.set_notice("Success", "Account created successfully! Please sign in.");
            }
        }
    }

    // -- session -----------------------------------------------------------

    /// Drop the session indicator and return to the entry screen. Screen
    /// states reset so the next sign-in starts from scratch.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!(user = %session.display_name, "signed out");
        }
        self.books = BooksState::default();
        self.home = HomeState::default();
        self.screen = Screen::Login;
        self.tab = Tab::Home;
    }

    // -- notices -----------------------------------------------------------

    pub fn set_notice(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.into(),
            body: body.into(),
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // -- screen actions ----------------------------------------------------

    /// Confirmation for the selected book; there is no cart behind it.
    pub fn add_to_cart(&mut self) {
        let Some(title) = self.books.selected_book().map(|b| b.title.clone()) else {
            return;
        };
        let body = format!("\"{title}\" has been added to your cart!");
        self.set_notice("Added to Cart", body);
    }

    pub fn activate_quick_action(&mut self) {
        let action = QUICK_ACTIONS[self.home.action_focus % QUICK_ACTIONS.len()];
        match action.kind {
            QuickActionKind::BrowseBooks => self.select_tab(Tab::Books),
            QuickActionKind::ComingSoon(message) => self.set_notice("Coming Soon", message),
        }
    }

    fn send_command(&mut self, command: DataCommand) {
        let Some(tx) = &self.data_tx else {
            warn!(?command, "no data worker attached; command dropped");
            return;
        };
        if let Err(err) = tx.try_send(command) {
            warn!(error = %err, "data worker busy; command dropped");
        }
    }
}
