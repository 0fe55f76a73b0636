use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use query::ListQuery;
use store::AppConfig;
use ui::{AuthProvider, DialogProvider, PreferencesProvider, ServicesProvider};
use views::{
    AddNote, Archives, Home, Login, NoteDetail, NotFound, Register, Shell, SignedInGate,
    SignedOutGate,
};

mod query;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[layout(SignedInGate)]
            #[route("/?:..query")]
            Home { query: ListQuery },
            #[route("/notes/:id")]
            NoteDetail { id: String },
            #[route("/add")]
            AddNote {},
            #[route("/archives?:..query")]
            Archives { query: ListQuery },
        #[end_layout]
        #[layout(SignedOutGate)]
            #[route("/login")]
            Login {},
            #[route("/register")]
            Register {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl Route {
    fn home() -> Self {
        Route::Home {
            query: ListQuery::default(),
        }
    }

    fn archives() -> Self {
        Route::Archives {
            query: ListQuery::default(),
        }
    }

    /// The list a note belongs to.
    fn list_for(archived: bool) -> Self {
        if archived {
            Self::archives()
        } else {
            Self::home()
        }
    }
}

/// Where a signed-out visitor was headed; consumed after login.
type ReturnTo = Signal<Option<Route>>;

const CONFIG_TOML: &str = include_str!("../notes.toml");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("failed to initialise logging: {e}");
    }
    dioxus::launch(App);
}

fn load_config() -> AppConfig {
    match AppConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, file = AppConfig::filename(), "invalid config, using defaults");
            AppConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);
    let timeout_ms = config.ui.notification_timeout_ms;
    use_context_provider::<ReturnTo>(|| Signal::new(None));

    rsx! {
        ServicesProvider {
            config,
            PreferencesProvider {
                DialogProvider {
                    timeout_ms,
                    AuthProvider {
                        Router::<Route> {}
                    }
                }
            }
        }
    }
}
