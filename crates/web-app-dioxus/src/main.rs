#![warn(clippy::pedantic)]
#![allow(clippy::too_many_lines)]

use std::sync::{Arc, LazyLock, Mutex};

use dioxus::prelude::*;
use log::error;

use trainer_domain::{self as domain, HealthService};
use trainer_storage as storage;
use trainer_web_app as web_app;

use component::navbar::Navbar;
use page::{not_found::NotFound, planner::Planner};

mod component;
mod page;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Planner {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const API_URL: &str = env!("TRAINER_API_URL");

static LOG: LazyLock<storage::memory::MemoryLog> = LazyLock::new(storage::memory::MemoryLog::new);

static DOMAIN_SERVICE: GlobalSignal<
    domain::Service<storage::rest::REST<storage::rest::GlooNetSendRequest>>,
> = Signal::global(|| {
    domain::Service::new(storage::rest::REST::new(storage::rest::ApiUrl::new(
        API_URL,
    )))
});
static WEB_APP_SERVICE: GlobalSignal<web_app::Service<storage::memory::MemoryLog>> =
    Signal::global(|| web_app::Service::new(LOG.clone()));
static BACKEND_STATUS: GlobalSignal<domain::BackendStatus> =
    Signal::global(domain::BackendStatus::default);

fn main() {
    init_logging();
    dioxus::launch(App);
}

fn init_logging() {
    let _ = web_app::log::init(Arc::new(Mutex::new(LOG.clone())));
}

#[component]
fn App() -> Element {
    std::panic::set_hook(Box::new(|info| {
        error!("{info}");
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("main"))
            .map(|el| {
                el.set_inner_html(&format!("
                    <section class=\"section\">
                        <div class=\"container\">
                            <div class=\"message is-danger\">
                                <div class=\"message-header\">
                                    <p>Something went wrong</p>
                                </div>
                                <div class=\"message-body\">
                                    <div class=\"block\">
                                        An unexpected error occurred and the application cannot continue.
                                    </div>
                                    <div class=\"block\">
                                        <pre>{info}</pre>
                                    </div>
                                    <div class=\"block field is-grouped is-grouped-centered\">
                                        <button class=\"button\" onclick=\"location.reload()\">
                                            <span class=\"icon\">
                                                <i class=\"fa fa-arrow-rotate-right\"></i>
                                            </span>
                                            <span>Reload page</span>
                                        </button>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </section>
                "));
                Some(())
            });
    }));

    use_future(|| async {
        let status = DOMAIN_SERVICE.read().check_backend().await;
        *BACKEND_STATUS.write() = status;
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div {
            class: "container is-max-desktop py-4",
            Router::<Route> {},
        }
    }
}
