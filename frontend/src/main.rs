use advisory_banner::overrides::{OVERRIDES_KEY, load_overrides, resolve_config};
use advisory_banner::{AdvisoryBanner, AdvisoryBannerProps};
use banner_shared::{AppMode, BannerConfig};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::StorageEvent;
use yew::prelude::*;

enum Msg {
    ReloadOverrides,
}

// Demo host page
struct App {
    mode: AppMode,
    overrides: BannerConfig,
    storage_listener: Option<EventListener>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut app = Self {
            mode: AppMode::from_build(),
            overrides: load_overrides(),
            storage_listener: None,
        };
        log::info!("App mode: {}", app.mode);

        // Overrides edited in another tab arrive as `storage` events.
        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "storage", move |event| {
                let relevant = event
                    .dyn_ref::<StorageEvent>()
                    .map(|e| e.key().map_or(true, |key| key == OVERRIDES_KEY))
                    .unwrap_or(false);
                if relevant {
                    link.send_message(Msg::ReloadOverrides);
                }
            });
            app.storage_listener = Some(listener);
        } else {
            log::warn!("⚠️ No global `window`, override reloading disabled");
        }

        app
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ReloadOverrides => {
                let overrides = load_overrides();
                if overrides == self.overrides {
                    return false;
                }
                self.overrides = overrides;
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let banner = AdvisoryBannerProps::from(resolve_config(self.mode, self.overrides.clone()));

        html! {
            <div class="container">
                <AdvisoryBanner ..banner />

                <main class="main-content">
                    <h1>{ "Advisory Banner" }</h1>
                    <p>{ format!("Build mode: {}", self.mode) }</p>
                    <p>
                        { "Set a JSON override in localStorage under " }
                        <code>{ OVERRIDES_KEY }</code>
                        { " to restyle the banner." }
                    </p>
                </main>

                <footer class="app-footer">
                    <p>{ "Advisory Banner | Rust WASM" }</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<App>::new().render();
}
