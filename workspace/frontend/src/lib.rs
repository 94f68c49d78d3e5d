use common::{TabId, TabSet};
use yew::prelude::*;

mod components;
pub mod api_client;
pub mod hooks;
pub mod settings;
pub mod ui;

use components::forecast::DailyForecast;
use components::layout::layout::Layout;
use components::layout::tabs::{TabBar, TabPanel};
use components::prediction::SinglePrediction;
use components::statistics::Statistics;

#[function_component(App)]
pub fn app() -> Html {
    let tabs = use_state(TabSet::default);

    let on_select = {
        let tabs = tabs.clone();
        Callback::from(move |tab: TabId| {
            let mut next = (*tabs).clone();
            next.activate(tab);
            tabs.set(next);
        })
    };

    html! {
        <Layout>
            <TabBar tabs={(*tabs).clone()} {on_select} />
            <TabPanel tab={TabId::Single} tabs={(*tabs).clone()}>
                <SinglePrediction />
            </TabPanel>
            <TabPanel tab={TabId::Daily} tabs={(*tabs).clone()}>
                <DailyForecast />
            </TabPanel>
            <TabPanel tab={TabId::Statistics} tabs={(*tabs).clone()}>
                <Statistics />
            </TabPanel>
        </Layout>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Energy Forecast Frontend Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("API base URL: '{}'", settings.api_base_url());
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}
