use common::{TabId, TabSet};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: TabSet,
    pub on_select: Callback<TabId>,
}

/// Row of tab buttons; the active one carries the `active` class
#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tabs" role="tablist">
            { for TabId::ALL.into_iter().map(|tab| {
                let on_select = props.on_select.clone();
                let onclick = Callback::from(move |_: MouseEvent| {
                    log::debug!("Tab selected: {}", tab.panel_id());
                    on_select.emit(tab);
                });
                html! {
                    <button
                        type="button"
                        role="tab"
                        class={props.tabs.button_class(tab)}
                        aria-selected={props.tabs.is_active(tab).to_string()}
                        {onclick}
                    >
                        {tab.title()}
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabPanelProps {
    pub tab: TabId,
    pub tabs: TabSet,
    pub children: Children,
}

/// Panel shown only while its tab is active; it stays mounted when hidden
#[function_component(TabPanel)]
pub fn tab_panel(props: &TabPanelProps) -> Html {
    html! {
        <div id={props.tab.panel_id()} role="tabpanel" class={props.tabs.panel_class(props.tab)}>
            { for props.children.iter() }
        </div>
    }
}
