//! Type Filter Component
//!
//! Type selector populated from the `/type` endpoint. The "all" option is
//! reported to the parent as an empty selection.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::NamedResource;

use crate::api;
use crate::context::use_app_context;

/// Option value standing for "no type filter"
const ALL_TYPES: &str = "all";

fn selection_from_option(value: String) -> String {
    if value == ALL_TYPES { String::new() } else { value }
}

fn option_from_selection(selected: String) -> String {
    if selected.is_empty() { ALL_TYPES.to_string() } else { selected }
}

#[component]
pub fn TypeFilter(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (types, set_types) = signal(Vec::<NamedResource>::new());

    // Load type names on mount
    Effect::new(move |_| {
        let config = ctx.config();
        spawn_local(async move {
            match api::list_types(&config).await {
                Ok(loaded) => {
                    log::debug!("loaded {} types", loaded.len());
                    set_types.set(loaded);
                }
                Err(e) => log::error!("failed to load types: {}", e),
            }
        });
    });

    view! {
        <select
            class="w-full px-4 py-3 capitalize bg-white/90 border border-white/20 focus:bg-white focus:border-white/40 transition-all duration-300 rounded-xl shadow-lg"
            prop:value=move || option_from_selection(value.get())
            on:change=move |ev| on_change.run(selection_from_option(event_target_value(&ev)))
        >
            <option value=ALL_TYPES class="capitalize">"Tous les types"</option>
            <For
                each=move || types.get()
                key=|t| t.name.clone()
                children=move |t| {
                    let selected = {
                        let name = t.name.clone();
                        move || value.get() == name
                    };
                    view! {
                        <option value=t.name.clone() class="capitalize" selected=selected>
                            {t.name.clone()}
                        </option>
                    }
                }
            />
        </select>
    }
}
