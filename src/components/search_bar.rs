//! Search Bar Component
//!
//! Controlled text input; every keystroke is forwarded to the parent.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="relative">
            <span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400">"🔍"</span>
            <input
                type="text"
                placeholder="Rechercher un Pokémon..."
                autocomplete="off"
                class="w-full pl-10 pr-4 py-3 text-lg bg-white/90 border border-white/20 focus:bg-white focus:border-white/40 transition-all duration-300 rounded-xl shadow-lg"
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
