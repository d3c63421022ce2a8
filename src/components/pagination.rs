//! Pagination Component
//!
//! Previous / page label / next. Previous is disabled on the first page,
//! next while a page is loading.

use leptos::prelude::*;
use pokedex_core::Pager;

#[component]
pub fn Pagination(
    #[prop(into)] pager: Signal<Pager>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_change: Callback<Pager>,
) -> impl IntoView {
    view! {
        <div class="flex justify-center items-center gap-4">
            <button
                class="pagination-btn px-6 py-3 border rounded-lg disabled:opacity-50"
                disabled=move || !pager.get().has_previous()
                on:click=move |_| on_change.run(pager.get_untracked().previous())
            >
                "‹ Précédent"
            </button>

            <div class="bg-card px-4 py-2 rounded-lg border">
                <span class="font-semibold text-foreground">{move || pager.get().label()}</span>
            </div>

            <button
                class="pagination-btn px-6 py-3 border rounded-lg disabled:opacity-50"
                disabled=move || loading.get()
                on:click=move |_| on_change.run(pager.get_untracked().next())
            >
                "Suivant ›"
            </button>
        </div>
    }
}
