//! Pokémon Card Component
//!
//! Grid card for one summary record. Clicking opens the detail route.

use leptos::prelude::*;
use pokedex_core::detail::format_number;
use pokedex_core::palette::{badge_class, gradient_class};
use pokedex_core::{PokemonSummary, Route};

use crate::context::use_app_context;

/// Entry animation stagger per card
const STAGGER_MS: usize = 100;

const GRID_PATTERN: &str = "background-image: url(\"data:image/svg+xml,%3Csvg width='20' height='20' xmlns='http://www.w3.org/2000/svg'%3E%3Cpath d='M 20 0 L 0 0 0 20' fill='none' stroke='white' stroke-width='1'/%3E%3C/svg%3E\");";

/// Badge row shared by the card and the detail header
#[component]
pub fn TypeBadges(types: Vec<String>, #[prop(optional)] large: bool) -> impl IntoView {
    types
        .into_iter()
        .map(|t| {
            let class = if large {
                "bg-white/20 text-white border border-white/40 px-4 py-2 text-lg font-semibold capitalize rounded-full".to_string()
            } else {
                format!(
                    "{} text-white px-3 py-1 text-sm font-semibold capitalize shadow-lg rounded-full",
                    badge_class(&t)
                )
            };
            view! { <span class=class>{t}</span> }
        })
        .collect_view()
}

#[component]
pub fn PokemonCard(pokemon: PokemonSummary, index: usize) -> impl IntoView {
    let ctx = use_app_context();
    let (image_loaded, set_image_loaded) = signal(false);

    let id = pokemon.id;
    let card_class = format!(
        "pokemon-card relative overflow-hidden cursor-pointer transform transition-all duration-300 hover:scale-105 hover:shadow-2xl group bg-gradient-to-br {} rounded-xl animate-fade-in",
        gradient_class(pokemon.primary_type())
    );
    let delay = format!("animation-delay: {}ms", index * STAGGER_MS);

    view! {
        <div
            class=card_class
            style=delay
            on:click=move |_| ctx.navigate(Route::Detail(id.to_string()))
        >
            // Grid pattern
            <div class="absolute inset-0 opacity-10" style=GRID_PATTERN></div>
            // Hover shine
            <div class="absolute inset-0 bg-gradient-to-r from-transparent via-white/20 to-transparent transform -skew-x-12 -translate-x-full group-hover:translate-x-full transition-transform duration-700"></div>

            <div class="relative p-6 text-white">
                <div class="absolute top-4 right-4 bg-black/20 rounded-full px-3 py-1">
                    <span class="text-sm font-bold">{format_number(id)}</span>
                </div>

                <div class="flex justify-center mb-4 relative">
                    <div class="w-32 h-32 flex items-center justify-center">
                        <Show when=move || !image_loaded.get()>
                            <div class="w-32 h-32 bg-white/20 rounded-full animate-pulse"></div>
                        </Show>
                        <img
                            src=pokemon.image.clone()
                            alt=pokemon.name.clone()
                            loading="lazy"
                            class=move || if image_loaded.get() {
                                "w-full h-full object-contain transition-all duration-500 transform group-hover:scale-110 opacity-100"
                            } else {
                                "w-full h-full object-contain transition-all duration-500 transform group-hover:scale-110 opacity-0 absolute"
                            }
                            on:load=move |_| set_image_loaded.set(true)
                        />
                    </div>
                </div>

                <h3 class="text-2xl font-bold text-center mb-3 capitalize">{pokemon.name.clone()}</h3>

                <div class="flex justify-center gap-2 flex-wrap">
                    <TypeBadges types=pokemon.types.clone() />
                </div>
            </div>
        </div>
    }
}
