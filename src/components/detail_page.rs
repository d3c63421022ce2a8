//! Detail Page
//!
//! Full record for one Pokémon: artwork, types, description, size and stats.
//! The detail and species records are fetched concurrently on mount.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::detail::{
    description, format_height, format_number, format_weight, stat_label, stat_percentage, StatIcon,
};
use pokedex_core::palette::gradient_class;
use pokedex_core::{PokemonDetail, PokemonSpecies, Route};

use crate::api;
use crate::components::{LoadingSpinner, TypeBadges};
use crate::context::use_app_context;

fn stat_glyph(icon: StatIcon) -> &'static str {
    match icon {
        StatIcon::Heart => "♥",
        StatIcon::Sword => "⚔",
        StatIcon::Shield => "🛡",
        StatIcon::Zap => "⚡",
    }
}

#[component]
pub fn DetailPage(id: String) -> impl IntoView {
    let ctx = use_app_context();
    let (pokemon, set_pokemon) = signal::<Option<PokemonDetail>>(None);
    let (species, set_species) = signal::<Option<PokemonSpecies>>(None);
    let (loading, set_loading) = signal(true);

    // Detail record
    {
        let id = id.clone();
        let config = ctx.config();
        spawn_local(async move {
            match api::fetch_pokemon_by_id(&config, &id).await {
                Ok(loaded) => set_pokemon.set(Some(loaded)),
                Err(e) if e.is_not_found() => log::warn!("pokemon {} not found", id),
                Err(e) => log::error!("failed to load pokemon {}: {}", id, e),
            }
            set_loading.set(false);
        });
    }

    // Descriptive record
    {
        let config = ctx.config();
        spawn_local(async move {
            match api::fetch_species(&config, &id).await {
                Ok(loaded) => set_species.set(Some(loaded)),
                Err(e) => log::warn!("failed to load species {}: {}", id, e),
            }
        });
    }

    let go_home = move |_: web_sys::MouseEvent| ctx.navigate(Route::List);

    move || {
        if loading.get() {
            return view! {
                <div class="min-h-screen bg-gradient-to-br from-blue-400 via-purple-500 to-pink-500 flex items-center justify-center">
                    <LoadingSpinner />
                </div>
            }
            .into_any();
        }

        let Some(detail) = pokemon.get() else {
            return view! {
                <div class="min-h-screen bg-gradient-to-br from-blue-400 via-purple-500 to-pink-500 flex items-center justify-center">
                    <div class="text-white text-center">
                        <h1 class="text-4xl font-bold mb-4">"Pokémon non trouvé"</h1>
                        <button class="px-4 py-2 rounded-lg border bg-white/90 text-gray-900" on:click=go_home>
                            "Retour à l'accueil"
                        </button>
                    </div>
                </div>
            }
            .into_any();
        };

        let primary = detail.primary_type();
        let page_class = format!("min-h-screen bg-gradient-to-br {}", gradient_class(primary.as_deref()));
        let languages = ctx.config().languages;
        let text = move || species.with(|s| description(s.as_ref(), &languages));

        view! {
            <div class=page_class>
                <div class="relative overflow-hidden">
                    <div class="absolute inset-0 bg-black/20"></div>
                    <div class="relative container mx-auto px-4 py-8">
                        <button
                            class="mb-6 px-4 py-2 rounded-lg border bg-white/20 border-white/40 text-white hover:bg-white/30"
                            on:click=go_home
                        >
                            "← Retour"
                        </button>

                        <div class="grid md:grid-cols-2 gap-8 items-center">
                            <div class="flex justify-center">
                                <div class="relative">
                                    <div class="absolute inset-0 bg-white/20 rounded-full blur-2xl scale-150"></div>
                                    <img
                                        src=detail.image()
                                        alt=detail.name.clone()
                                        class="relative w-80 h-80 object-contain animate-fade-in"
                                    />
                                </div>
                            </div>

                            <div class="text-white">
                                <div class="mb-4">
                                    <span class="text-xl opacity-80">{format_number(detail.id)}</span>
                                </div>
                                <h1 class="text-5xl font-bold capitalize mb-6">{detail.name.clone()}</h1>

                                <div class="flex gap-3 mb-6">
                                    <TypeBadges types=detail.type_names() large=true />
                                </div>

                                <p class="text-lg opacity-90 leading-relaxed mb-6">{text}</p>

                                <div class="grid grid-cols-2 gap-4">
                                    <div class="bg-white/20 border border-white/40 rounded-xl p-4">
                                        <div class="text-sm opacity-80">"📏 Taille"</div>
                                        <div class="text-xl font-bold">{format_height(detail.height)}</div>
                                    </div>
                                    <div class="bg-white/20 border border-white/40 rounded-xl p-4">
                                        <div class="text-sm opacity-80">"⚖ Poids"</div>
                                        <div class="text-xl font-bold">{format_weight(detail.weight)}</div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="container mx-auto px-4 py-8">
                    <div class="bg-white/10 border border-white/20 backdrop-blur-sm rounded-xl p-8">
                        <h2 class="text-3xl font-bold text-white mb-6 text-center">"Statistiques"</h2>
                        <div class="grid gap-6">
                            {detail.stats.iter().map(|entry| {
                                let name = entry.stat.name.clone();
                                let width = format!("width: {:.1}%", stat_percentage(entry.base_stat));
                                view! {
                                    <div class="space-y-2">
                                        <div class="flex items-center justify-between text-white">
                                            <div class="flex items-center gap-3">
                                                <span class="w-5">{stat_glyph(StatIcon::for_stat(&name))}</span>
                                                <span class="capitalize font-semibold">{stat_label(&name)}</span>
                                            </div>
                                            <span class="font-bold text-lg">{entry.base_stat}</span>
                                        </div>
                                        <div class="h-3 w-full bg-white/20 rounded-full overflow-hidden">
                                            <div class="h-full bg-white rounded-full" style=width></div>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        }
        .into_any()
    }
}
