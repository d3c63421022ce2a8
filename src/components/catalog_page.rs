//! Catalog Page
//!
//! Card grid of one API page with client-side search and type filters.

use leptos::prelude::*;
use leptos::task::spawn_local;
use pokedex_core::Pager;
use reactive_stores::Store;

use crate::api;
use crate::components::{LoadingSpinner, Pagination, PokemonCard, SearchBar, TypeFilter};
use crate::context::use_app_context;
use crate::store::{
    store_apply_page, store_fail_page, store_filters, CatalogState, CatalogStateStoreFields, CatalogStore,
};

#[component]
pub fn CatalogPage() -> impl IntoView {
    let ctx = use_app_context();
    let config = ctx.config();
    let store: CatalogStore = Store::new(CatalogState::new(config.page_size));

    // Load summaries whenever the cursor moves
    Effect::new(move |_| {
        let pager = store.pager().get();
        let config = ctx.config();
        store.loading().set(true);
        log::info!("loading page {} (offset {})", pager.page, pager.offset());

        spawn_local(async move {
            match api::load_page(&config, pager).await {
                Ok(pokemon) => {
                    log::info!("loaded {} pokemon for page {}", pokemon.len(), pager.page);
                    store_apply_page(&store, pager, pokemon);
                }
                Err(e) => {
                    log::error!("failed to load page {}: {}", pager.page, e);
                    store_fail_page(&store, pager);
                }
            }
        });
    });

    let filtered = Memo::new(move |_| {
        let filters = store_filters(&store);
        filters.apply(&store.pokemon().read())
    });
    let filters_active = Memo::new(move |_| store_filters(&store).is_active());
    let first_load = move || store.loading().get() && store.pokemon().read().is_empty();

    view! {
        <Show
            when=move || !first_load()
            fallback=|| view! {
                <div class="min-h-screen bg-gradient-to-br from-blue-400 via-purple-500 to-pink-500 flex items-center justify-center">
                    <LoadingSpinner />
                </div>
            }
        >
            <div class="min-h-screen bg-background">
                <header class="border-b bg-card/50 backdrop-blur-sm sticky top-0 z-10">
                    <div class="container mx-auto px-4 py-8">
                        <div class="text-center space-y-4">
                            <h1 class="text-4xl md:text-6xl font-bold text-foreground tracking-tight">"Pokédex"</h1>
                            <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                                "Explorez l'univers fascinant des Pokémons et découvrez leurs caractéristiques uniques"
                            </p>
                        </div>
                    </div>
                </header>

                <main class="container mx-auto px-4 py-8">
                    <div class="mb-8 flex flex-col md:flex-row gap-4">
                        <div class="flex-1">
                            <SearchBar
                                value=Signal::derive(move || store.search().get())
                                on_change=move |term: String| store.search().set(term)
                            />
                        </div>
                        <div class="md:w-64">
                            <TypeFilter
                                value=Signal::derive(move || store.selected_type().get())
                                on_change=move |selected: String| store.selected_type().set(selected)
                            />
                        </div>
                    </div>

                    <Show
                        when=move || !filtered.read().is_empty()
                        fallback=|| view! {
                            <div class="text-center py-12">
                                <p class="text-muted-foreground text-lg">"Aucun Pokémon trouvé pour cette recherche"</p>
                            </div>
                        }
                    >
                        <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 mb-8">
                            <For
                                each=move || filtered.get().into_iter().enumerate()
                                key=|(_, pokemon)| pokemon.id
                                children=|(index, pokemon)| view! { <PokemonCard pokemon=pokemon index=index /> }
                            />
                        </div>
                    </Show>

                    <Show when=move || !filters_active.get()>
                        <Pagination
                            pager=Signal::derive(move || store.pager().get())
                            loading=Signal::derive(move || store.loading().get())
                            on_change=move |pager: Pager| store.pager().set(pager)
                        />
                    </Show>
                </main>
            </div>
        </Show>
    }
}
