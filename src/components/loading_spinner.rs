//! Loading Spinner Component

use leptos::prelude::*;

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center">
            <div class="relative">
                <div class="w-32 h-32 border-8 border-white/20 rounded-full animate-spin">
                    <div class="absolute top-0 left-0 w-8 h-8 bg-white rounded-full transform -translate-x-1/2 -translate-y-1/2"></div>
                </div>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-5xl text-white animate-spin">"◌"</span>
                </div>
            </div>
            <div class="mt-8 text-center">
                <h2 class="text-2xl font-bold text-white mb-2">"Chargement..."</h2>
                <p class="text-white/80">"Capture des Pokémons en cours"</p>
            </div>
        </div>
    }
}
