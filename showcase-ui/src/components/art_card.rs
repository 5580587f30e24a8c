//! Artwork Card Component

use leptos::*;

use showcase::render::ArtCard;

use crate::state::use_gallery_state;

/// Clickable artwork card; opens the detail panel
#[component]
pub fn ArtCardView(card: ArtCard) -> impl IntoView {
    let state = use_gallery_state();
    let id = card.id;

    view! {
        <div
            class="bg-gray-800 rounded-lg overflow-hidden cursor-pointer hover:ring-2 hover:ring-primary-500 transition"
            on:click=move |_| state.show_art_detail(id)
        >
            <img src=card.image alt=card.title class="w-full h-48 object-cover" />
            <div class="p-4">
                <h3 class="text-lg font-semibold">{card.title}</h3>
                <p class="text-gray-400">{card.artist}</p>
                {card.year.map(|year| view! { <p class="text-sm text-gray-500">{year}</p> })}
                {card.excerpt.map(|text| view! { <p class="text-sm text-gray-300 mt-2">{text}</p> })}
            </div>
        </div>
    }
}
