use leptos::*;

/// Spinner shown while a transfer record is being mined.
#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="spinner"></div>
        </div>
    }
}
