//! Static site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center">
            "Website created with love by the "
            <a href="http://codeforfoco.org/" rel="noreferrer noopener" target="_blank">
                "Code For Fort Collins"
            </a>
            " crew."
        </footer>
    }
}
