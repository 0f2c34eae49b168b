use leptos::prelude::*;

#[component]
pub fn Footer(year: i32) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>{format!("© {year} Il mio Portfolio")}</p>
        </footer>
    }
}
