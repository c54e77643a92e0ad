// frontend_shell/src/pages/about.rs
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="page" data-page="about">
            <h1>{ "About" }</h1>
            <p>{ "A client-side shell built with Yew." }</p>
        </section>
    }
}
