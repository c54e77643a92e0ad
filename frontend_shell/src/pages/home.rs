// frontend_shell/src/pages/home.rs
use yew::prelude::*;

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <section class="page" data-page="home">
            <h1>{ "Home" }</h1>
        </section>
    }
}
