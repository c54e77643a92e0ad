pub mod components;
pub mod config_file;
pub mod pages;
pub mod router;

use crate::config_file::ShellConfig;
use crate::router::Shell;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq, Default)]
pub struct AppProps {
    #[prop_or_default]
    pub config: ShellConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<ShellConfig> context={props.config.clone()}>
            <BrowserRouter>
                <Shell />
            </BrowserRouter>
        </ContextProvider<ShellConfig>>
    }
}
