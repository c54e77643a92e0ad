// frontend_shell/src/components/nav_link.rs
use gloo::console::log;
use yew::prelude::*;
use yew_router::prelude::*;
use crate::{config_file::ShellConfig, router::{Route, ROUTES}};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub to: Route,
    /// Rendered as `data-testid` for external test tooling.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that navigates through the router instead of reloading the page.
#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let navigator = use_navigator();
    let config = use_context::<ShellConfig>().unwrap_or_default();
    let active = use_location()
        .and_then(|location| ROUTES.resolve(location.path()))
        == Some(props.to);

    let onclick = {
        let to = props.to;
        let log_navigation = config.log_navigation;

        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Some(navigator) = navigator.as_ref() {
                if log_navigation {
                    log!(format!("navigating to {}", to.to_path()));
                }
                navigator.push(&to);
            }
        })
    };

    html! {
        <a
            href={props.to.to_path()}
            class={classes!("nav-link", active.then_some("active"))}
            aria-current={active.then(|| AttrValue::Static("page"))}
            data-testid={props.test_id.clone()}
            {onclick}
        >
            { for props.children.iter() }
        </a>
    }
}
