use frontend_shell::{config_file::load_config, App, AppProps};
use gloo::console::{error, log};

fn main() {
    let config = load_config();
    let root = match config.root_element() {
        Ok(root) => root,
        Err(e) => {
            error!(format!("{e}, mounting on <body>"));
            None
        }
    };

    if config.log_navigation {
        log!("mounting shell");
    }

    let props = AppProps { config };
    match root {
        Some(root) => yew::Renderer::<App>::with_root_and_props(root, props).render(),
        None => yew::Renderer::<App>::with_props(props).render(),
    };
}
