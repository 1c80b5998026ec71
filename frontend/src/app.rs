use common::config::{EditorConfig, CONFIG_PATH};
use gloo_console::{error, log};
use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Component, Context, Html};

use crate::components::column_types::{install_unload_guard, ColumnTypeEditor};

pub enum AppMsg {
    ConfigLoaded(EditorConfig),
}

/// Root component: fetches the editor configuration from the host, then
/// mounts the editor with it.
pub struct App {
    config: Option<EditorConfig>,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        install_unload_guard();
        Self { config: None }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::ConfigLoaded(config) => {
                log!(format!("Using type backend at {}", config.backend_url));
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        match &self.config {
            Some(config) => html! {
                <div>
                    <ColumnTypeEditor config={config.clone()} />
                </div>
            },
            None => html! { <div class="loading">{"Loading configuration..."}</div> },
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }
        let link = ctx.link().clone();
        spawn_local(async move {
            let config = match Request::get(CONFIG_PATH).send().await {
                Ok(resp) if resp.ok() => match resp.json::<EditorConfig>().await {
                    Ok(config) => config,
                    Err(err) => {
                        error!(format!("Invalid editor configuration, using defaults: {err}"));
                        EditorConfig::default()
                    }
                },
                Ok(resp) => {
                    error!(format!(
                        "Configuration request answered {}, using defaults",
                        resp.status()
                    ));
                    EditorConfig::default()
                }
                Err(err) => {
                    error!(format!("Could not load configuration, using defaults: {err}"));
                    EditorConfig::default()
                }
            };
            link.send_message(AppMsg::ConfigLoaded(config));
        });
    }
}
