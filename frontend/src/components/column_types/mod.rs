//! Column type editor: root module wiring the Yew `Component` implementation
//! with submodules for state, update logic, view rendering, the HTTP client
//! and browser helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `ColumnTypeEditorProps`, `ColumnTypeEditor`).
//! - Provide the `Component` implementation that delegates to `update::update` and `view::view`.
//! - Rebuild the HTTP client when the injected configuration changes.

use yew::prelude::*;

mod client;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use helpers::install_unload_guard;
pub use messages::Msg;
pub use props::ColumnTypeEditorProps;
pub use state::ColumnTypeEditor;

impl Component for ColumnTypeEditor {
    type Message = Msg;
    type Properties = ColumnTypeEditorProps;

    fn create(ctx: &Context<Self>) -> Self {
        ColumnTypeEditor::new(&ctx.props().config)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        self.reconfigure(&ctx.props().config);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
