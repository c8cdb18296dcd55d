//! Page heading for the selected entity kind

use async_trait::async_trait;

use super::{DataComponent, RenderContext};
use crate::html::escape;

#[derive(Debug, Clone, Default)]
pub struct Header;

#[async_trait]
impl DataComponent for Header {
    /// Display name of the selected entity, when it resolves
    type Data = Option<String>;

    async fn component_data(&self, ctx: &RenderContext<'_>) -> Option<String> {
        let id = ctx.entity_id?;
        ctx.store.display_name(ctx.kind, id).await
    }

    fn build_component(&self, ctx: &RenderContext<'_>, data: Option<String>) -> String {
        let title = format!(
            "<h1>{} Performance</h1>",
            ctx.kind.display_name()
        );
        match data {
            Some(name) => format!("<hgroup>{}<p>{}</p></hgroup>", title, escape(&name)),
            None => format!("<hgroup>{}</hgroup>", title),
        }
    }
}
