//! Dashboard components
//!
//! A component turns the current selection (entity kind and optional id)
//! into an HTML fragment. Components are immutable values built once at
//! startup and shared across requests.
//!
//! Most components follow a two-step contract through [`DataComponent`]:
//! fetch their data from the store, then render it. Every `DataComponent` is
//! also a [`Component`], so a [`Composite`] can hold any mix of them.

use async_trait::async_trait;
use employee_events::{EntityKind, Store};
use futures::future::join_all;

pub mod bar_chart;
pub mod filters;
pub mod header;
pub mod line_chart;
pub mod notes_table;
pub mod report;

pub use bar_chart::BarChart;
pub use filters::{FilterForm, Radio, ReportDropdown};
pub use header::Header;
pub use line_chart::LineChart;
pub use notes_table::NotesTable;
pub use report::report;

/// What a single render is about
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub store: &'a Store,
    pub kind: EntityKind,
    /// Selected entity id; `None` when rendering without a selection
    pub entity_id: Option<&'a str>,
}

impl<'a> RenderContext<'a> {
    pub fn new(store: &'a Store, kind: EntityKind, entity_id: Option<&'a str>) -> Self {
        Self {
            store,
            kind,
            entity_id,
        }
    }
}

/// Anything that can render itself for a selection
#[async_trait]
pub trait Component: Send + Sync {
    async fn render(&self, ctx: &RenderContext<'_>) -> String;
}

/// Component that fetches data and then renders it
#[async_trait]
pub trait DataComponent: Send + Sync {
    type Data: Send;

    /// Fetch what the component displays. Store failures arrive as empty data.
    async fn component_data(&self, ctx: &RenderContext<'_>) -> Self::Data;

    /// Render fetched data as markup
    fn build_component(&self, ctx: &RenderContext<'_>, data: Self::Data) -> String;

    /// Wrap the rendered markup; defaults to no wrapper
    fn outer_div(&self, inner: String) -> String {
        inner
    }
}

#[async_trait]
impl<T> Component for T
where
    T: DataComponent,
{
    async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let data = self.component_data(ctx).await;
        self.outer_div(self.build_component(ctx, data))
    }
}

/// Children rendered in order inside one `<div>`
pub struct Composite {
    children: Vec<Box<dyn Component>>,
    class: Option<&'static str>,
}

impl Composite {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            children,
            class: None,
        }
    }

    /// Set the CSS class of the wrapping `<div>`
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[async_trait]
impl Component for Composite {
    async fn render(&self, ctx: &RenderContext<'_>) -> String {
        // Children fetch concurrently; join_all keeps their order
        let fragments = join_all(self.children.iter().map(|child| child.render(ctx))).await;

        let open = match self.class {
            Some(class) => format!(r#"<div class="{}">"#, class),
            None => "<div>".to_string(),
        };
        format!("{}{}</div>", open, fragments.concat())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::empty_store;
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl Component for Fixed {
        async fn render(&self, _ctx: &RenderContext<'_>) -> String {
            self.0.to_string()
        }
    }

    struct Counted;

    #[async_trait]
    impl DataComponent for Counted {
        type Data = usize;

        async fn component_data(&self, ctx: &RenderContext<'_>) -> usize {
            ctx.store.names(ctx.kind).await.len()
        }

        fn build_component(&self, _ctx: &RenderContext<'_>, data: usize) -> String {
            format!("<p>{}</p>", data)
        }

        fn outer_div(&self, inner: String) -> String {
            format!("<section>{}</section>", inner)
        }
    }

    #[tokio::test]
    async fn test_composite_preserves_child_order() {
        let (_dir, store) = empty_store();
        let ctx = RenderContext::new(&store, EntityKind::Employee, Some("1"));

        let composite = Composite::new(vec![
            Box::new(Fixed("<a/>")),
            Box::new(Fixed("<b/>")),
            Box::new(Fixed("<c/>")),
        ])
        .with_class("grid");

        assert_eq!(
            composite.render(&ctx).await,
            r#"<div class="grid"><a/><b/><c/></div>"#
        );
    }

    #[tokio::test]
    async fn test_data_component_fetches_builds_and_wraps() {
        let (_dir, store) = empty_store();
        let ctx = RenderContext::new(&store, EntityKind::Team, None);

        assert_eq!(Counted.render(&ctx).await, "<section><p>0</p></section>");
    }

    #[tokio::test]
    async fn test_nested_composites() {
        let (_dir, store) = empty_store();
        let ctx = RenderContext::new(&store, EntityKind::Team, None);

        let inner = Composite::new(vec![Box::new(Fixed("x"))]);
        let outer = Composite::new(vec![Box::new(inner), Box::new(Counted)]);

        assert_eq!(
            outer.render(&ctx).await,
            "<div><div>x</div><section><p>0</p></section></div>"
        );
    }
}
