//! Profile selector form: entity kind radio plus entity dropdown
//!
//! Switching the radio asks `/update_dropdown` for a fresh dropdown of the
//! other kind; submitting the form posts to `/update_data`, which redirects
//! to the chosen entity's page.

use std::fmt::Write;

use async_trait::async_trait;
use employee_events::{EntityKind, EntityOption};

use super::{Component, DataComponent, RenderContext};
use crate::html::escape;

/// Radio group choosing the entity kind
#[derive(Debug, Clone)]
pub struct Radio {
    pub name: &'static str,
    pub hx_get: &'static str,
    pub hx_target: &'static str,
}

impl Default for Radio {
    fn default() -> Self {
        Self {
            name: "profile_type",
            hx_get: "/update_dropdown",
            hx_target: "#selector",
        }
    }
}

#[async_trait]
impl DataComponent for Radio {
    type Data = ();

    async fn component_data(&self, _ctx: &RenderContext<'_>) {}

    fn build_component(&self, ctx: &RenderContext<'_>, _data: ()) -> String {
        let mut html = String::from("<fieldset>");
        for kind in EntityKind::ALL {
            let checked = if kind == ctx.kind { " checked" } else { "" };
            let _ = write!(
                html,
                r#"<label><input type="radio" name="{name}" value="{value}"{checked} hx-get="{get}" hx-target="{target}" hx-swap="outerHTML">{value}</label>"#,
                name = self.name,
                value = kind.display_name(),
                checked = checked,
                get = self.hx_get,
                target = self.hx_target,
            );
        }
        html.push_str("</fieldset>");
        html
    }
}

/// Dropdown of every entity of the current kind
#[derive(Debug, Clone)]
pub struct ReportDropdown {
    /// Id of the wrapping `<div>`; the radio's htmx target
    pub id: &'static str,
    /// Form field name of the `<select>`
    pub name: &'static str,
}

impl Default for ReportDropdown {
    fn default() -> Self {
        Self {
            id: "selector",
            name: "user-selection",
        }
    }
}

/// `<option>` list with the option matching `selected` marked
///
/// At most one option is marked: ids are unique within a kind.
pub fn render_options(options: &[EntityOption], selected: Option<&str>) -> String {
    let mut html = String::new();
    for option in options {
        let is_selected = selected == Some(option.id.as_str());
        let _ = write!(
            html,
            r#"<option value="{}"{}>{}</option>"#,
            escape(&option.id),
            if is_selected { " selected" } else { "" },
            escape(&option.label)
        );
    }
    html
}

#[async_trait]
impl DataComponent for ReportDropdown {
    type Data = Vec<EntityOption>;

    async fn component_data(&self, ctx: &RenderContext<'_>) -> Vec<EntityOption> {
        ctx.store.names(ctx.kind).await
    }

    fn build_component(&self, ctx: &RenderContext<'_>, data: Vec<EntityOption>) -> String {
        format!(
            r#"<label for="{id}-input">{label}</label><select id="{id}-input" name="{name}">{options}</select>"#,
            id = self.id,
            label = ctx.kind.display_name(),
            name = self.name,
            options = render_options(&data, ctx.entity_id),
        )
    }

    fn outer_div(&self, inner: String) -> String {
        format!(r#"<div id="{}">{}</div>"#, self.id, inner)
    }
}

/// The filter form posting the selection to `/update_data`
#[derive(Debug, Clone)]
pub struct FilterForm {
    pub id: &'static str,
    pub action: &'static str,
    pub radio: Radio,
    pub dropdown: ReportDropdown,
}

impl FilterForm {
    pub fn new(dropdown: ReportDropdown) -> Self {
        Self {
            id: "top-filters",
            action: "/update_data",
            radio: Radio::default(),
            dropdown,
        }
    }
}

#[async_trait]
impl Component for FilterForm {
    async fn render(&self, ctx: &RenderContext<'_>) -> String {
        let (radio, dropdown) = futures::join!(self.radio.render(ctx), self.dropdown.render(ctx));
        format!(
            r#"<form id="{}" action="{}" method="POST"><div class="grid">{}{}</div><button type="submit">Submit</button></form>"#,
            self.id, self.action, radio, dropdown
        )
    }
}
