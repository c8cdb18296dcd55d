//! Notes table, newest first

use std::fmt::Write;

use async_trait::async_trait;
use employee_events::NoteRow;

use super::{DataComponent, RenderContext};
use crate::html::escape;

#[derive(Debug, Clone, Default)]
pub struct NotesTable;

/// Sort notes by date, newest first; notes on the same date keep store order
pub fn newest_first(mut notes: Vec<NoteRow>) -> Vec<NoteRow> {
    notes.sort_by(|a, b| b.note_date.cmp(&a.note_date));
    notes
}

#[async_trait]
impl DataComponent for NotesTable {
    type Data = Vec<NoteRow>;

    async fn component_data(&self, ctx: &RenderContext<'_>) -> Vec<NoteRow> {
        match ctx.entity_id {
            Some(id) => newest_first(ctx.store.notes(ctx.kind, id).await),
            None => Vec::new(),
        }
    }

    fn build_component(&self, _ctx: &RenderContext<'_>, data: Vec<NoteRow>) -> String {
        let mut rows = String::new();
        for note in &data {
            let _ = write!(
                rows,
                "<tr><td>{}</td><td>{}</td></tr>",
                note.note_date.format("%Y-%m-%d"),
                escape(&note.note)
            );
        }

        format!(
            r#"<table class="striped"><thead><tr><th>Date</th><th>Note</th></tr></thead><tbody>{}</tbody></table>"#,
            rows
        )
    }
}
