//! The full dashboard component tree

use std::sync::Arc;

use employee_events::RiskModel;

use super::{
    BarChart, Composite, FilterForm, Header, LineChart, NotesTable, ReportDropdown,
};

/// Line and bar charts side by side
pub fn visualizations(model: Arc<dyn RiskModel>) -> Composite {
    Composite::new(vec![Box::new(LineChart), Box::new(BarChart::new(model))]).with_class("grid")
}

/// Header, filter form, charts and notes, top to bottom
pub fn report(model: Arc<dyn RiskModel>, dropdown: ReportDropdown) -> Composite {
    Composite::new(vec![
        Box::new(Header),
        Box::new(FilterForm::new(dropdown)),
        Box::new(visualizations(model)),
        Box::new(NotesTable),
    ])
}
