//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Category;

#[derive(Tabled)]
struct CategoryLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Icon")]
    icon: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Scope")]
    scope: String,
}

/// Format categories as a table
pub fn format_category_list<'a>(categories: impl IntoIterator<Item = &'a Category>) -> String {
    let lines: Vec<CategoryLine> = categories
        .into_iter()
        .map(|c| CategoryLine {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: c.kind.to_string(),
            icon: c.icon.clone(),
            color: c.color.clone(),
            scope: if c.is_global() { "global" } else { "personal" }.to_string(),
        })
        .collect();

    if lines.is_empty() {
        return "No categories found.\n".to_string();
    }

    let mut output = Table::new(lines).with(Style::rounded()).to_string();
    output.push('\n');
    output
}
