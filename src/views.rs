//! Presentation models shared by widgets and pages.

use askama::Template;

pub trait TableRow {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<R: TableRow>(rows: &[R]) -> Table {
        Table {
            headers: R::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(TableRow::cells).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryItem {
    pub label: &'static str,
    pub value: String,
}

impl SummaryItem {
    pub fn new(label: &'static str, value: impl Into<String>) -> SummaryItem {
        SummaryItem {
            label,
            value: value.into(),
        }
    }
}

/// Outcome of one widget operation.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetView {
    /// Input was rejected before any request went out.
    Invalid(String),
    Failed(String),
    Empty(String),
    Table(Table),
    Summary(Vec<SummaryItem>),
}

#[derive(Template)]
#[template(path = "widget.html")]
struct WidgetTemplate<'a> {
    state: &'static str,
    message: Option<&'a str>,
    table: Option<&'a Table>,
    summary: &'a [SummaryItem],
}

impl WidgetView {
    pub fn is_table(&self) -> bool {
        matches!(self, WidgetView::Table(_))
    }

    pub fn render(&self) -> Result<String, askama::Error> {
        let mut template = WidgetTemplate {
            state: "",
            message: None,
            table: None,
            summary: &[],
        };
        match self {
            WidgetView::Invalid(message) => {
                template.state = "invalid";
                template.message = Some(message.as_str());
            }
            WidgetView::Failed(message) => {
                template.state = "error";
                template.message = Some(message.as_str());
            }
            WidgetView::Empty(message) => {
                template.state = "empty";
                template.message = Some(message.as_str());
            }
            WidgetView::Table(table) => {
                template.state = "success";
                template.table = Some(table);
            }
            WidgetView::Summary(items) => {
                template.state = "success";
                template.summary = items;
            }
        }
        template.render()
    }
}

pub fn stars(score: u8) -> String {
    let filled = usize::from(score.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[cfg(test)]
mod tests {
    use super::{stars, SummaryItem, Table, TableRow, WidgetView};

    struct City(&'static str, i64);

    impl TableRow for City {
        const HEADERS: &'static [&'static str] = &["City", "Customer Count"];

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn stars_fill_up_to_the_score() {
        assert_eq!(stars(5), "★★★★★");
        assert_eq!(stars(2), "★★☆☆☆");
        assert_eq!(stars(9), "★★★★★");
    }

    #[test]
    fn table_renders_one_row_per_record() {
        let view = WidgetView::Table(Table::from_rows(&[City("sao_paulo", 500), City("rio", 300)]));
        let html = view.render().unwrap();

        assert_eq!(html.matches("<tr>").count(), 3);
        assert!(html.contains("<th>Customer Count</th>"));
        assert!(html.contains("<td>sao_paulo</td>"));
    }

    #[test]
    fn messages_are_escaped_and_never_build_a_table() {
        let html = WidgetView::Empty("<b>No data found.</b>".into()).render().unwrap();
        assert!(!html.contains("<table"));
        assert!(html.contains("&lt;b&gt;"));
    }

    #[test]
    fn summary_lists_label_and_value() {
        let html = WidgetView::Summary(vec![SummaryItem::new("Total value", "19.90")])
            .render()
            .unwrap();
        assert!(html.contains("Total value"));
        assert!(html.contains("19.90"));
        assert!(!html.contains("<table"));
    }
}
