use crate::{
    application::{
        collection::CollectionController,
        pagination::{DEFAULT_PAGE_WINDOW, PageView},
    },
    domain::entities::{CategoryRecord, CollectionItem, PostRecord},
    i18n::{Translations, Translator, fill},
};

/// Column layout of a collection in the console.
pub trait Tabular: CollectionItem {
    fn columns(texts: &Translations) -> Vec<&'static str>;

    fn cells(&self) -> Vec<String>;

    /// Labelled fields for the details view.
    fn fields(&self, texts: &Translations) -> Vec<(&'static str, String)>;
}

impl Tabular for CategoryRecord {
    fn columns(texts: &Translations) -> Vec<&'static str> {
        vec![texts.common.id, texts.category.name, texts.common.date]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.created_at.clone().unwrap_or_default(),
        ]
    }

    fn fields(&self, texts: &Translations) -> Vec<(&'static str, String)> {
        Self::columns(texts).into_iter().zip(self.cells()).collect()
    }
}

impl Tabular for PostRecord {
    fn columns(texts: &Translations) -> Vec<&'static str> {
        let fields = &texts.post_fields;
        vec![
            texts.common.id,
            fields.header,
            fields.title,
            fields.category,
            texts.common.date,
        ]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.header.clone(),
            self.title.clone(),
            self.category_id
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_default(),
            self.created_at.clone().unwrap_or_default(),
        ]
    }

    fn fields(&self, texts: &Translations) -> Vec<(&'static str, String)> {
        let fields = &texts.post_fields;
        vec![
            (texts.common.id, self.id.to_string()),
            (fields.header, self.header.clone()),
            (fields.title, self.title.clone()),
            (fields.content, self.content.clone()),
            (
                fields.category,
                self.category_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            ),
            (texts.common.date, self.created_at.clone().unwrap_or_default()),
        ]
    }
}

/// One page of the list, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    pub title: &'static str,
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub window: Vec<usize>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl ListView {
    pub fn new<T: Tabular>(translator: Translator, page: &PageView<'_, T>) -> Self {
        let texts = translator.texts();
        Self {
            title: translator.entity(T::KIND).list,
            headers: T::columns(texts),
            rows: page.items.iter().map(|record| record.cells()).collect(),
            page: page.page,
            total_pages: page.total_pages,
            total_items: page.total_items,
            window: page.window(DEFAULT_PAGE_WINDOW),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }

    pub fn from_controller<T: Tabular>(controller: &CollectionController<T>) -> Self {
        Self::new(controller.translator(), &controller.view())
    }
}

pub fn render_list(view: &ListView, translator: Translator) -> String {
    let texts = translator.texts();
    let mut out = format!("{}\n", view.title);
    if view.rows.is_empty() {
        out.push_str(texts.common.no_results);
        out.push('\n');
        return out;
    }
    out.push_str(&render_table(&view.headers, &view.rows));
    out.push_str(&render_pagination(view, texts));
    out.push('\n');
    out
}

fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    out.push_str(&render_row(&header_cells, &widths));
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&rule.join("-+-"));
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row, &widths));
    }
    out
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{cell}{}", " ".repeat(fill))
}

/// `Page 2 / 4   « ‹ 1 [2] 3 4 › »   18 records`
pub fn render_pagination(view: &ListView, texts: &Translations) -> String {
    let labels = &texts.pagination;
    let page = view.page.to_string();
    let total = view.total_pages.to_string();
    let status = fill(labels.page_of, &[("page", &page), ("total", &total)]);

    let mut buttons = Vec::new();
    if view.has_previous {
        buttons.push(labels.first.to_string());
        buttons.push(labels.previous.to_string());
    }
    buttons.extend(view.window.iter().map(|n| {
        if *n == view.page {
            format!("[{n}]")
        } else {
            n.to_string()
        }
    }));
    if view.has_next {
        buttons.push(labels.next.to_string());
        buttons.push(labels.last.to_string());
    }

    let count = view.total_items.to_string();
    let total_line = fill(texts.common.total_records, &[("count", &count)]);
    format!("{status}   {}   {total_line}", buttons.join(" "))
}

pub fn render_details<T: Tabular>(title: &str, record: &T, translator: Translator) -> String {
    let fields = record.fields(translator.texts());
    let width = fields
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = format!("{title}\n");
    for (label, value) in fields {
        out.push_str(&format!("{}: {value}\n", pad(label, width)));
    }
    out
}
