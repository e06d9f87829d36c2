//! Translation key layout.
//!
//! Entity-specific wording (titles, toasts, error banners) lives in
//! [`EntityTexts`], one table per collection. Templates use `{placeholder}`
//! markers filled by [`super::fill`].

pub struct Translations {
    pub nav: NavTexts,
    pub common: CommonTexts,
    pub pagination: PaginationTexts,
    pub category: EntityTexts,
    pub post: EntityTexts,
    pub post_fields: PostFieldTexts,
}

pub struct NavTexts {
    pub home: &'static str,
    pub about: &'static str,
    pub blog: &'static str,
    pub newspaper: &'static str,
    pub contact: &'static str,
    pub login: &'static str,
    pub register: &'static str,
}

pub struct CommonTexts {
    pub id: &'static str,
    pub date: &'static str,
    pub create: &'static str,
    pub create_all: &'static str,
    pub clear: &'static str,
    pub delete_all: &'static str,
    pub update: &'static str,
    pub show: &'static str,
    pub delete: &'static str,
    pub actions: &'static str,
    pub close: &'static str,
    pub saving: &'static str,
    pub select_category: &'static str,
    /// Label of the search box (id / name / date).
    pub filter: &'static str,
    pub no_results: &'static str,
    /// `{names}`
    pub suggestions: &'static str,
    /// `{count}`
    pub total_records: &'static str,
    /// `{name}`
    pub confirm_delete: &'static str,
    pub irreversible: &'static str,
    /// Accepted answers for an interactive yes/no prompt, lowercase.
    pub yes_answers: &'static [&'static str],
    pub prompt_suffix: &'static str,
    pub busy: &'static str,
    pub invalid_transition: &'static str,
    pub not_found: &'static str,
}

pub struct PaginationTexts {
    /// `{page}`, `{total}`
    pub page_of: &'static str,
    pub page_size: &'static str,
    pub first: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
    pub last: &'static str,
}

pub struct EntityTexts {
    pub list: &'static str,
    pub create: &'static str,
    pub update: &'static str,
    pub view: &'static str,
    pub name: &'static str,
    pub created_toast: &'static str,
    pub updated_toast: &'static str,
    pub deleted_toast: &'static str,
    pub fetch_failed: &'static str,
    pub create_failed: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
    pub name_required: &'static str,
}

pub struct PostFieldTexts {
    pub header: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub category: &'static str,
}
