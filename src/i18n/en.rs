use super::keys::{
    CommonTexts, EntityTexts, NavTexts, PaginationTexts, PostFieldTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    nav: NavTexts {
        home: "Home",
        about: "About",
        blog: "Blog",
        newspaper: "Newspaper",
        contact: "Contact",
        login: "Login",
        register: "Register",
    },
    common: CommonTexts {
        id: "ID",
        date: "Date",
        create: "Create",
        create_all: "Multiple data create",
        clear: "Clear",
        delete_all: "All Delete",
        update: "Update",
        show: "Show",
        delete: "Delete",
        actions: "Actions",
        close: "Close",
        saving: "Saving...",
        select_category: "Select Category...",
        filter: "Filter (ID / Name / Date)",
        no_results: "No results match the filter.",
        suggestions: "Known names: {names}",
        total_records: "{count} records",
        confirm_delete: "Delete \"{name}\"?",
        irreversible: "This action cannot be undone.",
        yes_answers: &["y", "yes"],
        prompt_suffix: "[y/N]",
        busy: "Another operation is still in progress.",
        invalid_transition: "That dialog cannot be opened from the current one.",
        not_found: "No record with that id.",
    },
    pagination: PaginationTexts {
        page_of: "Page {page} / {total}",
        page_size: "Records per page",
        first: "«",
        previous: "‹",
        next: "›",
        last: "»",
    },
    category: EntityTexts {
        list: "Blog Category List",
        create: "Create New Blog Category",
        update: "Update Blog Category",
        view: "Blog Category Details",
        name: "Blog Category Name",
        created_toast: "Blog category created",
        updated_toast: "Blog category updated",
        deleted_toast: "Category deleted successfully",
        fetch_failed: "An error occurred while fetching the blog category list.",
        create_failed: "An error occurred while creating the category.",
        update_failed: "An error occurred while updating the category.",
        delete_failed: "An error occurred while deleting the category.",
        name_required: "Category name is required.",
    },
    post: EntityTexts {
        list: "Blog List",
        create: "Create New Blog",
        update: "Update Blog",
        view: "Blog Details",
        name: "Blog Header",
        created_toast: "Blog created",
        updated_toast: "Blog updated",
        deleted_toast: "Blog deleted successfully",
        fetch_failed: "An error occurred while fetching the blog list.",
        create_failed: "An error occurred while creating the blog.",
        update_failed: "An error occurred while updating the blog.",
        delete_failed: "An error occurred while deleting the blog.",
        name_required: "Header, title and content are required.",
    },
    post_fields: PostFieldTexts {
        header: "Blog Header",
        title: "Blog Title",
        content: "Blog Content",
        category: "Blog Category",
    },
};
