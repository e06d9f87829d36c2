use super::keys::{
    CommonTexts, EntityTexts, NavTexts, PaginationTexts, PostFieldTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    nav: NavTexts {
        home: "Anasayfa",
        about: "Hakkımızda",
        blog: "Blog",
        newspaper: "Haberler",
        contact: "İletişim",
        login: "Giriş",
        register: "Üye Ol",
    },
    common: CommonTexts {
        id: "ID",
        date: "Tarih",
        create: "Ekle",
        create_all: "Çoklu veri ekle",
        clear: "Temizle",
        delete_all: "Hepsini Sil",
        update: "Güncelle",
        show: "Göster",
        delete: "Sil",
        actions: "Hareketler",
        close: "Kapat",
        saving: "Kaydediliyor...",
        select_category: "Seçim yapınız...",
        filter: "Filtrele (ID / İsim / Tarih)",
        no_results: "Filtreye uygun sonuç bulunamadı.",
        suggestions: "Kayıtlı isimler: {names}",
        total_records: "{count} kayıt",
        confirm_delete: "\"{name}\" silinsin mi?",
        irreversible: "Bu işlem geri alınamaz.",
        yes_answers: &["e", "evet", "y", "yes"],
        prompt_suffix: "[e/H]",
        busy: "Devam eden bir işlem var.",
        invalid_transition: "Bu pencere mevcut pencereden açılamaz.",
        not_found: "Bu kimliğe sahip kayıt bulunamadı.",
    },
    pagination: PaginationTexts {
        page_of: "Sayfa {page} / {total}",
        page_size: "Sayfa başına kayıt",
        first: "«",
        previous: "‹",
        next: "›",
        last: "»",
    },
    category: EntityTexts {
        list: "Blog Kategori Listesi",
        create: "Yeni Blog Kategorisi Oluştur",
        update: "Blog Kategorisini Güncelle",
        view: "Blog Kategorisi Detayı",
        name: "Blog Kategori Adı",
        created_toast: "Blog Kategori Oluşturuldu",
        updated_toast: "Blog Kategori Güncellendi",
        deleted_toast: "Kategori başarıyla silindi",
        fetch_failed: "Blog kategori listesi alınırken bir hata oluştu.",
        create_failed: "Kategori oluşturulurken bir hata oluştu.",
        update_failed: "Kategori güncellenirken bir hata oluştu.",
        delete_failed: "Kategori silinirken bir hata oluştu.",
        name_required: "Kategori adı zorunludur.",
    },
    post: EntityTexts {
        list: "Blog Listesi",
        create: "Blog oluştur",
        update: "Blog Güncellemesi",
        view: "Blog Gösterimi",
        name: "Blog Ana Başlık",
        created_toast: "Blog Oluşturuldu",
        updated_toast: "Blog Güncellendi",
        deleted_toast: "Blog başarıyla silindi",
        fetch_failed: "Blog listesi alınırken bir hata oluştu.",
        create_failed: "Blog oluşturulurken bir hata oluştu.",
        update_failed: "Blog güncellenirken bir hata oluştu.",
        delete_failed: "Blog silinirken bir hata oluştu.",
        name_required: "Ana başlık, alt başlık ve içerik zorunludur.",
    },
    post_fields: PostFieldTexts {
        header: "Blog Ana Başlık",
        title: "Blog Alt Başlık",
        content: "Blog İçerik",
        category: "Blog Kategori",
    },
};
