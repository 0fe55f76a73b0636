//! Localised strings for every user-visible label.
//!
//! Each [`Text`] key carries an English and an Indonesian rendering. Templates
//! use `{{name}}` placeholders filled by [`format_translation`].

use api::ValidationError;
use store::Language;

macro_rules! texts {
    ($($key:ident => $en:literal, $id:literal;)*) => {
        /// Key of a localised string.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Text {
            $($key,)*
        }

        impl Text {
            pub const ALL: &'static [Text] = &[$(Text::$key,)*];

            pub fn get(self, language: Language) -> &'static str {
                match (self, language) {
                    $(
                        (Text::$key, Language::En) => $en,
                        (Text::$key, Language::Id) => $id,
                    )*
                }
            }
        }
    };
}

texts! {
    // Navigation
    PersonalNotes => "Personal Notes", "Catatan Pribadi";
    AllNotes => "All Notes", "Semua Catatan";
    Archives => "Archives", "Arsip";
    Login => "Login", "Masuk";
    Register => "Register", "Daftar";
    Logout => "Logout", "Keluar";
    SwitchToLight => "Switch to light mode", "Ganti ke mode terang";
    SwitchToDark => "Switch to dark mode", "Ganti ke mode gelap";
    SwitchLanguage => "Ganti ke Bahasa Indonesia", "Switch to English";

    // Login
    SignInToAccount => "Sign In to Your Account", "Masuk ke Akun Anda";
    WelcomeBack => "Welcome back! Please sign in to access your personal notes.",
        "Selamat datang kembali! Silakan masuk untuk mengakses catatan pribadi Anda.";
    EmailAddress => "Email Address", "Alamat Email";
    Password => "Password", "Kata Sandi";
    SignIn => "Sign In", "Masuk";
    SigningIn => "Signing in...", "Sedang masuk...";
    DontHaveAccount => "Don't have an account yet?", "Belum punya akun?";
    CreateNewAccount => "Create New Account", "Buat Akun Baru";
    EnterEmailAddress => "Enter your email address", "Masukkan alamat email Anda";
    EnterPassword => "Enter your password", "Masukkan kata sandi Anda";
    ShowPassword => "Show password", "Tampilkan kata sandi";
    HidePassword => "Hide password", "Sembunyikan kata sandi";
    LoginFailed => "Login Failed", "Login Gagal";
    LoginFailedMessage => "Login failed. Please try again.", "Login gagal. Silakan coba lagi.";
    LoginSuccessful => "Login Successful", "Login Berhasil";
    WelcomeBackUser => "Welcome back, {{name}}!", "Selamat datang kembali, {{name}}!";

    // Registration
    CreateYourAccount => "Create Your Account", "Buat Akun Anda";
    JoinToday => "Join us today and start organizing your thoughts with personal notes.",
        "Bergabunglah dengan kami hari ini dan mulai mengatur pikiran Anda dengan catatan pribadi.";
    FullName => "Full Name", "Nama Lengkap";
    ConfirmPasswordLabel => "Confirm Password", "Konfirmasi Kata Sandi";
    CreateAccount => "Create Account", "Buat Akun";
    CreatingAccount => "Creating Account...", "Membuat Akun...";
    AlreadyHaveAccount => "Already have an account?", "Sudah punya akun?";
    SignInToYourAccount => "Sign In to Your Account", "Masuk ke Akun Anda";
    EnterFullName => "Enter your full name", "Masukkan nama lengkap Anda";
    CreateStrongPassword => "Create a strong password", "Buat kata sandi yang kuat";
    ConfirmPassword => "Confirm your password", "Konfirmasi kata sandi Anda";
    MinimumCharsRequired => "Minimum {{count}} characters required", "Minimum {{count}} karakter diperlukan";
    RegisterSuccessful => "Registration Successful", "Pendaftaran Berhasil";
    RegisterSuccessMessage => "Your account has been created. Please sign in.",
        "Akun Anda berhasil dibuat. Silakan masuk.";
    RegisterFailed => "Registration Failed", "Pendaftaran Gagal";
    RegisterFailedMessage => "Registration failed. Please try again.", "Pendaftaran gagal. Silakan coba lagi.";

    // Validation
    ValidationError => "Validation Error", "Kesalahan Validasi";
    PleaseEnterEmail => "Please enter your email address", "Silakan masukkan alamat email Anda";
    PleaseEnterValidEmail => "Please enter a valid email address", "Silakan masukkan alamat email yang valid";
    PleaseEnterPassword => "Please enter your password", "Silakan masukkan kata sandi Anda";
    PleaseEnterName => "Please enter your full name", "Silakan masukkan nama lengkap Anda";
    PleaseEnterTitle => "Please enter a note title", "Silakan masukkan judul catatan";
    PleaseEnterContent => "Please enter note content", "Silakan masukkan isi catatan";
    NameTooShort => "Name must be at least {{count}} characters long", "Nama harus minimal {{count}} karakter";
    PasswordTooShort => "Password must be at least {{count}} characters long", "Kata sandi harus minimal {{count}} karakter";
    PasswordMismatch => "Passwords do not match", "Kata sandi tidak cocok";
    TitleTooLong => "Title must be at most {{count}} characters", "Judul maksimal {{count}} karakter";

    // Add note
    AddNewNote => "Add New Note", "Tambah Catatan Baru";
    NoteTitle => "Note Title", "Judul Catatan";
    NoteContent => "Note Content", "Isi Catatan";
    CreateNote => "Create Note", "Buat Catatan";
    Creating => "Creating...", "Membuat...";
    Cancel => "Cancel", "Batal";
    CharactersRemaining => "{{count}} characters remaining", "{{count}} karakter tersisa";
    EnterNoteTitle => "Enter note title...", "Masukkan judul catatan...";
    StartWritingNote => "Start writing your note here...", "Mulai menulis catatan Anda di sini...";
    Preview => "Preview", "Pratinjau";
    ConfirmCancelAddNote => "Are you sure you want to cancel? Your changes will be lost.",
        "Apakah Anda yakin ingin membatalkan? Perubahan Anda akan hilang.";
    DiscardChanges => "Discard Changes", "Buang Perubahan";
    NoteCreated => "Note created successfully!", "Catatan berhasil dibuat!";
    FailedToCreateNote => "Failed to create note. Please try again.", "Gagal membuat catatan. Silakan coba lagi.";

    // Note actions
    ReadMore => "Read more", "Baca selengkapnya";
    Archive => "Archive", "Arsipkan";
    Unarchive => "Unarchive", "Batalkan Arsip";
    Delete => "Delete", "Hapus";
    Processing => "Processing...", "Memproses...";
    Active => "Active", "Aktif";
    Archived => "Archived", "Diarsipkan";
    DeleteNote => "Delete Note", "Hapus Catatan";
    ArchiveNote => "Archive Note", "Arsipkan Catatan";
    UnarchiveNote => "Unarchive Note", "Batalkan Arsip Catatan";
    ConfirmDeleteNote => "This action cannot be undone. Are you sure you want to delete this note?",
        "Tindakan ini tidak dapat dibatalkan. Apakah Anda yakin ingin menghapus catatan ini?";
    ConfirmArchiveNote => "Are you sure you want to {{action}} this note?", "Apakah Anda yakin ingin {{action}} catatan ini?";
    NoteDeleted => "Note deleted successfully!", "Catatan berhasil dihapus!";
    NoteArchived => "Note archived successfully!", "Catatan berhasil diarsipkan!";
    NoteUnarchived => "Note unarchived successfully!", "Catatan berhasil dibatalkan dari arsip!";
    FailedToDeleteNote => "Failed to delete note. Please try again.", "Gagal menghapus catatan. Silakan coba lagi.";
    FailedToArchiveNote => "Failed to archive note. Please try again.", "Gagal mengarsipkan catatan. Silakan coba lagi.";
    FailedToUnarchiveNote => "Failed to unarchive note. Please try again.", "Gagal membatalkan arsip catatan. Silakan coba lagi.";
    DeleteNotePermanently => "Delete note permanently", "Hapus catatan secara permanen";

    // Lists
    NoNotesFound => "No notes found", "Tidak ada catatan ditemukan";
    NoActiveNotes => "You don't have any active notes yet. Create your first note!",
        "Anda belum memiliki catatan aktif. Buat catatan pertama Anda!";
    NoArchivedNotes => "You don't have any archived notes yet. Archive notes to organize your workspace!",
        "Anda belum memiliki catatan yang diarsipkan. Arsipkan catatan untuk mengatur ruang kerja Anda!";
    UseAddButton => "Use the + button to create your first note", "Gunakan tombol + untuk membuat catatan pertama Anda";
    ShowingActiveNotes => "Showing {{count}} active note{{plural}}", "Menampilkan {{count}} catatan aktif";
    ShowingArchivedNotes => "Showing {{count}} archived note{{plural}}", "Menampilkan {{count}} catatan arsip";
    NoActiveNotesFound => "No active notes found", "Tidak ada catatan aktif ditemukan";
    ArchiveEmpty => "Archive is empty", "Arsip kosong";
    NoNotesMatchSearch => "No notes match \"{{keyword}}\". Try a different search term.",
        "Tidak ada catatan yang cocok dengan \"{{keyword}}\". Coba kata kunci lain.";
    NoArchivedNotesMatchSearch => "No archived notes match \"{{keyword}}\". Try a different search term.",
        "Tidak ada catatan arsip yang cocok dengan \"{{keyword}}\". Coba kata kunci lain.";
    ViewActiveNotes => "View Active Notes", "Lihat Catatan Aktif";
    LoadingNotes => "Loading your notes...", "Memuat catatan Anda...";
    LoadingArchivedNotes => "Loading archived notes...", "Memuat catatan yang diarsipkan...";
    ErrorLoadingNotes => "Error Loading Notes", "Error Memuat Catatan";
    ErrorLoadingArchivedNotes => "Error Loading Archived Notes", "Error Memuat Catatan Arsip";
    TryAgain => "Try Again", "Coba Lagi";
    CreateNewNote => "Create new note", "Buat catatan baru";

    // Filter controls
    SearchNotes => "Search notes...", "Cari catatan...";
    SearchArchived => "Search archived notes...", "Cari catatan arsip...";
    ClearSearch => "Clear search", "Hapus pencarian";
    FilterByDate => "Filter by Date", "Filter berdasarkan Tanggal";
    FromDate => "From Date:", "Dari Tanggal:";
    ToDate => "To Date:", "Sampai Tanggal:";
    ApplyFilter => "Apply Filter", "Terapkan Filter";
    Reset => "Reset", "Reset";
    NewestFirst => "Newest First", "Terbaru Dulu";
    OldestFirst => "Oldest First", "Terlama Dulu";
    SortByNewest => "Sort by newest first", "Urutkan berdasarkan terbaru";
    SortByOldest => "Sort by oldest first", "Urutkan berdasarkan terlama";

    // Detail
    Back => "Back", "Kembali";
    BackToNotes => "Back to Notes", "Kembali ke Catatan";
    NoteNotFound => "Note not found", "Catatan tidak ditemukan";
    NoteNotFoundDesc => "The note you're looking for doesn't exist or has been deleted.",
        "Catatan yang Anda cari tidak ada atau telah dihapus.";

    // Not found
    PageNotFound => "Oops! Page Not Found", "Ups! Halaman Tidak Ditemukan";
    PageNotFoundDesc => "The page you're looking for doesn't exist or may have been moved.",
        "Halaman yang Anda cari tidak ada atau mungkin telah dipindahkan.";
    RequestedUrl => "Requested URL:", "URL yang Diminta:";
    GoToHomepage => "Go to Homepage", "Ke Beranda";
    GoBack => "Go Back", "Kembali";

    // Dialogs and loading
    Success => "Success", "Berhasil";
    Error => "Error", "Error";
    Warning => "Warning", "Peringatan";
    Information => "Information", "Informasi";
    ConfirmAction => "Confirm Action", "Konfirmasi Tindakan";
    Confirm => "Confirm", "Konfirmasi";
    Ok => "OK", "OK";
    Close => "Close", "Tutup";
    Loading => "Loading...", "Memuat...";
    CheckingAuth => "Checking authentication...", "Memeriksa autentikasi...";
}

/// Look up `key` and fill its placeholders.
pub fn tr(language: Language, key: Text, params: &[(&str, &str)]) -> String {
    format_translation(key.get(language), params)
}

/// Replace every `{{name}}` with its value. When a `count` parameter is given,
/// `{{plural}}` becomes `""` for a count of exactly 1 and `"s"` otherwise.
pub fn format_translation(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        result = result.replace(&format!("{{{{{name}}}}}"), value);
    }
    if let Some((_, count)) = params.iter().find(|(name, _)| *name == "count") {
        let plural = if count.trim() == "1" { "" } else { "s" };
        result = result.replace("{{plural}}", plural);
    }
    result
}

/// Localised message for a validation failure.
pub fn validation_message(language: Language, error: &ValidationError) -> String {
    let (key, count) = match *error {
        ValidationError::EmptyTitle => (Text::PleaseEnterTitle, None),
        ValidationError::TitleTooLong { max } => (Text::TitleTooLong, Some(max)),
        ValidationError::EmptyBody => (Text::PleaseEnterContent, None),
        ValidationError::EmptyName => (Text::PleaseEnterName, None),
        ValidationError::NameTooShort { min } => (Text::NameTooShort, Some(min)),
        ValidationError::EmptyEmail => (Text::PleaseEnterEmail, None),
        ValidationError::InvalidEmail => (Text::PleaseEnterValidEmail, None),
        ValidationError::EmptyPassword => (Text::PleaseEnterPassword, None),
        ValidationError::PasswordTooShort { min } => (Text::PasswordTooShort, Some(min)),
        ValidationError::PasswordMismatch => (Text::PasswordMismatch, None),
    };
    match count {
        Some(n) => tr(language, key, &[("count", &n.to_string())]),
        None => key.get(language).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_both_languages() {
        for key in Text::ALL {
            assert!(!key.get(Language::En).is_empty(), "{key:?} en");
            assert!(!key.get(Language::Id).is_empty(), "{key:?} id");
        }
    }

    #[test]
    fn test_lookup_follows_language() {
        assert_eq!(Text::Archives.get(Language::En), "Archives");
        assert_eq!(Text::Archives.get(Language::Id), "Arsip");
    }

    #[test]
    fn test_placeholders_are_replaced_everywhere() {
        assert_eq!(
            format_translation("{{a}} and {{a}} or {{b}}", &[("a", "x"), ("b", "y")]),
            "x and x or y"
        );
    }

    #[test]
    fn test_plural_follows_count() {
        let one = tr(Language::En, Text::ShowingActiveNotes, &[("count", "1")]);
        let many = tr(Language::En, Text::ShowingActiveNotes, &[("count", "3")]);
        let none = tr(Language::En, Text::ShowingActiveNotes, &[("count", "0")]);
        assert_eq!(one, "Showing 1 active note");
        assert_eq!(many, "Showing 3 active notes");
        assert_eq!(none, "Showing 0 active notes");
    }

    #[test]
    fn test_plural_untouched_without_count() {
        assert_eq!(format_translation("note{{plural}}", &[]), "note{{plural}}");
    }

    #[test]
    fn test_unknown_placeholder_is_left_alone() {
        assert_eq!(
            tr(Language::En, Text::NoNotesMatchSearch, &[]),
            "No notes match \"{{keyword}}\". Try a different search term."
        );
    }

    #[test]
    fn test_validation_messages_are_localised() {
        assert_eq!(
            validation_message(Language::En, &ValidationError::PasswordTooShort { min: 6 }),
            "Password must be at least 6 characters long"
        );
        assert_eq!(
            validation_message(Language::Id, &ValidationError::EmptyTitle),
            "Silakan masukkan judul catatan"
        );
    }
}
