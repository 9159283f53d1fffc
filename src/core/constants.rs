/// Application-wide constants to avoid magic values throughout the codebase.
///
/// This module centralizes the literal values the two tools are contractually
/// bound to: the image extension allow-list, the report file names, the
/// accepted confirmation tokens and the replacer snippets.
/// File extension constants
pub mod extensions {
    /// Extension of the files scanned for image references
    pub const HTML: &str = "html";

    /// Image extensions recognized inside the uploads directory
    /// (compared lower-cased)
    pub const IMAGE: [&str; 10] = [
        "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "ico", "tiff", "tif",
    ];
}

/// Uploads directory constants
pub mod uploads {
    /// Default uploads directory, resolved under the site directory
    pub const DEFAULT_DIR: &str = "uploads";
}

/// Report file constants
pub mod reports {
    /// Log written after a confirmed deletion run
    pub const DELETION_LOG: &str = "imagens_deletadas_log.txt";

    /// List written when deletion is declined
    pub const UNUSED_LIST: &str = "imagens_nao_utilizadas.txt";
}

/// Confirmation prompt constants
pub mod prompt {
    /// Answers accepted as "yes", compared after trim + lowercase.
    /// The tool grew up on a Portuguese site; both languages stay accepted.
    pub const AFFIRMATIVE: [&str; 4] = ["s", "sim", "y", "yes"];

    /// Question printed before the blocking confirmation read
    pub const QUESTION: &str = "Delete these images permanently? (s/N): ";
}

/// Replacer snippet constants
pub mod snippets {
    /// Snippet the replacer searches for, verbatim
    pub const OLD_HEADER: &str =
        r#"<img class="header-img" src="header_12_2.jpg" alt="Cabeçalho Dust Adventure">"#;

    /// Replacement: the same header image wrapped in a home link
    pub const NEW_HEADER: &str = r#"<a href="/"><img class="header-img" src="header_12_2.jpg" alt="Cabeçalho Dust Adventure"></a>"#;
}

/// Config file constants
pub mod config_files {
    /// Config file name looked up in the working directory and parents
    pub const STANDARD_NAME: &str = ".sitesweep.toml";

    /// How many parent directories are searched for a config file
    pub const PARENT_SEARCH_LEVELS: usize = 3;
}

/// Display and formatting constants
pub mod display {
    /// Emoji for the scan header
    pub const SCAN_EMOJI: &str = "🔍";
    /// Emoji for directory information
    pub const FOLDER_EMOJI: &str = "📂";
    /// Emoji for per-file progress
    pub const FILE_EMOJI: &str = "📄";
    /// Emoji for summary counts
    pub const STATS_EMOJI: &str = "📊";
    /// Emoji for deletion candidates
    pub const TRASH_EMOJI: &str = "🗑️";
    /// Emoji for success status
    pub const SUCCESS_EMOJI: &str = "✅";
    /// Emoji for warning status
    pub const WARNING_EMOJI: &str = "⚠️";
    /// Emoji for error status
    pub const ERROR_EMOJI: &str = "❌";
    /// Emoji for saved report files
    pub const SAVE_EMOJI: &str = "💾";
}
