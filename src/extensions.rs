//! File extension sets.

use ahash::AHashSet;

/// Extensions a media library recognizes, served from the CDN when no
/// whitelist is configured.
pub const MEDIA_EXTENSIONS: &[&str] = &[
    // Images
    "jpg", "jpeg", "jpe", "gif", "png", "bmp", "tiff", "tif", "ico", "webp", "svg", "svgz",
    // Video
    "asf", "asx", "wmv", "wmx", "wm", "avi", "divx", "flv", "mov", "qt", "mpeg", "mpg", "mpe",
    "mp4", "m4v", "ogv", "webm", "mkv", "3gp", "3gpp", "3g2", "3gp2",
    // Text
    "txt", "asc", "c", "cc", "h", "srt", "csv", "tsv", "ics", "rtx", "css", "htm", "html",
    "vtt", "dfxp",
    // Audio
    "mp3", "m4a", "m4b", "aac", "ra", "ram", "wav", "ogg", "oga", "flac", "mid", "midi", "wma",
    "wax", "mka",
    // Misc application
    "rtf", "js", "pdf", "swf", "class", "tar", "zip", "gz", "gzip", "rar", "7z", "exe", "psd",
    "xcf",
    // Office documents
    "doc", "pot", "pps", "ppt", "wri", "xla", "xls", "xlt", "xlw", "mdb", "mpp", "docx",
    "docm", "dotx", "dotm", "xlsx", "xlsm", "xlsb", "xltx", "xltm", "xlam", "pptx", "pptm",
    "ppsx", "ppsm", "potx", "potm", "ppam", "sldx", "sldm", "onetoc", "onetoc2", "onetmp",
    "onepkg", "oxps", "xps",
    // OpenDocument and iWork
    "odt", "odp", "ods", "odg", "odc", "odb", "odf", "wp", "wpd", "key", "numbers", "pages",
];

/// Web font formats, always part of the default whitelist.
pub const FONT_EXTENSIONS: &[&str] = &["eot", "ttf", "otf", "woff"];

/// Characters trimmed from both ends of an extension list.
const LIST_TRIM_CHARS: &[char] = &['\r', '\n', '\t', '\0', '\x0B', ' ', '|', ';', ','];

/// A set of lowercase file extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: AHashSet<String>,
}

impl ExtensionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an extension list such as `"jpg|png, gif;css"`.
    ///
    /// Entries are separated by runs of `|`, `;`, `,` or whitespace and are
    /// lowercased; duplicates collapse.
    pub fn parse(list: &str) -> Self {
        let list = list.to_lowercase();
        let mut set = Self::new();
        for ext in list
            .trim_matches(LIST_TRIM_CHARS)
            .split(|c: char| matches!(c, '|' | ';' | ',' | '\0') || c.is_whitespace())
            .filter(|e| !e.is_empty())
        {
            set.insert(ext);
        }
        set
    }

    /// The default whitelist: media extensions plus font formats.
    pub fn default_whitelist() -> Self {
        MEDIA_EXTENSIONS
            .iter()
            .chain(FONT_EXTENSIONS.iter())
            .copied()
            .collect()
    }

    /// Add an extension (lowercased, leading dots ignored).
    pub fn insert(&mut self, extension: &str) -> bool {
        let extension = extension.trim().trim_start_matches('.').to_lowercase();
        if extension.is_empty() {
            return false;
        }
        self.extensions.insert(extension)
    }

    /// Check if an extension (already lowercase) is in the set.
    pub fn contains(&self, extension: &str) -> bool {
        self.extensions.contains(extension)
    }

    /// Get the number of extensions.
    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    /// Extensions in sorted order.
    pub fn to_sorted_vec(&self) -> Vec<&str> {
        let mut list: Vec<&str> = self.extensions.iter().map(String::as_str).collect();
        list.sort_unstable();
        list
    }
}

impl<'a> FromIterator<&'a str> for ExtensionSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for ext in iter {
            set.insert(ext);
        }
        set
    }
}
