use regex::Regex;
use std::sync::LazyLock;

/// Image extensions recognised by both extraction strategies, lowercase and
/// without the leading dot.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

/// Label element used by the GitHub web UI file tree for each item name.
pub const DEFAULT_LABEL_SELECTOR: &str = "span.PRIVATE_TreeView-item-content-text";

const EXTENSION_GROUP: &str = "(?i:jpg|jpeg|png|gif|webp)";

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

regex!(TAG_REGEX, r"<[^>]+>");
regex!(BLANK_LINES_REGEX, r"\s*\n\s*");
// Whitespace between the date and time may not cross a line: every text node
// ends up on its own line once the tags are stripped.
regex!(TIMESTAMPED_FILENAME_REGEX, format!(r"\b\d{{8}}[^\S\n]+\d{{6}}\.{}\b", EXTENSION_GROUP).as_str());
regex!(
    LOOSE_FILENAME_REGEX,
    format!(r"\b\w*\d{{4}}[-_]?\d{{2}}[-_]?\d{{2}}[^<>\n]*\.{}\b", EXTENSION_GROUP).as_str()
);
regex!(COMPACT_DATE_REGEX, r"(\d{4})(\d{2})(\d{2})");
regex!(DELIMITED_DATE_REGEX, r"(\d{4})[-_](\d{2})[-_](\d{2})");
