/// Sheet column headers as exported from the sign-up form.
/// These are the defaults for `ColumnMap`; a config file can override any of them.
pub const STORY_COLUMN: &str = "Your story";
pub const IDENTIFIER_COLUMN: &str = "Batch, branch, year (BITS ID says it all)";
pub const NAME_COLUMN: &str = "Name";
pub const EMAIL_COLUMN: &str = "Email";
pub const LINKEDIN_COLUMN: &str = "LinkedIn Profile Link";
pub const PHONE_COLUMN: &str =
    "Phone number or other ways to connect if not email (e.g.., to call up on WhatsApp, DM on LinkedIN etc)";

// Source locations
pub const DEFAULT_SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/1jVwCFKq-65EZOmSI12WVt1ol6RVTnFuLXCI5jObsnNs/export?format=csv&gid=1091959874";
pub const DEFAULT_SIGN_UP_FORM_URL: &str = "https://forms.gle/7zrNwL6mxYjmYfBeA";

// User-visible fallbacks
pub const STORIES_UNAVAILABLE: &str = "Unable to load stories at the moment.";
pub const CONTACTS_UNAVAILABLE: &str = "Unable to load contacts at the moment.";
pub const NO_STORIES_YET: &str = "No stories have been shared yet.";

/// Marker the highlight view rejects regardless of case.
pub const MISSING_MARKER: &str = "nan";

/// Cell values the sheet export reader treats as missing.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

pub const DEFAULT_MAIL_SUBJECT: &str = "Talk to your senior from BITS";
pub const DEFAULT_SAMPLE_SIZE: usize = 3;
/// Upper bound on how many seniors one introduction may reach.
pub const MAX_SAMPLE_SIZE: usize = 3;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_FETCH_TIMEOUT_SECONDS: u64 = 15;
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_TEMPLATE_DIR: &str = "site";
pub const DEFAULT_OUTPUT_DIR: &str = "docs";
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
