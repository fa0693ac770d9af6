//! Page category constants for tab page standardization.
//!
//! Every page rendered inside a tab declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"closings--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator makes the entity name searchable: copy the id from the
//! browser DOM Inspector, paste into IDE search, and you land in the
//! matching `domain/` directory.

/// List of records — table with filters/pagination.
pub const PAGE_CAT_LIST: &str = "list";

/// Detail / edit form for a single record.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// System page (session, errors).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Intentionally custom design — free-form, exempt from structural checks.
pub const PAGE_CAT_CUSTOM: &str = "custom";
