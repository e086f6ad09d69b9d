//! Pipeline stages for Markdown-to-document conversion.
//!
//! Each submodule implements exactly one transformation step. Keeping stages
//! separate makes each independently testable and lets us swap
//! implementations (e.g. a different PDF backend) without touching the
//! others.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ markdown ──▶ template ──▶ pdf
//! (file)    (HTML body)  (styled doc) (wkhtmltopdf)
//! ```
//!
//! 1. [`input`]    — read the Markdown source as UTF-8
//! 2. [`markdown`] — transform to an HTML body with heading anchors and
//!    optional table of contents
//! 3. [`template`] — wrap the body in one of the three style templates
//! 4. [`pdf`]      — drive the external renderer; the only stage that can
//!    fail recoverably

pub mod input;
pub mod markdown;
pub mod pdf;
pub mod template;
