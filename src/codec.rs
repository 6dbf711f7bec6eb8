//! Record encoding: escape-then-substitute templating and file naming.
//!
//! A snapshot becomes a persisted record in two steps. Every field value is
//! first wrapped in [`Escaped`], whose only constructor applies XML escaping,
//! and the [`LogSpec`] template renderer accepts nothing but [`Escaped`]
//! values. A raw string therefore cannot reach the output, however hostile
//! its contents.

use std::{borrow::Cow, fmt};

use thiserror::Error;

use crate::snapshot::ErrorSnapshot;

/// Default persisted-record template. Embedding applications may replace it
/// via [`LogSpec::custom`], but this layout is the contract: identical field
/// values must reproduce it byte for byte.
const DEFAULT_TEMPLATE: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>

<error_log_entry>
    <timestamp>{timestamp}</timestamp>
    <app_name>{app_name}</app_name>
    <app_version>{app_version}</app_version>
    <app_license>{app_license}</app_license>
    <platform>{platform}</platform>
    <exc_type>{exc_type}</exc_type>
    <exc_obj>{exc_obj}</exc_obj>
    <active_form>{active_form}</active_form>
    <active_control>{active_control}</active_control>
    <tb_msg>{tb_msg}</tb_msg>
    <last_callafter_stack>{last_callafter_stack}</last_callafter_stack>
    <user_notes>{user_notes}</user_notes>
</error_log_entry>
"#;

/// Errors produced while rendering a record template.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CodecError {
    /// The template names a placeholder the snapshot does not provide.
    #[error("unknown placeholder `{0}` in log spec")]
    UnknownPlaceholder(String),
    /// A `{` placeholder opener has no matching `}`.
    #[error("unterminated placeholder in log spec")]
    UnterminatedPlaceholder,
}

/// A field value with XML escaping already applied.
///
/// `&`, `<`, and `>` become `&amp;`, `&lt;`, and `&gt;`. Construction is the
/// only way in, so holding an `Escaped` proves the escaping happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Escaped(String);

impl Escaped {
    /// Escape `raw` for embedding in record element text.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        let mut escaped = String::with_capacity(raw.len());
        for ch in raw.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(ch),
            }
        }
        Self(escaped)
    }

    /// View the escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str { &self.0 }
}

impl fmt::Display for Escaped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.0) }
}

/// Invert [`Escaped::new`], recovering the original field text from a record.
#[must_use]
pub fn unescape(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Persisted-record template with `{name}` placeholders.
#[derive(Debug, Clone)]
pub struct LogSpec {
    template: Cow<'static, str>,
}

impl Default for LogSpec {
    fn default() -> Self {
        Self {
            template: Cow::Borrowed(DEFAULT_TEMPLATE),
        }
    }
}

impl LogSpec {
    /// Use a host-supplied template in place of the default record layout.
    #[must_use]
    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: Cow::Owned(template.into()),
        }
    }

    /// Substitute `fields` into the template.
    ///
    /// Rendering is pure: the same fields and template always produce
    /// byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the template references an unknown
    /// placeholder or leaves one unterminated.
    pub fn render(&self, fields: &[(&'static str, Escaped)]) -> Result<String, CodecError> {
        let template = self.template.as_ref();
        let mut out = String::with_capacity(template.len() + 256);
        let mut rest = template;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let Some(end) = after.find('}') else {
                return Err(CodecError::UnterminatedPlaceholder);
            };
            let name = &after[..end];
            let (_, value) = fields
                .iter()
                .find(|(field, _)| *field == name)
                .ok_or_else(|| CodecError::UnknownPlaceholder(name.to_owned()))?;
            out.push_str(value.as_str());
            rest = &after[end + 1..];
        }
        out.push_str(rest);
        Ok(out)
    }
}

/// Renders snapshots into records and names the file each record lands in.
#[derive(Debug, Clone, Default)]
pub struct RecordCodec {
    spec: LogSpec,
}

impl RecordCodec {
    /// Build a codec around the given template.
    #[must_use]
    pub fn new(spec: LogSpec) -> Self { Self { spec } }

    /// Encode `snapshot` into record text, escaping every field value.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the configured template is malformed or
    /// references an unknown field.
    pub fn encode(&self, snapshot: &ErrorSnapshot) -> Result<String, CodecError> {
        let fields = snapshot
            .fields()
            .map(|(name, value)| (name, Escaped::new(&value)));
        self.spec.render(&fields)
    }

    /// Unique file name for the record, derived from the capture instant.
    ///
    /// Two captures landing in the same microsecond collide; that window is
    /// an accepted limitation of the naming policy.
    #[must_use]
    pub fn file_name(&self, snapshot: &ErrorSnapshot) -> String {
        let instant = snapshot.captured_at;
        format!(
            "error_{}.{:06}.entry",
            instant.timestamp(),
            instant.timestamp_subsec_micros()
        )
    }
}
