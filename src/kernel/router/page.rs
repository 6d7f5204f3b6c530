use crate::core::AppContext;
use crate::kernel::services::ports::FileError;
use crate::models::Buffer;

pub const TEMPLATE_FILE: &str = "edit.html";
pub const BUILTIN_TEMPLATE: &str = include_str!("../../../assets/edit.html");

const INSERTION_POINT: &str = "</textarea>";

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

/// The editor shell, from the asset root when present.
pub fn load_template(ctx: &AppContext) -> String {
    let path = ctx.config().asset_root.join(TEMPLATE_FILE);
    match ctx.files().read_file(&path) {
        Ok(template) => template,
        Err(FileError::NotFound(_)) => BUILTIN_TEMPLATE.to_string(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "editor template unreadable, using built-in");
            BUILTIN_TEMPLATE.to_string()
        }
    }
}

/// Splices `text` into the template's textarea and tags the page with the
/// buffer's id. `None` if the template has no textarea.
pub fn render(template: &str, buffer: &Buffer, text: &str) -> Option<String> {
    let at = template.find(INSERTION_POINT)?;
    let (head, tail) = template.split_at(at);
    let tail = &tail[INSERTION_POINT.len()..];

    let mut page = String::with_capacity(template.len() + text.len() + 64);
    page.push_str(head);
    page.push_str(&escape_html(text));
    page.push_str(INSERTION_POINT);
    page.push_str(&format!(
        "<script>window.hmdBufferId=\"{}\";</script>",
        buffer.id()
    ));
    page.push_str(tail);
    Some(page)
}

/// Current text of the buffer's file, or the seed heading if the file does
/// not exist yet. `None` if it exists but cannot be read.
pub fn document_text(ctx: &AppContext, buffer: &Buffer) -> Option<String> {
    match ctx.files().read_file(buffer.path()) {
        Ok(text) => Some(text),
        Err(FileError::NotFound(_)) => Some(buffer.seed_text()),
        Err(e) => {
            tracing::warn!(path = %buffer.path().display(), error = %e, "document unreadable");
            None
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/router/page.rs"]
mod tests;
