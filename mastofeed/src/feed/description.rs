//! Description builder
//!
//! Turns a post's body and image attachments into the description fragment
//! of one output format. Both formats share the same assembly; they differ
//! only in the final wrapping.

use askama_escape::{escape, Html};

use crate::domain::entities::{OutputFormat, Post};

/// Shown when a post has neither text nor images
pub const NO_CONTENT: &str = "<em>No content</em>";

pub fn build_description(post: &Post, format: OutputFormat) -> String {
    let mut buf = String::new();

    if post.has_body() {
        buf.push_str(&post.content);
    }

    let mut has_images = false;
    for image in post.images() {
        has_images = true;
        buf.push_str(&format!(
            r#"<br><img src="{}" alt="{}">"#,
            escape(&image.url, Html),
            escape(&image.description, Html)
        ));
    }

    if !post.has_body() && !has_images {
        buf.push_str(NO_CONTENT);
    }

    match format {
        OutputFormat::Xml => cdata(&buf),
        OutputFormat::Html => buf,
    }
}

/// Wrap in a CDATA section; an embedded `]]>` is split across two sections
fn cdata(s: &str) -> String {
    format!("<![CDATA[{}]]>", s.replace("]]>", "]]]]><![CDATA[>"))
}
