//! 内置 HTML 渲染器

use std::fmt::Write;

use crate::error::{AppError, Result};
use crate::models::story::Story;
use crate::render::{Renderer, ViewModel};

pub const INDEX_VIEW: &str = "index";
pub const TEXT_VIEW: &str = "text";

/// HTML 渲染器
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    site_title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new("Stories")
    }
}

impl HtmlRenderer {
    pub fn new(site_title: &str) -> Self {
        Self {
            site_title: site_title.to_string(),
        }
    }

    fn layout(&self, title: &str, content: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape(title),
            content
        )
    }

    fn render_index(&self, stories: &[std::sync::Arc<Story>]) -> String {
        let mut content = format!("<h1>{}</h1>\n<ul>\n", escape(&self.site_title));
        for story in stories {
            let _ = writeln!(
                content,
                "<li><a href=\"/text/{}\">{}</a></li>",
                story.id(),
                escape(story.title())
            );
        }
        content.push_str("</ul>\n");
        self.layout(&self.site_title, &content)
    }

    fn render_text(&self, story: &Story) -> String {
        let content = format!(
            "<h1>{}</h1>\n{}<p><a href=\"/\">Back</a></p>\n",
            escape(story.title()),
            rich_text(story.body())
        );
        self.layout(story.title(), &content)
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &str, model: &ViewModel) -> Result<String> {
        match view {
            INDEX_VIEW => Ok(self.render_index(model.stories("texts")?)),
            TEXT_VIEW => Ok(self.render_text(model.story("text")?)),
            other => Err(AppError::Render(format!("unknown view `{}`", other))),
        }
    }
}

/// 转义 HTML 特殊字符
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// 正文排版：空行分段，单个换行转为 `<br>`
pub fn rich_text(body: &str) -> String {
    let normalized = body.replace("\r\n", "\n");
    let mut out = String::new();
    for paragraph in normalized.split("\n\n") {
        let lines: Vec<String> = paragraph
            .lines()
            .map(str::trim_end)
            .filter(|l| !l.is_empty())
            .map(escape)
            .collect();
        if lines.is_empty() {
            continue;
        }
        let _ = writeln!(out, "<p>{}</p>", lines.join("<br>\n"));
    }
    out
}
