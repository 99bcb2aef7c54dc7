//! Card markup rendering and the gallery display surface.

use crate::model::ImageRecord;

/// Render records as HTML photo cards, in input order.
///
/// Pure and stateless: `render(a ++ b) == render(a) + render(b)`, so pages can
/// be rendered independently and appended.
pub fn render(items: &[ImageRecord]) -> String {
    let mut markup = String::new();
    for item in items {
        markup.push_str(&render_card(item));
        markup.push('\n');
    }
    markup
}

pub(crate) fn render_card(item: &ImageRecord) -> String {
    format!(
        r#"<a href="{full}"><div class="photo-card">
  <img src="{preview}" alt="{tags}" loading="lazy" class="img-card" />
  <div class="info">
    <p class="info-item"><b>Likes</b>{likes}</p>
    <p class="info-item"><b>Views</b>{views}</p>
    <p class="info-item"><b>Comments</b>{comments}</p>
    <p class="info-item"><b>Downloads</b>{downloads}</p>
  </div>
</div></a>"#,
        full = escape_html(&item.full_url),
        preview = escape_html(&item.preview_url),
        tags = escape_html(&item.tags),
        likes = item.likes,
        views = item.views,
        comments = item.comments,
        downloads = item.downloads,
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Display surface the controller renders into.
pub trait GallerySurface {
    /// Append a freshly fetched page, after everything already shown.
    fn append(&mut self, items: &[ImageRecord]);

    /// Remove every card.
    fn clear(&mut self);

    /// Number of cards currently shown.
    fn len(&self) -> usize;

    /// True when no cards are shown.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Gallery contents: the records for the terminal view plus the accumulated
/// card markup for export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gallery {
    items: Vec<ImageRecord>,
    markup: String,
}

impl Gallery {
    /// Empty gallery.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in display order.
    pub fn items(&self) -> &[ImageRecord] {
        &self.items
    }

    /// Record at `index`, if loaded.
    pub fn get(&self, index: usize) -> Option<&ImageRecord> {
        self.items.get(index)
    }

    /// Card markup for every record, in order.
    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Standalone HTML page wrapping the gallery markup.
    pub fn to_html_document(&self, title: &str) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
             <title>{title}</title>\n</head>\n<body>\n<div class=\"gallery\">\n{markup}</div>\n\
             </body>\n</html>\n",
            title = escape_html(title),
            markup = self.markup,
        )
    }
}

impl GallerySurface for Gallery {
    fn append(&mut self, items: &[ImageRecord]) {
        self.markup.push_str(&render(items));
        self.items.extend_from_slice(items);
    }

    fn clear(&mut self) {
        self.items.clear();
        self.markup.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
