use banner_shared::{ConsoleSink, TitleStore};
use web_sys::Document;

fn document() -> Option<Document> {
    web_sys::window().and_then(|window| window.document())
}

/// `document.title` of the current page.
///
/// Without a window or document every read yields an empty title and
/// every write is dropped with a warning.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentTitle;

impl TitleStore for DocumentTitle {
    fn title(&self) -> String {
        match document() {
            Some(doc) => doc.title(),
            None => {
                log::warn!("⚠️ DocumentTitle: no document available, reading empty title");
                String::new()
            }
        }
    }

    fn set_title(&mut self, title: &str) {
        match document() {
            Some(doc) => doc.set_title(title),
            None => log::warn!("⚠️ DocumentTitle: no document available, title not set"),
        }
    }
}

/// The browser devtools console.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn styled_log(&mut self, message: &str, css: &str) {
        gloo_console::log!(format!("%c{}", message), css);
    }
}
