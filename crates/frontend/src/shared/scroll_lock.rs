use web_sys::HtmlElement;

/// Suppresses document scrolling while held; the previous `overflow` value is
/// restored on drop.
pub struct BodyScrollLock {
    previous: String,
}

impl BodyScrollLock {
    pub fn acquire() -> Option<Self> {
        let body = document_body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        if let Some(body) = document_body() {
            let _ = body.style().set_property("overflow", &self.previous);
        }
    }
}

fn document_body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}
