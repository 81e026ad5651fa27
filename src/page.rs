use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const VIEW_COUNT_ID: &str = "view-count";

/// Page handle shared between the startup sequence and the counter task.
pub type SharedPage = Arc<Mutex<Page>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    text: String,
}

impl Element {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Minimal document: text-bearing elements keyed by id.
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: BTreeMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_view_count(initial: impl Into<String>) -> Self {
        let mut page = Self::new();
        page.insert(VIEW_COUNT_ID, initial);
        page
    }

    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        self.elements.insert(id.into(), Element::new(text));
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn into_shared(self) -> SharedPage {
        Arc::new(Mutex::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_count_element_is_addressable() {
        let mut page = Page::with_view_count("");
        assert_eq!(page.element(VIEW_COUNT_ID).map(Element::text), Some(""));

        page.element_mut(VIEW_COUNT_ID).unwrap().set_text("12");
        assert_eq!(page.element(VIEW_COUNT_ID).unwrap().text(), "12");
    }

    #[test]
    fn missing_element_is_none() {
        let mut page = Page::new();
        page.insert("footer", "hello");
        assert!(page.element(VIEW_COUNT_ID).is_none());
        assert!(page.element_mut(VIEW_COUNT_ID).is_none());
    }
}
