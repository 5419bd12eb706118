use crate::config::Settings;
use crate::document::LineEdit;

/// Identifier of a document, as assigned by the host editor
pub type DocumentId = String;

/// Lifecycle and edit notifications from the host editor.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentEvent {
    /// A document was opened and needs a full parse
    Opened(DocumentId),
    /// A document was closed; its cached state is dropped
    Closed(DocumentId),
    /// Lines of a document were replaced
    Changed { id: DocumentId, edit: LineEdit },
    /// The set of visible documents changed
    VisibilityChanged(Vec<DocumentId>),
    /// The configuration changed; every open document is re-parsed
    ConfigurationChanged(Settings),
}

impl DocumentEvent {
    pub fn changed(id: impl Into<DocumentId>, edit: LineEdit) -> Self {
        DocumentEvent::Changed {
            id: id.into(),
            edit,
        }
    }
}

/// Provides the current text of a document.
pub trait TextSource {
    /// Lines of the document, or `None` when the document is not available.
    fn document_lines(&self, id: &str) -> Option<Vec<String>>;
}

impl TextSource for std::collections::HashMap<DocumentId, Vec<String>> {
    fn document_lines(&self, id: &str) -> Option<Vec<String>> {
        self.get(id).cloned()
    }
}
