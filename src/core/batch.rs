/// One uploaded document: a display name plus the raw image bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Blank-filtered batch input, ready for the engine.
#[derive(Debug, Clone, Default)]
pub struct CollectedBatch {
    pub vins: Vec<String>,
    pub documents: Vec<DocumentUpload>,
}

impl CollectedBatch {
    pub fn is_empty(&self) -> bool {
        self.vins.is_empty() && self.documents.is_empty()
    }
}

/// Growable input slots for a verification batch.
///
/// Both slot lists are ordered and support add/remove of individual
/// entries. A new empty slot may only be appended once the current last
/// slot is non-empty; this keeps a form from accumulating unbounded blank
/// fields. `collect` drops whatever blanks remain.
#[derive(Debug, Default)]
pub struct BatchInput {
    vin_slots: Vec<String>,
    document_slots: Vec<DocumentUpload>,
}

impl BatchInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an empty VIN slot. Refused while the last slot is blank.
    pub fn add_vin_slot(&mut self) -> bool {
        if matches!(self.vin_slots.last(), Some(last) if last.trim().is_empty()) {
            return false;
        }
        self.vin_slots.push(String::new());
        true
    }

    pub fn set_vin(&mut self, index: usize, vin: impl Into<String>) {
        if let Some(slot) = self.vin_slots.get_mut(index) {
            *slot = vin.into();
        }
    }

    pub fn remove_vin(&mut self, index: usize) {
        if index < self.vin_slots.len() {
            self.vin_slots.remove(index);
        }
    }

    /// Appends an empty document slot. Refused while the last slot is empty.
    pub fn add_document_slot(&mut self) -> bool {
        if matches!(self.document_slots.last(), Some(last) if last.is_empty()) {
            return false;
        }
        self.document_slots.push(DocumentUpload::default());
        true
    }

    pub fn set_document(&mut self, index: usize, upload: DocumentUpload) {
        if let Some(slot) = self.document_slots.get_mut(index) {
            *slot = upload;
        }
    }

    pub fn remove_document(&mut self, index: usize) {
        if index < self.document_slots.len() {
            self.document_slots.remove(index);
        }
    }

    /// Convenience for callers that already hold a filled value.
    pub fn push_vin(&mut self, vin: impl Into<String>) {
        self.vin_slots.push(vin.into());
    }

    pub fn push_document(&mut self, upload: DocumentUpload) {
        self.document_slots.push(upload);
    }

    /// Filters out blank VINs and empty uploads, preserving order.
    pub fn collect(self) -> CollectedBatch {
        CollectedBatch {
            vins: self
                .vin_slots
                .into_iter()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .collect(),
            documents: self
                .document_slots
                .into_iter()
                .filter(|d| !d.is_empty())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_second_empty_vin_slot() {
        let mut input = BatchInput::new();
        assert!(input.add_vin_slot());
        assert!(!input.add_vin_slot());

        input.set_vin(0, "1HGCM82633A004352");
        assert!(input.add_vin_slot());
    }

    #[test]
    fn refuses_second_empty_document_slot() {
        let mut input = BatchInput::new();
        assert!(input.add_document_slot());
        assert!(!input.add_document_slot());

        input.set_document(0, DocumentUpload::new("front.jpg", vec![1, 2, 3]));
        assert!(input.add_document_slot());
    }

    #[test]
    fn collect_filters_blanks_and_preserves_order() {
        let mut input = BatchInput::new();
        input.push_vin("VIN1");
        input.push_vin("   ");
        input.push_vin("VIN2");
        input.push_document(DocumentUpload::new("a.jpg", vec![1]));
        input.push_document(DocumentUpload::new("empty.jpg", vec![]));
        input.push_document(DocumentUpload::new("b.jpg", vec![2]));

        let batch = input.collect();
        assert_eq!(batch.vins, vec!["VIN1", "VIN2"]);
        assert_eq!(batch.documents.len(), 2);
        assert_eq!(batch.documents[0].name, "a.jpg");
        assert_eq!(batch.documents[1].name, "b.jpg");
    }

    #[test]
    fn remove_slot_shifts_remaining_entries() {
        let mut input = BatchInput::new();
        input.push_vin("VIN1");
        input.push_vin("VIN2");
        input.push_vin("VIN3");
        input.remove_vin(1);

        let batch = input.collect();
        assert_eq!(batch.vins, vec!["VIN1", "VIN3"]);
    }

    #[test]
    fn whitespace_only_batch_collects_to_empty() {
        let mut input = BatchInput::new();
        input.push_vin("  ");
        input.push_document(DocumentUpload::default());
        assert!(input.collect().is_empty());
    }
}
