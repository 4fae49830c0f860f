use super::RecordId;

/// A plain data record held in an [`EntityStore`](super::EntityStore).
///
/// Besides per-instance accessors the trait carries static metadata used by
/// the UI for headings and notifications, the same way every list in the
/// dashboard is labelled.
pub trait Record: Clone + Send + Sync + 'static {
    /// Identifier type, unique within one store
    type Id: RecordId;

    // ============================================================================
    // Instance data
    // ============================================================================

    /// Record identifier
    fn id(&self) -> &Self::Id;

    /// Display name of the record (title, name, customer...)
    fn display_name(&self) -> &str;

    /// Fields that the page search box looks into
    fn searchable_fields(&self) -> Vec<&str>;

    // ============================================================================
    // Static metadata
    // ============================================================================

    /// Record index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "service")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Service")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Services & Rentals")
    fn list_name() -> &'static str;

    // ============================================================================
    // Provided methods
    // ============================================================================

    /// Full system name (e.g. "a001_service")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }

    /// Case-insensitive substring match over [`Record::searchable_fields`].
    ///
    /// Only an empty term matches everything; whitespace is part of the term.
    fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}
