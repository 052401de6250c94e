/// Read-only view over any record the catalog can resolve, search and sort.
///
/// Scripts and projects both implement it; the engine services are generic
/// over it and never mutate an entity.
pub trait CatalogEntity {
    /// Stable identity, unique within its collection
    fn id(&self) -> &str;

    /// Human-readable name; seeds icon candidates and is always searched
    fn display_name(&self) -> &str;

    /// Additional single-valued fields scanned by search, in order
    fn searchable_fields(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Multi-valued fields (tag lists) scanned by search
    fn multi_valued_fields(&self) -> Vec<&[String]> {
        Vec::new()
    }

    /// Discrete attribute used by exact-match filtering
    fn category_value(&self, _field: &str) -> Option<&str> {
        None
    }

    /// Values used by tag-membership filtering
    fn tags(&self) -> &[String] {
        &[]
    }

    /// Resource locations the owner supplied explicitly, tried before any
    /// derived icon candidate
    fn explicit_hints(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Two-segment ordering code such as `141168-00`
    fn structured_code(&self) -> Option<&str> {
        None
    }
}
