use crate::modules::catalog::domain::{entities::CatalogEntity, value_objects::MaterialTag};

/// Deterministic id → label assignment.
///
/// The hash is the classic `h = h * 31 + unit` over UTF-16 code units with
/// 32-bit signed wraparound. Labels match the ones the web front-end shows
/// for the same ids.
pub struct TagHasher;

impl TagHasher {
    pub fn hash(id: &str) -> i32 {
        id.encode_utf16().fold(0i32, |hash, unit| {
            hash.wrapping_mul(31).wrapping_add(i32::from(unit))
        })
    }

    pub fn assign_label(id: &str) -> MaterialTag {
        // |i32::MIN| is 2^31, which `unsigned_abs` represents exactly
        let bucket = Self::hash(id).unsigned_abs() % MaterialTag::ALL.len() as u32;
        MaterialTag::from_index(bucket)
    }

    pub fn label_for<E: CatalogEntity>(entity: &E) -> MaterialTag {
        Self::assign_label(entity.id())
    }
}
