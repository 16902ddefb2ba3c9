use crate::core::item::PackingItem;

/// Mark items mentioned in a spoken transcript as packed.
///
/// The transcript is a full sentence, not a discrete label, so this is
/// substring containment only: every not-yet-packed item whose lower-cased
/// name occurs in the lower-cased transcript is marked packed and returned,
/// in list order. Already-packed items are skipped, never re-reported, which
/// makes repeated calls with the same transcript idempotent.
pub fn match_transcript(items: &mut [PackingItem], transcript: &str) -> Vec<String> {
    let transcript = transcript.to_lowercase();
    let mut newly_packed = Vec::new();

    for item in items.iter_mut() {
        if item.packed {
            continue;
        }
        // An empty name would be contained in anything
        if item.name.is_empty() {
            continue;
        }
        if transcript.contains(&item.name.to_lowercase()) {
            item.packed = true;
            newly_packed.push(item.name.clone());
        }
    }

    newly_packed
}
