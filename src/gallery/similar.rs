//! Similar-Artwork Selector
//!
//! Suggests up to [`MAX_SIMILAR`] other pieces for the detail panel. Related
//! ids come from the category index; when fewer than [`MIN_SIMILAR`] remain
//! after dropping the current piece, the rest are drawn at random (without
//! replacement) from every other artwork.

use super::catalog::{self, Artwork, ArtworkId, Category};
use crate::random::RandomSource;

/// Backfill target
pub const MIN_SIMILAR: usize = 2;

/// Hard cap on suggestions
pub const MAX_SIMILAR: usize = 3;

/// Select similar artworks for `current` within `category`
pub fn similar_artworks<R: RandomSource + ?Sized>(
    category: Category,
    current: ArtworkId,
    rng: &mut R,
) -> Vec<&'static Artwork> {
    select_from(catalog::artworks(), catalog::related_ids(category), current, rng)
}

/// Selection over an arbitrary collection and related-id list
pub fn select_from<'a, R: RandomSource + ?Sized>(
    pool: &'a [Artwork],
    related: &[ArtworkId],
    current: ArtworkId,
    rng: &mut R,
) -> Vec<&'a Artwork> {
    let mut picked: Vec<&Artwork> = pool
        .iter()
        .filter(|a| a.id != current && related.contains(&a.id))
        .collect();

    if picked.len() < MIN_SIMILAR {
        let mut candidates: Vec<&Artwork> = pool
            .iter()
            .filter(|a| a.id != current && !picked.iter().any(|p| p.id == a.id))
            .collect();

        while picked.len() < MIN_SIMILAR && !candidates.is_empty() {
            let idx = rng.next_index(candidates.len());
            picked.push(candidates.remove(idx));
        }
    }

    picked.truncate(MAX_SIMILAR);
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{Prng, ScriptedSource};
    use std::collections::HashSet;

    fn ids(arts: &[&Artwork]) -> Vec<ArtworkId> {
        arts.iter().map(|a| a.id).collect()
    }

    #[test]
    fn test_sculpture_backfills_to_two() {
        for seed in 1..200 {
            let mut rng = Prng::new(seed);
            let picked = ids(&similar_artworks(Category::Sculpture, 5, &mut rng));
            assert_eq!(picked.len(), 2);
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(unique.len(), 2);
            assert!(picked.iter().all(|id| (1..=4).contains(id)));
        }
    }

    #[test]
    fn test_scripted_draw_is_deterministic() {
        // Candidates for sculpture/5 are [1, 2, 3, 4]; draw index 3 then index 0.
        let mut rng = ScriptedSource::new(vec![3, 0]);
        let picked = ids(&similar_artworks(Category::Sculpture, 5, &mut rng));
        assert_eq!(picked, vec![4, 1]);
    }

    #[test]
    fn test_related_ids_come_first() {
        // classical lists [1, 4]; from 4 only 1 remains, one random backfill follows.
        let mut rng = ScriptedSource::new(vec![0]);
        let picked = ids(&similar_artworks(Category::Classical, 4, &mut rng));
        assert_eq!(picked, vec![1, 2]);
    }

    #[test]
    fn test_no_backfill_when_enough_related() {
        // Viewing a landscape piece from another category: [1, 4] both remain.
        let mut rng = ScriptedSource::new(vec![]);
        let picked = ids(&similar_artworks(Category::Classical, 3, &mut rng));
        assert_eq!(picked, vec![1, 4]);
    }

    #[test]
    fn test_never_contains_current() {
        let mut rng = Prng::new(99);
        for art in catalog::artworks() {
            let picked = ids(&similar_artworks(art.category, art.id, &mut rng));
            assert!(!picked.contains(&art.id));
            assert!(picked.len() >= MIN_SIMILAR && picked.len() <= MAX_SIMILAR);
        }
    }

    #[test]
    fn test_capped_at_three() {
        let pool = catalog::artworks();
        let mut rng = Prng::new(3);
        let picked = select_from(pool, &[1, 2, 3, 4, 5], 5, &mut rng);
        assert_eq!(ids(&picked), vec![1, 2, 3]);
    }

    #[test]
    fn test_small_pool_exhausts() {
        let pool = &catalog::artworks()[..2];
        let mut rng = Prng::new(11);
        let picked = select_from(pool, &[], 1, &mut rng);
        assert_eq!(ids(&picked), vec![2]);
    }
}
