use super::domain::Item;
use rand::seq::SliceRandom;
use rand::Rng;

/// Uniform sample of up to `count` distinct candidates, without replacement.
pub fn select<R>(candidates: &[&Item], count: usize, rng: &mut R) -> Vec<Item>
where
    R: Rng + ?Sized,
{
    if count == 0 || candidates.is_empty() {
        return Vec::new();
    }

    candidates
        .choose_multiple(rng, count.min(candidates.len()))
        .map(|&item| item.clone())
        .collect()
}
