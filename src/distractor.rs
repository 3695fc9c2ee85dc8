use rand::{seq::SliceRandom, Rng};

use crate::catalog::Country;
use crate::geo::haversine_km;

/// Wrong answers per question.
pub const DISTRACTOR_COUNT: usize = 3;

/// The distance-ranked candidates a nearest-neighbor pick draws from.
const NEAREST_POOL: usize = 10;

/// Picks `count` plausible wrong answers for `target` out of `pool`.
///
/// When the target's capital has coordinates and enough candidates do too,
/// distractors come from the `NEAREST_POOL` geographically closest capitals,
/// which keeps the options confusable (neighboring countries) instead of
/// trivially distinct. Candidates without coordinates are skipped by that
/// ranking; if too few remain, the pick degrades to a uniform sample over
/// every non-target candidate.
///
/// Returns fewer than `count` entries only when the pool minus the target
/// is smaller than `count`. Never returns the target, never duplicates.
pub fn pick_distractors(
    target: &Country,
    pool: &[Country],
    count: usize,
    rng: &mut impl Rng,
) -> Vec<Country> {
    let candidates: Vec<&Country> = pool.iter().filter(|c| c.code != target.code).collect();

    if let Some(origin) = target.coordinates {
        let mut ranked: Vec<(f64, &Country)> = candidates
            .iter()
            .filter_map(|c| c.coordinates.map(|pos| (haversine_km(origin, pos), *c)))
            .collect();

        if ranked.len() >= count {
            ranked.sort_by(|a, b| a.0.total_cmp(&b.0));
            ranked.truncate(NEAREST_POOL);

            let mut nearest: Vec<&Country> = ranked.into_iter().map(|(_, c)| c).collect();
            nearest.shuffle(rng);
            return nearest.into_iter().take(count).cloned().collect();
        }
    }

    candidates
        .choose_multiple(rng, count)
        .map(|c| (*c).clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Continent, Coordinates};
    use rand::{rngs::StdRng, SeedableRng};

    fn country(code: &str, coordinates: Option<Coordinates>) -> Country {
        Country {
            name: format!("Land {code}"),
            capital: format!("By {code}"),
            code: code.to_owned(),
            continent: Continent::Europe,
            coordinates,
        }
    }

    fn at_latitude(code: &str, lat: f64) -> Country {
        country(code, Some(Coordinates { lat, lon: 0.0 }))
    }

    /// Twelve candidates strung along a meridian; only the ten closest to
    /// the target may ever be picked.
    #[test]
    fn picks_come_from_the_ten_nearest() {
        let target = at_latitude("AA", 0.0);
        let mut pool = vec![target.clone()];
        for i in 1..=12 {
            pool.push(at_latitude(&format!("B{i:X}"), i as f64));
        }

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picks = pick_distractors(&target, &pool, DISTRACTOR_COUNT, &mut rng);
            assert_eq!(picks.len(), 3);
            for pick in &picks {
                let lat = pick.coordinates.unwrap().lat;
                assert!(lat <= 10.0, "{} at latitude {lat} is outside the nearest ten", pick.code);
            }
        }
    }

    #[test]
    fn never_returns_target_or_duplicates() {
        let target = at_latitude("AA", 0.0);
        let mut pool = vec![target.clone()];
        for i in 1..=8 {
            pool.push(at_latitude(&format!("B{i}"), i as f64));
        }

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let picks = pick_distractors(&target, &pool, DISTRACTOR_COUNT, &mut rng);
            assert!(picks.iter().all(|c| c.code != "AA"));
            let mut codes: Vec<&str> = picks.iter().map(|c| c.code.as_str()).collect();
            codes.sort_unstable();
            codes.dedup();
            assert_eq!(codes.len(), 3);
        }
    }

    #[test]
    fn target_without_coordinates_falls_back_to_uniform() {
        let target = country("AA", None);
        let pool = vec![
            target.clone(),
            at_latitude("BB", 1.0),
            country("CC", None),
            at_latitude("DD", 2.0),
            country("EE", None),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        let picks = pick_distractors(&target, &pool, DISTRACTOR_COUNT, &mut rng);
        assert_eq!(picks.len(), 3);
        assert!(picks.iter().all(|c| c.code != "AA"));
    }

    #[test]
    fn too_few_located_candidates_fall_back_to_uniform() {
        // Target has coordinates but only two candidates do; the pick must
        // still yield three, drawing on the coordinate-less ones.
        let target = at_latitude("AA", 0.0);
        let pool = vec![
            target.clone(),
            at_latitude("BB", 1.0),
            at_latitude("CC", 2.0),
            country("DD", None),
            country("EE", None),
        ];

        let mut rng = StdRng::seed_from_u64(7);
        let picks = pick_distractors(&target, &pool, DISTRACTOR_COUNT, &mut rng);
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn short_pool_returns_what_it_has() {
        let target = at_latitude("AA", 0.0);
        let pool = vec![target.clone(), at_latitude("BB", 1.0), at_latitude("CC", 2.0)];

        let mut rng = StdRng::seed_from_u64(7);
        let picks = pick_distractors(&target, &pool, DISTRACTOR_COUNT, &mut rng);
        assert_eq!(picks.len(), 2);
    }
}
