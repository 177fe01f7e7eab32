//! Person and place name generation from cultural-origin pools (§4.3).

use ironfrontier_core::entities::PersonName;
use ironfrontier_core::enums::Gender;
use ironfrontier_core::rng::Rng;
use ironfrontier_core::templates::name_pools::{NamePool, PlaceNamePool};

const LETTER_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'M', 'N', 'P', 'R', 'S', 'T', 'U', 'V', 'W',
    'X', 'Y', 'Z',
];

fn pick_pool<'a>(pools: &'a [NamePool], origin: &str) -> &'a NamePool {
    pools.iter().find(|p| p.origin == origin).unwrap_or(&pools[0])
}

/// Weighted origin selection, then a first/last draw from that
/// origin×gender, with optional nickname and title (§4.3).
pub fn generate_person_name(
    rng: &mut Rng,
    pools: &[NamePool],
    origin_weights: &[(String, f64)],
    gender: Gender,
    include_nickname: bool,
    include_title: bool,
) -> PersonName {
    let origins: Vec<&String> = origin_weights.iter().map(|(o, _)| o).collect();
    let weights: Vec<f64> = origin_weights.iter().map(|(_, w)| *w).collect();
    let origin = rng.weighted_pick(&origins, &weights);
    let pool = pick_pool(pools, origin);

    let first_names = pool.first_names_for(gender);
    let first_name = rng.pick(first_names).clone();

    let nickname = if include_nickname && first_names.len() > 1 {
        let candidates: Vec<&String> = first_names.iter().filter(|n| **n != first_name).collect();
        if candidates.is_empty() {
            None
        } else {
            Some((*rng.pick(&candidates)).clone())
        }
    } else {
        None
    };

    let title = if include_title && !pool.titles.is_empty() {
        Some(rng.pick(&pool.titles).clone())
    } else {
        None
    };

    PersonName {
        first_name,
        last_name: rng.pick(&pool.surnames).clone(),
        nickname,
        title,
    }
}

fn pick_letter(rng: &mut Rng) -> String {
    rng.pick(LETTER_ALPHABET).to_string()
}

/// Draws a pattern uniformly and resolves each placeholder occurrence
/// independently (§4.3: "a second `{{letter}}` occurrence resolves
/// independently").
pub fn generate_place_name(rng: &mut Rng, pool: &PlaceNamePool) -> String {
    let pattern = rng.pick(&pool.patterns).clone();
    resolve_pattern(rng, pool, pattern)
}

fn resolve_pattern(rng: &mut Rng, pool: &PlaceNamePool, mut pattern: String) -> String {
    while pattern.contains("{{adj}}") {
        let v = rng.pick(&pool.adjectives).clone();
        pattern = pattern.replacen("{{adj}}", &v, 1);
    }
    while pattern.contains("{{noun}}") {
        let v = rng.pick(&pool.nouns).clone();
        pattern = pattern.replacen("{{noun}}", &v, 1);
    }
    while pattern.contains("{{suffix}}") {
        let v = rng.pick(&pool.suffixes).clone();
        pattern = pattern.replacen("{{suffix}}", &v, 1);
    }
    while pattern.contains("{{possessive}}") {
        let v = rng.pick(&pool.possessives).clone();
        pattern = pattern.replacen("{{possessive}}", &v, 1);
    }
    while pattern.contains("{{letter}}") {
        let v = pick_letter(rng);
        pattern = pattern.replacen("{{letter}}", &v, 1);
    }
    while pattern.contains("{{number}}") {
        let v = rng.int(1, 99).to_string();
        pattern = pattern.replacen("{{number}}", &v, 1);
    }
    pattern
}

/// Options for constrained place-name generation: pre-filter eligible
/// patterns, then reject-and-retry against a max length (§4.3).
#[derive(Debug, Clone, Default)]
pub struct PlaceNameConstraints {
    pub prefer_placeholders: Vec<String>,
    pub exclude_placeholders: Vec<String>,
    pub max_length: Option<usize>,
}

pub fn generate_constrained_place_name(
    rng: &mut Rng,
    pool: &PlaceNamePool,
    constraints: &PlaceNameConstraints,
    retry_budget: u32,
) -> String {
    let filtered: Vec<&String> = pool
        .patterns
        .iter()
        .filter(|p| {
            constraints.prefer_placeholders.iter().all(|ph| p.contains(ph.as_str()))
                && !constraints.exclude_placeholders.iter().any(|ph| p.contains(ph.as_str()))
        })
        .collect();
    let patterns: Vec<String> = if filtered.is_empty() {
        pool.patterns.clone()
    } else {
        filtered.into_iter().cloned().collect()
    };

    let mut last = String::new();
    for _ in 0..retry_budget.max(1) {
        let pattern = rng.pick(&patterns).clone();
        let candidate = resolve_pattern(rng, pool, pattern);
        let fits = constraints.max_length.map(|max| candidate.len() <= max).unwrap_or(true);
        last = candidate;
        if fits {
            return last;
        }
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironfrontier_core::templates::name_pools::{default_name_pools, default_place_name_pools};

    #[test]
    fn full_name_includes_title_and_nickname_when_requested() {
        let pools = default_name_pools();
        let mut rng = Rng::new(7);
        let weights = vec![("anglo".to_string(), 1.0)];
        let name = generate_person_name(&mut rng, &pools, &weights, Gender::Male, true, true);
        assert!(!name.first_name.is_empty());
        assert!(!name.last_name.is_empty());
    }

    #[test]
    fn place_name_resolves_every_placeholder() {
        let pools = default_place_name_pools();
        let pool = pools.iter().find(|p| p.location_type == "town").unwrap();
        let mut rng = Rng::new(99);
        for _ in 0..50 {
            let name = generate_place_name(&mut rng, pool);
            assert!(!name.contains("{{"));
        }
    }

    #[test]
    fn is_deterministic_for_identical_seed() {
        let pools = default_place_name_pools();
        let pool = pools.iter().find(|p| p.location_type == "ruin").unwrap();
        let mut a = Rng::new(55);
        let mut b = Rng::new(55);
        assert_eq!(generate_place_name(&mut a, pool), generate_place_name(&mut b, pool));
    }
}
