//! Canned replies for when the chat service cannot be reached.

use rand::Rng;

pub const FALLBACK_RESPONSES: [&str; 9] = [
    "I'd be happy to tell you more about our services!",
    "Our team specializes in creating beautiful, functional websites and applications.",
    "We use the latest technologies to ensure your project is fast, secure, and scalable.",
    "Would you like to see some examples of our previous work?",
    "Our design process starts with understanding your business goals and target audience.",
    "We offer ongoing support and maintenance for all our projects.",
    "Feel free to ask any questions about our design or development process!",
    "We've worked with clients across various industries including tech, healthcare, and education.",
    "What specific features are you looking for in your project?",
];

/// Pick one fallback reply uniformly at random.
pub fn pick_fallback<R: Rng>(rng: &mut R) -> &'static str {
    FALLBACK_RESPONSES[rng.random_range(0..FALLBACK_RESPONSES.len())]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    #[test]
    fn picks_only_from_the_list() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        for _ in 0..1_000 {
            let pick = pick_fallback(&mut rng);
            assert!(FALLBACK_RESPONSES.contains(&pick), "unexpected fallback {pick:?}");
        }
    }

    #[test]
    fn every_entry_is_reachable() {
        let mut rng = SmallRng::seed_from_u64(7);
        let mut seen = [false; FALLBACK_RESPONSES.len()];
        for _ in 0..2_000 {
            let pick = pick_fallback(&mut rng);
            let idx = FALLBACK_RESPONSES.iter().position(|r| *r == pick).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SmallRng::seed_from_u64(99);
        let mut b = SmallRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(pick_fallback(&mut a), pick_fallback(&mut b));
        }
    }
}
