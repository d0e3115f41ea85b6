use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

#[derive(Debug, Clone)]
pub struct RngState {
    rng: StdRng,
}

impl RngState {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_draws_the_same_choices() {
        let items: Vec<u32> = (0..20).collect();
        let mut left = RngState::from_seed(8);
        let mut right = RngState::from_seed(8);
        for _ in 0..10 {
            assert_eq!(left.choose(&items), right.choose(&items));
        }
        assert_eq!(RngState::from_seed(8).choose::<u32>(&[]), None);
    }
}
