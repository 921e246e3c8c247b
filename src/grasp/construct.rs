//! Randomized greedy construction with a restricted candidate list.

use super::config::validate_alpha;
use crate::error::TspResult;
use crate::matrix::{DistanceMatrix, Tour};
use rand::Rng;

/// Builds one feasible tour from city 0.
///
/// At each step the unvisited cities whose distance from the current city
/// lies within `min + alpha * (max - min)` form the restricted candidate
/// list (RCL); the next city is drawn uniformly from it.
pub struct RandomizedGreedyConstructor;

impl RandomizedGreedyConstructor {
    /// Constructs a tour starting at city 0.
    ///
    /// With `alpha == 0` the RCL is the first nearest city in index order,
    /// so the result is the deterministic nearest-neighbor tour.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use u_tsp::{DistanceMatrix, RandomizedGreedyConstructor};
    ///
    /// let dm = DistanceMatrix::from_rows(vec![
    ///     vec![0.0, 1.0, 5.0],
    ///     vec![1.0, 0.0, 2.0],
    ///     vec![5.0, 2.0, 0.0],
    /// ])
    /// .unwrap();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// let tour = RandomizedGreedyConstructor::construct(&dm, 0.0, &mut rng).unwrap();
    /// assert_eq!(tour, vec![0, 1, 2]);
    /// ```
    pub fn construct<R: Rng>(
        matrix: &DistanceMatrix,
        alpha: f64,
        rng: &mut R,
    ) -> TspResult<Tour> {
        validate_alpha(alpha)?;

        let n = matrix.size();
        let mut tour = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        let mut current = 0;
        tour.push(current);
        visited[current] = true;

        let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(n);
        let mut rcl: Vec<usize> = Vec::with_capacity(n);

        while tour.len() < n {
            candidates.clear();
            let mut min_c = f64::INFINITY;
            let mut max_c = f64::NEG_INFINITY;
            for (city, &cost) in matrix.row(current).iter().enumerate() {
                if visited[city] {
                    continue;
                }
                candidates.push((city, cost));
                min_c = min_c.min(cost);
                max_c = max_c.max(cost);
            }

            rcl.clear();
            if alpha == 0.0 {
                rcl.extend(candidates.iter().find(|&&(_, c)| c <= min_c).map(|&(city, _)| city));
            } else {
                let limit = min_c + alpha * (max_c - min_c);
                rcl.extend(
                    candidates
                        .iter()
                        .filter(|&&(_, c)| c <= limit)
                        .map(|&(city, _)| city),
                );
            }
            if rcl.is_empty() {
                rcl.extend(candidates.iter().map(|&(city, _)| city));
            }

            let next = if rcl.len() == 1 {
                rcl[0]
            } else {
                rcl[rng.random_range(0..rcl.len())]
            };
            tour.push(next);
            visited[next] = true;
            current = next;
        }

        Ok(tour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::random_instance;
    use crate::TspError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nearest_neighbor(dm: &DistanceMatrix) -> Tour {
        let n = dm.size();
        let mut tour = vec![0];
        let mut visited = vec![false; n];
        visited[0] = true;
        while tour.len() < n {
            let current = tour[tour.len() - 1];
            let mut best = None;
            for city in 0..n {
                if visited[city] {
                    continue;
                }
                match best {
                    Some(b) if dm.get(current, b) <= dm.get(current, city) => {}
                    _ => best = Some(city),
                }
            }
            let next = best.expect("unvisited city left");
            visited[next] = true;
            tour.push(next);
        }
        tour
    }

    #[test]
    fn test_produces_permutation_from_zero() {
        let dm = random_instance(15, 4).expect("non-empty");
        let mut rng = StdRng::seed_from_u64(42);
        for alpha in [0.0, 0.3, 0.7, 1.0] {
            let tour = RandomizedGreedyConstructor::construct(&dm, alpha, &mut rng)
                .expect("valid alpha");
            assert_eq!(tour[0], 0);
            dm.validate_tour(&tour).expect("permutation");
        }
    }

    #[test]
    fn test_alpha_zero_is_nearest_neighbor() {
        let dm = random_instance(20, 9).expect("non-empty");
        let expected = nearest_neighbor(&dm);
        for seed in 0..5 {
            let mut rng = StdRng::seed_from_u64(seed);
            let tour =
                RandomizedGreedyConstructor::construct(&dm, 0.0, &mut rng).expect("valid alpha");
            assert_eq!(tour, expected, "seed {seed}");
        }
    }

    #[test]
    fn test_alpha_zero_ties_take_lowest_index() {
        let dm = DistanceMatrix::from_rows(vec![vec![1.0; 4]; 4]).expect("valid");
        let mut rng = StdRng::seed_from_u64(3);
        let tour = RandomizedGreedyConstructor::construct(&dm, 0.0, &mut rng).expect("valid alpha");
        assert_eq!(tour, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_same_seed_same_tour() {
        let dm = random_instance(25, 1).expect("non-empty");
        let a = RandomizedGreedyConstructor::construct(&dm, 0.5, &mut StdRng::seed_from_u64(8))
            .expect("valid alpha");
        let b = RandomizedGreedyConstructor::construct(&dm, 0.5, &mut StdRng::seed_from_u64(8))
            .expect("valid alpha");
        assert_eq!(a, b);
    }

    #[test]
    fn test_alpha_one_varies_with_seed() {
        let dm = random_instance(25, 1).expect("non-empty");
        let tours: Vec<Tour> = (0..8)
            .map(|seed| {
                RandomizedGreedyConstructor::construct(&dm, 1.0, &mut StdRng::seed_from_u64(seed))
                    .expect("valid alpha")
            })
            .collect();
        assert!(tours.iter().any(|t| t != &tours[0]));
    }

    #[test]
    fn test_single_city() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        let tour = RandomizedGreedyConstructor::construct(&dm, 0.3, &mut StdRng::seed_from_u64(0))
            .expect("valid alpha");
        assert_eq!(tour, vec![0]);
    }

    #[test]
    fn test_rejects_bad_alpha() {
        let dm = random_instance(5, 1).expect("non-empty");
        let err = RandomizedGreedyConstructor::construct(&dm, 2.0, &mut StdRng::seed_from_u64(0))
            .unwrap_err();
        assert!(matches!(err, TspError::InvalidConfig { .. }));
    }
}
