use std::cmp::Ordering;

use moselect::rng::RandomNumberGenerator;
use moselect::selection::{SelectionOperator, TournamentSelection};

#[derive(Clone, Debug, PartialEq)]
struct Candidate {
    id: usize,
    objective: f64,
}

fn by_objective(a: &Candidate, b: &Candidate) -> Ordering {
    a.objective.partial_cmp(&b.objective).unwrap_or(Ordering::Equal)
}

fn population(objectives: &[f64]) -> Vec<Candidate> {
    objectives
        .iter()
        .enumerate()
        .map(|(id, &objective)| Candidate { id, objective })
        .collect()
}

#[test]
fn binary_tournament_on_two_candidates_always_picks_best() {
    let population = population(&[7.0, 1.0]);
    let mut rng = RandomNumberGenerator::from_seed(1);

    let selection = TournamentSelection::binary(1, by_objective).unwrap();

    let mut best_count = 0;
    for _ in 0..1000 {
        let pool = selection.select(&population, Some(&mut rng)).unwrap();
        if pool[0].id == 1 {
            best_count += 1;
        }
    }

    assert_eq!(best_count, 1000);
}

#[test]
fn full_population_tournament_always_picks_best() {
    for n in [2usize, 7, 30] {
        let objectives: Vec<f64> = (0..n).map(|i| (n - i) as f64).collect();
        let population = population(&objectives);
        let mut rng = RandomNumberGenerator::from_seed(2);

        let selection = TournamentSelection::new(20, n, by_objective).unwrap();
        let pool = selection.select(&population, Some(&mut rng)).unwrap();

        // The best candidate (objective 1.0) wins every tournament.
        assert!(pool.iter().all(|c| c.objective == 1.0), "n={n}");
    }
}

#[test]
fn selection_pressure_is_non_decreasing_in_tournament_size() {
    let objectives: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let population = population(&objectives);
    let mut rng = RandomNumberGenerator::from_seed(3);

    let draws = 2000;
    let mut best_counts = Vec::new();
    for tournament_size in [1usize, 2, 4, 8] {
        let selection = TournamentSelection::new(1, tournament_size, by_objective).unwrap();

        let mut best_count = 0usize;
        for _ in 0..draws {
            let pool = selection.select(&population, Some(&mut rng)).unwrap();
            if pool[0].id == 0 {
                best_count += 1;
            }
        }
        best_counts.push(best_count);
    }

    // Expected win rates are k/10: 0.1, 0.2, 0.4, 0.8. The gaps are wide
    // enough that sampling noise cannot reorder them.
    for pair in best_counts.windows(2) {
        assert!(pair[0] < pair[1], "best_counts={best_counts:?}");
    }
}

#[test]
fn tournament_never_mutates_the_population() {
    let population = population(&[0.5, 0.8, 0.3, 0.9, 0.1]);
    let snapshot = population.clone();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let selection = TournamentSelection::new(10, 3, by_objective).unwrap();
    selection.select(&population, Some(&mut rng)).unwrap();

    assert_eq!(population, snapshot);
}
