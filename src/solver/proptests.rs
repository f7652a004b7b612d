//! Property tests: the search against an exhaustive oracle.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::{overlaps, BacktrackingSolver, ScheduleOutcome, SolverConfig};
use crate::models::{LectureGroup, Schedule, Session, TimeOfDay, Weekday};

/// `(day, start slot, length in slots)`; slots are 30 minutes from 08:00.
type RawSession = (usize, u16, u16);

fn build_groups(raw: Vec<Vec<RawSession>>) -> Vec<LectureGroup> {
    raw.into_iter()
        .enumerate()
        .map(|(i, options)| {
            let name = format!("L{i}");
            options
                .into_iter()
                .fold(LectureGroup::new(&name), |g, (day, slot, len)| {
                    let start = 8 * 60 + slot * 30;
                    g.with_session(Session::new(
                        &name,
                        Weekday::ALL[day],
                        TimeOfDay::from_minutes(start).unwrap(),
                        TimeOfDay::from_minutes(start + len * 30).unwrap(),
                    ))
                })
        })
        .collect()
}

/// Small instances on two days so conflicts are common.
fn groups_strategy() -> impl Strategy<Value = Vec<LectureGroup>> {
    let session = (0usize..2, 0u16..8, 1u16..4);
    prop::collection::vec(prop::collection::vec(session, 1..=3), 0..=4).prop_map(build_groups)
}

fn pairwise_disjoint(sessions: &[&Session]) -> bool {
    sessions
        .iter()
        .enumerate()
        .all(|(i, a)| sessions[i + 1..].iter().all(|b| !overlaps(a, b)))
}

/// Every valid pick set in the Cartesian product, in odometer order.
fn all_solutions(groups: &[LectureGroup]) -> Vec<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut idx = vec![0usize; groups.len()];
    loop {
        let picked: Vec<&Session> = groups
            .iter()
            .zip(&idx)
            .map(|(g, &i)| &g.sessions[i])
            .collect();
        if pairwise_disjoint(&picked) {
            solutions.push(idx.clone());
        }

        let mut pos = 0;
        loop {
            if pos == groups.len() {
                return solutions;
            }
            idx[pos] += 1;
            if idx[pos] < groups[pos].len() {
                break;
            }
            idx[pos] = 0;
            pos += 1;
        }
    }
}

fn assert_sound(groups: &[LectureGroup], schedule: &Schedule) {
    assert_eq!(schedule.len(), groups.len());
    for (group, chosen) in groups.iter().zip(schedule.sessions()) {
        assert!(group.sessions.contains(chosen), "{chosen} not offered by {}", group.name);
    }
    let refs: Vec<&Session> = schedule.sessions().iter().collect();
    assert!(pairwise_disjoint(&refs));
}

proptest! {
    #[test]
    fn prop_result_is_sound(groups in groups_strategy()) {
        if let ScheduleOutcome::Feasible(schedule) = super::compute_schedule(&groups).unwrap() {
            assert_sound(&groups, &schedule);
        }
    }

    #[test]
    fn prop_complete_against_brute_force(groups in groups_strategy()) {
        let expected = !all_solutions(&groups).is_empty();
        let outcome = super::compute_schedule(&groups).unwrap();
        prop_assert_eq!(outcome.is_feasible(), expected);
    }

    #[test]
    fn prop_group_order_does_not_change_feasibility(
        (groups, shuffled) in groups_strategy()
            .prop_flat_map(|g| (Just(g.clone()), Just(g).prop_shuffle()))
    ) {
        let a = super::compute_schedule(&groups).unwrap();
        let b = super::compute_schedule(&shuffled).unwrap();
        prop_assert_eq!(a.is_feasible(), b.is_feasible());
    }

    #[test]
    fn prop_every_solution_is_reachable(groups in groups_strategy()) {
        // Moving a valid pick to the front of each group makes the
        // unsorted search return exactly that pick.
        let solver = BacktrackingSolver::with_config(SolverConfig::new().with_sort_by_start(false));
        for solution in all_solutions(&groups) {
            let reordered: Vec<LectureGroup> = groups
                .iter()
                .zip(&solution)
                .map(|(g, &i)| {
                    let mut g = g.clone();
                    g.sessions.swap(0, i);
                    g
                })
                .collect();
            let schedule = solver.solve(&reordered).unwrap().outcome.into_schedule().unwrap();
            for ((group, &i), chosen) in groups.iter().zip(&solution).zip(schedule.sessions()) {
                prop_assert_eq!(&group.sessions[i], chosen);
            }
        }
    }
}

#[test]
fn test_session_order_does_not_change_feasibility() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..200 {
        let raw: Vec<Vec<RawSession>> = (0..rng.random_range(1..=4))
            .map(|_| {
                (0..rng.random_range(1..=3))
                    .map(|_| {
                        (
                            rng.random_range(0..2),
                            rng.random_range(0..8),
                            rng.random_range(1..4),
                        )
                    })
                    .collect()
            })
            .collect();
        let groups = build_groups(raw);

        let unsorted = BacktrackingSolver::with_config(SolverConfig::new().with_sort_by_start(false));
        let baseline = unsorted.solve(&groups).unwrap().outcome.is_feasible();

        let mut permuted = groups.clone();
        permuted.shuffle(&mut rng);
        for g in &mut permuted {
            g.sessions.shuffle(&mut rng);
        }
        let report = unsorted.solve(&permuted).unwrap();
        assert_eq!(report.outcome.is_feasible(), baseline);
        if let Some(schedule) = report.outcome.schedule() {
            assert_sound(&permuted, schedule);
        }
    }
}
