//! Integration tests for colony-sim.

use colony_core::{AntId, RoomId, SimConfig};
use colony_graph::{Colony, ColonyBuilder, Path};

use crate::TurnEvent;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a colony from `a-b` tunnel specs with rooms `S` (start) and `E` (end).
fn colony(tunnels: &[&str]) -> Colony {
    let mut b = ColonyBuilder::new();
    let s = b.add_room("S");
    let e = b.add_room("E");
    for spec in tunnels {
        let (a, c) = spec.split_once('-').expect("tunnel spec a-b");
        b.add_tunnel_by_label(a, c);
    }
    b.set_start(s);
    b.set_end(e);
    b.build().expect("valid colony")
}

fn room(c: &Colony, label: &str) -> RoomId {
    c.room(label).expect("room exists")
}

fn path(c: &Colony, labels: &[&str]) -> Path {
    Path::new(labels.iter().map(|l| room(c, l)).collect())
}

fn moved(ant: u32, room: RoomId) -> TurnEvent {
    TurnEvent::Moved { ant: AntId(ant), room }
}

fn held(ant: u32, room: RoomId) -> TurnEvent {
    TurnEvent::Held { ant: AntId(ant), room }
}

fn arrived(ant: u32) -> TurnEvent {
    TurnEvent::Arrived { ant: AntId(ant) }
}

fn config(ants: usize) -> SimConfig {
    SimConfig::new(ants)
}

// ── SimBuilder validation ─────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use colony_core::CoreError;
    use colony_graph::GraphError;

    use super::*;
    use crate::{AntState, SimBuilder, SimError};

    #[test]
    fn builds_with_default_planning() {
        let c = colony(&["S-A", "A-E", "S-B", "B-E"]);
        let sim = SimBuilder::new(config(3), c).build().unwrap();
        assert_eq!(sim.paths.len(), 2);
        assert_eq!(sim.ants.len(), 3);
        for ant in &sim.ants {
            assert_eq!(ant.state, AntState::AtStart);
            assert_eq!(ant.position, sim.colony.start());
        }
    }

    #[test]
    fn zero_ants_rejected() {
        let c = colony(&["S-E"]);
        let err = SimBuilder::new(config(0), c).build().unwrap_err();
        assert_eq!(err, SimError::Config(CoreError::InvalidAntCount(0)));
    }

    #[test]
    fn unreachable_end_rejected() {
        let c = colony(&["S-A", "B-E"]);
        let (s, e) = (c.start(), c.end());
        let err = SimBuilder::new(config(1), c).build().unwrap_err();
        assert_eq!(err, SimError::Routing(GraphError::Unreachable { from: s, to: e }));
    }

    #[test]
    fn empty_supplied_paths_rejected() {
        let c = colony(&["S-E"]);
        let err = SimBuilder::new(config(1), c).paths(vec![]).build().unwrap_err();
        assert_eq!(err, SimError::Routing(GraphError::NoRouting));
    }

    #[test]
    fn path_not_ending_at_end_rejected() {
        let c = colony(&["S-A", "A-E"]);
        let bad = path(&c, &["S", "A"]);
        let good = path(&c, &["S", "A", "E"]);
        let err = SimBuilder::new(config(1), c).paths(vec![good, bad]).build().unwrap_err();
        assert_eq!(err, SimError::PathMismatch { index: 1 });
    }

    #[test]
    fn short_supplied_paths_rejected() {
        let c = colony(&["S-E"]);
        let direct = path(&c, &["S", "E"]);
        for short in [vec![], vec![c.start()]] {
            let err = SimBuilder::new(config(1), c.clone())
                .paths(vec![direct.clone(), Path::new(short)])
                .build()
                .unwrap_err();
            assert_eq!(err, SimError::PathMismatch { index: 1 });
        }
    }
}

// ── Scheduling scenarios ──────────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;
    use crate::{AntState, NoopObserver, RecordingObserver, SimBuilder};

    #[test]
    fn single_path_three_ants() {
        let c = colony(&["S-A", "A-E"]);
        let a = room(&c, "A");
        let mut sim = SimBuilder::new(config(3), c).build().unwrap();

        let mut obs = RecordingObserver::new();
        let summary = sim.run(&mut obs);

        let turns: Vec<_> = obs.records.iter().map(|r| r.events.clone()).collect();
        assert_eq!(turns, vec![
            vec![moved(0, a)],
            vec![arrived(0), moved(1, a)],
            vec![arrived(1), moved(2, a)],
            vec![arrived(2)],
        ]);
        assert_eq!(summary.turns.0, 4);
        assert_eq!(summary.arrived, 3);
        assert_eq!(obs.summary, Some(summary));
    }

    #[test]
    fn waiting_ant_at_start_is_not_reported() {
        let c = colony(&["S-A", "A-E"]);
        let mut sim = SimBuilder::new(config(2), c).build().unwrap();
        let first = sim.step().unwrap();
        assert_eq!(first.events.len(), 1);
        assert_eq!(sim.ants[1].state, AntState::AtStart);
    }

    #[test]
    fn two_disjoint_paths_run_in_parallel() {
        let c = colony(&["S-A", "A-E", "S-B", "B-E"]);
        let (a, b) = (room(&c, "A"), room(&c, "B"));
        let mut sim = SimBuilder::new(config(2), c.clone()).build().unwrap();

        let mut obs = RecordingObserver::new();
        let parallel = sim.run(&mut obs);
        assert_eq!(obs.records[0].events, vec![moved(0, a), moved(1, b)]);
        assert_eq!(obs.records[1].events, vec![arrived(0), arrived(1)]);
        assert_eq!(parallel.turns.0, 2);

        let single = vec![path(&c, &["S", "A", "E"])];
        let mut serial_sim = SimBuilder::new(config(2), c).paths(single).build().unwrap();
        let serial = serial_sim.run(&mut NoopObserver);
        assert!(parallel.turns < serial.turns);
    }

    #[test]
    fn direct_path_takes_one_ant_per_turn() {
        let c = colony(&["S-E", "S-A", "A-E"]);
        let a = room(&c, "A");
        let mut sim = SimBuilder::new(config(3), c).build().unwrap();
        let mut obs = RecordingObserver::new();
        let summary = sim.run(&mut obs);

        let turns: Vec<_> = obs.records.iter().map(|r| r.events.clone()).collect();
        assert_eq!(turns, vec![
            vec![arrived(0), moved(1, a)],
            vec![arrived(1), arrived(2)],
        ]);
        assert_eq!(summary.turns.0, 2);
        assert!(sim.ants.iter().all(|a| a.position == sim.colony.end()));
    }

    #[test]
    fn direct_path_alone_drains_one_ant_per_turn() {
        let c = colony(&["S-E"]);
        let mut sim = SimBuilder::new(config(3), c).build().unwrap();
        let first = sim.step().unwrap();
        assert_eq!(first.events, vec![arrived(0)]);
        assert_eq!(sim.ants[1].state, AntState::AtStart);
        let summary = sim.run(&mut NoopObserver);
        assert_eq!(summary.turns.0, 3);
        assert_eq!(summary.arrived, 3);
    }

    #[test]
    fn blocked_ant_in_transit_is_reported_held() {
        // Overlapping paths bypass the selector so that two ants contend for C.
        let c = colony(&["S-A", "S-B", "A-C", "B-C", "C-E"]);
        let [a, b, cc] = ["A", "B", "C"].map(|l| room(&c, l));
        let paths = vec![path(&c, &["S", "A", "C", "E"]), path(&c, &["S", "B", "C", "E"])];
        let mut sim = SimBuilder::new(config(3), c).paths(paths).build().unwrap();

        let mut obs = RecordingObserver::new();
        sim.run(&mut obs);

        let turns: Vec<_> = obs.records.iter().map(|r| r.events.clone()).collect();
        assert_eq!(turns, vec![
            vec![moved(0, a), moved(1, b)],
            vec![moved(0, cc), held(1, b), moved(2, a)],
            vec![arrived(0), moved(1, cc), held(2, a)],
            vec![arrived(1), moved(2, cc)],
            vec![arrived(2)],
        ]);
    }

    #[test]
    fn step_returns_none_after_completion() {
        let c = colony(&["S-E"]);
        let mut sim = SimBuilder::new(config(1), c).build().unwrap();
        assert!(sim.step().is_some());
        assert!(!sim.is_finished());
        assert!(sim.step().is_none());
        assert!(sim.is_finished());
        assert!(sim.step().is_none());
    }

    #[test]
    fn diamond_uses_one_route() {
        let c = colony(&["S-A", "S-B", "A-C", "B-C", "C-E"]);
        let mut sim = SimBuilder::new(config(2), c).build().unwrap();
        assert_eq!(sim.paths.len(), 1);
        let summary = sim.run(&mut NoopObserver);
        // 3 hops + 1 extra ant.
        assert_eq!(summary.turns.0, 4);
    }
}

// ── Randomized invariants ─────────────────────────────────────────────────────

#[cfg(test)]
mod invariant_tests {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rustc_hash::FxHashSet;

    use super::*;
    use crate::SimBuilder;

    fn random_colony(rng: &mut SmallRng) -> Colony {
        let n = rng.gen_range(3..=8);
        let mut b = ColonyBuilder::new();
        let rooms: Vec<_> = (0..n).map(|i| b.add_room(format!("r{i}"))).collect();
        for i in 0..n {
            for j in (i + 1)..n {
                if rng.gen_bool(0.4) {
                    b.add_tunnel(rooms[i], rooms[j]);
                }
            }
        }
        b.set_start(rooms[0]);
        b.set_end(rooms[1]);
        b.build().unwrap()
    }

    #[test]
    fn every_run_drains_without_collisions() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut runs = 0;
        for _ in 0..300 {
            let c = random_colony(&mut rng);
            let ants = rng.gen_range(1..=6);
            let Ok(mut sim) = SimBuilder::new(config(ants), c).build() else {
                continue;
            };
            runs += 1;

            let end = sim.colony.end();
            let longest = sim.paths.iter().map(Path::hops).max().unwrap();
            let bound = (longest + ants - 1) as u64;

            while let Some(record) = sim.step() {
                assert!(record.turn.0 <= bound, "turn {} exceeds bound {bound}", record.turn);

                let ids: Vec<_> = record.events.iter().map(TurnEvent::ant).collect();
                assert!(ids.windows(2).all(|w| w[0] < w[1]), "events out of ant order");

                let mut rooms = FxHashSet::default();
                for ant in sim.ants.iter().filter(|a| a.in_transit()) {
                    assert_ne!(ant.position, end);
                    assert!(rooms.insert(ant.position), "two ants in {}", ant.position);
                }
            }

            assert!(sim.ants.iter().all(|a| a.is_finished() && a.position == end));
        }
        assert!(runs > 50, "too few connected colonies generated ({runs})");
    }
}
