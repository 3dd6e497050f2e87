//! Unit tests for gn-motion.
//!
//! Flight numbers below use `gravity_accel = 0.25` and
//! `terminal_velocity = 1.0`, so every hand-computed position is exact in
//! binary floating point except where a lateral speed of 0.35 is involved.

use gn_core::{Gravity, JumpSpec, NavConfig, State};
use gn_grid::NavGrid;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(text: &str) -> NavGrid {
    NavGrid::from_ascii(text, "#").unwrap()
}

fn config_with(jumps: Vec<JumpSpec>) -> NavConfig {
    NavConfig { jumps, ..NavConfig::default() }
}

/// 10×3, floor on row 2 with a one-cell gap at x = 5.
fn gap_grid() -> NavGrid {
    grid(
        "
        ..........
        ..........
        #####.####
        ",
    )
}

/// A hop that clears exactly one missing floor cell.
fn hop() -> JumpSpec {
    JumpSpec::new(0.35, 0.5)
}

fn down(x: i32, y: i32) -> State {
    State::new(x, y, Gravity::Down)
}

// ── Standing validity ─────────────────────────────────────────────────────────

#[cfg(test)]
mod standing {
    use super::*;
    use crate::{MotionError, is_standing, require_standing};

    #[test]
    fn floor_must_be_solid_and_cell_open() {
        let g = gap_grid();
        assert!(is_standing(&g, down(0, 1)));
        assert!(!is_standing(&g, down(0, 0)), "floor (0,1) is open");
        assert!(!is_standing(&g, down(5, 1)), "gap below");
        assert!(!is_standing(&g, down(0, 2)), "inside solid");
        assert!(!is_standing(&g, State::new(0, 1, Gravity::Up)), "no ceiling");
    }

    #[test]
    fn require_standing_reports_reason() {
        let g = gap_grid();
        assert!(require_standing(&g, down(3, 1)).is_ok());
        assert!(matches!(
            require_standing(&g, down(5, 1)),
            Err(MotionError::NotStanding(_))
        ));
        assert!(matches!(
            require_standing(&g, down(10, 1)),
            Err(MotionError::OutOfBounds { x: 10, y: 1 })
        ));
    }

    #[test]
    fn wall_standing() {
        let g = grid(
            "
            #...
            #...
            ####
            ",
        );
        assert!(is_standing(&g, State::new(1, 0, Gravity::Left)));
        assert!(is_standing(&g, State::new(1, 1, Gravity::Left)));
        assert!(!is_standing(&g, State::new(2, 0, Gravity::Left)));
    }
}

// ── Walk & fall ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod walk_and_fall {
    use super::*;
    use crate::{MoveGenerator, MoveKind};

    #[test]
    fn walks_both_ways_on_flat_floor() {
        let g   = gap_grid();
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        let moves = mg.moves_from(down(2, 1)).unwrap();
        let targets: Vec<State> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![down(1, 1), down(3, 1)]);
        assert!(moves.iter().all(|m| m.kind == MoveKind::Walk && m.cost == 1));
        assert!(moves.iter().all(|m| m.trajectory.is_empty()));
    }

    #[test]
    fn no_walk_onto_missing_floor() {
        let g   = gap_grid();
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        let moves = mg.moves_from(down(4, 1)).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, down(3, 1));
    }

    #[test]
    fn no_walk_at_grid_edge() {
        let g   = gap_grid();
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        let moves = mg.moves_from(down(0, 1)).unwrap();
        assert_eq!(moves.iter().map(|m| m.to).collect::<Vec<_>>(), vec![down(1, 1)]);
    }

    #[test]
    fn ledge_fall_lands_on_lower_floor() {
        let g = grid(
            "
            .....
            ##...
            ##...
            #####
            ",
        );
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        let moves = mg.moves_from(down(1, 0)).unwrap();

        let fall = moves.iter().find(|m| m.kind.is_fall()).expect("fall move");
        assert_eq!(fall.to, down(2, 2));
        // Step-off cell (2,0) plus two cells fallen.
        assert_eq!(fall.cost, 3);
        assert_eq!(fall.cost, fall.from.manhattan(&fall.to));
        assert_eq!(fall.trajectory.len(), 3);
        assert_eq!(fall.to.gravity, Gravity::Down);
    }

    #[test]
    fn falling_out_of_the_grid_is_not_a_move() {
        let g   = gap_grid();
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        assert!(mg.fall_from(down(5, 1)).is_none());
        let moves = mg.moves_from(down(4, 1)).unwrap();
        assert!(moves.iter().all(|m| !m.kind.is_fall()));
    }

    #[test]
    fn fall_from_keeps_gravity() {
        let g = grid(
            "
            #...
            #...
            #...
            ",
        );
        let cfg = NavConfig::without_jumps();
        let mg  = MoveGenerator::new(&g, &cfg);
        let fall = mg.fall_from(State::new(3, 1, Gravity::Left)).unwrap();
        assert_eq!(fall.landing, State::new(1, 1, Gravity::Left));
        assert_eq!(fall.distance, 2);
    }

    #[test]
    fn non_standing_state_has_no_moves() {
        let g   = gap_grid();
        let cfg = NavConfig::default();
        let mg  = MoveGenerator::new(&g, &cfg);
        assert!(mg.moves_from(down(3, 0)).unwrap().is_empty());
        assert!(mg.moves_from(down(-1, 1)).unwrap().is_empty());
    }
}

// ── Kinematics ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematics {
    use super::*;
    use gn_core::Point;
    use crate::kinematics::{Flight, launch_velocity};

    #[test]
    fn launch_velocity_in_local_frame() {
        let spec = JumpSpec::new(0.5, 1.0);
        assert_eq!(launch_velocity(Gravity::Down, &spec, 1), Point::new(0.5, -1.0));
        assert_eq!(launch_velocity(Gravity::Down, &spec, -1), Point::new(-0.5, -1.0));
        assert_eq!(launch_velocity(Gravity::Up, &spec, 1), Point::new(0.5, 1.0));
        assert_eq!(launch_velocity(Gravity::Left, &spec, 1), Point::new(1.0, 0.5));
        assert_eq!(launch_velocity(Gravity::Right, &spec, 0), Point::new(-1.0, 0.0));
    }

    #[test]
    fn arc_rises_then_falls() {
        let cfg = config_with(vec![]);
        let points: Vec<Point> = Flight::launch(
            Point::new(0.5, 10.5),
            Gravity::Down,
            &JumpSpec::new(0.5, 0.5),
            1,
            &cfg,
        )
        .take(6)
        .collect();
        let ys: Vec<f32> = points.iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![10.0, 9.75, 9.75, 10.0, 10.5, 11.25]);
        assert_eq!(points[5].x, 3.5);
    }

    #[test]
    fn terminal_velocity_caps_descent() {
        let cfg = config_with(vec![]);
        let points: Vec<Point> = Flight::launch(
            Point::new(0.5, 0.5),
            Gravity::Down,
            &JumpSpec::new(0.0, 0.25),
            0,
            &cfg,
        )
        .collect();
        assert_eq!(points.len(), cfg.max_jump_steps as usize);
        let last_two = &points[points.len() - 2..];
        assert_eq!(last_two[1].y - last_two[0].y, cfg.terminal_velocity);
    }

    #[test]
    fn sideways_gravity_accelerates_along_x() {
        let cfg = config_with(vec![]);
        let mut flight = Flight::launch(
            Point::new(5.5, 5.5),
            Gravity::Right,
            &JumpSpec::new(0.0, 0.5),
            0,
            &cfg,
        );
        assert_eq!(flight.next(), Some(Point::new(5.0, 5.5)));
        assert_eq!(flight.next(), Some(Point::new(4.75, 5.5)));
        assert_eq!(flight.next(), Some(Point::new(4.75, 5.5)));
        assert_eq!(flight.next(), Some(Point::new(5.0, 5.5)));
    }
}

// ── Collision ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod collide {
    use super::*;
    use gn_core::Point;
    use crate::collide::{ArcOutcome, Candidate, SegmentTrace, first_contact, trace_segment};

    #[test]
    fn clear_segment() {
        let g = gap_grid();
        assert_eq!(
            trace_segment(&g, Point::new(0.5, 0.5), Point::new(8.5, 1.5)),
            SegmentTrace::Clear
        );
    }

    #[test]
    fn floor_hit_reports_last_open_cell() {
        let g = gap_grid();
        match trace_segment(&g, Point::new(1.5, 1.5), Point::new(2.0, 2.5)) {
            SegmentTrace::Blocked { point, candidates } => {
                assert_eq!(point, Point::new(1.75, 2.0));
                assert_eq!(candidates, vec![Candidate { cell: (1, 1), normal: Gravity::Down }]);
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn thin_wall_is_not_skipped() {
        // One fast step from x=0.5 to x=4.5 must still stop at the wall.
        let g = grid(
            "
            ..#..
            #####
            ",
        );
        match trace_segment(&g, Point::new(0.5, 0.5), Point::new(4.5, 0.5)) {
            SegmentTrace::Blocked { candidates, .. } => {
                assert_eq!(candidates, vec![Candidate { cell: (1, 0), normal: Gravity::Right }]);
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn leaving_the_grid_escapes() {
        let g = gap_grid();
        assert_eq!(
            trace_segment(&g, Point::new(0.5, 0.5), Point::new(0.5, -0.5)),
            SegmentTrace::Escaped
        );
        assert_eq!(
            trace_segment(&g, Point::new(9.5, 0.5), Point::new(10.25, 0.5)),
            SegmentTrace::Escaped
        );
    }

    #[test]
    fn negative_boundary_must_be_passed_strictly() {
        let g = grid(
            "
            ###
            ...
            ###
            ",
        );
        // Ending exactly on the top edge of row 1 stays in row 1.
        assert_eq!(
            trace_segment(&g, Point::new(1.5, 1.5), Point::new(1.5, 1.0)),
            SegmentTrace::Clear
        );
        // Ending exactly on the bottom edge enters row 2.
        assert!(matches!(
            trace_segment(&g, Point::new(1.5, 1.5), Point::new(1.5, 2.0)),
            SegmentTrace::Blocked { .. }
        ));
    }

    #[test]
    fn corner_crossing_offers_both_rests() {
        let g = grid(
            "
            ...
            ...
            ..#
            ",
        );
        match trace_segment(&g, Point::new(1.5, 1.5), Point::new(2.5, 2.5)) {
            SegmentTrace::Blocked { point, candidates } => {
                assert_eq!(point, Point::new(2.0, 2.0));
                assert_eq!(
                    candidates,
                    vec![
                        Candidate { cell: (2, 1), normal: Gravity::Down },
                        Candidate { cell: (1, 2), normal: Gravity::Right },
                    ]
                );
            }
            other => panic!("expected Blocked, got {other:?}"),
        }
    }

    #[test]
    fn first_contact_counts_steps() {
        let g = gap_grid();
        let steps = vec![Point::new(2.5, 1.0), Point::new(3.5, 1.5), Point::new(4.5, 2.5)];
        match first_contact(&g, Point::new(1.5, 1.5), steps) {
            ArcOutcome::Contact(c) => {
                assert_eq!(c.step, 3);
                assert_eq!(c.trajectory.len(), 4);
                assert_eq!(c.trajectory.last(), Some(&c.point));
            }
            other => panic!("expected Contact, got {other:?}"),
        }
    }

    #[test]
    fn first_contact_exhausts() {
        let g = gap_grid();
        let steps = vec![Point::new(2.5, 1.5), Point::new(3.5, 1.5)];
        assert_eq!(
            first_contact(&g, Point::new(1.5, 1.5), steps),
            ArcOutcome::Exhausted { steps: 2 }
        );
    }
}

// ── Landing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod landing {
    use super::*;
    use gn_core::Point;
    use crate::collide::{Candidate, Contact, SegmentTrace, trace_segment};
    use crate::landing::resolve;
    use crate::{MoveGenerator, is_standing};

    /// Lower-right solid corner:
    ///
    /// ```text
    /// ...
    /// ...
    /// ..#
    /// ```
    fn corner() -> NavGrid {
        grid(
            "
            ...
            ...
            ..#
            ",
        )
    }

    fn contact(candidates: Vec<Candidate>) -> Contact {
        let point = Point::new(2.0, 2.0);
        Contact { step: 2, point, candidates, trajectory: vec![Point::new(1.5, 1.5), point] }
    }

    #[test]
    fn current_gravity_tried_first() {
        let g = corner();
        let c = contact(vec![
            Candidate { cell: (1, 2), normal: Gravity::Right },
            Candidate { cell: (2, 1), normal: Gravity::Down },
        ]);
        assert_eq!(resolve(&g, &c, Gravity::Down), Some(down(2, 1)));
        assert_eq!(resolve(&g, &c, Gravity::Right), Some(State::new(1, 2, Gravity::Right)));
    }

    #[test]
    fn falls_back_to_rotated_candidate() {
        let g = corner();
        // (1,1) has open floor below, so only the wall rest stands.
        let c = contact(vec![
            Candidate { cell: (1, 1), normal: Gravity::Down },
            Candidate { cell: (1, 2), normal: Gravity::Right },
        ]);
        assert!(!is_standing(&g, down(1, 1)));
        assert_eq!(resolve(&g, &c, Gravity::Down), Some(State::new(1, 2, Gravity::Right)));
    }

    #[test]
    fn no_standing_candidate_means_no_landing() {
        let g = corner();
        let single = contact(vec![Candidate { cell: (1, 1), normal: Gravity::Down }]);
        assert_eq!(resolve(&g, &single, Gravity::Down), None);

        let neither = contact(vec![
            Candidate { cell: (1, 1), normal: Gravity::Down },
            Candidate { cell: (0, 2), normal: Gravity::Right },
        ]);
        assert_eq!(resolve(&g, &neither, Gravity::Down), None);
        assert_eq!(resolve(&g, &contact(vec![]), Gravity::Down), None);
    }

    #[test]
    fn traced_corner_candidates_always_stand() {
        // Every mix of solid side, below and diagonal neighbours around the
        // corner at (2, 2).
        for mask in 1u8..8 {
            let mut rows = vec![b"....".to_vec(); 4];
            if mask & 1 != 0 {
                rows[1][2] = b'#';
            }
            if mask & 2 != 0 {
                rows[2][1] = b'#';
            }
            if mask & 4 != 0 {
                rows[2][2] = b'#';
            }
            let text: Vec<String> =
                rows.into_iter().map(|r| String::from_utf8(r).unwrap()).collect();
            let g = grid(&text.join("\n"));

            match trace_segment(&g, Point::new(1.5, 1.5), Point::new(2.5, 2.5)) {
                SegmentTrace::Blocked { candidates, .. } => {
                    assert!(!candidates.is_empty(), "mask {mask}");
                    for c in candidates {
                        let s = State::new(c.cell.0, c.cell.1, c.normal);
                        assert!(is_standing(&g, s), "mask {mask}: {s}");
                    }
                }
                other => panic!("mask {mask}: expected Blocked, got {other:?}"),
            }
        }
    }

    /// Floor on row 6 and a ledge the arc of `arc()` clips exactly at the
    /// corner point (5, 2).
    fn ledge(row1: &str, row2: &str) -> NavGrid {
        grid(&format!(".......\n{row1}\n{row2}\n.......\n.......\n.......\n#######"))
    }

    /// Steps of 0.5 sideways; the seventh ends on (5.0, 2.0) from (1, 5).
    fn arc() -> NavConfig {
        config_with(vec![JumpSpec::new(0.5, 1.25)])
    }

    #[test]
    fn corner_jump_lands_on_floor_when_both_faces_are_hit() {
        let g   = ledge(".....#.", "....##.");
        let cfg = arc();
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(1, 5)).unwrap();

        let right = jumps.iter().find(|m| m.to.x > 1).expect("jump onto the ledge");
        assert_eq!(right.to, down(4, 1));
        assert_eq!(right.cost, 7);
        assert_eq!(right.trajectory.len(), 8);
        assert_eq!(right.trajectory.last(), Some(&Point::new(5.0, 2.0)));
    }

    #[test]
    fn corner_jump_rotates_when_only_the_wall_stands() {
        let g   = ledge(".....#.", ".....#.");
        let cfg = arc();
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(1, 5)).unwrap();

        let right = jumps.iter().find(|m| m.to.x > 1).expect("jump onto the wall");
        assert_eq!(right.to, State::new(4, 1, Gravity::Right));
        assert!(jumps.iter().all(|m| m.to != down(4, 1)));
    }
}

// ── Jumps & landing ───────────────────────────────────────────────────────────

#[cfg(test)]
mod jumps {
    use super::*;
    use crate::{MoveGenerator, MoveKind, verify_trajectory};

    #[test]
    fn hop_clears_one_cell_gap() {
        let g   = gap_grid();
        let cfg = config_with(vec![hop()]);
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(4, 1)).unwrap();

        let across = jumps.iter().find(|m| m.to == down(6, 1)).expect("jump across the gap");
        assert_eq!(across.cost, 6);
        assert_eq!(across.trajectory.len(), 7);
        match across.kind {
            MoveKind::Jump(launch) => {
                assert_eq!(launch.spec, 0);
                assert_eq!(launch.direction, 1);
            }
            other => panic!("expected Jump, got {other:?}"),
        }

        let back = jumps.iter().find(|m| m.to == down(2, 1)).expect("jump left");
        assert_eq!(back.cost, 6);
    }

    #[test]
    fn hop_from_before_the_gap_falls_through_and_is_discarded() {
        let g   = gap_grid();
        let cfg = config_with(vec![hop()]);
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(3, 1)).unwrap();
        // Rightward hop from x=3 comes down in the gap and leaves the grid.
        assert!(jumps.iter().all(|m| m.to.x < 3));
    }

    #[test]
    fn vault_lands_on_ceiling() {
        let g = grid(
            "
            #####
            #...#
            #...#
            #####
            ",
        );
        let cfg = config_with(vec![JumpSpec::new(0.0, 1.25)]);
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(2, 2)).unwrap();
        assert_eq!(jumps.len(), 1);
        assert_eq!(jumps[0].to, State::new(2, 1, Gravity::Up));
        assert_eq!(jumps[0].cost, 2);
    }

    #[test]
    fn blocked_first_step_is_discarded() {
        let g = grid(
            "
            ###
            #.#
            ###
            ",
        );
        let cfg = config_with(vec![JumpSpec::new(0.0, 1.25)]);
        let mg  = MoveGenerator::new(&g, &cfg);
        assert!(mg.jumps_from(down(1, 1)).unwrap().is_empty());
    }

    #[test]
    fn side_hit_rotates_gravity_into_wall() {
        let g = grid(
            "
            #......#
            #......#
            #......#
            ########
            ",
        );
        let cfg = config_with(vec![JumpSpec::new(0.75, 0.75)]);
        let mg  = MoveGenerator::new(&g, &cfg);
        let jumps = mg.jumps_from(down(5, 2)).unwrap();
        let wall = jumps.iter().find(|m| m.to.gravity == Gravity::Right).expect("wall landing");
        assert_eq!(wall.to, State::new(6, 1, Gravity::Right));
        assert_eq!(wall.cost, 2);
    }

    #[test]
    fn jumps_leaving_the_grid_are_discarded() {
        // Open sky: every jump from the floor exits through the top edge.
        let g = grid(
            "
            ...
            ###
            ",
        );
        let cfg = NavConfig::default();
        let mg  = MoveGenerator::new(&g, &cfg);
        assert!(mg.jumps_from(down(1, 0)).unwrap().is_empty());
    }

    #[test]
    fn jump_cost_never_below_grid_distance() {
        let g = grid(
            "
            ##########
            #........#
            #........#
            #..##....#
            #........#
            #........#
            ##########
            ",
        );
        let cfg = NavConfig::default();
        let mg  = MoveGenerator::new(&g, &cfg);
        for y in 0..7 {
            for x in 0..10 {
                for gravity in Gravity::ALL {
                    for m in mg.moves_from(State::new(x, y, gravity)).unwrap() {
                        assert!(m.cost >= m.from.manhattan(&m.to), "{m:?}");
                        assert!(m.cost >= 1);
                        assert_ne!(m.from, m.to);
                    }
                }
            }
        }
    }

    #[test]
    fn no_move_tunnels() {
        let g = grid(
            "
            ############
            #..........#
            #...#......#
            #...#..##..#
            #..........#
            #####..#####
            #..........#
            ############
            ",
        );
        let cfg = NavConfig::default();
        let mg  = MoveGenerator::new(&g, &cfg);
        let mut checked = 0;
        for y in 0..8 {
            for x in 0..12 {
                for gravity in Gravity::ALL {
                    for m in mg.moves_from(State::new(x, y, gravity)).unwrap() {
                        verify_trajectory(&g, &m.trajectory).unwrap();
                        if let Some((_, body)) = m.trajectory.split_last() {
                            for p in body {
                                let (cx, cy) = p.cell();
                                assert!(g.is_open(cx, cy), "{m:?}");
                            }
                        }
                        checked += 1;
                    }
                }
            }
        }
        assert!(checked > 0);
    }

    #[test]
    fn verify_rejects_point_inside_wall() {
        use gn_core::Point;
        use crate::MotionError;

        let g = gap_grid();
        let bad = vec![Point::new(1.5, 1.5), Point::new(1.5, 2.5), Point::new(1.5, 1.5)];
        assert!(matches!(
            verify_trajectory(&g, &bad),
            Err(MotionError::Tunneling { step: 1, x: 1, y: 2 })
        ));
        // Only the final point may be solid.
        let ok = vec![Point::new(1.5, 1.5), Point::new(1.5, 2.0)];
        assert!(verify_trajectory(&g, &ok).is_ok());
    }

    #[test]
    fn generation_is_deterministic() {
        let g   = gap_grid();
        let cfg = NavConfig::default();
        let mg  = MoveGenerator::new(&g, &cfg);
        let a = mg.moves_from(down(4, 1)).unwrap();
        let b = mg.moves_from(down(4, 1)).unwrap();
        assert_eq!(a, b);
    }
}

// ── Path ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod path {
    use super::*;
    use crate::{Move, MoveKind, Path};

    fn walk(from: State, to: State) -> Move {
        Move { from, to, kind: MoveKind::Walk, cost: 1, trajectory: vec![] }
    }

    #[test]
    fn totals_and_endpoints() {
        let p = Path::new(vec![walk(down(0, 1), down(1, 1)), walk(down(1, 1), down(2, 1))]);
        assert_eq!(p.total_cost(), 2);
        assert_eq!(p.start(), Some(down(0, 1)));
        assert_eq!(p.end(), Some(down(2, 1)));
        assert_eq!(p.kind_counts(), (2, 0, 0));
    }

    #[test]
    fn kind_predicates() {
        let w = walk(down(0, 1), down(1, 1));
        assert!(w.kind.is_walk());
        assert!(!w.kind.is_fall() && !w.kind.is_jump());
        assert!(MoveKind::Fall.is_fall());
    }

    #[test]
    fn empty_path() {
        let p = Path::empty();
        assert!(p.is_empty());
        assert_eq!(p.total_cost(), 0);
        assert_eq!(p.start(), None);
    }
}
