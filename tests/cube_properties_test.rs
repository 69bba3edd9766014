//! Algebraic properties of turns, checked on every supported dimension

use cubesim::core::{Cube, ShuffleConfig, SimpleRng};
use cubesim::types::{Axis, Coord, Direction, Face, Layer, Move, MAX_DIMENSION, MIN_DIMENSION};

/// Per-piece cell and orientation, in arena order
fn state(cube: &Cube) -> Vec<(Coord, Vec<(Face, Face)>)> {
    cube.pieces()
        .iter()
        .map(|p| (p.coordinates(), p.orientation().iter().collect()))
        .collect()
}

fn sorted_groups(cube: &Cube) -> Vec<(Layer, Vec<usize>)> {
    cube.groups()
        .map(|(layer, ids)| {
            let mut ids: Vec<usize> = ids.iter().map(|id| id.index()).collect();
            ids.sort();
            (layer, ids)
        })
        .collect()
}

fn dimensions() -> impl Iterator<Item = u8> {
    MIN_DIMENSION..=MAX_DIMENSION
}

#[test]
fn test_four_turns_are_identity() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        let moves = cube.taxonomy().moves();
        for mv in moves {
            for _ in 0..4 {
                cube.apply_move(mv);
            }
            assert!(cube.is_solved(), "d={} move {}", d, mv);
            assert!(cube.is_consistent(), "d={} move {}", d, mv);
        }
    }
}

#[test]
fn test_inverse_restores_state() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        // Start from a scrambled state so the check is not trivially solved
        cube.shuffle(&mut SimpleRng::new(d as u32), 25);
        let before = state(&cube);
        let groups_before = sorted_groups(&cube);

        let moves = cube.taxonomy().moves();
        for mv in moves {
            cube.apply_move(mv);
            cube.apply_move(mv.inverse());
            assert_eq!(state(&cube), before, "d={} move {}", d, mv);
        }
        assert_eq!(sorted_groups(&cube), groups_before);
    }
}

#[test]
fn test_conservation() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        let colors: Vec<Vec<Face>> = cube.pieces().iter().map(|p| p.colors().to_vec()).collect();
        let config = ShuffleConfig {
            moves: 60,
            include_slices: true,
        };
        cube.shuffle_with(&mut SimpleRng::new(99), &config);

        let after: Vec<Vec<Face>> = cube.pieces().iter().map(|p| p.colors().to_vec()).collect();
        assert_eq!(after, colors);

        // Every surface cell holds exactly one piece
        let mut cells: Vec<Coord> = cube.pieces().iter().map(|p| p.coordinates()).collect();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), cube.pieces().len());
        for cell in cells {
            assert!(cell.0.iter().all(|&v| v < d));
            assert!(cell.0.iter().any(|&v| v == 0 || v == d - 1));
        }

        // Stickers always point at distinct faces, one per outer layer held
        for piece in cube.pieces() {
            let mut faces: Vec<Face> = piece.orientation().iter().map(|(_, f)| f).collect();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), piece.colors().len());
            for face in faces {
                assert!(piece.in_layer(Layer::Face(face)));
            }
        }
    }
}

#[test]
fn test_same_axis_layers_commute() {
    for d in dimensions() {
        let taxonomy = Cube::new(d).unwrap().taxonomy().clone();
        for axis in Axis::ALL {
            let layers: Vec<Layer> = taxonomy
                .layers()
                .iter()
                .copied()
                .filter(|l| l.axis() == axis)
                .collect();
            for &a in &layers {
                for &b in &layers {
                    if a == b {
                        continue;
                    }
                    let ma = Move::new(a, Direction::Cw);
                    let mb = Move::new(b, Direction::Ccw);

                    let mut ab = Cube::new(d).unwrap();
                    ab.apply_move(ma);
                    ab.apply_move(mb);
                    let mut ba = Cube::new(d).unwrap();
                    ba.apply_move(mb);
                    ba.apply_move(ma);

                    assert_eq!(state(&ab), state(&ba), "d={} {} {}", d, a, b);
                    assert_eq!(sorted_groups(&ab), sorted_groups(&ba));
                }
            }
        }
    }
}

#[test]
fn test_w_and_y_commute() {
    let mut wy = Cube::new(3).unwrap();
    wy.apply_move(Move::cw(Face::W));
    wy.apply_move(Move::cw(Face::Y));

    let mut yw = Cube::new(3).unwrap();
    yw.apply_move(Move::cw(Face::Y));
    yw.apply_move(Move::cw(Face::W));

    assert_eq!(state(&wy), state(&yw));
}

#[test]
fn test_adjacent_faces_do_not_commute() {
    // W and O share the W-O edge and corners
    let mut wo = Cube::new(3).unwrap();
    wo.apply_move(Move::cw(Face::W));
    wo.apply_move(Move::cw(Face::O));

    let mut ow = Cube::new(3).unwrap();
    ow.apply_move(Move::cw(Face::O));
    ow.apply_move(Move::cw(Face::W));

    assert_ne!(state(&wo), state(&ow));
}

#[test]
fn test_memberships_follow_coordinates() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        let mut rng = SimpleRng::new(4321);
        let moves = cube.taxonomy().moves();
        for _ in 0..300 {
            let mv = *rng.choose(&moves).unwrap();
            cube.apply_move(mv);
            assert!(cube.is_consistent(), "d={} after {}", d, mv);
        }

        for (index, piece) in cube.pieces().iter().enumerate() {
            let found = cube.piece_id_at(piece.coordinates()).unwrap();
            assert_eq!(found.index(), index);
            assert_eq!(
                cube.piece_by_key(&piece.coordinates().key()).map(|p| p.home()),
                Some(piece.home())
            );
        }
    }
}

#[test]
fn test_group_sizes_stay_fixed() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        let sizes: Vec<(Layer, usize)> = cube.groups().map(|(l, ids)| (l, ids.len())).collect();
        cube.shuffle_with(
            &mut SimpleRng::new(8),
            &ShuffleConfig {
                moves: 50,
                include_slices: true,
            },
        );
        let after: Vec<(Layer, usize)> = cube.groups().map(|(l, ids)| (l, ids.len())).collect();
        assert_eq!(after, sizes);
    }
}

#[test]
fn test_solved_detection() {
    for d in dimensions() {
        let mut cube = Cube::new(d).unwrap();
        assert!(cube.is_solved());
        let moves = cube.taxonomy().moves();
        for mv in moves {
            cube.apply_move(mv);
            assert!(!cube.is_solved(), "d={} move {}", d, mv);
            cube.apply_move(mv.inverse());
            assert!(cube.is_solved());
        }
    }
}

#[test]
fn test_middle_slice_turn_is_not_solved() {
    // Only centers move on the 3x3x3 middle slice, yet it is still a change
    let mut cube = Cube::new(3).unwrap();
    cube.apply_move(Move::new(Layer::Slice(Axis::BlueGreen, 1), Direction::Cw));
    assert!(!cube.is_solved());
}
