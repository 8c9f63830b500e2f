use std::f64::consts::PI;

use super::types::{Connector, Point, RoomId};

/// Places `num_rooms` rooms evenly on a circle, room 0 due east, continuing
/// clockwise in screen coordinates. Index `i` of the result is room `i`.
pub fn compute_positions(
	num_rooms: usize,
	center_x: f64,
	center_y: f64,
	radius: f64,
) -> Vec<Point> {
	(0..num_rooms)
		.map(|i| {
			let angle = 2.0 * PI * i as f64 / num_rooms as f64;
			Point::new(
				center_x + radius * angle.cos(),
				center_y + radius * angle.sin(),
			)
		})
		.collect()
}

/// Lists connectors in adjacency iteration order, keeping only entries where
/// the neighbor has the larger index. Self-loops and reverse duplicates are
/// skipped, and so is an edge listed only from its larger endpoint.
pub fn enumerate_connectors<'a, E, N>(edges: E) -> Vec<Connector>
where
	E: IntoIterator<Item = (&'a RoomId, N)>,
	N: IntoIterator<Item = &'a RoomId>,
{
	let mut connectors = Vec::new();
	for (&room, neighbors) in edges {
		for &neighbor in neighbors {
			if neighbor > room {
				connectors.push(Connector {
					from: room,
					to: neighbor,
				});
			}
		}
	}
	connectors
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	const EPS: f64 = 1e-9;

	fn edges(entries: &[(RoomId, &[RoomId])]) -> BTreeMap<RoomId, Vec<RoomId>> {
		entries.iter().map(|(room, n)| (*room, n.to_vec())).collect()
	}

	fn pairs(connectors: &[Connector]) -> Vec<(RoomId, RoomId)> {
		connectors.iter().map(|c| (c.from, c.to)).collect()
	}

	#[test]
	fn zero_rooms_yield_no_positions() {
		assert!(compute_positions(0, 200.0, 200.0, 150.0).is_empty());
	}

	#[test]
	fn every_room_sits_on_the_circle() {
		let center = Point::new(200.0, 120.0);
		for n in 1..=12 {
			let positions = compute_positions(n, center.x, center.y, 150.0);
			assert_eq!(positions.len(), n);
			for p in &positions {
				assert!((p.distance(center) - 150.0).abs() < EPS);
			}
		}
	}

	#[test]
	fn room_zero_is_due_east() {
		for n in [1, 2, 5, 9] {
			let p = compute_positions(n, 10.0, 20.0, 3.0)[0];
			assert!((p.x - 13.0).abs() < EPS);
			assert!((p.y - 20.0).abs() < EPS);
		}
	}

	#[test]
	fn rooms_advance_towards_positive_y() {
		let positions = compute_positions(4, 0.0, 0.0, 1.0);
		assert!((positions[1].x).abs() < EPS);
		assert!((positions[1].y - 1.0).abs() < EPS);
		assert!((positions[2].x + 1.0).abs() < EPS);
	}

	#[test]
	fn positions_are_reproducible() {
		assert_eq!(
			compute_positions(7, 200.0, 200.0, 150.0),
			compute_positions(7, 200.0, 200.0, 150.0)
		);
	}

	#[test]
	fn symmetric_pair_draws_once() {
		let e = edges(&[(0, &[1]), (1, &[0])]);
		assert_eq!(pairs(&enumerate_connectors(&e)), vec![(0, 1)]);
	}

	#[test]
	fn self_loop_is_skipped() {
		let e = edges(&[(2, &[2])]);
		assert!(enumerate_connectors(&e).is_empty());
	}

	#[test]
	fn four_room_map() {
		let e = edges(&[(0, &[1, 2]), (1, &[0]), (2, &[0, 3]), (3, &[2])]);
		assert_eq!(
			pairs(&enumerate_connectors(&e)),
			vec![(0, 1), (0, 2), (2, 3)]
		);
	}

	#[test]
	fn order_follows_rooms_then_neighbor_lists() {
		let e = edges(&[(0, &[3, 1]), (1, &[2])]);
		assert_eq!(
			pairs(&enumerate_connectors(&e)),
			vec![(0, 3), (0, 1), (1, 2)]
		);
	}

	#[test]
	fn edge_listed_only_from_larger_side_is_not_drawn() {
		let e = edges(&[(3, &[1])]);
		assert!(enumerate_connectors(&e).is_empty());
	}
}
