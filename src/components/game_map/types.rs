use std::collections::BTreeMap;

use super::layout::enumerate_connectors;
use crate::error::{MapError, Result};

/// Index of a room, in `[0, num_rooms)`.
pub type RoomId = usize;

/// A position in layout units, y growing downwards.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Euclidean distance to `other`.
	pub fn distance(self, other: Point) -> f64 {
		let (dx, dy) = (self.x - other.x, self.y - other.y);
		(dx * dx + dy * dy).sqrt()
	}
}

/// An undirected connection between two rooms, stored with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Connector {
	/// Smaller endpoint.
	pub from: RoomId,
	/// Larger endpoint.
	pub to: RoomId,
}

/// Room count plus adjacency lists, validated against the room count.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapGraph {
	num_rooms: usize,
	edges: BTreeMap<RoomId, Vec<RoomId>>,
}

impl MapGraph {
	/// Builds a graph, rejecting keys or neighbors outside `[0, num_rooms)`.
	/// Repeated keys are merged in input order.
	pub fn new<I>(num_rooms: usize, edges: I) -> Result<Self>
	where
		I: IntoIterator<Item = (RoomId, Vec<RoomId>)>,
	{
		let mut merged: BTreeMap<RoomId, Vec<RoomId>> = BTreeMap::new();
		for (room, neighbors) in edges {
			if room >= num_rooms {
				return Err(MapError::RoomOutOfRange { room, num_rooms });
			}
			if let Some(&neighbor) = neighbors.iter().find(|&&n| n >= num_rooms) {
				return Err(MapError::NeighborOutOfRange {
					room,
					neighbor,
					num_rooms,
				});
			}
			merged.entry(room).or_default().extend(neighbors);
		}
		Ok(Self {
			num_rooms,
			edges: merged,
		})
	}

	/// A graph of `num_rooms` rooms with no connections.
	pub fn empty(num_rooms: usize) -> Self {
		Self {
			num_rooms,
			edges: BTreeMap::new(),
		}
	}

	/// Number of rooms.
	pub fn num_rooms(&self) -> usize {
		self.num_rooms
	}

	/// Adjacency lists in ascending room order.
	pub fn edges(&self) -> &BTreeMap<RoomId, Vec<RoomId>> {
		&self.edges
	}

	/// Rooms listed by `room`; empty when it has no entry.
	pub fn neighbors(&self, room: RoomId) -> &[RoomId] {
		self.edges.get(&room).map(Vec::as_slice).unwrap_or(&[])
	}

	/// Connectors to draw, scanned from the smaller-index endpoint.
	pub fn connectors(&self) -> Vec<Connector> {
		enumerate_connectors(&self.edges)
	}

	/// Entries `(room, neighbor)` with `neighbor < room` that the smaller side
	/// does not list back. [`MapGraph::connectors`] never draws these.
	pub fn dropped_entries(&self) -> Vec<(RoomId, RoomId)> {
		let mut dropped = Vec::new();
		for (&room, neighbors) in &self.edges {
			for &neighbor in neighbors {
				if neighbor < room && !self.neighbors(neighbor).contains(&room) {
					dropped.push((room, neighbor));
				}
			}
		}
		dropped
	}

	/// Copy of the graph where every entry is mirrored on the other endpoint.
	pub fn symmetrized(&self) -> Self {
		let mut edges = self.edges.clone();
		for (&room, neighbors) in &self.edges {
			for &neighbor in neighbors {
				let back = edges.entry(neighbor).or_default();
				if !back.contains(&room) {
					back.push(room);
				}
			}
		}
		Self {
			num_rooms: self.num_rooms,
			edges,
		}
	}
}

/// Everything a render needs: the map and where the player stands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameState {
	/// The map.
	pub graph: MapGraph,
	/// Room to highlight, if any.
	pub current_room: Option<RoomId>,
}

impl GameState {
	/// Bundles a graph with the player's room.
	pub fn new(graph: MapGraph, current_room: Option<RoomId>) -> Self {
		Self {
			graph,
			current_room,
		}
	}

	/// Whether `room` is where the player stands.
	pub fn is_current(&self, room: RoomId) -> bool {
		self.current_room == Some(room)
	}
}
