//! Error type shared by the map model, scene builder and JS bridge.

use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::components::game_map::RoomId;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, MapError>;

/// Input and mounting failures surfaced while drawing a map.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
	/// An adjacency key names a room the graph does not have.
	#[error("room {room} is out of range for a map of {num_rooms} rooms")]
	RoomOutOfRange {
		/// Offending key.
		room: RoomId,
		/// Room count of the graph.
		num_rooms: usize,
	},
	/// A neighbor entry names a room the graph does not have.
	#[error("room {room} lists neighbor {neighbor}, but the map only has {num_rooms} rooms")]
	NeighborOutOfRange {
		/// Room whose list holds the entry.
		room: RoomId,
		/// Offending neighbor.
		neighbor: RoomId,
		/// Room count of the graph.
		num_rooms: usize,
	},
	/// `numRooms` is not a non-negative integer.
	#[error("invalid room count: {0}")]
	InvalidRoomCount(String),
	/// A room key or neighbor is not a non-negative integer.
	#[error("invalid room index: {0}")]
	InvalidRoomIndex(String),
	/// `edges` is present but not an object keyed by room.
	#[error("edges must be an object keyed by room index, got {0}")]
	InvalidEdges(String),
	/// A room's neighbor value is not an array (or other non-string iterable).
	#[error("neighbors of room {0} must be an array of room indices")]
	InvalidNeighbors(RoomId),
	/// A required field of the game object is absent.
	#[error("game object is missing `{0}`")]
	MissingField(&'static str),
	/// A [`MapStyle`](crate::MapStyle) dimension is not usable.
	#[error("invalid map style: {0}")]
	InvalidStyle(String),
	/// No element carries the requested container id.
	#[error("element `#{0}` not found")]
	ElementNotFound(String),
	/// Not running inside a page with a document.
	#[error("no document available")]
	NoDocument,
}

impl From<MapError> for JsValue {
	fn from(err: MapError) -> Self {
		JsValue::from_str(&err.to_string())
	}
}
