use log::{debug, warn};

use super::layout::compute_positions;
use super::types::{GameState, Point, RoomId};
use crate::error::{MapError, Result};

/// Default width and height of the map.
pub const MAP_SIZE: f64 = 400.0;
/// Default radius of the circle rooms sit on.
pub const LAYOUT_RADIUS: f64 = 150.0;
/// Default radius of a room marker.
pub const MARKER_RADIUS: f64 = 15.0;
/// Default fill of the current room.
pub const HIGHLIGHT_FILL: &str = "red";
/// Default fill of every other room.
pub const DEFAULT_FILL: &str = "blue";
/// Default connector colour.
pub const CONNECTOR_STROKE: &str = "black";

/// Geometry and colours used when building a [`MapScene`].
#[derive(Clone, Debug, PartialEq)]
pub struct MapStyle {
	/// Width of the drawing.
	pub width: f64,
	/// Height of the drawing.
	pub height: f64,
	/// Centre of the room circle.
	pub center: Point,
	/// Radius of the room circle.
	pub layout_radius: f64,
	/// Radius of each room marker.
	pub marker_radius: f64,
	/// Fill of the current room.
	pub highlight_fill: String,
	/// Fill of every other room.
	pub default_fill: String,
	/// Stroke of connector lines.
	pub connector_stroke: String,
	/// Offset of a label's anchor from its marker centre.
	pub label_offset: Point,
}

impl Default for MapStyle {
	fn default() -> Self {
		Self {
			width: MAP_SIZE,
			height: MAP_SIZE,
			center: Point::new(MAP_SIZE / 2.0, MAP_SIZE / 2.0),
			layout_radius: LAYOUT_RADIUS,
			marker_radius: MARKER_RADIUS,
			highlight_fill: HIGHLIGHT_FILL.into(),
			default_fill: DEFAULT_FILL.into(),
			connector_stroke: CONNECTOR_STROKE.into(),
			label_offset: Point::new(-5.0, 5.0),
		}
	}
}

impl MapStyle {
	fn validate(&self) -> Result<()> {
		let checks = [
			("width", self.width),
			("height", self.height),
			("layout radius", self.layout_radius),
			("marker radius", self.marker_radius),
		];
		for (name, value) in checks {
			if !value.is_finite() || value <= 0.0 {
				return Err(MapError::InvalidStyle(format!(
					"{name} must be a positive number, got {value}"
				)));
			}
		}
		if !self.center.x.is_finite() || !self.center.y.is_finite() {
			return Err(MapError::InvalidStyle("center must be finite".into()));
		}
		Ok(())
	}
}

/// Text drawn next to a marker.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomLabel {
	/// Anchor x.
	pub x: f64,
	/// Anchor y.
	pub y: f64,
	/// The room index in decimal.
	pub text: String,
}

/// Circle for one room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomMarker {
	/// Room this marker stands for.
	pub room: RoomId,
	/// Marker centre.
	pub center: Point,
	/// Marker radius.
	pub radius: f64,
	/// Fill colour.
	pub fill: String,
	/// Whether this is the player's room.
	pub is_current: bool,
	/// Index label.
	pub label: RoomLabel,
}

/// Straight line between two connected rooms.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectorSegment {
	/// Smaller endpoint.
	pub from: RoomId,
	/// Larger endpoint.
	pub to: RoomId,
	/// Position of `from`.
	pub start: Point,
	/// Position of `to`.
	pub end: Point,
	/// Stroke colour.
	pub stroke: String,
}

/// Visual tree for one render of the map. Built fresh each time; the caller
/// decides where to commit it.
#[derive(Clone, Debug, PartialEq)]
pub struct MapScene {
	/// Width of the drawing.
	pub width: f64,
	/// Height of the drawing.
	pub height: f64,
	/// One marker per room, in room order.
	pub markers: Vec<RoomMarker>,
	/// Connectors in adjacency order.
	pub connectors: Vec<ConnectorSegment>,
}

impl MapScene {
	/// Lays out `game` with `style`. Fails only on an unusable style.
	pub fn build(game: &GameState, style: &MapStyle) -> Result<Self> {
		style.validate()?;
		let graph = &game.graph;
		let positions = compute_positions(
			graph.num_rooms(),
			style.center.x,
			style.center.y,
			style.layout_radius,
		);

		let markers = positions
			.iter()
			.enumerate()
			.map(|(room, &center)| {
				let is_current = game.is_current(room);
				RoomMarker {
					room,
					center,
					radius: style.marker_radius,
					fill: if is_current {
						style.highlight_fill.clone()
					} else {
						style.default_fill.clone()
					},
					is_current,
					label: RoomLabel {
						x: center.x + style.label_offset.x,
						y: center.y + style.label_offset.y,
						text: room.to_string(),
					},
				}
			})
			.collect::<Vec<_>>();

		for (room, neighbor) in graph.dropped_entries() {
			warn!(
				"room {room} lists {neighbor} but not the reverse; connector will not be drawn"
			);
		}

		// Graph construction guarantees both endpoints are in range.
		let connectors = graph
			.connectors()
			.into_iter()
			.map(|c| ConnectorSegment {
				from: c.from,
				to: c.to,
				start: positions[c.from],
				end: positions[c.to],
				stroke: style.connector_stroke.clone(),
			})
			.collect::<Vec<_>>();

		debug!(
			"built map scene: {} rooms, {} connectors, current room {:?}",
			markers.len(),
			connectors.len(),
			game.current_room
		);

		Ok(Self {
			width: style.width,
			height: style.height,
			markers,
			connectors,
		})
	}

	/// Marker of the player's room, if it is on the map.
	pub fn current_marker(&self) -> Option<&RoomMarker> {
		self.markers.iter().find(|m| m.is_current)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::game_map::MapGraph;

	fn game(num_rooms: usize, current: Option<RoomId>) -> GameState {
		let graph = MapGraph::new(
			num_rooms,
			(0..num_rooms).map(|i| (i, vec![(i + 1) % num_rooms])),
		)
		.expect("ring graph");
		GameState::new(graph, current)
	}

	#[test]
	fn highlights_only_the_current_room() {
		let scene = MapScene::build(&game(3, Some(1)), &MapStyle::default()).expect("scene");
		let fills: Vec<&str> = scene.markers.iter().map(|m| m.fill.as_str()).collect();
		assert_eq!(fills, vec!["blue", "red", "blue"]);
		assert_eq!(scene.current_marker().map(|m| m.room), Some(1));
	}

	#[test]
	fn no_current_room_highlights_nothing() {
		let scene = MapScene::build(&game(3, Some(7)), &MapStyle::default()).expect("scene");
		assert!(scene.current_marker().is_none());
		assert!(scene.markers.iter().all(|m| m.fill == DEFAULT_FILL));
	}

	#[test]
	fn default_style_matches_classic_map() {
		let scene = MapScene::build(&game(4, None), &MapStyle::default()).expect("scene");
		assert_eq!((scene.width, scene.height), (400.0, 400.0));
		let first = &scene.markers[0];
		assert_eq!(first.center, Point::new(350.0, 200.0));
		assert_eq!(first.radius, 15.0);
		assert_eq!(first.label, RoomLabel {
			x: 345.0,
			y: 205.0,
			text: "0".into(),
		});
	}

	#[test]
	fn connectors_use_room_positions() {
		let scene = MapScene::build(&game(3, None), &MapStyle::default()).expect("scene");
		// Ring 0->1, 1->2, 2->0: the last entry only lists the smaller room.
		let pairs: Vec<_> = scene.connectors.iter().map(|c| (c.from, c.to)).collect();
		assert_eq!(pairs, vec![(0, 1), (1, 2)]);
		for segment in &scene.connectors {
			assert_eq!(segment.start, scene.markers[segment.from].center);
			assert_eq!(segment.end, scene.markers[segment.to].center);
			assert_eq!(segment.stroke, CONNECTOR_STROKE);
		}
	}

	#[test]
	fn empty_map_builds_empty_scene() {
		let scene = MapScene::build(&GameState::default(), &MapStyle::default()).expect("scene");
		assert!(scene.markers.is_empty());
		assert!(scene.connectors.is_empty());
	}

	#[test]
	fn rejects_degenerate_radius() {
		let style = MapStyle {
			layout_radius: 0.0,
			..MapStyle::default()
		};
		assert!(matches!(
			MapScene::build(&game(2, None), &style),
			Err(MapError::InvalidStyle(_))
		));

		let style = MapStyle {
			marker_radius: f64::NAN,
			..MapStyle::default()
		};
		assert!(MapScene::build(&game(2, None), &style).is_err());
	}
}
