mod bridge;
mod component;
mod layout;
mod scene;
mod svg;
mod types;

pub use bridge::{DEFAULT_CONTAINER_ID, draw_map, mount_map};
pub use component::GameMap;
pub use layout::{compute_positions, enumerate_connectors};
pub use scene::{ConnectorSegment, MapScene, MapStyle, RoomLabel, RoomMarker};
pub use types::{Connector, GameState, MapGraph, Point, RoomId};
