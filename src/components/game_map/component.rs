use leptos::prelude::*;

use super::scene::{ConnectorSegment, MapScene, MapStyle, RoomMarker};
use super::types::GameState;

/// Inline SVG map of `game`, rebuilt from scratch whenever the signal changes.
/// Scene errors bubble up to the nearest `ErrorBoundary`.
#[component]
pub fn GameMap(
	#[prop(into)] game: Signal<GameState>,
	#[prop(optional)] style: MapStyle,
) -> impl IntoView {
	move || MapScene::build(&game.get(), &style).map(|scene| view! { <MapSvg scene=scene /> })
}

#[component]
fn MapSvg(scene: MapScene) -> impl IntoView {
	let (width, height) = (scene.width.to_string(), scene.height.to_string());
	let rooms = scene.markers.into_iter().map(room_view).collect_view();
	let connectors = scene.connectors.into_iter().map(connector_view).collect_view();

	view! {
		<svg class="game-map" width=width height=height>
			{rooms}
			{connectors}
		</svg>
	}
}

fn room_view(marker: RoomMarker) -> impl IntoView {
	let (cx, cy, r) = (
		marker.center.x.to_string(),
		marker.center.y.to_string(),
		marker.radius.to_string(),
	);
	let (label_x, label_y) = (marker.label.x.to_string(), marker.label.y.to_string());
	let (fill, text) = (marker.fill, marker.label.text);

	view! {
		<circle cx=cx cy=cy r=r fill=fill />
		<text x=label_x y=label_y>
			{text}
		</text>
	}
}

fn connector_view(line: ConnectorSegment) -> impl IntoView {
	let (x1, y1) = (line.start.x.to_string(), line.start.y.to_string());
	let (x2, y2) = (line.end.x.to_string(), line.end.y.to_string());
	let stroke = line.stroke;

	view! { <line x1=x1 y1=y1 x2=x2 y2=y2 stroke=stroke /> }
}
