use leptos::prelude::*;

use crate::components::game_map::{GameMap, GameState, MapGraph};
use crate::error::Result;

/// A small dungeon: a loop of six rooms with two shortcuts across it.
fn sample_game() -> Result<GameState> {
	let edges = (0..6)
		.map(|room| {
			let mut neighbors = vec![(room + 1) % 6, (room + 5) % 6];
			match room {
				0 => neighbors.push(3),
				3 => neighbors.push(0),
				1 => neighbors.push(4),
				4 => neighbors.push(1),
				_ => {}
			}
			(room, neighbors)
		})
		.collect::<Vec<_>>();
	Ok(GameState::new(MapGraph::new(6, edges)?, Some(2)))
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<div id="game-map">
				{sample_game().map(|game| view! { <GameMap game=Signal::stored(game) /> })}
			</div>
			<p class="subtitle">"The red room is where you stand."</p>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_game_is_symmetric() {
		let game = sample_game().expect("sample game");
		assert!(game.graph.dropped_entries().is_empty());
		assert_eq!(game.graph.connectors().len(), 8);
	}
}
