//! JavaScript entry point for pages that hold a plain game object:
//! `drawMap({ graph: { numRooms, edges }, currentRoom }, containerId?)`.

use std::any::Any;
use std::cell::RefCell;
use std::collections::HashMap;

use js_sys::{Array, Object, Reflect};
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::component::GameMap;
use super::types::{GameState, MapGraph, RoomId};
use crate::error::{MapError, Result};

/// Element id `drawMap` draws into when no id is given.
pub const DEFAULT_CONTAINER_ID: &str = "game-map";

thread_local! {
	/// Live mount handles keyed by container id. Dropping one unmounts its map.
	static MOUNTED: RefCell<HashMap<String, Box<dyn Any>>> = RefCell::new(HashMap::new());
}

fn field(obj: &JsValue, key: &'static str) -> Result<JsValue> {
	let value =
		Reflect::get(obj, &JsValue::from_str(key)).map_err(|_| MapError::MissingField(key))?;
	if value.is_undefined() || value.is_null() {
		return Err(MapError::MissingField(key));
	}
	Ok(value)
}

fn integral(n: f64) -> Option<usize> {
	(n.fract() == 0.0 && n >= 0.0 && n <= u32::MAX as f64).then_some(n as usize)
}

/// Accepts non-negative integral numbers and their decimal string form.
fn non_negative_integer(value: &JsValue) -> Option<usize> {
	if let Some(n) = value.as_f64() {
		return integral(n);
	}
	value.as_string()?.trim().parse().ok()
}

fn room_index(value: &JsValue) -> Result<RoomId> {
	non_negative_integer(value).ok_or_else(|| MapError::InvalidRoomIndex(describe(value)))
}

fn describe(value: &JsValue) -> String {
	value
		.as_string()
		.or_else(|| value.as_f64().map(|n| n.to_string()))
		.unwrap_or_else(|| format!("{value:?}"))
}

/// Arrays and other non-string iterables such as `Set`.
fn neighbor_values(room: RoomId, list: &JsValue) -> Result<Vec<JsValue>> {
	if Array::is_array(list) {
		return Ok(list.unchecked_ref::<Array>().to_vec());
	}
	if list.is_string() {
		return Err(MapError::InvalidNeighbors(room));
	}
	match js_sys::try_iter(list) {
		Ok(Some(values)) => values
			.collect::<std::result::Result<Vec<_>, _>>()
			.map_err(|_| MapError::InvalidNeighbors(room)),
		_ => Err(MapError::InvalidNeighbors(room)),
	}
}

fn parse_edges(edges: &JsValue) -> Result<Vec<(RoomId, Vec<RoomId>)>> {
	if !edges.is_object() {
		return Err(MapError::InvalidEdges(describe(edges)));
	}
	let edges: &Object = edges.unchecked_ref();
	let mut entries = Vec::new();
	for key in Object::keys(edges).iter() {
		let room = room_index(&key)?;
		let list = Reflect::get(edges, &key).map_err(|_| MapError::InvalidNeighbors(room))?;
		let neighbors = neighbor_values(room, &list)?
			.iter()
			.map(room_index)
			.collect::<Result<Vec<_>>>()?;
		entries.push((room, neighbors));
	}
	Ok(entries)
}

impl GameState {
	/// Reads `graph.numRooms`, `graph.edges` and `currentRoom` from a JS object.
	/// Missing `edges` means no connections. `currentRoom` must be a number to
	/// match a room; anything else highlights nothing.
	pub fn from_js(game: &JsValue) -> Result<Self> {
		let graph = field(game, "graph")?;
		let count = field(&graph, "numRooms")?;
		let num_rooms = non_negative_integer(&count)
			.ok_or_else(|| MapError::InvalidRoomCount(describe(&count)))?;

		let edges = match field(&graph, "edges") {
			Ok(edges) => parse_edges(&edges)?,
			Err(_) => Vec::new(),
		};
		let graph = MapGraph::new(num_rooms, edges)?;

		let current_room = field(game, "currentRoom")
			.ok()
			.and_then(|v| v.as_f64())
			.and_then(integral);
		if current_room.is_none() {
			debug!("game object has no usable currentRoom; nothing will be highlighted");
		}

		Ok(GameState::new(graph, current_room))
	}
}

/// Replaces whatever map `container_id` holds with a fresh one for `game`.
pub fn mount_map(container_id: &str, game: GameState) -> Result<()> {
	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(MapError::NoDocument)?;
	let container: HtmlElement = document
		.get_element_by_id(container_id)
		.and_then(|el| el.dyn_into().ok())
		.ok_or_else(|| MapError::ElementNotFound(container_id.to_string()))?;

	let previous = MOUNTED.with(|mounted| mounted.borrow_mut().remove(container_id));
	if previous.is_some() {
		debug!("replacing map in #{container_id}");
	}
	drop(previous);
	container.set_inner_html("");

	let num_rooms = game.graph.num_rooms();
	let handle = leptos::mount::mount_to(container, move || {
		let game = Signal::stored(game);
		view! { <GameMap game=game /> }
	});
	MOUNTED.with(|mounted| {
		mounted
			.borrow_mut()
			.insert(container_id.to_string(), Box::new(handle))
	});
	info!("mounted map with {num_rooms} rooms into #{container_id}");
	Ok(())
}

/// Draws `game` into the element with id `container_id` (default `game-map`),
/// clearing any previous map first.
#[wasm_bindgen(js_name = drawMap)]
pub fn draw_map(
	game: JsValue,
	container_id: Option<String>,
) -> std::result::Result<(), JsValue> {
	let state = GameState::from_js(&game)?;
	let id = container_id.as_deref().unwrap_or(DEFAULT_CONTAINER_ID);
	mount_map(id, state)?;
	Ok(())
}
