pub mod game_map;
