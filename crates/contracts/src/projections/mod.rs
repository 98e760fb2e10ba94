pub mod p900_map_markers;
pub mod p901_area_grid;
pub mod p902_area_details;
