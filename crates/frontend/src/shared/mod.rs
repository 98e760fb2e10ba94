pub mod components;
pub mod dom;
pub mod export;
pub mod icons;
pub mod leaflet;
pub mod modal;
pub mod storage;
pub mod theme;
