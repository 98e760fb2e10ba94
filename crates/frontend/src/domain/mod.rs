pub mod a001_area;
pub mod a002_crime_report;
