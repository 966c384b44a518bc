pub mod detection_result;
pub mod feature_grid;
pub mod plant_info;
pub mod severity_badge;
pub mod status_panels;
pub mod upload_panel;
