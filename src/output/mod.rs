pub mod history;
pub mod itinerary;

pub use history::save_history;
pub use itinerary::{build_itinerary_url, render_itinerary, write_report};
