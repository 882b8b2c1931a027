use std::io::Write;

use colored::Colorize;
use itertools::Itertools;

use crate::config::constant::MAPS_DIR_URL;
use crate::domain::solution::Route;
use crate::domain::types::Stop;
use crate::error::TspError;

pub const ITINERARY_HEADER: &str = "Itinerary:";

/// One `<position> <label>` line per visit, in visiting order.
pub fn render_itinerary(stops: &[Stop], route: &Route) -> String {
    route
        .order
        .iter()
        .enumerate()
        .map(|(position, &stop)| format!("{} {}", position, stops[stop].label))
        .join("\n")
}

/// Maps directions link through every stop in visiting order, centred on the first one.
pub fn build_itinerary_url(stops: &[Stop], order: &[usize]) -> String {
    let Some(&first) = order.first() else {
        return MAPS_DIR_URL.to_string();
    };

    format!(
        "{}{}/@{}",
        MAPS_DIR_URL,
        order.iter().map(|&i| stops[i].location.as_str()).join("/"),
        stops[first].location
    )
}

/// Writes the itinerary, a blank line and the maps link.
pub fn write_report<W: Write>(out: &mut W, stops: &[Stop], route: &Route) -> Result<(), TspError> {
    writeln!(out, "{}", ITINERARY_HEADER.bold())?;
    if !route.order.is_empty() {
        writeln!(out, "{}", render_itinerary(stops, route))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", build_itinerary_url(stops, &route.order))?;
    out.flush()?;
    Ok(())
}
