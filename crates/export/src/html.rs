//! HTML fragments for the results panel.

use html_escape::encode_text;

use crate::summary::RouteSummary;

/// Results panel markup. All catalog-provided strings are escaped.
pub fn results_fragment(summary: &RouteSummary) -> String {
    let mut html = format!(
        "<h3>Route Analysis: {}</h3>\n<p><strong>Distance:</strong> {:.0} km</p>\n",
        encode_text(&summary.route_label()),
        summary.distance_km
    );

    let Some(aircraft) = &summary.aircraft else {
        html.push_str(&format!(
            "<p class=\"notice\">{}</p>\n",
            encode_text(&summary.infeasible_notice())
        ));
        return html;
    };

    html.push_str(&format!(
        "<p><strong>Recommended aircraft:</strong> {} ({})</p>\n",
        encode_text(&aircraft.name),
        encode_text(&aircraft.description)
    ));
    html.push_str("<ul>\n");
    html.push_str(&format!("<li>Seats: {}</li>\n", aircraft.seats));
    html.push_str(&format!(
        "<li>Maximum range: {:.0} km</li>\n",
        aircraft.max_range_km
    ));
    if let Some(fuel) = summary.fuel_burn_kg {
        html.push_str(&format!("<li>Fuel burn: {fuel:.0} kg</li>\n"));
    }
    if let Some(co2) = summary.co2_emissions_kg {
        html.push_str(&format!("<li>CO<sub>2</sub> emissions: {co2:.0} kg</li>\n"));
    }
    if let Some(fuel_pp) = summary.fuel_burn_per_passenger_kg {
        html.push_str(&format!("<li>Fuel per passenger: {fuel_pp:.1} kg</li>\n"));
    }
    if let Some(co2_pp) = summary.co2_per_passenger_kg {
        html.push_str(&format!(
            "<li>CO<sub>2</sub> per passenger: {co2_pp:.1} kg</li>\n"
        ));
    }
    html.push_str("</ul>\n");
    html
}

/// Error panel markup.
pub fn error_fragment(message: &str) -> String {
    format!("<p class=\"error\">{}</p>\n", encode_text(message))
}
