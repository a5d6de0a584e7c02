use flight_route_calculator::aircraft::CategoryTable;
use flight_route_calculator::catalog::{AirportCatalog, builtin_categories};
use flight_route_calculator::export::{html, text};
use flight_route_calculator::route::{RouteError, analyze_route};

fn catalogs() -> (AirportCatalog, CategoryTable) {
    (
        AirportCatalog::builtin().expect("builtin airports"),
        builtin_categories().expect("builtin aircraft"),
    )
}

#[test]
fn lax_to_sydney_needs_a_wide_body() {
    let (airports, aircraft) = catalogs();
    let analysis = analyze_route(&airports, &aircraft, "LAX", "SYD").expect("valid route");
    assert!((analysis.distance_km - 12_074.0).abs() <= 20.0);

    let assessment = analysis.assessment.as_ref().expect("feasible");
    assert_eq!(assessment.category.name, "Wide-body Jet");
    let expected_fuel = 6_000.0 + 9.0 * analysis.distance_km;
    assert!((assessment.emissions.fuel_burn_kg - expected_fuel).abs() < 1e-6);
    assert!((assessment.emissions.fuel_burn_kg - 114_666.0).abs() <= 9.0 * 20.0);
    assert!((assessment.emissions.co2_emissions_kg - 362_424.0).abs() <= 3.16 * 9.0 * 20.0 + 1.0);
}

#[test]
fn identical_codes_are_rejected_as_identical_not_missing() {
    let (airports, aircraft) = catalogs();
    let err = analyze_route(&airports, &aircraft, "ATL", "ATL").unwrap_err();
    assert_eq!(err, RouteError::IdenticalAirports);
    assert_eq!(
        analyze_route(&airports, &aircraft, "atl", " ATL ").unwrap_err(),
        RouteError::IdenticalAirports
    );
}

#[test]
fn empty_selection_is_reported_before_lookup() {
    let (airports, aircraft) = catalogs();
    assert_eq!(
        analyze_route(&airports, &aircraft, "LHR", "").unwrap_err(),
        RouteError::MissingSelection
    );
    assert_eq!(
        analyze_route(&airports, &aircraft, "  ", "CDG").unwrap_err(),
        RouteError::MissingSelection
    );
    // An unknown departure code does not mask the missing arrival.
    assert_eq!(
        analyze_route(&airports, &aircraft, "ZZZ", "").unwrap_err(),
        RouteError::MissingSelection
    );
}

#[test]
fn unknown_code_is_reported_after_validation() {
    let (airports, aircraft) = catalogs();
    assert_eq!(
        analyze_route(&airports, &aircraft, "LHR", "jfk").unwrap_err(),
        RouteError::UnknownAirport("JFK".to_string())
    );
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(
        RouteError::MissingSelection.to_string(),
        "Please select both departure and arrival airports."
    );
    assert_eq!(
        RouteError::IdenticalAirports.to_string(),
        "Departure and arrival airports cannot be the same."
    );
    assert_eq!(
        RouteError::UnknownAirport("XYZ".into()).to_string(),
        "Unknown airport code: XYZ."
    );
}

#[test]
fn codes_are_case_insensitive() {
    let (airports, aircraft) = catalogs();
    let lower = analyze_route(&airports, &aircraft, "lhr", "cdg").expect("valid route");
    let upper = analyze_route(&airports, &aircraft, "LHR", "CDG").expect("valid route");
    assert_eq!(lower, upper);
    assert_eq!(lower.departure.code, "LHR");
}

#[test]
fn short_hop_picks_piston_and_rounds_summary() {
    let (airports, aircraft) = catalogs();
    let analysis = analyze_route(&airports, &aircraft, "LHR", "CDG").expect("valid route");
    assert_eq!(
        analysis.selected_category().map(|c| c.name.as_str()),
        Some("Piston")
    );

    let summary = analysis.summary();
    assert_eq!(summary.distance_km, analysis.distance_km.round());
    assert!(summary.feasible);
    let fuel = summary.fuel_burn_kg.expect("fuel");
    assert_eq!(fuel, fuel.round());
    let per_pax = summary.fuel_burn_per_passenger_kg.expect("per passenger");
    assert!((per_pax * 10.0 - (per_pax * 10.0).round()).abs() < 1e-9);
    assert_eq!(summary.aircraft.as_ref().map(|a| a.seats), Some(9));
}

#[test]
fn heathrow_to_sydney_exceeds_every_range() {
    let (airports, aircraft) = catalogs();
    let analysis = analyze_route(&airports, &aircraft, "LHR", "SYD").expect("valid route");
    assert!(analysis.distance_km > 17_000.0);
    assert!(!analysis.is_feasible());
    assert!(analysis.selected_category().is_none());

    let summary = analysis.summary();
    assert!(!summary.feasible);
    assert!(summary.aircraft.is_none());
    assert!(summary.fuel_burn_kg.is_none());
    assert!(summary.co2_emissions_kg.is_none());
    assert!(summary.fuel_burn_per_passenger_kg.is_none());
    assert!(summary.co2_per_passenger_kg.is_none());
    assert!(summary.infeasible_notice().contains("17000 km"));
}

#[test]
fn distance_is_symmetric_through_analysis() {
    let (airports, aircraft) = catalogs();
    let there = analyze_route(&airports, &aircraft, "GRU", "JNB").expect("valid route");
    let back = analyze_route(&airports, &aircraft, "JNB", "GRU").expect("valid route");
    assert!((there.distance_km - back.distance_km).abs() < 1e-9);
    assert_eq!(there.selected_category(), back.selected_category());
}

#[test]
fn results_html_lists_metrics_or_notice() {
    let (airports, aircraft) = catalogs();
    let feasible = analyze_route(&airports, &aircraft, "LAX", "SYD")
        .expect("valid route")
        .summary();
    let markup = html::results_fragment(&feasible);
    assert!(markup.contains("LAX → SYD"));
    assert!(markup.contains("Wide-body Jet"));
    assert!(markup.contains("Fuel burn:"));
    assert!(!markup.contains("class=\"notice\""));

    let infeasible = analyze_route(&airports, &aircraft, "GRU", "PEK")
        .expect("valid route")
        .summary();
    let markup = html::results_fragment(&infeasible);
    assert!(markup.contains("class=\"notice\""));
    assert!(!markup.contains("Fuel burn:"));

    assert_eq!(
        html::error_fragment("a < b"),
        "<p class=\"error\">a &lt; b</p>\n"
    );
}

#[test]
fn text_block_formats_rounding() {
    let (airports, aircraft) = catalogs();
    let summary = analyze_route(&airports, &aircraft, "LHR", "CDG")
        .expect("valid route")
        .summary();
    let block = text::results_block(&summary);
    assert!(block.starts_with("=== Route Analysis: LHR → CDG ==="));
    assert!(block.contains(&format!("Distance: {:.0} km", summary.distance_km)));
    assert!(block.contains("Aircraft: Piston"));
    let per_pax = summary.co2_per_passenger_kg.expect("co2 per passenger");
    assert!(block.contains(&format!("CO2 per passenger: {per_pax:.1} kg")));
}

#[test]
fn infeasible_text_block_ends_with_notice() {
    let (airports, aircraft) = catalogs();
    let summary = analyze_route(&airports, &aircraft, "GRU", "PEK")
        .expect("valid route")
        .summary();
    let block = text::results_block(&summary);
    let lines: Vec<_> = block.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "=== Route Analysis: GRU → PEK ===");
    assert_eq!(lines[2], summary.infeasible_notice());
    assert!(block.ends_with(".\n"));
}
