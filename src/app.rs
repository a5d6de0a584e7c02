//! Calculation orchestrator wiring the input source, drawing surface, and results sink.

use flight_aircraft::CategoryTable;
use flight_export::html;
use log::info;

use crate::catalog::AirportCatalog;
use crate::render::{RenderError, RouteRenderer, Surface};
use crate::route::{RouteAnalysis, RouteError, analyze_route};

/// Source of the user's airport selection. An empty code means nothing is selected.
pub trait SelectionSource {
    fn selected_departure(&self) -> String;
    fn selected_arrival(&self) -> String;
}

/// Destination for results and validation messages.
pub trait ResultsSink {
    /// Drop any previous error or results.
    fn clear(&mut self);
    fn set_error_message(&mut self, text: &str);
    fn set_results_html(&mut self, html: &str);
    fn show_results(&mut self);
}

/// Fixed selection, e.g. from command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct StaticSelection {
    pub departure: String,
    pub arrival: String,
}

impl StaticSelection {
    pub fn new(departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        Self {
            departure: departure.into(),
            arrival: arrival.into(),
        }
    }
}

impl SelectionSource for StaticSelection {
    fn selected_departure(&self) -> String {
        self.departure.clone()
    }

    fn selected_arrival(&self) -> String {
        self.arrival.clone()
    }
}

/// Sink that keeps the latest state in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BufferedSink {
    pub error: Option<String>,
    pub results_html: Option<String>,
    pub visible: bool,
}

impl ResultsSink for BufferedSink {
    fn clear(&mut self) {
        *self = Self::default();
    }

    fn set_error_message(&mut self, text: &str) {
        self.error = Some(text.to_string());
    }

    fn set_results_html(&mut self, html: &str) {
        self.results_html = Some(html.to_string());
    }

    fn show_results(&mut self) {
        self.visible = true;
    }
}

/// What a calculation request ended with.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Route analysed; may still be infeasible for every aircraft category.
    Calculated(RouteAnalysis),
    /// Selection failed validation; the message has been sent to the sink.
    Rejected(RouteError),
}

/// Runs one calculation per request against fixed catalogs.
pub struct Calculator<'a> {
    catalog: &'a AirportCatalog,
    categories: &'a CategoryTable,
    renderer: RouteRenderer,
}

impl<'a> Calculator<'a> {
    pub fn new(
        catalog: &'a AirportCatalog,
        categories: &'a CategoryTable,
        renderer: RouteRenderer,
    ) -> Self {
        Self {
            catalog,
            categories,
            renderer,
        }
    }

    /// Read the selection, clear previous output, then either report the validation
    /// failure or draw the route and publish the results.
    ///
    /// Only drawing failures are returned as errors.
    pub fn calculate(
        &self,
        source: &dyn SelectionSource,
        surface: &mut dyn Surface,
        sink: &mut dyn ResultsSink,
    ) -> Result<Outcome, RenderError> {
        let departure = source.selected_departure();
        let arrival = source.selected_arrival();

        sink.clear();
        self.renderer.draw_base(surface)?;

        let analysis = match analyze_route(self.catalog, self.categories, &departure, &arrival) {
            Ok(analysis) => analysis,
            Err(err) => {
                info!("rejected selection '{departure}' -> '{arrival}': {err}");
                sink.set_error_message(&err.to_string());
                return Ok(Outcome::Rejected(err));
            }
        };

        self.renderer.draw_route(surface, &analysis)?;
        sink.set_results_html(&html::results_fragment(&analysis.summary()));
        sink.show_results();
        Ok(Outcome::Calculated(analysis))
    }
}
