mod aggregated_route;
mod aggregated_station_status;
mod monthly_series_point;
mod query_error;
mod ridership_series;
mod selection_options;
mod station_selection;
mod station_status;
mod top_routes;
mod view_config;

pub use aggregated_route::AggregatedRoute;
pub use aggregated_station_status::AggregatedStationStatus;
pub use monthly_series_point::{EventMarker, MonthlySeriesPoint, RidershipSeries};
pub use query_error::QueryError;
pub use ridership_series::{compute_ridership_series, compute_ridership_series_with};
pub use selection_options::{
    available_years, month_bounds, origin_cities, station_names, status_years, top_stations,
    SelectionOptions,
};
pub use station_selection::StationSelection;
pub use station_status::{compute_station_status, compute_station_status_with};
pub use top_routes::{compute_top_routes, compute_top_routes_with};
pub use view_config::{RidershipViewConfig, RouteViewConfig, StatusViewConfig};
