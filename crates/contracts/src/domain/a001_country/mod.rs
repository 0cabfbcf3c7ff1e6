pub mod aggregate;
pub mod filter;
pub mod sort;

pub use aggregate::{normalize_payload, Country, CountryPayloadError};
pub use filter::{apply_filters, CountryFilter, FilterDescriptor, FILTER_CATALOG, LITHUANIA_AREA_KM2};
pub use sort::{compare_names, sort_by_name};
