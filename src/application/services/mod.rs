/// Application Services
///
/// Services wrap the `WikiApi` seam with the queries the use cases need.
/// They are generic over the API implementation so tests can inject canned
/// responses.

pub mod lookup;

pub use lookup::WikiProjectLookup;
