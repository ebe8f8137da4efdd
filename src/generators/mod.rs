mod migration;
mod puzzle_flights;
mod simple_flights;

pub use migration::MigrationGenerator;
pub use puzzle_flights::PuzzleFlightsGenerator;
pub use simple_flights::SimpleFlightsGenerator;
