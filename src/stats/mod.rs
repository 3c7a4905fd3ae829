// Statistical scoring over verified match data.

pub mod match_costs;

pub use match_costs::calculate_match_costs;
