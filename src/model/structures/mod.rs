pub mod match_result;
pub mod outcome;
pub mod processing_mode;
pub mod rating_period;
pub mod rating_state;
