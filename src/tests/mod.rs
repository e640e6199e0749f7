mod age_tests;
mod line_heuristic_tests;
mod normalize_tests;
