use algoviz_core::bst::TraversalOrder;
use algoviz_core::graph::Algorithm;

/// Parse search algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse traversal order from string
pub fn parse_traversal_order(s: &str) -> std::result::Result<TraversalOrder, String> {
    s.parse::<TraversalOrder>().map_err(|e| e.to_string())
}

/// Comma-separated integers given as a single argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueList(pub Vec<i64>);

/// Parse a comma-separated list of integers
pub fn parse_value_list(s: &str) -> std::result::Result<ValueList, String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| format!("'{}' is not an integer", part))
        })
        .collect::<std::result::Result<Vec<i64>, String>>()
        .map(ValueList)
}
