/*!
# Graph Views

Views borrow a graph and answer reader queries on a modified version of it without copying or
mutating the wrapped graph.
*/

mod arc_filter;

pub use arc_filter::*;
