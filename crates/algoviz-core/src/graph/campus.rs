//! The fixed six-building campus map

use crate::error::Result;
use crate::graph::model::Graph;

pub const MAIN_GATE: &str = "Main Gate";
pub const ACADEMIC_BLOCK: &str = "Academic Block";
pub const LIBRARY: &str = "Library";
pub const MCA_DEPARTMENT: &str = "MCA Department";
pub const CAFETERIA: &str = "Cafeteria";
pub const SPORTS_COMPLEX: &str = "Sports Complex";

/// Build the campus graph. Edge order per building is significant: it is the
/// tie-break order for both path engines.
pub fn campus_graph() -> Result<Graph> {
    Graph::builder()
        .node(MAIN_GATE, 100.0, 250.0, "🏛️")
        .node(ACADEMIC_BLOCK, 400.0, 100.0, "🏫")
        .node(LIBRARY, 400.0, 250.0, "📚")
        .node(MCA_DEPARTMENT, 250.0, 400.0, "💻")
        .node(CAFETERIA, 550.0, 400.0, "🍔")
        .node(SPORTS_COMPLEX, 700.0, 250.0, "⚽")
        .edge(MAIN_GATE, LIBRARY, 150)
        .edge(MAIN_GATE, ACADEMIC_BLOCK, 200)
        .edge(ACADEMIC_BLOCK, MAIN_GATE, 200)
        .edge(ACADEMIC_BLOCK, LIBRARY, 100)
        .edge(LIBRARY, MAIN_GATE, 150)
        .edge(LIBRARY, ACADEMIC_BLOCK, 100)
        .edge(LIBRARY, MCA_DEPARTMENT, 120)
        .edge(LIBRARY, CAFETERIA, 180)
        .edge(LIBRARY, SPORTS_COMPLEX, 200)
        .edge(MCA_DEPARTMENT, LIBRARY, 120)
        .edge(MCA_DEPARTMENT, CAFETERIA, 160)
        .edge(CAFETERIA, LIBRARY, 180)
        .edge(CAFETERIA, MCA_DEPARTMENT, 160)
        .edge(CAFETERIA, SPORTS_COMPLEX, 140)
        .edge(SPORTS_COMPLEX, LIBRARY, 200)
        .edge(SPORTS_COMPLEX, CAFETERIA, 140)
        .build()
}
