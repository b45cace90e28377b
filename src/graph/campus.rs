// campus.rs
// ──────────────────────────────────────────────────────────────────────────────
// The fixed campus map: 24 locations, their display names and the walkable
// connections between them. Each adjacency row lists neighbors in the order
// they are explored, so changing a row changes the order paths are reported.
// ──────────────────────────────────────────────────────────────────────────────
use once_cell::sync::OnceCell;

use super::builder::GraphBuilder;
use super::error::GraphError;
use super::store::{CampusGraph, Weight};

static CAMPUS: OnceCell<CampusGraph> = OnceCell::new();

const LOCATIONS: [(&str, &str); 24] = [
    ("A", "Main gate"),
    ("B", "Tuck Shop"),
    ("C", "Tennis Court"),
    ("D", "LC Lawn"),
    ("E", "Parking Area 1"),
    ("F", "Hostel Area"),
    ("G", "Student Affairs Office"),
    ("H", "FM Radio Room"),
    ("I", "Law Department"),
    ("J", "Computer Arts Department"),
    ("K", "Susan B Reading Room"),
    ("L", "Educational Department"),
    ("M", "Admission Block"),
    ("N", "Admission Offices"),
    ("O", "Cafeteria"),
    ("P", "Gate 5"),
    ("Q", "Sports & Gym Block"),
    ("R", "Science Block"),
    ("S", "CS Department"),
    ("T", "IT Department"),
    ("U", "Masjid"),
    ("V", "Library"),
    ("W", "Auditorium"),
    ("X", "Girls Hostel"),
];

type AdjacencyRow = (&'static str, &'static [(&'static str, Weight)]);

const ADJACENCY: [AdjacencyRow; 24] = [
    ("A", &[("B", 2), ("C", 3)]),
    ("B", &[("A", 2), ("E", 1)]),
    ("C", &[("A", 3), ("M", 5)]),
    ("D", &[("E", 6), ("W", 3)]),
    ("E", &[("B", 1), ("D", 6), ("F", 2), ("G", 2)]),
    ("F", &[("E", 2), ("H", 3), ("I", 5), ("J", 4), ("K", 6), ("L", 2)]),
    ("G", &[("E", 2)]),
    ("H", &[("F", 3)]),
    ("I", &[("F", 5)]),
    ("J", &[("F", 4)]),
    ("K", &[("F", 6)]),
    ("L", &[("F", 2)]),
    ("M", &[("C", 5), ("N", 2)]),
    ("N", &[("M", 2), ("O", 3)]),
    ("O", &[("N", 3), ("P", 2)]),
    ("P", &[("O", 2), ("Q", 4)]),
    ("Q", &[("P", 4), ("R", 3), ("S", 5), ("T", 6)]),
    ("R", &[("Q", 3)]),
    ("S", &[("Q", 5)]),
    ("T", &[("Q", 6), ("U", 4)]),
    ("U", &[("T", 4), ("V", 3)]),
    ("V", &[("U", 3)]),
    ("W", &[("D", 3), ("X", 2)]),
    ("X", &[("W", 2)]),
];

/// Returns the process-wide campus map, building and validating it on first use.
///
/// A validation error means the literal tables above are out of sync and is
/// returned on every call until fixed.
pub fn campus() -> Result<&'static CampusGraph, GraphError> {
    CAMPUS.get_or_try_init(build_campus)
}

fn build_campus() -> Result<CampusGraph, GraphError> {
    let builder = LOCATIONS
        .iter()
        .fold(GraphBuilder::new(), |builder, (id, name)| builder.node(*id, *name));

    ADJACENCY
        .iter()
        .flat_map(|(from, row)| row.iter().map(move |(to, weight)| (*from, *to, *weight)))
        .fold(builder, |builder, (from, to, weight)| builder.arc(from, to, weight))
        .build()
}
