/// A named parameter the input table must supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Upper-case name as it appears in the input table.
    pub name: &'static str,
    pub description: &'static str,
}

const fn spec(name: &'static str, description: &'static str) -> ParameterSpec {
    ParameterSpec { name, description }
}

/// Every parameter an input table must contain, grouped as on the input sheet.
pub const CATALOGUE: &[ParameterSpec] = &[
    // Scale, datum and grid
    spec("SCALE1", "Drawing scale denominator"),
    spec("SCALE2", "Plan view scale divisor"),
    spec("SKEW", "Skew angle in degrees"),
    spec("DATUM", "Datum level"),
    spec("TOPRL", "Top level of the level axis"),
    spec("LEFT", "Chainage at the left end of the axis"),
    spec("RIGHT", "Chainage at the right end of the axis"),
    spec("XINCR", "Chainage increment for axis labels"),
    spec("YINCR", "Level increment for axis labels"),
    spec("NOCH", "Number of chainages"),
    // Deck
    spec("NSPAN", "Number of spans"),
    spec("LBRIDGE", "Length of bridge"),
    spec("ABTL", "Chainage of the left abutment"),
    spec("RTL", "Road top level"),
    spec("SOFL", "Soffit level"),
    spec("KERBW", "Kerb width"),
    spec("KERBD", "Kerb depth"),
    spec("CCBR", "Clear carriageway width"),
    spec("SLBTHC", "Slab thickness at centre"),
    spec("SLBTHE", "Slab thickness at edge"),
    spec("SLBTHT", "Slab thickness at tip"),
    // Pier
    spec("CAPT", "Pier cap top level"),
    spec("CAPB", "Pier cap bottom level"),
    spec("CAPW", "Pier cap width"),
    spec("PIERTW", "Pier top width"),
    spec("BATTR", "Pier batter"),
    spec("PIERST", "Pier straight length"),
    spec("PIERN", "Pier serial number"),
    spec("SPAN1", "Span length"),
    spec("FUTRL", "Founding level"),
    spec("FUTD", "Footing depth"),
    spec("FUTW", "Footing width"),
    spec("FUTL", "Footing length"),
    // Abutment
    spec("DWTH", "Dirt wall thickness"),
    spec("ALCW", "Abutment cap width"),
    spec("ALCD", "Abutment cap depth"),
    spec("ALFB", "Abutment front batter"),
    spec("ALFBL", "Abutment front batter level"),
    spec("ALTB", "Abutment toe batter"),
    spec("ALTBL", "Abutment toe batter level"),
    spec("ALFO", "Abutment front offset"),
    spec("ALBB", "Abutment back batter"),
    spec("ALBBL", "Abutment back batter level"),
    spec("ABTLEN", "Abutment length across the bridge"),
    // Approach slab and right-side abutment levels
    spec("LASLAB", "Approach slab length"),
    spec("APWTH", "Approach slab width"),
    spec("APTHK", "Approach slab thickness"),
    spec("WCTH", "Wearing course thickness"),
    spec("ALFL", "Left abutment footing level"),
    spec("ARFL", "Right abutment footing level"),
    spec("ALFBR", "Right abutment front batter level"),
    spec("ALTBR", "Right abutment toe batter level"),
    spec("ALFD", "Abutment footing depth"),
    spec("ALBBR", "Right abutment back batter level"),
];

/// Upper-case names of all required parameters, in catalogue order.
pub fn required_names() -> impl Iterator<Item = &'static str> {
    CATALOGUE.iter().map(|s| s.name)
}

/// Catalogue entry for a name, compared case-insensitively.
pub fn lookup(name: &str) -> Option<&'static ParameterSpec> {
    CATALOGUE.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}
