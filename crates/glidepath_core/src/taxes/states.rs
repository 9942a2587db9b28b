//! Flat state income-tax rates
//!
//! Effective flat rates per state, used for the scenario's state-tax
//! component. Progressive-tax states are represented by a single
//! representative rate; states without an income tax carry 0.0.

/// (lowercase state name, flat rate)
pub const STATE_RATES: &[(&str, f64)] = &[
    ("alabama", 0.05),
    ("alaska", 0.0),
    ("arizona", 0.025),
    ("arkansas", 0.039),
    ("california", 0.093),
    ("colorado", 0.044),
    ("connecticut", 0.055),
    ("delaware", 0.055),
    ("district of columbia", 0.085),
    ("florida", 0.0),
    ("georgia", 0.0549),
    ("hawaii", 0.0825),
    ("idaho", 0.058),
    ("illinois", 0.0495),
    ("indiana", 0.0305),
    ("iowa", 0.038),
    ("kansas", 0.057),
    ("kentucky", 0.04),
    ("louisiana", 0.0425),
    ("maine", 0.0715),
    ("maryland", 0.0475),
    ("massachusetts", 0.05),
    ("michigan", 0.0425),
    ("minnesota", 0.0785),
    ("mississippi", 0.044),
    ("missouri", 0.047),
    ("montana", 0.059),
    ("nebraska", 0.0584),
    ("nevada", 0.0),
    ("new hampshire", 0.0),
    ("new jersey", 0.0637),
    ("new mexico", 0.049),
    ("new york", 0.0685),
    ("north carolina", 0.045),
    ("north dakota", 0.0225),
    ("ohio", 0.035),
    ("oklahoma", 0.0475),
    ("oregon", 0.099),
    ("pennsylvania", 0.0307),
    ("rhode island", 0.0599),
    ("south carolina", 0.064),
    ("south dakota", 0.0),
    ("tennessee", 0.0),
    ("texas", 0.0),
    ("utah", 0.0465),
    ("vermont", 0.0875),
    ("virginia", 0.0575),
    ("washington", 0.0),
    ("west virginia", 0.0512),
    ("wisconsin", 0.0765),
    ("wyoming", 0.0),
];

/// Look up a state's flat rate, case-insensitively. `None` for names not
/// in the table; callers treat that as no state tax.
#[must_use]
pub fn state_tax_rate(name: &str) -> Option<f64> {
    let needle = name.trim().to_ascii_lowercase();
    STATE_RATES
        .iter()
        .find(|(state, _)| *state == needle)
        .map(|(_, rate)| *rate)
}
