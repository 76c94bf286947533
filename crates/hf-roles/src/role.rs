use core::fmt;

use serde::{Deserialize, Serialize};

/// Semantic meaning of a dataset column.
///
/// Feed pressures A/B are the oxidizer venturi inlet and throat taps,
/// C/D the fuel venturi inlet and throat taps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Time,
    Pressure,
    Thrust,
    Weight,
    FeedPressureA,
    FeedPressureB,
    FeedPressureC,
    FeedPressureD,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Time,
        Role::Pressure,
        Role::Thrust,
        Role::Weight,
        Role::FeedPressureA,
        Role::FeedPressureB,
        Role::FeedPressureC,
        Role::FeedPressureD,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Time => "time",
            Role::Pressure => "pressure",
            Role::Thrust => "thrust",
            Role::Weight => "weight",
            Role::FeedPressureA => "feed_pressure_a",
            Role::FeedPressureB => "feed_pressure_b",
            Role::FeedPressureC => "feed_pressure_c",
            Role::FeedPressureD => "feed_pressure_d",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
