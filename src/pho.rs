//! Text form of a phoneme list, one line per unit: name, duration in ms,
//! then the flattened (percent, Hertz) pitch points. This is the material
//! piped to the engine's stdin.

use itertools::Itertools;

use crate::types::{PhonemeList, PhonemeUnit};

pub fn write_pho(units: &PhonemeList) -> String {
    if units.is_empty() {
        return String::new();
    }
    units.iter().map(unit_line).join("\n") + "\n"
}

fn unit_line(unit: &PhonemeUnit) -> String {
    let mut line = format!("{} {}", unit.name, unit.duration_ms);
    for (percent, hz) in &unit.pitch_modifiers {
        line.push_str(&format!(" {} {}", percent, hz));
    }
    line
}
