//! The fresh-variable name supply.
//!
//! Names are enumerated from a fixed base alphabet, appending one prime per
//! round: `u, v, …, z, a, …, t, u', v', …`. The enumeration is what makes
//! binder renaming reproducible.

use std::collections::BTreeSet;

/// The base alphabet, in supply order.
const LETTERS: [char; 26] = [
    'u', 'v', 'w', 'x', 'y', 'z', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't',
];

/// An infinite stream of variable names in supply order.
pub fn names() -> impl Iterator<Item = String> {
    (0usize..).flat_map(|round| {
        LETTERS.into_iter().map(move |letter| {
            let mut name = letter.to_string();
            name.push_str(&"'".repeat(round));
            name
        })
    })
}

/// The first name in supply order not present in `used`.
pub fn fresh_name(used: &BTreeSet<String>) -> String {
    for name in names() {
        if !used.contains(&name) {
            return name;
        }
    }
    unreachable!("the name supply is infinite")
}
