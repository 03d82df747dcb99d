use std::sync::Mutex;

use once_cell::sync::Lazy;
use ulid::{Generator, Ulid};

static GENERATOR: Lazy<Mutex<Generator>> = Lazy::new(|| Mutex::new(Generator::new()));

/// Mint a new id, strictly increasing within this process
///
/// Ids minted in the same millisecond still sort in creation order,
/// so ordering by id gives newest first.
pub fn new_ulid() -> String {
    GENERATOR
        .lock()
        .ok()
        .and_then(|mut generator| generator.generate().ok())
        .unwrap_or_else(Ulid::new)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::new_ulid;

    #[test]
    fn ids_strictly_ascend() {
        let ids: Vec<String> = (0..1000).map(|_| new_ulid()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }
}
