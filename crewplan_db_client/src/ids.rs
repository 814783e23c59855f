use uuid::{NoContext, Timestamp, Uuid};

/// Generates a time-ordered unique id for a new row.
pub fn generate_id() -> String {
    Uuid::new_v7(Timestamp::now(NoContext)).to_string()
}

#[cfg(test)]
mod tests {
    use super::generate_id;

    #[test]
    fn ids_are_unique_and_hyphenated() {
        let first = generate_id();
        let second = generate_id();
        assert_ne!(first, second);
        assert_eq!(first.len(), 36);
    }
}
