//! Tests for `StripSet` membership tracking

#[cfg(test)]
mod tests {
    use unshred::algorithm::bitset::StripSet;

    // Tests a new set has no members
    // Verified by initializing the set with all bits set to 1
    #[test]
    fn test_new_set_is_empty() {
        let set = StripSet::new(10);
        assert_eq!(set.count(), 0);
        assert!(set.to_vec().is_empty());
    }

    // Tests insertion and removal round through membership checks
    // Verified by making remove a no-op
    #[test]
    fn test_insert_remove_contains() {
        let mut set = StripSet::new(6);
        set.insert(0);
        set.insert(5);
        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(3));

        set.remove(0);
        assert!(!set.contains(0));
        assert_eq!(set.to_vec(), vec![5]);
    }

    // Tests ids beyond capacity are ignored instead of panicking
    // Verified by removing the capacity check in insert
    #[test]
    fn test_out_of_range_ids_ignored() {
        let mut set = StripSet::new(3);
        set.insert(3);
        set.insert(100);
        set.remove(42);
        assert_eq!(set.count(), 0);
        assert!(!set.contains(100));
    }

    // Tests the full set and clearing it
    // Verified by initializing all bits to 0 in all()
    #[test]
    fn test_all_and_clear() {
        let mut set = StripSet::all(4);
        assert_eq!(set.to_vec(), vec![0, 1, 2, 3]);
        assert_eq!(set.count(), 4);

        set.clear();
        assert_eq!(set.count(), 0);
    }

    // Tests display lists the members
    // Verified by printing the capacity instead of the count
    #[test]
    fn test_display() {
        let mut set = StripSet::new(8);
        set.insert(2);
        set.insert(7);
        assert_eq!(set.to_string(), "StripSet(2 strips: [2, 7])");
    }
}
