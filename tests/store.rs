mod tests {
    use build_light_composer::store::encoded_from_bytes;
    use build_light_composer::{MemoryStore, StatusRecord, StatusStore};

    #[test]
    fn test_record_layout() {
        let record = StatusRecord::<9>::from_encoded("25af");
        assert_eq!(record.as_bytes(), b"25af\0\0\0\0\0");
        assert_eq!(record.encoded(), "25af");
    }

    #[test]
    fn test_record_truncates_to_capacity() {
        // The last byte stays reserved for the terminator
        let record = StatusRecord::<5>::from_encoded("123456");
        assert_eq!(record.as_bytes(), b"1234\0");
        assert_eq!(record.encoded(), "1234");
    }

    #[test]
    fn test_record_from_bytes_forces_terminator() {
        let record = StatusRecord::<5>::from_bytes(b"55555");
        assert_eq!(record.encoded(), "5555");
    }

    #[test]
    fn test_record_from_short_bytes() {
        let record = StatusRecord::<9>::from_bytes(b"2f");
        assert_eq!(record.encoded(), "2f");
    }

    #[test]
    fn test_blank_storage_reads_empty() {
        // Unwritten EEPROM style fill
        assert_eq!(encoded_from_bytes(&[0xFF; 8]), "");
        assert_eq!(encoded_from_bytes(&[0; 8]), "");
    }

    #[test]
    fn test_corrupt_tail_is_dropped() {
        assert_eq!(encoded_from_bytes(b"25\xFF5\0"), "25");
    }

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::<9>::new();
        assert_eq!(store.save("25af"), Ok(()));

        let mut buf = [0; 8];
        assert_eq!(store.load(&mut buf), Ok(8));
        assert_eq!(encoded_from_bytes(&buf), "25af");
    }

    #[test]
    fn test_memory_store_starts_blank() {
        let mut store = MemoryStore::<9>::new();
        let mut buf = [0xFF; 8];
        assert_eq!(store.load(&mut buf), Ok(8));
        assert_eq!(encoded_from_bytes(&buf), "");
    }

    #[test]
    fn test_memory_store_overwrites() {
        let mut store = MemoryStore::<9>::new();
        assert_eq!(store.save("ffff"), Ok(()));
        assert_eq!(store.save("2"), Ok(()));
        assert_eq!(store.record().encoded(), "2");
    }
}
