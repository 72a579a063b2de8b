mod core;
mod records;

pub use self::core::*;
pub use records::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_clone_and_equality() {
        let r = Rect::new(10.0, 20.0, 800.0, 600.0);
        let r2 = r;
        assert_eq!(r, r2);
        assert_eq!(r.size(), Size::new(800.0, 600.0));
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::new(0.0, 10.0).is_empty());
        assert!(Size::new(10.0, -1.0).is_empty());
        assert!(!Size::new(1.0, 1.0).is_empty());
    }

    #[test]
    fn slot_index_positions_are_zero_based() {
        assert_eq!(SlotIndex::from_position(0), SlotIndex(1));
        assert_eq!(SlotIndex(16).position(), 15);
        assert_eq!(SlotIndex(4).to_string(), "slot-4");
    }

    #[test]
    fn sub_window_id_rejects_non_positive() {
        assert_eq!(SubWindowId::new(-1), None);
        assert_eq!(SubWindowId::new(0), None);
        assert_eq!(SubWindowId::new(3), Some(SubWindowId(3)));
    }

    #[test]
    fn sub_window_id_serializes_as_number() {
        let json = serde_json::to_string(&SubWindowId(12)).unwrap();
        assert_eq!(json, "12");
    }

    #[test]
    fn logical_sub_window_defaults_enabled() {
        let sw: LogicalSubWindow =
            serde_json::from_str(r#"{"id": 2, "name": "Mail", "url": "mail.test"}"#).unwrap();
        assert!(sw.enabled);
        assert_eq!(sw.id, SubWindowId(2));
    }

    #[test]
    fn window_config_record_serialization() {
        let record = WindowConfigRecord {
            sub_window_id: SubWindowId(1),
            url: "https://a.test".into(),
            title: "A".into(),
            geometry: Rect::new(5.0, 5.0, 500.0, 300.0),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: WindowConfigRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
