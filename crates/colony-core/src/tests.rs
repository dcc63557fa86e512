//! Unit tests for colony-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AntId, PathId, RoomId};

    #[test]
    fn index_roundtrip() {
        let id = RoomId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(RoomId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ant_labels_are_one_based() {
        assert_eq!(AntId(0).label(), 1);
        assert_eq!(AntId(9).label(), 10);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AntId::INVALID.0, u32::MAX);
        assert_eq!(RoomId::INVALID.0, u32::MAX);
        assert_eq!(PathId::default(), PathId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(RoomId(7).to_string(), "room#7");
        assert_eq!(AntId(0).to_string(), "ant#0");
    }
}

#[cfg(test)]
mod turn {
    use crate::Turn;

    #[test]
    fn turn_arithmetic() {
        assert_eq!(Turn::ZERO.next(), Turn(1));
        assert_eq!(Turn(3) + 4, Turn(7));
        assert_eq!(Turn(5).to_string(), "5");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn positive_count_is_valid() {
        assert!(SimConfig::new(3).validate().is_ok());
    }

    #[test]
    fn zero_ants_rejected() {
        assert_eq!(SimConfig::new(0).validate(), Err(CoreError::InvalidAntCount(0)));
    }
}
