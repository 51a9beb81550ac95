/*
 * Unit tests for the shared data structures
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 *  - test_direction_between_floors
 *  - test_direction_from_i32
 *  - test_floor_range_contains
 *  - test_serde_names
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod structs_tests {
    use crate::shared::Direction::{Down, Idle, Up};
    use crate::shared::{Direction, FloorRange, Request, Status};

    #[test]
    fn test_direction_between_floors() {
        assert_eq!(Direction::between(3, 5), Up);
        assert_eq!(Direction::between(5, 3), Down);
        assert_eq!(Direction::between(4, 4), Idle);
    }

    #[test]
    fn test_direction_from_i32() {
        assert_eq!(Direction::try_from(1), Ok(Up));
        assert_eq!(Direction::try_from(-1), Ok(Down));
        assert_eq!(Direction::try_from(0), Ok(Idle));
        assert_eq!(Direction::try_from(2), Err(2));
    }

    #[test]
    fn test_floor_range_contains() {
        // Arrange
        let floors = FloorRange::default();

        // Assert
        assert!(floors.contains(1));
        assert!(floors.contains(10));
        assert!(!floors.contains(0));
        assert!(!floors.contains(11));
        assert!(!floors.contains(-1));
    }

    #[test]
    fn test_serde_names() {
        // Arrange
        let request = Request::new(7, Down);

        // Act
        let json = serde_json::to_string(&request).unwrap();
        let status = serde_json::to_string(&Status::Moving).unwrap();

        // Assert
        assert_eq!(json, r#"{"floor":7,"direction":"down"}"#);
        assert_eq!(status, r#""moving""#);
        assert_eq!(serde_json::from_str::<Request>(&json).unwrap(), request);
    }
}
