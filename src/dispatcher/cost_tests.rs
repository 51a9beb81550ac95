/*
 * Unit tests for the cost model
 *
 * Tests:
 *  - test_cost_is_distance_for_idle_direction
 *  - test_direction_penalty
 *  - test_cost_monotone_in_distance
 *  - test_busy_elevator_can_be_scored
 *  - test_huge_penalty_saturates
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod cost_tests {
    use crate::config::parse_config;
    use crate::dispatcher::{CostModel, Dispatcher, SimEvent};
    use crate::elevator::{Elevator, Fleet};
    use crate::queue::RequestQueue;
    use crate::shared::FloorRange;
    use crate::shared::Direction::{Down, Idle, Up};

    fn elevator_at(floor: i32, direction: crate::shared::Direction) -> Elevator {
        let mut elevator = Elevator::new(1, floor);
        elevator.direction = direction;
        elevator
    }

    #[test]
    fn test_cost_is_distance_for_idle_direction() {
        let model = CostModel::default();

        assert_eq!(model.cost(&elevator_at(3, Idle), 5, Up), 2);
        assert_eq!(model.cost(&elevator_at(8, Idle), 5, Up), 3);
        assert_eq!(model.cost(&elevator_at(5, Idle), 5, Down), 0);
    }

    #[test]
    fn test_direction_penalty() {
        let model = CostModel::default();

        // Same direction, no penalty
        assert_eq!(model.cost(&elevator_at(2, Up), 6, Up), 4);
        // Opposite direction, penalty of 5
        assert_eq!(model.cost(&elevator_at(2, Down), 6, Up), 9);
        assert_eq!(model.cost(&elevator_at(9, Up), 6, Down), 8);

        let custom = CostModel::new(2);
        assert_eq!(custom.cost(&elevator_at(2, Down), 6, Up), 6);
    }

    #[test]
    fn test_cost_monotone_in_distance() {
        // Purpose: Moving the car further away never lowers its cost
        let model = CostModel::default();

        for direction in [Up, Down, Idle] {
            let mut previous = 0;
            for floor in 5..=10 {
                let cost = model.cost(&elevator_at(floor, direction), 5, Up);
                assert!(cost >= previous);
                previous = cost;
            }
        }
    }

    #[test]
    fn test_busy_elevator_can_be_scored() {
        // Arrange
        let model = CostModel::default();
        let mut elevator = elevator_at(4, Down);
        elevator.assign();

        // Act
        let cost = model.cost(&elevator, 7, Up);

        // Assert
        assert_eq!(cost, 8);
    }

    #[test]
    fn test_huge_penalty_saturates() {
        // Purpose: A configured penalty near u32::MAX must not overflow while dispatching
        // Arrange
        let config = parse_config("[simulation]\ndirection_penalty = 4294967295\n").unwrap();
        let model = CostModel::new(config.simulation.direction_penalty);
        let dispatcher = Dispatcher::new(model);
        let mut fleet = Fleet::from_floors(&[1, 10]);
        let mut queue = RequestQueue::new(50, FloorRange::new(1, 10));
        queue.submit(2, Up).unwrap();
        queue.submit(4, Down).unwrap();

        // Act
        let events = dispatcher.run_simulation(&mut fleet, &mut queue);

        // Assert
        assert_eq!(model.cost(&elevator_at(2, Up), 4, Down), u32::MAX);
        assert_eq!(events.len(), 2);
        assert!(matches!(events[1], SimEvent::Assigned { elevator_id: 2, new_floor: 4, .. }));
    }
}
