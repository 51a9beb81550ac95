/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use rand::Rng;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{DispatchError, Floor, FloorRange};

/***************************************/
/*             Public API              */
/***************************************/
/// Fixed-size, ordered set of elevators. Index `i` holds the car with id `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    elevators: Vec<Elevator>,
}

impl Fleet {
    /// Creates `n` idle cars on floors drawn uniformly from `floors`.
    pub fn new<R: Rng>(n: usize, floors: FloorRange, rng: &mut R) -> Result<Fleet, DispatchError> {
        if floors.lowest > floors.highest {
            return Err(DispatchError::InvalidFloorRange {
                lowest: floors.lowest,
                highest: floors.highest,
            });
        }

        let elevators = (0..n)
            .map(|i| {
                let floor = rng.gen_range(floors.lowest..=floors.highest);
                Elevator::new(i as u32 + 1, floor)
            })
            .collect::<Vec<Elevator>>();

        debug!("Initialized fleet of {} elevators", elevators.len());
        Ok(Fleet { elevators })
    }

    /// Creates idle cars at the given floors, in order.
    pub fn from_floors(floors: &[Floor]) -> Fleet {
        let elevators = floors
            .iter()
            .enumerate()
            .map(|(i, floor)| Elevator::new(i as u32 + 1, *floor))
            .collect();

        Fleet { elevators }
    }

    pub fn len(&self) -> usize {
        self.elevators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elevators.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Elevator> {
        self.elevators.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Elevator> {
        self.elevators.get_mut(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Elevator> {
        self.elevators.iter()
    }

    /// Copy of every car's state in fleet order.
    pub fn snapshot(&self) -> Vec<Elevator> {
        self.elevators.clone()
    }
}

/// Status table, one row per car.
pub struct StatusTable<'a>(pub &'a [Elevator]);

impl fmt::Display for StatusTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Elevator Status:")?;
        writeln!(f, "ID\tFloor\tDir\tStatus")?;
        for elevator in self.0 {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                elevator.id, elevator.current_floor, elevator.direction, elevator.status
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for Fleet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        StatusTable(&self.elevators).fmt(f)
    }
}
