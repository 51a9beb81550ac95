/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use std::io::{self, BufRead, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::{CostModel, Dispatcher, SimEvent};
use crate::elevator::{Elevator, Fleet, StatusTable};
use crate::queue::RequestQueue;
use crate::shared::{Direction, DispatchError};

/***************************************/
/*               Enums                 */
/***************************************/
enum Choice {
    AddRequest,
    RunSimulation,
    Exit,
    Unknown(i32),
}

impl From<i32> for Choice {
    fn from(item: i32) -> Self {
        match item {
            1 => Choice::AddRequest,
            2 => Choice::RunSimulation,
            3 => Choice::Exit,
            other => Choice::Unknown(other),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
/**
 * Interactive menu driving one simulation session.
 *
 * Owns the fleet and the request queue for the lifetime of the session and
 * prints the events each simulation run returns.
 *
 * # Fields
 * - `fleet`:       Cars being dispatched.
 * - `queue`:       Pending floor calls.
 * - `dispatcher`:  Assignment engine.
 * - `input`:       Menu input, one answer per line.
 * - `output`:      Prompts, status tables and event reports.
 * - `json`:        Print fleet snapshots as JSON instead of tables.
 */
pub struct Console<R: BufRead, W: Write> {
    fleet: Fleet,
    queue: RequestQueue,
    dispatcher: Dispatcher,
    input: R,
    output: W,
    json: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(
        fleet: Fleet,
        queue: RequestQueue,
        cost_model: CostModel,
        input: R,
        output: W,
        json: bool,
    ) -> Console<R, W> {
        Console {
            fleet,
            queue,
            dispatcher: Dispatcher::new(cost_model),
            input,
            output,
            json,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        let snapshot = self.fleet.snapshot();
        self.print_snapshot(&snapshot)?;

        loop {
            write!(
                self.output,
                "\n1. Add Request\n2. Start Simulation\n3. Exit\nEnter choice: "
            )?;
            self.output.flush()?;

            let line = match self.read_line()? {
                Some(line) => line,
                None => break,
            };

            let choice = match line.parse::<i32>() {
                Ok(choice) => Choice::from(choice),
                Err(_) => {
                    writeln!(self.output, "Invalid input. Please enter a number.")?;
                    continue;
                }
            };

            match choice {
                Choice::AddRequest => {
                    if !self.add_request()? {
                        break;
                    }
                }
                Choice::RunSimulation => self.run_simulation()?,
                Choice::Exit => break,
                Choice::Unknown(n) => writeln!(self.output, "Unknown choice {}.", n)?,
            }
        }

        writeln!(self.output, "Exiting simulator.")?;
        info!("Console session ended with {} pending requests", self.queue.len());
        Ok(())
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn queue(&self) -> &RequestQueue {
        &self.queue
    }

    pub fn into_output(self) -> W {
        self.output
    }

    // Returns false if the input ended mid-request
    fn add_request(&mut self) -> io::Result<bool> {
        let floors = self.queue.floors();
        write!(self.output, "Enter floor ({}-{}): ", floors.lowest, floors.highest)?;
        self.output.flush()?;
        let floor = match self.read_line()? {
            Some(line) => line.parse::<i32>(),
            None => return Ok(false),
        };
        let floor = match floor {
            Ok(floor) => floor,
            Err(_) => {
                writeln!(self.output, "Invalid floor input.")?;
                return Ok(true);
            }
        };

        write!(self.output, "Enter direction (1=up, -1=down): ")?;
        self.output.flush()?;
        let direction = match self.read_line()? {
            Some(line) => line.parse::<i32>(),
            None => return Ok(false),
        };
        let direction = match direction {
            Ok(direction) => direction,
            Err(_) => {
                writeln!(self.output, "Invalid direction input.")?;
                return Ok(true);
            }
        };

        let direction = match Direction::try_from(direction) {
            Ok(direction) => direction,
            Err(raw) => {
                warn!("Invalid request ignored: floor {}, direction {}", floor, raw);
                writeln!(self.output, "Invalid floor or direction. Request ignored.")?;
                return Ok(true);
            }
        };

        match self.queue.submit(floor, direction) {
            Ok(()) => writeln!(self.output, "Request queued.")?,
            Err(DispatchError::InvalidRequest { .. }) => {
                writeln!(self.output, "Invalid floor or direction. Request ignored.")?
            }
            Err(DispatchError::QueueFull { .. }) => writeln!(self.output, "Request queue full!!")?,
            Err(e) => writeln!(self.output, "{}", e)?,
        }
        Ok(true)
    }

    fn run_simulation(&mut self) -> io::Result<()> {
        let events = self.dispatcher.run_simulation(&mut self.fleet, &mut self.queue);
        if events.first() == Some(&SimEvent::Skipped) {
            writeln!(self.output, "\nSimulation skipped: Request queue is empty.")?;
            return Ok(());
        }

        writeln!(self.output, "\n--- Starting Simulation ---")?;
        for event in events {
            match event {
                SimEvent::Assigned {
                    request_floor,
                    request_direction,
                    elevator_id,
                    snapshot,
                    ..
                } => {
                    writeln!(
                        self.output,
                        "\nRequest at floor {} (dir {}) assigned to Elevator {}",
                        request_floor, request_direction, elevator_id
                    )?;
                    self.print_snapshot(&snapshot)?;
                }
                SimEvent::Dropped {
                    request_floor,
                    request_direction,
                } => writeln!(
                    self.output,
                    "No IDLE elevator available for request at floor {} (dir {}). Request dropped.",
                    request_floor, request_direction
                )?,
                SimEvent::Skipped => {}
            }
        }
        writeln!(self.output, "\n--- Simulation Complete ---")?;
        Ok(())
    }

    fn print_snapshot(&mut self, snapshot: &[Elevator]) -> io::Result<()> {
        if self.json {
            let json = serde_json::to_string(snapshot)?;
            writeln!(self.output, "{}", json)
        } else {
            write!(self.output, "{}", StatusTable(snapshot))
        }
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
