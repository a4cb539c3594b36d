//! # Ring Seating
//!
//! Philosopher `i` uses fork `i` as its right fork and fork `(i + 1) % n` as its left fork.
//! Every fork therefore sits between exactly two neighbours: it is the right fork of one and
//! the left fork of the other. The plan is fixed before anything is spawned.

use super::TableError;
use crate::model::{ForkId, PhilosopherId};
use serde::{Deserialize, Serialize};

/// The two forks assigned to one philosopher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub philosopher: PhilosopherId,
    pub right: ForkId,
    pub left: ForkId,
}

/// Seats `n` philosophers around `n` forks.
pub fn ring(n: usize) -> Vec<Seat> {
    (0..n)
        .map(|i| Seat {
            philosopher: PhilosopherId(i),
            right: ForkId(i),
            left: ForkId((i + 1) % n),
        })
        .collect()
}

/// Checks that `seats` is a proper ring over `forks` forks.
///
/// Each fork must be the right fork of exactly one seat and the left fork of exactly one
/// other seat, and no seat may use the same fork twice.
pub fn validate(seats: &[Seat], forks: usize) -> Result<(), TableError> {
    if seats.len() < 2 {
        return Err(TableError::InvalidSeating(format!(
            "{} seat(s) cannot form a ring",
            seats.len()
        )));
    }
    if seats.len() != forks {
        return Err(TableError::InvalidSeating(format!(
            "{} seats for {} forks",
            seats.len(),
            forks
        )));
    }

    let mut as_right = vec![0usize; forks];
    let mut as_left = vec![0usize; forks];
    for seat in seats {
        if seat.right == seat.left {
            return Err(TableError::InvalidSeating(format!(
                "{} uses {} as both forks",
                seat.philosopher, seat.right
            )));
        }
        for fork in [seat.right, seat.left] {
            if fork.0 >= forks {
                return Err(TableError::InvalidSeating(format!(
                    "{} refers to missing {}",
                    seat.philosopher, fork
                )));
            }
        }
        as_right[seat.right.0] += 1;
        as_left[seat.left.0] += 1;
    }

    for fork in 0..forks {
        if as_right[fork] != 1 || as_left[fork] != 1 {
            return Err(TableError::InvalidSeating(format!(
                "{} shared by {} philosophers",
                ForkId(fork),
                as_right[fork] + as_left[fork]
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ring_of_five() {
        let seats = ring(5);
        assert_eq!(seats.len(), 5);
        assert_eq!(
            seats[0],
            Seat {
                philosopher: PhilosopherId(0),
                right: ForkId(0),
                left: ForkId(1)
            }
        );
        assert_eq!(seats[4].right, ForkId(4));
        assert_eq!(seats[4].left, ForkId(0));
        assert!(validate(&seats, 5).is_ok());
    }

    #[test]
    fn test_every_ring_is_valid() {
        for n in 2..=16 {
            let seats = ring(n);
            assert!(validate(&seats, n).is_ok(), "ring({n}) rejected");

            // Neighbours share exactly the fork between them
            for i in 0..n {
                let next = &seats[(i + 1) % n];
                assert_eq!(seats[i].left, next.right);
            }
        }
    }

    #[test]
    fn test_degenerate_tables_are_rejected() {
        assert!(matches!(validate(&ring(1), 1), Err(TableError::InvalidSeating(_))));
        assert!(matches!(validate(&ring(0), 0), Err(TableError::InvalidSeating(_))));
        assert!(matches!(validate(&ring(3), 4), Err(TableError::InvalidSeating(_))));
    }

    #[test]
    fn test_fork_shared_by_three_is_rejected() {
        let mut seats = ring(4);
        // Philosopher 2 grabs fork 0 instead of fork 3; fork 0 now has three users
        seats[2].left = ForkId(0);
        assert!(matches!(validate(&seats, 4), Err(TableError::InvalidSeating(_))));
    }

    #[test]
    fn test_out_of_range_fork_is_rejected() {
        let mut seats = ring(3);
        seats[1].left = ForkId(7);
        assert!(matches!(validate(&seats, 3), Err(TableError::InvalidSeating(_))));
    }
}
