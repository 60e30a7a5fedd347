use std::fmt;
use std::time::{Duration, Instant};


/// Puzzle part identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Part {
    A,
    B,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::A => f.write_str("a"),
            Part::B => f.write_str("b"),
        }
    }
}


/// Run a solver over the puzzle input and measure the time it takes
/// The answer and the elapsed time are reported through the `log` facade,
/// so the consumer decides where and how they are printed
/// Returns the stringified answer, or `None` when the solver produced nothing
pub fn solve_part<F, R>(part: Part, input: &str, solver: F) -> Option<String>
where
    F: FnOnce(&str) -> Option<R>,
    R: fmt::Display,
{
    let started = Instant::now();
    let solution = solver(input);
    let elapsed = started.elapsed();

    let answer = solution?.to_string();
    log::info!("Answer part {part}: {answer}");
    log::info!("Solution takes {} to complete", format_elapsed(elapsed));

    Some(answer)
}

/// Format a duration in the largest unit that keeps the value above one
/// seconds, then milliseconds, then microseconds - three decimals each
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3}s")
    } else if secs >= 1e-3 {
        format!("{:.3}ms", secs * 1e3)
    } else {
        format!("{:.3}µs", secs * 1e6)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_displays_lowercase() {
        assert_eq!(Part::A.to_string(), "a");
        assert_eq!(Part::B.to_string(), "b");
    }

    #[test]
    fn test_solve_part_returns_stringified_answer() {
        let answer = solve_part(Part::A, "1\n2\n3", |input| {
            Some(input.lines().filter_map(|l| l.parse::<u32>().ok()).sum::<u32>())
        });

        assert_eq!(answer, Some("6".to_string()));
    }

    #[test]
    fn test_solve_part_without_solution() {
        let answer = solve_part(Part::B, "", |_| None::<u32>);

        assert_eq!(answer, None);
    }

    #[test]
    fn test_format_elapsed_seconds() {
        assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.500s");
        assert_eq!(format_elapsed(Duration::from_secs(12)), "12.000s");
    }

    #[test]
    fn test_format_elapsed_milliseconds() {
        assert_eq!(format_elapsed(Duration::from_micros(2500)), "2.500ms");
        assert_eq!(format_elapsed(Duration::from_millis(999)), "999.000ms");
    }

    #[test]
    fn test_format_elapsed_microseconds() {
        assert_eq!(format_elapsed(Duration::from_nanos(1500)), "1.500µs");
        assert_eq!(format_elapsed(Duration::from_micros(999)), "999.000µs");
    }
}
