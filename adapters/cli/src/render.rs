use terminal_hack_session::{GuessOutcome, PuzzleSession};
use terminal_hack_system_noise::NoiseBuffer;

/// Glyphs shown per memory dump row.
const ROW_WIDTH: usize = 12;
/// Address printed beside the first row.
const BASE_ADDRESS: usize = 0xF4F0;

/// Formats the noise buffer as two side-by-side columns of addressed rows.
pub(crate) fn memory_dump(noise: &NoiseBuffer) -> Vec<String> {
    let rows: Vec<String> = noise.rows(ROW_WIDTH).map(String::from_iter).collect();
    let half = (rows.len() + 1) / 2;
    let (left, right) = rows.split_at(half);

    left.iter()
        .enumerate()
        .map(|(index, row)| {
            let address = BASE_ADDRESS + index * ROW_WIDTH;
            match right.get(index) {
                Some(other) => {
                    let other_address = BASE_ADDRESS + (half + index) * ROW_WIDTH;
                    format!("0x{address:04X} {row}  0x{other_address:04X} {other}")
                }
                None => format!("0x{address:04X} {row}"),
            }
        })
        .collect()
}

pub(crate) fn summary(session: &PuzzleSession) -> Vec<String> {
    vec![
        format!("TERMINAL ({} lock)", session.tier()),
        format!("WORD LENGTH: {}", session.word_length()),
        format!("WORD COUNT: {}", session.word_count()),
        format!("ATTEMPTS: {}", session.attempts_remaining()),
    ]
}

pub(crate) fn guess_line(guess: &str, outcome: GuessOutcome, length: u32) -> String {
    match outcome {
        GuessOutcome::AccessGranted => format!(">{guess}\n>Exact match!\n>Access granted."),
        GuessOutcome::Denied {
            likeness,
            attempts_remaining,
        } => format!(
            ">{guess}\n>Entry denied.\n>Likeness={likeness}/{length}\n>{attempts_remaining} attempt(s) left."
        ),
        GuessOutcome::LockedOut { likeness } => format!(
            ">{guess}\n>Entry denied.\n>Likeness={likeness}/{length}\n>Terminal locked."
        ),
    }
}
